//! Application state (Model in TEA pattern)

use std::sync::Arc;

use serde::Serialize;
use tpsview_chart::{hit_test, render, ChartTransform, DrawCommand, Point, Tooltip};
use tpsview_core::{Dataset, RankedScore, Sample};

use crate::config::Settings;
use crate::message::PipelineOutcome;

/// Which page of the chrome is showing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Screen {
    /// Correlation disclaimer, shown once before anything else
    #[default]
    Warning,
    /// Waiting for a file
    Upload,
    /// A file was uploaded; chart and rankings
    Display,
}

/// Lifecycle of the current upload's data
#[derive(Debug, Clone, Default)]
pub enum PipelineState {
    /// No file
    #[default]
    Idle,
    /// Background parse in flight
    Loading { generation: u64, file_name: String },
    /// Data available
    Ready {
        file_name: String,
        dataset: Arc<Dataset>,
    },
    /// The upload could not be processed
    Failed { file_name: String, message: String },
}

impl PipelineState {
    pub fn status(&self) -> PipelineStatus {
        match self {
            PipelineState::Idle => PipelineStatus::Idle,
            PipelineState::Loading { .. } => PipelineStatus::Loading,
            PipelineState::Ready { .. } => PipelineStatus::Ready,
            PipelineState::Failed { .. } => PipelineStatus::Failed,
        }
    }

    pub fn file_name(&self) -> Option<&str> {
        match self {
            PipelineState::Idle => None,
            PipelineState::Loading { file_name, .. }
            | PipelineState::Ready { file_name, .. }
            | PipelineState::Failed { file_name, .. } => Some(file_name),
        }
    }
}

/// Discriminant of [`PipelineState`] for consumers that only need the phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PipelineStatus {
    Idle,
    Loading,
    Ready,
    Failed,
}

/// Read-only view handed to chrome and headless consumers
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PipelineSnapshot {
    pub state: PipelineStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_name: Option<String>,
    pub ranked_scores: Vec<RankedScore>,
    pub sample_count: usize,
    pub warning_count: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Complete application state
#[derive(Debug)]
pub struct AppState {
    /// Current chrome page
    pub screen: Screen,

    /// Data for the current upload
    pub pipeline: PipelineState,

    /// Bumped on every upload and removal; completions for older
    /// generations are discarded
    pub generation: u64,

    /// Last pointer position over the chart, if any
    pub pointer: Option<Point>,

    /// Index of the hovered sample
    pub hovered: Option<usize>,

    /// Settings loaded from config
    pub settings: Settings,
}

impl Default for AppState {
    fn default() -> Self {
        Self::with_settings(Settings::default())
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create AppState with loaded settings
    pub fn with_settings(settings: Settings) -> Self {
        let screen = if settings.behavior.show_warning {
            Screen::Warning
        } else {
            Screen::Upload
        };
        Self {
            screen,
            pipeline: PipelineState::Idle,
            generation: 0,
            pointer: None,
            hovered: None,
            settings,
        }
    }

    // ─────────────────────────────────────────────────────────
    // Chrome Flow
    // ─────────────────────────────────────────────────────────

    pub fn acknowledge_warning(&mut self) {
        if self.screen == Screen::Warning {
            self.screen = Screen::Upload;
        }
    }

    /// Start tracking a new upload. Returns the generation assigned to it.
    pub fn begin_upload(&mut self, file_name: String) -> u64 {
        self.generation += 1;
        self.screen = Screen::Display;
        self.pipeline = PipelineState::Loading {
            generation: self.generation,
            file_name,
        };
        self.clear_hover();
        self.generation
    }

    pub fn clear_file(&mut self) {
        self.generation += 1;
        self.pipeline = PipelineState::Idle;
        self.screen = Screen::Upload;
        self.clear_hover();
    }

    /// Apply a pipeline result. Returns `false` if it was stale and dropped.
    pub fn complete_pipeline(&mut self, generation: u64, outcome: PipelineOutcome) -> bool {
        let file_name = match &self.pipeline {
            PipelineState::Loading {
                generation: current,
                file_name,
            } if *current == generation => file_name.clone(),
            _ => return false,
        };

        self.pipeline = match outcome {
            Ok(dataset) => PipelineState::Ready { file_name, dataset },
            Err(message) => PipelineState::Failed { file_name, message },
        };
        true
    }

    // ─────────────────────────────────────────────────────────
    // Queries
    // ─────────────────────────────────────────────────────────

    pub fn is_loading(&self) -> bool {
        matches!(self.pipeline, PipelineState::Loading { .. })
    }

    pub fn dataset(&self) -> Option<&Arc<Dataset>> {
        match &self.pipeline {
            PipelineState::Ready { dataset, .. } => Some(dataset),
            _ => None,
        }
    }

    /// Transform for the current data on the configured surface
    pub fn transform(&self) -> Option<ChartTransform> {
        self.dataset()
            .map(|dataset| self.settings.chart.transform(dataset.samples.len()))
    }

    /// Chart primitives for the current data, `None` unless ready
    pub fn draw_commands(&self) -> Option<Vec<DrawCommand>> {
        let dataset = self.dataset()?;
        let transform = self.transform()?;
        Some(render(
            &dataset.samples,
            &transform,
            &self.settings.chart.style(),
        ))
    }

    /// Sample under `pointer`, if any. Always `None` unless data is ready.
    pub fn select(&self, pointer: Point) -> Option<&Sample> {
        let dataset = self.dataset()?;
        let transform = self.transform()?;
        hit_test(
            &dataset.samples,
            &transform,
            pointer,
            self.settings.chart.hover_radius,
        )
    }

    pub fn hovered_sample(&self) -> Option<&Sample> {
        let index = self.hovered?;
        self.dataset()?.samples.get(index)
    }

    /// Tooltip for the hovered sample at the last pointer position
    pub fn tooltip(&self) -> Option<Tooltip> {
        let sample = self.hovered_sample()?;
        let pointer = self.pointer?;
        Some(Tooltip::for_sample(sample, pointer))
    }

    /// Record a pointer position and update the hovered sample.
    pub fn hover(&mut self, pointer: Point) {
        self.pointer = Some(pointer);
        self.hovered = self.select(pointer).map(|sample| sample.index);
    }

    pub fn clear_hover(&mut self) {
        self.pointer = None;
        self.hovered = None;
    }

    pub fn snapshot(&self) -> PipelineSnapshot {
        let dataset = self.dataset();
        let error = match &self.pipeline {
            PipelineState::Failed { message, .. } => Some(message.clone()),
            _ => None,
        };
        PipelineSnapshot {
            state: self.pipeline.status(),
            file_name: self.pipeline.file_name().map(str::to_string),
            ranked_scores: dataset
                .map(|d| d.rankings.ascending().to_vec())
                .unwrap_or_default(),
            sample_count: dataset.map(|d| d.samples.len()).unwrap_or(0),
            warning_count: dataset.map(|d| d.warnings.len()).unwrap_or(0),
            error,
        }
    }
}
