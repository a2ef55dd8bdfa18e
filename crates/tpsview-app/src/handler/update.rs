//! Main update function - handles state transitions (TEA pattern)

use tpsview_chart::Point;
use tpsview_core::prelude::*;

use super::{UpdateAction, UpdateResult};
use crate::message::{Message, PipelineOutcome};
use crate::state::{AppState, Screen};

/// Process a message and update state
pub fn update(state: &mut AppState, message: Message) -> UpdateResult {
    match message {
        // ─────────────────────────────────────────────────────────
        // Chrome Flow
        // ─────────────────────────────────────────────────────────
        Message::AcknowledgeWarning => {
            state.acknowledge_warning();
            UpdateResult::none()
        }

        Message::Upload { file_name, bytes } => {
            if state.screen == Screen::Warning {
                debug!("Ignoring upload of {} before warning was acknowledged", file_name);
                return UpdateResult::none();
            }

            let generation = state.begin_upload(file_name.clone());
            info!(
                "Upload {} ({} bytes), pipeline generation {}",
                file_name,
                bytes.len(),
                generation
            );
            UpdateResult::action(UpdateAction::SpawnPipeline {
                generation,
                file_name,
                bytes,
            })
        }

        Message::ClearFile => {
            if state.screen != Screen::Display {
                return UpdateResult::none();
            }
            let was_loading = state.is_loading();
            state.clear_file();
            debug!("File removed, generation now {}", state.generation);
            if was_loading {
                UpdateResult::action(UpdateAction::CancelPipeline)
            } else {
                UpdateResult::none()
            }
        }

        // ─────────────────────────────────────────────────────────
        // Pipeline
        // ─────────────────────────────────────────────────────────
        Message::PipelineCompleted {
            generation,
            outcome,
        } => handle_pipeline_completed(state, generation, outcome),

        // ─────────────────────────────────────────────────────────
        // Pointer
        // ─────────────────────────────────────────────────────────
        Message::PointerMoved { x, y } => {
            if state.dataset().is_none() {
                state.clear_hover();
                return UpdateResult::none();
            }
            state.hover(Point::new(x, y));
            UpdateResult::none()
        }

        Message::PointerLeft => {
            state.clear_hover();
            UpdateResult::none()
        }
    }
}

fn handle_pipeline_completed(
    state: &mut AppState,
    generation: u64,
    outcome: PipelineOutcome,
) -> UpdateResult {
    let summary = match &outcome {
        Ok(dataset) => format!(
            "ready with {} samples and {} participants",
            dataset.samples.len(),
            dataset.rankings.len()
        ),
        Err(message) => format!("failed: {}", message),
    };

    if !state.complete_pipeline(generation, outcome) {
        debug!(
            "Discarding stale pipeline result for generation {} (current {})",
            generation, state.generation
        );
        return UpdateResult::none();
    }

    if state.dataset().is_some() {
        info!("Pipeline generation {} {}", generation, summary);
    } else {
        warn!("Pipeline generation {} {}", generation, summary);
    }
    UpdateResult::none()
}
