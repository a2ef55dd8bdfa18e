//! Configuration types for TPS Viewer
//!
//! `Settings` mirrors `.tpsview/config.toml`. Every section and field has a
//! default, so a partial file only overrides what it names.

use serde::{Deserialize, Serialize};
use tpsview_chart::{ChartStyle, ChartTransform, Margins, Size, DEFAULT_HOVER_RADIUS};

/// Application settings (.tpsview/config.toml)
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Settings {
    #[serde(default)]
    pub chart: ChartSettings,

    #[serde(default)]
    pub rankings: RankingSettings,

    #[serde(default)]
    pub behavior: BehaviorSettings,
}

/// Chart geometry and pointer tolerance
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct ChartSettings {
    pub width: f64,
    pub height: f64,
    pub margin_left: f64,
    pub margin_right: f64,
    pub margin_top: f64,
    pub margin_bottom: f64,
    /// Pointer distance, in pixels, that still counts as hovering a marker
    pub hover_radius: f64,
    pub marker_radius: f64,
    pub line_width: f64,
}

impl Default for ChartSettings {
    fn default() -> Self {
        let size = Size::default();
        let margins = Margins::default();
        let style = ChartStyle::default();
        Self {
            width: size.width,
            height: size.height,
            margin_left: margins.left,
            margin_right: margins.right,
            margin_top: margins.top,
            margin_bottom: margins.bottom,
            hover_radius: DEFAULT_HOVER_RADIUS,
            marker_radius: style.marker_radius,
            line_width: style.line_width,
        }
    }
}

impl ChartSettings {
    pub fn size(&self) -> Size {
        Size {
            width: self.width,
            height: self.height,
        }
    }

    pub fn margins(&self) -> Margins {
        Margins {
            left: self.margin_left,
            right: self.margin_right,
            top: self.margin_top,
            bottom: self.margin_bottom,
        }
    }

    pub fn style(&self) -> ChartStyle {
        ChartStyle {
            line_width: self.line_width,
            marker_radius: self.marker_radius,
        }
    }

    /// Transform for a sequence of `sample_count` samples on this surface.
    pub fn transform(&self, sample_count: usize) -> ChartTransform {
        ChartTransform::new(self.size(), self.margins(), sample_count)
    }
}

/// Ranking panel settings
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct RankingSettings {
    /// Entries shown in each of the worst and best lists
    #[serde(default = "default_ranking_limit")]
    pub limit: usize,
}

impl Default for RankingSettings {
    fn default() -> Self {
        Self {
            limit: default_ranking_limit(),
        }
    }
}

fn default_ranking_limit() -> usize {
    5
}

/// Behavior settings
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct BehaviorSettings {
    /// Show the correlation disclaimer before accepting an upload
    #[serde(default = "default_true")]
    pub show_warning: bool,
}

impl Default for BehaviorSettings {
    fn default() -> Self {
        Self { show_warning: true }
    }
}

fn default_true() -> bool {
    true
}
