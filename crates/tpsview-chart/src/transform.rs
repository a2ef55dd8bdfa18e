//! Data space ↔ drawing surface mapping
//!
//! X maps sample index linearly across the graph width. Y maps TPS with 0 at
//! the top margin and [`V_MAX`] at the bottom: poor performance is drawn
//! high on the chart and healthy performance low. This inverted axis is the
//! chart's convention and both the renderer and the hit-tester rely on it.

use serde::{Deserialize, Serialize};
use tpsview_core::V_MAX;

/// Drawing surface size in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

/// Space reserved around the graph for axes and labels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Margins {
    pub left: f64,
    pub right: f64,
    pub top: f64,
    pub bottom: f64,
}

impl Default for Size {
    fn default() -> Self {
        Self {
            width: 1200.0,
            height: 500.0,
        }
    }
}

impl Default for Margins {
    fn default() -> Self {
        Self {
            left: 60.0,
            right: 150.0,
            top: 40.0,
            bottom: 60.0,
        }
    }
}

/// A point on the drawing surface.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance(&self, other: Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

/// Mapping for one sample sequence on one surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartTransform {
    size: Size,
    margins: Margins,
    sample_count: usize,
}

impl ChartTransform {
    pub fn new(size: Size, margins: Margins, sample_count: usize) -> Self {
        Self {
            size,
            margins,
            sample_count,
        }
    }

    pub fn size(&self) -> Size {
        self.size
    }

    pub fn margins(&self) -> Margins {
        self.margins
    }

    pub fn sample_count(&self) -> usize {
        self.sample_count
    }

    pub fn graph_width(&self) -> f64 {
        (self.size.width - self.margins.left - self.margins.right).max(0.0)
    }

    pub fn graph_height(&self) -> f64 {
        (self.size.height - self.margins.top - self.margins.bottom).max(0.0)
    }

    pub fn graph_left(&self) -> f64 {
        self.margins.left
    }

    pub fn graph_right(&self) -> f64 {
        self.margins.left + self.graph_width()
    }

    pub fn graph_top(&self) -> f64 {
        self.margins.top
    }

    pub fn graph_bottom(&self) -> f64 {
        self.margins.top + self.graph_height()
    }

    /// Denominator for index normalization; never zero.
    fn index_span(&self) -> f64 {
        self.sample_count.saturating_sub(1).max(1) as f64
    }

    pub fn index_to_x(&self, index: usize) -> f64 {
        let normalized = index as f64 / self.index_span();
        self.margins.left + normalized * self.graph_width()
    }

    /// Fractional sample index for an X coordinate.
    pub fn x_to_index(&self, x: f64) -> f64 {
        let width = self.graph_width();
        if width == 0.0 {
            return 0.0;
        }
        (x - self.margins.left) / width * self.index_span()
    }

    /// Y coordinate for a TPS value, clamped to the displayed range.
    pub fn value_to_y(&self, value: f64) -> f64 {
        let normalized = value.clamp(0.0, V_MAX) / V_MAX;
        self.margins.top + normalized * self.graph_height()
    }

    /// TPS value for a Y coordinate. Not clamped.
    pub fn y_to_value(&self, y: f64) -> f64 {
        let height = self.graph_height();
        if height == 0.0 {
            return 0.0;
        }
        (y - self.margins.top) / height * V_MAX
    }

    /// Surface position of a sample, `None` for invalid values.
    pub fn point_for(&self, index: usize, value: f64) -> Option<Point> {
        value
            .is_finite()
            .then(|| Point::new(self.index_to_x(index), self.value_to_y(value)))
    }
}
