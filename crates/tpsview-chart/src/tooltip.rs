//! Hover tooltip content.

use serde::Serialize;
use tpsview_core::Sample;

use crate::color::{color_of, Rgb};
use crate::theme::{classify, Severity};
use crate::transform::Point;

/// Offset of the tooltip box from the pointer.
pub const TOOLTIP_OFFSET: f64 = 15.0;

/// What to show for a hovered sample.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Tooltip {
    pub heading: String,
    pub value_text: String,
    pub badge: Rgb,
    pub severity: Severity,
    pub participants_heading: String,
    pub participants: Vec<String>,
    pub anchor: Point,
}

impl Tooltip {
    pub fn for_sample(sample: &Sample, pointer: Point) -> Self {
        Self {
            heading: sample.timestamp.clone(),
            value_text: format!("{:.2}", sample.value),
            badge: color_of(sample.value),
            severity: classify(sample.value),
            participants_heading: format!("Players Online ({}):", sample.participants.len()),
            participants: sample.participants.clone(),
            anchor: Point::new(pointer.x + TOOLTIP_OFFSET, pointer.y + TOOLTIP_OFFSET),
        }
    }

    /// Plain-text rendition, one item per line.
    pub fn lines(&self) -> Vec<String> {
        let mut lines = vec![
            self.heading.clone(),
            format!("TPS: {} ({})", self.value_text, self.severity.label()),
            self.participants_heading.clone(),
        ];
        lines.extend(self.participants.iter().map(|name| format!("  {name}")));
        lines
    }
}
