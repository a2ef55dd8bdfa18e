//! # TPS Curve Renderer
//!
//! Produces the ordered primitive list for one sample sequence:
//!
//! ```text
//!        0 ┤░░░░░░░░░░░░░ bad ░░░░░░░░░░░░░░░░░░░░░░
//!        5 ┤───────────────────────────────────────
//!   TPS 10 ┤▒▒▒▒▒▒▒▒▒▒▒▒ medium ▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒
//!       15 ┤▓▓▓▓▓▓▓▓▓▓▓▓▓ good ▓▓▓▓▓▓●▓▓▓▓▓▓▓▓▓▓▓▓▓
//!       20 ┤━━━━●━━━━━●━━━━━━━━━━━━╯ ╰━━━●━━━━━━●━━
//!          └───────────────────────────────────────
//!         00:00:00            Time           00:10:00
//! ```
//!
//! Rendering is a pure function of its inputs: the same samples, transform
//! and style always yield the same command list.

use tpsview_core::{Sample, V_MAX};

use crate::color::color_of;
use crate::draw::{DrawCommand, DrawSurface, Font, Stroke, TextAlign};
use crate::theme::{self, SEVERITY_BANDS};
use crate::transform::ChartTransform;

/// Spacing between value-axis ticks.
pub const TICK_STEP: f64 = 5.0;

/// Y-axis title.
pub const Y_AXIS_TITLE: &str = "TPS (Ticks Per Second)";

/// X-axis title.
pub const X_AXIS_TITLE: &str = "Time";

/// Text shown instead of a chart when there are no samples.
pub const EMPTY_MESSAGE: &str = "No samples in this log";

const AXIS_WIDTH: f64 = 2.0;
const GRID_WIDTH: f64 = 1.0;
const MARKER_OUTLINE_WIDTH: f64 = 1.0;
const TICK_LABEL_GAP: f64 = 10.0;
const TICK_LABEL_BASELINE: f64 = 4.0;
const Y_TITLE_X: f64 = 20.0;
const X_LABEL_OFFSET: f64 = 20.0;
const X_TITLE_OFFSET: f64 = 45.0;
const LABEL_FONT: Font = Font::regular(12.0);
const TITLE_FONT: Font = Font::bold(14.0);

/// Stroke and marker dimensions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartStyle {
    pub line_width: f64,
    pub marker_radius: f64,
}

impl Default for ChartStyle {
    fn default() -> Self {
        Self {
            line_width: 3.0,
            marker_radius: 4.0,
        }
    }
}

/// Build the full primitive list for `samples`.
pub fn render(samples: &[Sample], transform: &ChartTransform, style: &ChartStyle) -> Vec<DrawCommand> {
    if samples.is_empty() {
        return vec![empty_message(transform)];
    }

    let mut commands = Vec::with_capacity(16 + samples.len() * 2);
    push_bands(&mut commands, transform);
    push_axes(&mut commands, transform);
    push_ticks(&mut commands, transform);
    push_titles(&mut commands, transform, samples);
    push_curve(&mut commands, transform, style, samples);
    push_markers(&mut commands, transform, style, samples);
    commands
}

/// Render straight onto a surface.
pub fn render_to<S: DrawSurface>(
    surface: &mut S,
    samples: &[Sample],
    transform: &ChartTransform,
    style: &ChartStyle,
) {
    let commands = render(samples, transform, style);
    tracing::trace!("Rendering {} draw commands", commands.len());
    surface.draw_all(&commands);
}

fn empty_message(transform: &ChartTransform) -> DrawCommand {
    let size = transform.size();
    DrawCommand::Text {
        x: size.width / 2.0,
        y: size.height / 2.0,
        text: EMPTY_MESSAGE.to_string(),
        color: theme::MUTED,
        font: Font::regular(16.0),
        align: TextAlign::Center,
        rotation: 0.0,
    }
}

fn push_bands(commands: &mut Vec<DrawCommand>, transform: &ChartTransform) {
    for band in &SEVERITY_BANDS {
        let top = transform.value_to_y(band.from);
        let bottom = transform.value_to_y(band.to);
        commands.push(DrawCommand::Rect {
            x: transform.graph_left(),
            y: top,
            width: transform.graph_width(),
            height: bottom - top,
            fill: band.fill,
        });
    }
}

fn push_axes(commands: &mut Vec<DrawCommand>, transform: &ChartTransform) {
    let left = transform.graph_left();
    let bottom = transform.graph_bottom();
    commands.push(DrawCommand::Line {
        x1: left,
        y1: transform.graph_top(),
        x2: left,
        y2: bottom,
        color: theme::AXIS,
        width: AXIS_WIDTH,
    });
    commands.push(DrawCommand::Line {
        x1: left,
        y1: bottom,
        x2: transform.graph_right(),
        y2: bottom,
        color: theme::AXIS,
        width: AXIS_WIDTH,
    });
}

/// Tick values from 0 to [`V_MAX`] inclusive.
pub fn tick_values() -> impl Iterator<Item = f64> {
    let count = (V_MAX / TICK_STEP).floor() as usize;
    (0..=count).map(|i| i as f64 * TICK_STEP)
}

fn push_ticks(commands: &mut Vec<DrawCommand>, transform: &ChartTransform) {
    for value in tick_values() {
        let y = transform.value_to_y(value);
        commands.push(DrawCommand::Text {
            x: transform.graph_left() - TICK_LABEL_GAP,
            y: y + TICK_LABEL_BASELINE,
            text: format!("{}", value),
            color: theme::LABEL,
            font: LABEL_FONT,
            align: TextAlign::Right,
            rotation: 0.0,
        });
        commands.push(DrawCommand::Line {
            x1: transform.graph_left(),
            y1: y,
            x2: transform.graph_right(),
            y2: y,
            color: theme::GRID,
            width: GRID_WIDTH,
        });
    }
}

fn push_titles(commands: &mut Vec<DrawCommand>, transform: &ChartTransform, samples: &[Sample]) {
    let middle_y = transform.graph_top() + transform.graph_height() / 2.0;
    commands.push(DrawCommand::Text {
        x: Y_TITLE_X,
        y: middle_y,
        text: Y_AXIS_TITLE.to_string(),
        color: theme::LABEL,
        font: TITLE_FONT,
        align: TextAlign::Center,
        rotation: -90.0,
    });

    let label_y = transform.graph_bottom() + X_LABEL_OFFSET;
    if let (Some(first), Some(last)) = (samples.first(), samples.last()) {
        commands.push(DrawCommand::Text {
            x: transform.graph_left(),
            y: label_y,
            text: first.time_label().to_string(),
            color: theme::LABEL,
            font: LABEL_FONT,
            align: TextAlign::Center,
            rotation: 0.0,
        });
        commands.push(DrawCommand::Text {
            x: transform.graph_right(),
            y: label_y,
            text: last.time_label().to_string(),
            color: theme::LABEL,
            font: LABEL_FONT,
            align: TextAlign::Center,
            rotation: 0.0,
        });
    }

    commands.push(DrawCommand::Text {
        x: transform.graph_left() + transform.graph_width() / 2.0,
        y: transform.graph_bottom() + X_TITLE_OFFSET,
        text: X_AXIS_TITLE.to_string(),
        color: theme::LABEL,
        font: TITLE_FONT,
        align: TextAlign::Center,
        rotation: 0.0,
    });
}

/// One segment per consecutive pair, coloured by the later endpoint.
/// Pairs touching an invalid sample leave a gap.
fn push_curve(
    commands: &mut Vec<DrawCommand>,
    transform: &ChartTransform,
    style: &ChartStyle,
    samples: &[Sample],
) {
    for pair in samples.windows(2) {
        let (prev, next) = (&pair[0], &pair[1]);
        let (Some(from), Some(to)) = (
            transform.point_for(prev.index, prev.value),
            transform.point_for(next.index, next.value),
        ) else {
            continue;
        };
        commands.push(DrawCommand::Line {
            x1: from.x,
            y1: from.y,
            x2: to.x,
            y2: to.y,
            color: color_of(next.value),
            width: style.line_width,
        });
    }
}

fn push_markers(
    commands: &mut Vec<DrawCommand>,
    transform: &ChartTransform,
    style: &ChartStyle,
    samples: &[Sample],
) {
    for sample in samples {
        let Some(at) = transform.point_for(sample.index, sample.value) else {
            continue;
        };
        commands.push(DrawCommand::Circle {
            cx: at.x,
            cy: at.y,
            radius: style.marker_radius,
            fill: color_of(sample.value),
            stroke: Some(Stroke {
                color: theme::MARKER_OUTLINE,
                width: MARKER_OUTLINE_WIDTH,
            }),
        });
    }
}
