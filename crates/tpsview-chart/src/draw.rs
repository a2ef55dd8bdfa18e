//! Drawing primitives and the write-only surface they are sent to.

use serde::Serialize;

use crate::color::{Rgb, Rgba};

/// Horizontal anchor of a text command relative to its position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TextAlign {
    Left,
    Center,
    Right,
}

/// Font used by a text command.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Font {
    pub size: f64,
    pub bold: bool,
}

impl Font {
    pub const fn regular(size: f64) -> Self {
        Self { size, bold: false }
    }

    pub const fn bold(size: f64) -> Self {
        Self { size, bold: true }
    }
}

/// Outline drawn around a filled shape.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Stroke {
    pub color: Rgb,
    pub width: f64,
}

/// One primitive in absolute surface coordinates.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DrawCommand {
    /// Filled axis-aligned rectangle.
    Rect {
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        fill: Rgba,
    },
    /// Stroked straight segment.
    Line {
        x1: f64,
        y1: f64,
        x2: f64,
        y2: f64,
        color: Rgb,
        width: f64,
    },
    /// Text anchored at `(x, y)` on its baseline, rotated by `rotation`
    /// degrees around the anchor.
    Text {
        x: f64,
        y: f64,
        text: String,
        color: Rgb,
        font: Font,
        align: TextAlign,
        rotation: f64,
    },
    /// Filled circle with an optional outline.
    Circle {
        cx: f64,
        cy: f64,
        radius: f64,
        fill: Rgb,
        stroke: Option<Stroke>,
    },
}

/// Sink for draw commands.
///
/// Surfaces are written to, never read back; anything that needs to inspect
/// output captures the command list instead of pixels.
pub trait DrawSurface {
    fn draw(&mut self, command: &DrawCommand);

    fn draw_all<'a>(&mut self, commands: impl IntoIterator<Item = &'a DrawCommand>)
    where
        Self: Sized,
    {
        for command in commands {
            self.draw(command);
        }
    }
}

/// Surface that keeps every command it receives.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CommandRecorder {
    commands: Vec<DrawCommand>,
}

impl CommandRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn into_commands(self) -> Vec<DrawCommand> {
        self.commands
    }
}

impl DrawSurface for CommandRecorder {
    fn draw(&mut self, command: &DrawCommand) {
        self.commands.push(command.clone());
    }
}
