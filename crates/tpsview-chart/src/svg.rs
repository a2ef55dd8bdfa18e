//! SVG drawing surface.
//!
//! Each command becomes one element, appended in the order received, so the
//! painter's order of the command list is preserved in the document.

use std::fmt::Write as _;

use crate::draw::{DrawCommand, DrawSurface, TextAlign};
use crate::transform::Size;

/// Accumulates SVG markup for one document.
#[derive(Debug, Clone)]
pub struct SvgSurface {
    size: Size,
    body: String,
}

impl SvgSurface {
    pub fn new(size: Size) -> Self {
        Self {
            size,
            body: String::new(),
        }
    }

    /// Close the document and return its markup.
    pub fn finish(self) -> String {
        let mut svg = format!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{}" height="{}" viewBox="0 0 {} {}" font-family="sans-serif">
  <rect width="100%" height="100%" fill="white"/>
"#,
            self.size.width, self.size.height, self.size.width, self.size.height
        );
        svg.push_str(&self.body);
        svg.push_str("</svg>\n");
        svg
    }
}

impl DrawSurface for SvgSurface {
    fn draw(&mut self, command: &DrawCommand) {
        // Writing to a String cannot fail.
        let _ = match command {
            DrawCommand::Rect {
                x,
                y,
                width,
                height,
                fill,
            } => writeln!(
                self.body,
                r#"  <rect x="{x}" y="{y}" width="{width}" height="{height}" fill="{}"/>"#,
                fill.css()
            ),
            DrawCommand::Line {
                x1,
                y1,
                x2,
                y2,
                color,
                width,
            } => writeln!(
                self.body,
                r#"  <line x1="{x1}" y1="{y1}" x2="{x2}" y2="{y2}" stroke="{}" stroke-width="{width}" stroke-linecap="round"/>"#,
                color.css()
            ),
            DrawCommand::Text {
                x,
                y,
                text,
                color,
                font,
                align,
                rotation,
            } => {
                let weight = if font.bold { "bold" } else { "normal" };
                let transform = if *rotation != 0.0 {
                    format!(r#" transform="rotate({rotation} {x} {y})""#)
                } else {
                    String::new()
                };
                writeln!(
                    self.body,
                    r#"  <text x="{x}" y="{y}" fill="{}" font-size="{}" font-weight="{weight}" text-anchor="{}"{transform}>{}</text>"#,
                    color.css(),
                    font.size,
                    text_anchor(*align),
                    escape(text)
                )
            }
            DrawCommand::Circle {
                cx,
                cy,
                radius,
                fill,
                stroke,
            } => {
                let outline = stroke
                    .map(|s| format!(r#" stroke="{}" stroke-width="{}""#, s.color.css(), s.width))
                    .unwrap_or_default();
                writeln!(
                    self.body,
                    r#"  <circle cx="{cx}" cy="{cy}" r="{radius}" fill="{}"{outline}/>"#,
                    fill.css()
                )
            }
        };
    }
}

fn text_anchor(align: TextAlign) -> &'static str {
    match align {
        TextAlign::Left => "start",
        TextAlign::Center => "middle",
        TextAlign::Right => "end",
    }
}

/// Escape text content for XML.
fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(ch),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Rgb;
    use crate::draw::{Font, Stroke};

    #[test]
    fn test_empty_document() {
        let svg = SvgSurface::new(Size::default()).finish();
        assert!(svg.starts_with(r#"<svg xmlns="http://www.w3.org/2000/svg" width="1200" height="500""#));
        assert!(svg.trim_end().ends_with("</svg>"));
    }

    #[test]
    fn test_text_is_escaped_and_rotated() {
        let mut surface = SvgSurface::new(Size::default());
        surface.draw(&DrawCommand::Text {
            x: 20.0,
            y: 240.0,
            text: "<bob & co>".to_string(),
            color: Rgb::new(0x33, 0x33, 0x33),
            font: Font::bold(14.0),
            align: TextAlign::Center,
            rotation: -90.0,
        });
        let svg = surface.finish();
        assert!(svg.contains("&lt;bob &amp; co&gt;"));
        assert!(svg.contains(r#"transform="rotate(-90 20 240)""#));
        assert!(svg.contains(r#"text-anchor="middle""#));
        assert!(svg.contains(r#"font-weight="bold""#));
    }

    #[test]
    fn test_circle_with_outline() {
        let mut surface = SvgSurface::new(Size::default());
        surface.draw(&DrawCommand::Circle {
            cx: 60.0,
            cy: 40.0,
            radius: 4.0,
            fill: Rgb::RED,
            stroke: Some(Stroke {
                color: Rgb::WHITE,
                width: 1.0,
            }),
        });
        let svg = surface.finish();
        assert!(svg.contains(
            r#"<circle cx="60" cy="40" r="4" fill="rgb(255, 0, 0)" stroke="rgb(255, 255, 255)" stroke-width="1"/>"#
        ));
    }

    #[test]
    fn test_elements_keep_draw_order() {
        let mut surface = SvgSurface::new(Size::default());
        surface.draw_all(&[
            DrawCommand::Rect {
                x: 0.0,
                y: 0.0,
                width: 1.0,
                height: 1.0,
                fill: Rgb::GREEN.with_alpha(0.1),
            },
            DrawCommand::Line {
                x1: 0.0,
                y1: 0.0,
                x2: 1.0,
                y2: 1.0,
                color: Rgb::RED,
                width: 3.0,
            },
        ]);
        let svg = surface.finish();
        let rect = svg.find("<rect x=").unwrap();
        let line = svg.find("<line").unwrap();
        assert!(rect < line);
        assert!(svg.contains(r#"fill="rgba(0, 255, 0, 0.1)""#));
    }
}
