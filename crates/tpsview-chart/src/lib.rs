//! tpsview-chart - Curve rendering and pointer interaction for TPS Viewer
//!
//! Everything here is a pure function of samples plus view parameters:
//! colour mapping, the data ↔ surface transform, the draw command list and
//! hit-testing. Output goes to any [`DrawSurface`]; [`CommandRecorder`] keeps
//! the commands in memory and [`SvgSurface`] writes an SVG document.

pub mod color;
pub mod draw;
pub mod hit_test;
pub mod render;
pub mod svg;
pub mod theme;
pub mod tooltip;
pub mod transform;

pub use color::{color_of, Rgb, Rgba};
pub use draw::{CommandRecorder, DrawCommand, DrawSurface, Font, Stroke, TextAlign};
pub use hit_test::{hit_test, DEFAULT_HOVER_RADIUS};
pub use render::{render, render_to, ChartStyle};
pub use svg::SvgSurface;
pub use theme::{classify, Severity, SeverityBand, SEVERITY_BANDS};
pub use tooltip::Tooltip;
pub use transform::{ChartTransform, Margins, Point, Size};
