//! Chart palette and severity bands.

use serde::Serialize;

use crate::color::{Rgb, Rgba};

// --- Axes & text ---
pub const AXIS: Rgb = Rgb::new(0x66, 0x66, 0x66);
pub const GRID: Rgb = Rgb::new(0xdd, 0xdd, 0xdd);
pub const LABEL: Rgb = Rgb::new(0x33, 0x33, 0x33);
pub const MUTED: Rgb = Rgb::new(0x65, 0x6d, 0x76);

// --- Markers ---
pub const MARKER_OUTLINE: Rgb = Rgb::WHITE;

// --- Band fills ---
const BAND_ALPHA: f64 = 0.1;
pub const BAND_BAD: Rgba = Rgb::new(255, 100, 100).with_alpha(BAND_ALPHA);
pub const BAND_MEDIUM: Rgba = Rgb::new(255, 255, 100).with_alpha(BAND_ALPHA);
pub const BAND_GOOD: Rgba = Rgb::new(100, 255, 100).with_alpha(BAND_ALPHA);

/// Severity classification of a TPS value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Bad,
    Medium,
    Good,
}

impl Severity {
    pub fn label(&self) -> &'static str {
        match self {
            Severity::Bad => "Bad",
            Severity::Medium => "Medium",
            Severity::Good => "Good",
        }
    }
}

/// A fixed TPS range shaded behind the curve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeverityBand {
    pub severity: Severity,
    /// Inclusive lower bound.
    pub from: f64,
    /// Exclusive upper bound, except for the last band which includes it.
    pub to: f64,
    pub fill: Rgba,
    /// Solid swatch used by legends.
    pub swatch: Rgb,
}

impl SeverityBand {
    /// Legend text, e.g. `0-10 TPS (Bad)`.
    pub fn legend_label(&self) -> String {
        format!("{}-{} TPS ({})", self.from, self.to, self.severity.label())
    }
}

/// Background bands, lowest range first.
pub const SEVERITY_BANDS: [SeverityBand; 3] = [
    SeverityBand {
        severity: Severity::Bad,
        from: 0.0,
        to: 10.0,
        fill: BAND_BAD,
        swatch: Rgb::RED,
    },
    SeverityBand {
        severity: Severity::Medium,
        from: 10.0,
        to: 15.0,
        fill: BAND_MEDIUM,
        swatch: Rgb::YELLOW,
    },
    SeverityBand {
        severity: Severity::Good,
        from: 15.0,
        to: 20.0,
        fill: BAND_GOOD,
        swatch: Rgb::GREEN,
    },
];

/// Band a value falls in. Values outside the displayed range belong to the
/// nearest edge band.
pub fn classify(value: f64) -> Severity {
    SEVERITY_BANDS
        .iter()
        .find(|band| value < band.to)
        .map(|band| band.severity)
        .unwrap_or(Severity::Good)
}
