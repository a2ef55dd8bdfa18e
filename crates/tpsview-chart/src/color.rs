//! TPS severity colours
//!
//! Red = bad (0 TPS), yellow = medium (10 TPS), green = good (20 TPS), with
//! linear interpolation across each half of the range.

use serde::Serialize;
use tpsview_core::V_MAX;

/// Opaque 8-bit RGB colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const RED: Rgb = Rgb::new(255, 0, 0);
    pub const YELLOW: Rgb = Rgb::new(255, 255, 0);
    pub const GREEN: Rgb = Rgb::new(0, 255, 0);
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub const fn with_alpha(self, alpha: f64) -> Rgba {
        Rgba { rgb: self, alpha }
    }

    /// CSS functional notation, e.g. `rgb(255, 128, 0)`.
    pub fn css(&self) -> String {
        format!("rgb({}, {}, {})", self.r, self.g, self.b)
    }

    /// `#rrggbb` notation.
    pub fn hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// RGB colour with an opacity in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Rgba {
    pub rgb: Rgb,
    pub alpha: f64,
}

impl Rgba {
    pub fn css(&self) -> String {
        format!(
            "rgba({}, {}, {}, {})",
            self.rgb.r, self.rgb.g, self.rgb.b, self.alpha
        )
    }
}

impl From<Rgb> for Rgba {
    fn from(rgb: Rgb) -> Self {
        rgb.with_alpha(1.0)
    }
}

/// Map a TPS value onto the red → yellow → green scale.
///
/// Total: out-of-range input is clamped, and NaN is treated as 0 (red).
pub fn color_of(value: f64) -> Rgb {
    let t = normalize(value);
    if t < 0.5 {
        Rgb::new(255, channel(t * 2.0), 0)
    } else {
        Rgb::new(channel((1.0 - t) * 2.0), 255, 0)
    }
}

/// `value / V_MAX` clamped to `[0, 1]`.
pub fn normalize(value: f64) -> f64 {
    let t = value / V_MAX;
    if t.is_nan() {
        0.0
    } else {
        t.clamp(0.0, 1.0)
    }
}

fn channel(fraction: f64) -> u8 {
    (fraction * 255.0).round() as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_anchor_colours() {
        assert_eq!(color_of(0.0), Rgb::RED);
        assert_eq!(color_of(10.0), Rgb::YELLOW);
        assert_eq!(color_of(20.0), Rgb::GREEN);
    }

    #[test]
    fn test_quarter_points() {
        // t = 0.25 → G = round(0.5 * 255) = 128
        assert_eq!(color_of(5.0), Rgb::new(255, 128, 0));
        // t = 0.75 → R = round(0.5 * 255) = 128
        assert_eq!(color_of(15.0), Rgb::new(128, 255, 0));
    }

    #[test]
    fn test_out_of_range_is_clamped() {
        assert_eq!(color_of(-4.0), Rgb::RED);
        assert_eq!(color_of(35.0), Rgb::GREEN);
        assert_eq!(color_of(f64::INFINITY), Rgb::GREEN);
        assert_eq!(color_of(f64::NEG_INFINITY), Rgb::RED);
    }

    #[test]
    fn test_nan_is_total() {
        assert_eq!(color_of(f64::NAN), Rgb::RED);
    }

    #[test]
    fn test_continuous_at_breakpoint() {
        let below = color_of(10.0 - 1e-9);
        let at = color_of(10.0);
        assert_eq!(below, at);
    }

    #[test]
    fn test_monotonic_channels() {
        let mut prev = color_of(0.0);
        for step in 1..=200 {
            let c = color_of(step as f64 * 0.1);
            assert!(c.g >= prev.g, "green never decreases");
            assert!(c.r <= prev.r, "red never increases");
            assert_eq!(c.b, 0);
            prev = c;
        }
    }

    #[test]
    fn test_css_formats() {
        assert_eq!(Rgb::new(255, 128, 0).css(), "rgb(255, 128, 0)");
        assert_eq!(Rgb::new(255, 100, 100).with_alpha(0.1).css(), "rgba(255, 100, 100, 0.1)");
        assert_eq!(Rgb::new(102, 102, 102).hex(), "#666666");
    }
}
