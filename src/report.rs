//! Plain-text rendition of the viewer's chrome
//!
//! The disclaimer, legend, ranking lists and tooltips formatted for a
//! terminal. Every function returns a `String` so runners decide where it
//! goes.

use std::fmt::Write as _;

use tpsview_chart::{Tooltip, SEVERITY_BANDS};
use tpsview_core::{Dataset, RankedScore, Rankings};

/// Correlation disclaimer shown before the first upload.
pub const WARNING_BANNER: &str = "\
Welcome to TPS Viewer
This tool shows correlation and not causation. A participant who was online
while the server struggled did not necessarily cause it.
Use at your own risk.";

/// Shown when no file has been processed.
pub const EMPTY_PROMPT: &str = "Please upload a TPS CSV file to view the analysis.";

/// Shown for a header-only log.
pub const NO_SAMPLES: &str = "No samples in this log";

/// File name, sample count and parse warnings.
pub fn summary(file_name: &str, dataset: &Dataset) -> String {
    let mut out = format!("{}: {} samples", file_name, dataset.samples.len());
    let invalid = dataset.invalid_sample_count();
    if invalid > 0 {
        let _ = write!(out, " ({} without a usable TPS value)", invalid);
    }
    let _ = write!(out, ", {} participants", dataset.rankings.len());
    out.push('\n');
    for warning in &dataset.warnings {
        let _ = writeln!(out, "  warning: {}", warning);
    }
    out
}

/// Colour legend, one line per severity band.
pub fn legend() -> String {
    let mut out = String::from("Legend\n");
    for band in &SEVERITY_BANDS {
        let _ = writeln!(out, "  {} {}", band.swatch.hex(), band.legend_label());
    }
    out
}

/// Worst and best participant lists.
pub fn rankings(rankings: &Rankings, limit: usize) -> String {
    let mut out = String::new();
    if rankings.is_empty() {
        out.push_str("No participants recorded\n");
        return out;
    }

    out.push_str("Players associated with the lowest TPS\n");
    push_rows(&mut out, rankings.worst(limit));
    out.push('\n');
    out.push_str("Players associated with the highest TPS\n");
    push_rows(&mut out, rankings.best(limit));
    out
}

fn push_rows<'a>(out: &mut String, scores: impl Iterator<Item = &'a RankedScore>) {
    for (i, score) in scores.enumerate() {
        let _ = writeln!(
            out,
            "  #{:<3}{:<24}{:>6} samples  {:>6.2} TPS",
            i + 1,
            score.name,
            score.sample_count,
            score.mean_value
        );
    }
}

/// Tooltip block for a hovered sample.
pub fn tooltip(tip: &Tooltip) -> String {
    let mut out = String::new();
    for line in tip.lines() {
        out.push_str(&line);
        out.push('\n');
    }
    out
}
