//! # TPS Domain Types
//!
//! Samples parsed from a TPS log and the per-participant statistics derived
//! from them. These types are the shared vocabulary between:
//! - `tpsview-core` (parsing and aggregation)
//! - `tpsview-chart` (rendering and hit-testing)
//! - `tpsview-app` (pipeline state)

use std::cmp::Ordering;

use serde::Serialize;

/// Upper bound of the displayed TPS range.
///
/// A healthy server ticks 20 times per second. This is a display constant:
/// parsed values above it are kept as-is and only clamped when mapped to a
/// colour or a Y position.
pub const V_MAX: f64 = 20.0;

// ── Sample ───────────────────────────────────────────────────────────────────

/// One timestamped TPS observation plus the participants online at that moment.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Sample {
    /// Position in the sequence (0-based, header excluded).
    pub index: usize,
    /// Timestamp exactly as it appeared in the log. Display only.
    pub timestamp: String,
    /// TPS value. `NaN` when the value field was not numeric.
    #[serde(serialize_with = "serialize_value")]
    pub value: f64,
    /// Names online at this sample, in log order.
    pub participants: Vec<String>,
}

impl Sample {
    /// Whether the value is a usable number.
    ///
    /// Invalid samples keep their slot in the sequence but are excluded from
    /// aggregation, colour mapping, positioning and hit-testing.
    pub fn is_valid(&self) -> bool {
        self.value.is_finite()
    }

    /// Time-of-day portion of the timestamp for axis labels.
    ///
    /// `"2024-01-01 12:30:00"` becomes `"12:30:00"`; timestamps without a
    /// space are returned whole.
    pub fn time_label(&self) -> &str {
        self.timestamp.split(' ').nth(1).unwrap_or(&self.timestamp)
    }
}

/// NaN is not representable in JSON; invalid values serialize as `null`.
fn serialize_value<S: serde::Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    if value.is_finite() {
        serializer.serialize_f64(*value)
    } else {
        serializer.serialize_none()
    }
}

// ── ParticipantSummary ───────────────────────────────────────────────────────

/// Every TPS value recorded while a participant was online.
#[derive(Debug, Clone, PartialEq)]
pub struct ParticipantSummary {
    pub name: String,
    pub values: Vec<f64>,
}

impl ParticipantSummary {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            values: Vec::new(),
        }
    }

    pub fn sample_count(&self) -> usize {
        self.values.len()
    }

    /// Arithmetic mean of the recorded values.
    pub fn mean(&self) -> f64 {
        let sum: f64 = self.values.iter().sum();
        sum / self.sample_count().max(1) as f64
    }

    /// Finalize into a ranking entry.
    pub fn to_score(&self) -> RankedScore {
        RankedScore {
            name: self.name.clone(),
            mean_value: self.mean(),
            sample_count: self.sample_count(),
        }
    }
}

// ── RankedScore ──────────────────────────────────────────────────────────────

/// A participant's average associated TPS.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedScore {
    pub name: String,
    pub mean_value: f64,
    pub sample_count: usize,
}

// ── Rankings ─────────────────────────────────────────────────────────────────

/// Participants ordered by mean TPS, lowest first.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Rankings {
    ascending: Vec<RankedScore>,
}

impl Rankings {
    /// Sort scores ascending by mean.
    ///
    /// The sort is stable, so equal means keep the order they were given in.
    pub fn from_scores(mut scores: Vec<RankedScore>) -> Self {
        scores.sort_by(|a, b| {
            a.mean_value
                .partial_cmp(&b.mean_value)
                .unwrap_or(Ordering::Equal)
        });
        Self { ascending: scores }
    }

    /// Full list, worst first.
    pub fn ascending(&self) -> &[RankedScore] {
        &self.ascending
    }

    /// The `limit` participants associated with the lowest TPS, worst first.
    pub fn worst(&self, limit: usize) -> impl Iterator<Item = &RankedScore> {
        self.ascending.iter().take(limit)
    }

    /// The `limit` participants associated with the highest TPS, best first.
    pub fn best(&self, limit: usize) -> impl Iterator<Item = &RankedScore> {
        self.ascending.iter().rev().take(limit)
    }

    pub fn len(&self) -> usize {
        self.ascending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ascending.is_empty()
    }

    pub fn into_vec(self) -> Vec<RankedScore> {
        self.ascending
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn score(name: &str, mean: f64) -> RankedScore {
        RankedScore {
            name: name.to_string(),
            mean_value: mean,
            sample_count: 1,
        }
    }

    fn sample(timestamp: &str, value: f64) -> Sample {
        Sample {
            index: 0,
            timestamp: timestamp.to_string(),
            value,
            participants: vec![],
        }
    }

    #[test]
    fn test_time_label_takes_part_after_space() {
        assert_eq!(sample("2024-01-01 12:30:00", 20.0).time_label(), "12:30:00");
    }

    #[test]
    fn test_time_label_is_second_token_only() {
        assert_eq!(
            sample("2024-01-01 12:30:00 UTC", 20.0).time_label(),
            "12:30:00"
        );
    }

    #[test]
    fn test_time_label_falls_back_to_whole_timestamp() {
        assert_eq!(sample("1704067200", 20.0).time_label(), "1704067200");
    }

    #[test]
    fn test_sample_validity() {
        assert!(sample("t", 0.0).is_valid());
        assert!(sample("t", 35.0).is_valid());
        assert!(!sample("t", f64::NAN).is_valid());
    }

    #[test]
    fn test_invalid_value_serializes_as_null() {
        let json = serde_json::to_value(sample("t", f64::NAN)).unwrap();
        assert!(json["value"].is_null());
    }

    #[test]
    fn test_summary_mean_and_count() {
        let mut summary = ParticipantSummary::new("alice");
        summary.values.extend([19.5, 20.0]);
        let score = summary.to_score();
        assert_eq!(score.sample_count, 2);
        assert!((score.mean_value - 19.75).abs() < 1e-12);
    }

    #[test]
    fn test_empty_summary_mean_is_zero() {
        assert_eq!(ParticipantSummary::new("ghost").mean(), 0.0);
    }

    #[test]
    fn test_rankings_sort_ascending_and_stable() {
        let rankings = Rankings::from_scores(vec![
            score("c", 15.0),
            score("a", 10.0),
            score("b", 10.0),
            score("d", 2.0),
        ]);
        let names: Vec<_> = rankings.ascending().iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, ["d", "a", "b", "c"]);
    }

    #[test]
    fn test_signed_zero_means_tie_in_given_order() {
        let rankings = Rankings::from_scores(vec![score("amy", 0.0), score("zed", -0.0)]);
        let names: Vec<_> = rankings.ascending().iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, ["amy", "zed"]);
    }

    #[test]
    fn test_best_is_reversed_ascending() {
        let rankings = Rankings::from_scores(vec![
            score("low", 1.0),
            score("mid", 10.0),
            score("high", 19.0),
        ]);
        let best: Vec<_> = rankings.best(2).map(|s| s.name.as_str()).collect();
        assert_eq!(best, ["high", "mid"]);
        let worst: Vec<_> = rankings.worst(5).map(|s| s.name.as_str()).collect();
        assert_eq!(worst, ["low", "mid", "high"]);
    }
}
