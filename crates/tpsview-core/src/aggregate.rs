//! Participant aggregation
//!
//! A single fold over the parsed samples that collects every TPS value seen
//! while each participant was online, then ranks participants by their mean.

use indexmap::IndexMap;

use crate::types::{ParticipantSummary, Rankings, Sample};

/// Per-participant summaries keyed by name, in first-seen order.
#[derive(Debug, Clone, Default)]
pub struct Aggregator {
    summaries: IndexMap<String, ParticipantSummary>,
}

impl Aggregator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one sample.
    ///
    /// Samples with an invalid value contribute nothing, so a participant
    /// seen only alongside invalid values never gets a summary.
    pub fn push(&mut self, sample: &Sample) {
        if !sample.is_valid() {
            return;
        }
        for name in &sample.participants {
            self.summaries
                .entry(name.clone())
                .or_insert_with(|| ParticipantSummary::new(name.as_str()))
                .values
                .push(sample.value);
        }
    }

    /// Fold another partial aggregation into this one.
    ///
    /// `other` must cover samples that come after the ones already pushed;
    /// names new to `self` are appended in `other`'s first-seen order.
    pub fn merge(&mut self, other: Aggregator) {
        for (name, summary) in other.summaries {
            match self.summaries.entry(name) {
                indexmap::map::Entry::Occupied(mut entry) => {
                    entry.get_mut().values.extend(summary.values)
                }
                indexmap::map::Entry::Vacant(entry) => {
                    entry.insert(summary);
                }
            }
        }
    }

    pub fn summaries(&self) -> impl Iterator<Item = &ParticipantSummary> {
        self.summaries.values()
    }

    pub fn get(&self, name: &str) -> Option<&ParticipantSummary> {
        self.summaries.get(name)
    }

    /// Finalize into rankings, lowest mean first.
    pub fn finish(&self) -> Rankings {
        Rankings::from_scores(self.summaries.values().map(ParticipantSummary::to_score).collect())
    }
}

/// Aggregate a full sample sequence in one pass.
pub fn aggregate<'a>(samples: impl IntoIterator<Item = &'a Sample>) -> Aggregator {
    let mut aggregator = Aggregator::new();
    for sample in samples {
        aggregator.push(sample);
    }
    aggregator
}

/// Convenience wrapper: aggregate and rank.
pub fn rank_participants(samples: &[Sample]) -> Rankings {
    aggregate(samples).finish()
}
