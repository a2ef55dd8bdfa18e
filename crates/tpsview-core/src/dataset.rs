//! Parse-and-aggregate pipeline
//!
//! [`Dataset::from_bytes`] is the only entry point the upload path needs:
//! a pure function from the uploaded blob to immutable, cacheable data.

use serde::Serialize;

use crate::aggregate::aggregate;
use crate::error::Result;
use crate::parser::{parse_log, ParseWarning};
use crate::types::{Rankings, Sample};

/// Everything derived from one uploaded log.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Dataset {
    pub samples: Vec<Sample>,
    pub rankings: Rankings,
    pub warnings: Vec<ParseWarning>,
}

impl Dataset {
    /// Parse the blob and rank its participants.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let parsed = parse_log(bytes)?;
        let rankings = aggregate(&parsed.samples).finish();

        tracing::debug!(
            "Pipeline finished: {} samples, {} participants, {} warnings",
            parsed.samples.len(),
            rankings.len(),
            parsed.warnings.len()
        );

        Ok(Self {
            samples: parsed.samples,
            rankings,
            warnings: parsed.warnings,
        })
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Number of samples whose value could not be used.
    pub fn invalid_sample_count(&self) -> usize {
        self.samples.iter().filter(|s| !s.is_valid()).count()
    }
}
