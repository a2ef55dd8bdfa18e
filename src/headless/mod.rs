//! Headless mode - JSON event output for scripting
//!
//! Events are output as NDJSON (newline-delimited JSON), one event per line.
//! Each event has an "event" field indicating its type, along with
//! event-specific data and a millisecond timestamp.
//!
//! # Example Output
//!
//! ```json
//! {"event":"pipeline_started","file_name":"tps.csv","generation":1,"timestamp":1704700001000}
//! {"event":"pipeline_ready","sample_count":3,"participant_count":2,"warning_count":0,"ranked_scores":[...],"worst":[...],"best":[...],"timestamp":1704700001004}
//! {"event":"sample_selected","x":555.0,"y":120.0,"sample":{"index":1,...},"timestamp":1704700001005}
//! ```

pub mod runner;

use chrono::Utc;
use serde::Serialize;
use std::io::{self, Write};
use tracing::error;

use tpsview_core::{ParseWarning, RankedScore, Rankings, Sample};

/// Events emitted in headless mode
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum HeadlessEvent {
    /// An upload was accepted and is being processed
    PipelineStarted {
        file_name: String,
        generation: u64,
        timestamp: i64,
    },

    /// The upload produced data
    PipelineReady {
        sample_count: usize,
        participant_count: usize,
        warning_count: usize,
        /// Every participant, lowest mean first
        ranked_scores: Vec<RankedScore>,
        /// Lowest means, capped at the ranking limit
        worst: Vec<RankedScore>,
        /// Highest means, capped at the ranking limit
        best: Vec<RankedScore>,
        timestamp: i64,
    },

    /// The upload could not be processed
    PipelineFailed { message: String, timestamp: i64 },

    /// A line of the log had a problem that did not stop the parse
    Warning {
        line: usize,
        message: String,
        timestamp: i64,
    },

    /// Result of hit-testing a pointer position
    SampleSelected {
        x: f64,
        y: f64,
        sample: Option<Sample>,
        timestamp: i64,
    },
}

impl HeadlessEvent {
    /// Emit this event to stdout as JSON
    pub fn emit(&self) {
        let json = match serde_json::to_string(self) {
            Ok(json) => json,
            Err(e) => {
                error!("Failed to serialize headless event: {}", e);
                return;
            }
        };

        let mut stdout = io::stdout().lock();
        if let Err(e) = writeln!(stdout, "{}", json) {
            error!("Failed to write headless event to stdout: {}", e);
            return;
        }

        if let Err(e) = stdout.flush() {
            error!("Failed to flush headless stdout: {}", e);
        }
    }

    /// Get current timestamp in milliseconds
    fn now() -> i64 {
        Utc::now().timestamp_millis()
    }

    // ─────────────────────────────────────────────────────────
    // Convenience constructors
    // ─────────────────────────────────────────────────────────

    pub fn pipeline_started(file_name: &str, generation: u64) -> Self {
        Self::PipelineStarted {
            file_name: file_name.to_string(),
            generation,
            timestamp: Self::now(),
        }
    }

    pub fn pipeline_ready(
        sample_count: usize,
        participant_count: usize,
        warning_count: usize,
        rankings: &Rankings,
        limit: usize,
    ) -> Self {
        Self::PipelineReady {
            sample_count,
            participant_count,
            warning_count,
            ranked_scores: rankings.ascending().to_vec(),
            worst: rankings.worst(limit).cloned().collect(),
            best: rankings.best(limit).cloned().collect(),
            timestamp: Self::now(),
        }
    }

    pub fn pipeline_failed(message: impl Into<String>) -> Self {
        Self::PipelineFailed {
            message: message.into(),
            timestamp: Self::now(),
        }
    }

    pub fn warning(warning: &ParseWarning) -> Self {
        Self::Warning {
            line: warning.line,
            message: warning.to_string(),
            timestamp: Self::now(),
        }
    }

    pub fn sample_selected(x: f64, y: f64, sample: Option<Sample>) -> Self {
        Self::SampleSelected {
            x,
            y,
            sample,
            timestamp: Self::now(),
        }
    }
}
