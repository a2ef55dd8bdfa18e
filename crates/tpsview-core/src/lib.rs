//! # tpsview-core - Core Domain Types
//!
//! Foundation crate for TPS Viewer. Provides domain types, the TPS log
//! parser, participant aggregation, error handling and logging setup.
//!
//! This crate has **zero internal dependencies** -- it only depends on external
//! crates (serde, thiserror, tracing).
//!
//! ## Public API
//!
//! ### Domain Types (`types`)
//! - [`Sample`] - One timestamped TPS observation with the participants online
//! - [`ParticipantSummary`] - All values recorded while a participant was online
//! - [`RankedScore`], [`Rankings`] - Mean TPS per participant, lowest first
//! - [`V_MAX`] - Upper bound of the displayed TPS range
//!
//! ### Parsing (`parser`)
//! - [`parse_log()`] - Single-pass parse of an uploaded blob
//! - [`ParseWarning`] - Per-line problems that do not abort the parse
//!
//! ### Aggregation (`aggregate`)
//! - [`Aggregator`] - Fold over samples, mergeable across chunks
//! - [`rank_participants()`] - Aggregate and rank in one call
//!
//! ### Pipeline (`dataset`)
//! - [`Dataset`] - Immutable result of one upload
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Custom error enum with fatal-error classification
//! - [`Result`] - Type alias for `std::result::Result<T, Error>`
//! - [`ResultExt`] - Extension trait for adding error context
//!
//! ## Prelude
//!
//! Import commonly used types with:
//! ```rust
//! use tpsview_core::prelude::*;
//! ```

pub mod aggregate;
pub mod dataset;
pub mod error;
pub mod logging;
pub mod parser;
pub mod types;

/// Prelude for common imports used throughout all TPS Viewer crates
pub mod prelude {
    pub use super::error::{Error, Result, ResultExt};
    pub use tracing::{debug, error, info, instrument, trace, warn};
}

// Re-export commonly used types at crate root for convenience
pub use aggregate::{aggregate, rank_participants, Aggregator};
pub use dataset::Dataset;
pub use error::{Error, Result, ResultExt};
pub use parser::{parse_log, parse_text, ParseWarning, ParseWarningKind, ParsedLog};
pub use types::{ParticipantSummary, RankedScore, Rankings, Sample, V_MAX};
