//! TPS Viewer Library
//!
//! Command-line frontend for the TPS log viewer: a text report runner and a
//! headless NDJSON runner, both driving `tpsview_app::Engine`.

pub mod app;
pub mod headless;
pub mod report;

// Re-export main entry points
pub use app::{run, RunOptions, RunOutcome};
pub use headless::runner::run_headless;
