//! Configuration file parsing for TPS Viewer
//!
//! Supports:
//! - `.tpsview/config.toml` - Chart geometry, ranking limit and behavior

pub mod settings;
pub mod types;

pub use settings::{load_settings, load_settings_from, settings_path};
pub use types::*;
