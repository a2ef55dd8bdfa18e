//! tpsview-app - Application state and orchestration for TPS Viewer
//!
//! This crate implements the TEA (The Elm Architecture) pattern for the
//! viewer's chrome and data pipeline, the Engine that runs uploads on a
//! background task with a generation guard, and configuration loading.

pub mod actions;
pub mod config;
pub mod engine;
pub mod engine_event;
pub mod handler;
pub mod message;
pub mod state;

// Re-export primary types
pub use config::Settings;
pub use engine::Engine;
pub use engine_event::EngineEvent;
pub use handler::{UpdateAction, UpdateResult};
pub use message::{Message, PipelineOutcome};
pub use state::{AppState, PipelineSnapshot, PipelineState, PipelineStatus, Screen};
