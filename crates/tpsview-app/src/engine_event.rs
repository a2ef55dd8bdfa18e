//! Domain events emitted by the Engine for external consumers
//!
//! Events are broadcast after each message processing cycle via
//! `Engine::subscribe()`. The headless runner turns them into NDJSON.

/// Domain events emitted by the Engine for external consumers.
#[derive(Debug, Clone, PartialEq)]
pub enum EngineEvent {
    // ─────────────────────────────────────────────────────────
    // Pipeline Lifecycle
    // ─────────────────────────────────────────────────────────
    /// An upload was accepted and its pipeline started
    PipelineStarted { generation: u64, file_name: String },

    /// The current pipeline produced data
    PipelineReady {
        generation: u64,
        sample_count: usize,
        participant_count: usize,
        warning_count: usize,
    },

    /// The current pipeline failed
    PipelineFailed { generation: u64, message: String },

    /// The file was removed
    FileCleared { generation: u64 },

    // ─────────────────────────────────────────────────────────
    // Pointer
    // ─────────────────────────────────────────────────────────
    /// The hovered sample changed (`None` when nothing is hovered)
    HoverChanged { index: Option<usize> },
}

impl EngineEvent {
    /// Short name for logging
    pub fn event_type(&self) -> &'static str {
        match self {
            EngineEvent::PipelineStarted { .. } => "pipeline_started",
            EngineEvent::PipelineReady { .. } => "pipeline_ready",
            EngineEvent::PipelineFailed { .. } => "pipeline_failed",
            EngineEvent::FileCleared { .. } => "file_cleared",
            EngineEvent::HoverChanged { .. } => "hover_changed",
        }
    }
}
