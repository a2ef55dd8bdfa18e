//! Message types for the application (TEA pattern)

use std::sync::Arc;

use tpsview_core::Dataset;

/// Result of one background parse, as delivered back to the event loop.
///
/// Errors are carried as display strings: the pipeline boundary is where a
/// parse failure stops being an `Error` and becomes UI state.
pub type PipelineOutcome = std::result::Result<Arc<Dataset>, String>;

/// All possible messages/actions in the application
#[derive(Debug, Clone)]
pub enum Message {
    // ─────────────────────────────────────────────────────────
    // Chrome Flow
    // ─────────────────────────────────────────────────────────
    /// User dismissed the correlation disclaimer
    AcknowledgeWarning,

    /// A file was picked; its bytes are handed over whole
    Upload {
        file_name: String,
        bytes: Arc<[u8]>,
    },

    /// The current file was removed
    ClearFile,

    // ─────────────────────────────────────────────────────────
    // Pipeline
    // ─────────────────────────────────────────────────────────
    /// Background parse finished
    PipelineCompleted {
        /// Generation the pipeline was started for
        generation: u64,
        outcome: PipelineOutcome,
    },

    // ─────────────────────────────────────────────────────────
    // Pointer
    // ─────────────────────────────────────────────────────────
    /// Pointer moved over the chart surface
    PointerMoved { x: f64, y: f64 },

    /// Pointer left the chart surface
    PointerLeft,
}
