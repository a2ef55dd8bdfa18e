//! Engine - orchestration state shared by every frontend
//!
//! The Engine owns the message channel, the in-flight pipeline task and the
//! event broadcaster. Frontends feed it messages and read state or events.

use tokio::sync::{broadcast, mpsc};
use tokio::task::JoinHandle;

use crate::actions::handle_action;
use crate::config::Settings;
use crate::engine_event::EngineEvent;
use crate::handler;
use crate::message::Message;
use crate::state::{AppState, PipelineState, PipelineStatus};
use tpsview_core::prelude::*;

/// Lightweight snapshot of state for change detection.
///
/// Captured before message processing, compared after to detect
/// what changed and emit appropriate EngineEvents.
#[derive(Debug, Clone, Copy, PartialEq)]
struct StateSnapshot {
    generation: u64,
    status: PipelineStatus,
    hovered: Option<usize>,
}

impl StateSnapshot {
    fn capture(state: &AppState) -> Self {
        Self {
            generation: state.generation,
            status: state.pipeline.status(),
            hovered: state.hovered,
        }
    }
}

pub struct Engine {
    /// TEA application state (the Model)
    pub state: AppState,

    /// Sender half of the unified message channel.
    pub msg_tx: mpsc::Sender<Message>,

    /// Receiver half of the unified message channel.
    pub msg_rx: mpsc::Receiver<Message>,

    /// Background parse for the current generation, if running
    pipeline_task: Option<JoinHandle<()>>,

    /// Event broadcaster for external consumers.
    event_tx: broadcast::Sender<EngineEvent>,
}

impl Engine {
    /// Create a new Engine with loaded settings.
    pub fn new(settings: Settings) -> Self {
        let state = AppState::with_settings(settings);
        let (msg_tx, msg_rx) = mpsc::channel::<Message>(256);
        let (event_tx, _) = broadcast::channel(256);

        Self {
            state,
            msg_tx,
            msg_rx,
            pipeline_task: None,
            event_tx,
        }
    }

    /// Subscribe to engine events.
    ///
    /// If the subscriber falls behind (buffer full), older events are
    /// dropped.
    pub fn subscribe(&self) -> broadcast::Receiver<EngineEvent> {
        self.event_tx.subscribe()
    }

    /// Get a clone of the message sender for input sources.
    pub fn msg_sender(&self) -> mpsc::Sender<Message> {
        self.msg_tx.clone()
    }

    /// Process a single message through the TEA update cycle.
    pub fn process_message(&mut self, message: Message) {
        let pre = StateSnapshot::capture(&self.state);

        let mut msg = Some(message);
        while let Some(m) = msg {
            let result = handler::update(&mut self.state, m);
            if let Some(action) = result.action {
                handle_action(action, self.msg_tx.clone(), &mut self.pipeline_task);
            }
            msg = result.message;
        }

        let post = StateSnapshot::capture(&self.state);
        self.emit_events(&pre, &post);
    }

    /// Drain and process all pending messages from the channel.
    ///
    /// Returns the number of messages processed.
    pub fn drain_pending_messages(&mut self) -> usize {
        let mut count = 0;
        while let Ok(msg) = self.msg_rx.try_recv() {
            self.process_message(msg);
            count += 1;
        }
        count
    }

    /// Process messages until the current pipeline leaves `Loading`.
    pub async fn wait_for_pipeline(&mut self) -> Result<()> {
        while self.state.is_loading() {
            match self.msg_rx.recv().await {
                Some(msg) => self.process_message(msg),
                None => return Err(Error::ChannelClosed),
            }
        }
        Ok(())
    }

    /// Abort any running pipeline task.
    pub async fn shutdown(&mut self) {
        if let Some(handle) = self.pipeline_task.take() {
            handle.abort();
            if let Err(e) = handle.await {
                if !e.is_cancelled() {
                    warn!("Pipeline task panicked: {}", e);
                }
            }
        }
        info!("Engine shut down");
    }

    /// Emit EngineEvents based on state changes after processing.
    fn emit_events(&self, pre: &StateSnapshot, post: &StateSnapshot) {
        if pre.generation != post.generation {
            match &self.state.pipeline {
                PipelineState::Loading {
                    generation,
                    file_name,
                } => self.emit(EngineEvent::PipelineStarted {
                    generation: *generation,
                    file_name: file_name.clone(),
                }),
                PipelineState::Idle => self.emit(EngineEvent::FileCleared {
                    generation: post.generation,
                }),
                _ => {}
            }
        } else if pre.status == PipelineStatus::Loading && post.status != PipelineStatus::Loading {
            match &self.state.pipeline {
                PipelineState::Ready { dataset, .. } => self.emit(EngineEvent::PipelineReady {
                    generation: post.generation,
                    sample_count: dataset.samples.len(),
                    participant_count: dataset.rankings.len(),
                    warning_count: dataset.warnings.len(),
                }),
                PipelineState::Failed { message, .. } => self.emit(EngineEvent::PipelineFailed {
                    generation: post.generation,
                    message: message.clone(),
                }),
                _ => {}
            }
        }

        if pre.hovered != post.hovered {
            self.emit(EngineEvent::HoverChanged {
                index: post.hovered,
            });
        }
    }

    /// send() returns Err only if there are no receivers.
    fn emit(&self, event: EngineEvent) {
        trace!("Engine event: {}", event.event_type());
        let _ = self.event_tx.send(event);
    }
}
