//! Headless mode runner - NDJSON events instead of a text report

use tokio::sync::broadcast;
use tracing::{info, warn};

use tpsview_app::{Engine, EngineEvent, Message, PipelineState};
use tpsview_core::prelude::*;

use super::HeadlessEvent;
use crate::app::{self, RunOptions, RunOutcome};

/// Run in headless mode - output JSON events instead of text
pub async fn run_headless(options: RunOptions) -> Result<RunOutcome> {
    info!("═══════════════════════════════════════════════════════");
    info!("TPS Viewer starting in HEADLESS mode");
    info!("File: {}", options.path.display());
    info!("═══════════════════════════════════════════════════════");

    let settings = app::resolve_settings(&options)?;
    let mut engine = Engine::new(settings);
    let mut events = engine.subscribe();

    // No one reads the disclaimer in headless mode.
    app::acknowledge_warning(&mut engine);

    let upload = app::read_upload(&options.path);
    let result = match upload {
        Ok(message) => {
            engine.process_message(message);
            engine.wait_for_pipeline().await
        }
        Err(e) => Err(e),
    };
    if let Err(e) = result {
        HeadlessEvent::pipeline_failed(e.to_string()).emit();
        engine.shutdown().await;
        if e.is_fatal() {
            return Err(e);
        }
        return Ok(RunOutcome::Failed);
    }
    emit_engine_events(&engine, &mut events);

    let outcome = match &engine.state.pipeline {
        PipelineState::Ready { .. } => RunOutcome::Ready,
        _ => RunOutcome::Failed,
    };

    if outcome == RunOutcome::Ready {
        for pointer in &options.pointers {
            engine.process_message(Message::PointerMoved {
                x: pointer.x,
                y: pointer.y,
            });
            HeadlessEvent::sample_selected(
                pointer.x,
                pointer.y,
                engine.state.hovered_sample().cloned(),
            )
            .emit();
            engine.process_message(Message::PointerLeft);
        }

        if let Some(path) = &options.svg {
            if let Err(e) = app::write_svg(&engine, path) {
                warn!("Failed to write chart: {}", e);
                HeadlessEvent::pipeline_failed(e.to_string()).emit();
            }
        }
    }

    engine.shutdown().await;
    info!("TPS Viewer headless mode exiting");
    Ok(outcome)
}

/// Translate pipeline events broadcast by the engine into NDJSON
fn emit_engine_events(engine: &Engine, events: &mut broadcast::Receiver<EngineEvent>) {
    while let Ok(event) = events.try_recv() {
        match event {
            EngineEvent::PipelineStarted {
                generation,
                file_name,
            } => HeadlessEvent::pipeline_started(&file_name, generation).emit(),
            EngineEvent::PipelineReady {
                sample_count,
                participant_count,
                warning_count,
                ..
            } => {
                let Some(dataset) = engine.state.dataset() else {
                    continue;
                };
                for warning in &dataset.warnings {
                    HeadlessEvent::warning(warning).emit();
                }
                HeadlessEvent::pipeline_ready(
                    sample_count,
                    participant_count,
                    warning_count,
                    &dataset.rankings,
                    engine.state.settings.rankings.limit,
                )
                .emit();
            }
            EngineEvent::PipelineFailed { message, .. } => {
                HeadlessEvent::pipeline_failed(message).emit()
            }
            EngineEvent::FileCleared { .. } | EngineEvent::HoverChanged { .. } => {}
        }
    }
}
