//! Action handlers: UpdateAction dispatch and background task spawning

use std::sync::Arc;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

use crate::message::{Message, PipelineOutcome};
use crate::UpdateAction;
use tpsview_core::Dataset;

/// Execute an action, tracking the pipeline task so it can be aborted
pub fn handle_action(
    action: UpdateAction,
    msg_tx: mpsc::Sender<Message>,
    pipeline_task: &mut Option<JoinHandle<()>>,
) {
    match action {
        UpdateAction::SpawnPipeline {
            generation,
            file_name,
            bytes,
        } => {
            abort_pipeline(pipeline_task);
            debug!("Spawning pipeline generation {} for {}", generation, file_name);
            *pipeline_task = Some(spawn_pipeline(generation, bytes, msg_tx));
        }

        UpdateAction::CancelPipeline => abort_pipeline(pipeline_task),
    }
}

fn abort_pipeline(pipeline_task: &mut Option<JoinHandle<()>>) {
    if let Some(handle) = pipeline_task.take() {
        if !handle.is_finished() {
            debug!("Aborting in-flight pipeline task");
        }
        handle.abort();
    }
}

/// Parse and aggregate on the blocking pool, then report back.
pub fn spawn_pipeline(
    generation: u64,
    bytes: Arc<[u8]>,
    msg_tx: mpsc::Sender<Message>,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        let outcome = run_pipeline(bytes).await;
        if msg_tx
            .send(Message::PipelineCompleted {
                generation,
                outcome,
            })
            .await
            .is_err()
        {
            debug!("Pipeline generation {} finished after receiver closed", generation);
        }
    })
}

async fn run_pipeline(bytes: Arc<[u8]>) -> PipelineOutcome {
    match tokio::task::spawn_blocking(move || Dataset::from_bytes(&bytes)).await {
        Ok(Ok(dataset)) => Ok(Arc::new(dataset)),
        Ok(Err(e)) => Err(e.to_string()),
        Err(e) => {
            warn!("Pipeline task did not complete: {}", e);
            Err(format!("Pipeline task did not complete: {}", e))
        }
    }
}
