//! Tests for the update function

use std::sync::Arc;

use super::*;
use crate::config::Settings;
use crate::state::{AppState, PipelineState, PipelineStatus, Screen};
use tpsview_core::Dataset;

const EXAMPLE: &str = "ts,tps,players\n2024-01-01 00:00:00,19.5,alice;bob\n2024-01-01 00:00:01,4.0,bob\n2024-01-01 00:00:02,20.0,alice";

fn upload(name: &str, content: &str) -> Message {
    Message::Upload {
        file_name: name.to_string(),
        bytes: Arc::from(content.as_bytes()),
    }
}

fn dataset(content: &str) -> Arc<Dataset> {
    Arc::new(Dataset::from_bytes(content.as_bytes()).unwrap())
}

fn upload_state() -> AppState {
    let mut state = AppState::new();
    update(&mut state, Message::AcknowledgeWarning);
    state
}

fn spawned_generation(result: &UpdateResult) -> u64 {
    match &result.action {
        Some(UpdateAction::SpawnPipeline { generation, .. }) => *generation,
        other => panic!("expected SpawnPipeline, got {other:?}"),
    }
}

// ─────────────────────────────────────────────────────────
// Chrome Flow
// ─────────────────────────────────────────────────────────

#[test]
fn test_acknowledge_warning_moves_to_upload() {
    let mut state = AppState::new();
    assert_eq!(state.screen, Screen::Warning);
    let result = update(&mut state, Message::AcknowledgeWarning);
    assert_eq!(state.screen, Screen::Upload);
    assert!(result.action.is_none());
}

#[test]
fn test_upload_ignored_before_warning_acknowledged() {
    let mut state = AppState::new();
    let result = update(&mut state, upload("log.csv", EXAMPLE));
    assert!(result.action.is_none());
    assert_eq!(state.screen, Screen::Warning);
    assert_eq!(state.generation, 0);
}

#[test]
fn test_upload_spawns_pipeline_and_shows_display() {
    let mut state = upload_state();
    let result = update(&mut state, upload("log.csv", EXAMPLE));

    assert_eq!(spawned_generation(&result), 1);
    assert_eq!(state.screen, Screen::Display);
    assert!(state.is_loading());
    match result.action {
        Some(UpdateAction::SpawnPipeline {
            file_name, bytes, ..
        }) => {
            assert_eq!(file_name, "log.csv");
            assert_eq!(&*bytes, EXAMPLE.as_bytes());
        }
        other => panic!("expected SpawnPipeline, got {other:?}"),
    }
}

#[test]
fn test_upload_skips_warning_when_disabled() {
    let mut settings = Settings::default();
    settings.behavior.show_warning = false;
    let mut state = AppState::with_settings(settings);
    let result = update(&mut state, upload("log.csv", EXAMPLE));
    assert_eq!(spawned_generation(&result), 1);
}

#[test]
fn test_clear_file_returns_to_upload() {
    let mut state = upload_state();
    let result = update(&mut state, upload("log.csv", EXAMPLE));
    let generation = spawned_generation(&result);
    update(
        &mut state,
        Message::PipelineCompleted {
            generation,
            outcome: Ok(dataset(EXAMPLE)),
        },
    );

    let result = update(&mut state, Message::ClearFile);
    assert!(result.action.is_none());
    assert_eq!(state.screen, Screen::Upload);
    assert!(matches!(state.pipeline, PipelineState::Idle));
}

#[test]
fn test_clear_file_while_loading_cancels() {
    let mut state = upload_state();
    let result = update(&mut state, upload("log.csv", EXAMPLE));
    let generation = spawned_generation(&result);

    let result = update(&mut state, Message::ClearFile);
    assert!(matches!(result.action, Some(UpdateAction::CancelPipeline)));

    // The cancelled task's result, if it still arrives, is ignored.
    update(
        &mut state,
        Message::PipelineCompleted {
            generation,
            outcome: Ok(dataset(EXAMPLE)),
        },
    );
    assert!(matches!(state.pipeline, PipelineState::Idle));
}

// ─────────────────────────────────────────────────────────
// Pipeline
// ─────────────────────────────────────────────────────────

#[test]
fn test_pipeline_ready() {
    let mut state = upload_state();
    let generation = spawned_generation(&update(&mut state, upload("log.csv", EXAMPLE)));
    update(
        &mut state,
        Message::PipelineCompleted {
            generation,
            outcome: Ok(dataset(EXAMPLE)),
        },
    );

    let snapshot = state.snapshot();
    assert_eq!(snapshot.state, PipelineStatus::Ready);
    assert_eq!(snapshot.sample_count, 3);
    assert_eq!(snapshot.ranked_scores.len(), 2);
}

#[test]
fn test_pipeline_failed() {
    let mut state = upload_state();
    let generation = spawned_generation(&update(&mut state, upload("empty.csv", "")));
    update(
        &mut state,
        Message::PipelineCompleted {
            generation,
            outcome: Err("parse error: input is empty".to_string()),
        },
    );

    let snapshot = state.snapshot();
    assert_eq!(snapshot.state, PipelineStatus::Failed);
    assert_eq!(snapshot.error.as_deref(), Some("parse error: input is empty"));
    assert!(snapshot.ranked_scores.is_empty());
}

#[test]
fn test_stale_completion_never_overwrites_newer_data() {
    let mut state = upload_state();
    let first = spawned_generation(&update(&mut state, upload("old.csv", EXAMPLE)));
    let second = spawned_generation(&update(&mut state, upload("new.csv", "ts,tps\nt,1\n")));
    assert!(second > first);

    // Newer pipeline finishes first.
    update(
        &mut state,
        Message::PipelineCompleted {
            generation: second,
            outcome: Ok(dataset("ts,tps\nt,1\n")),
        },
    );
    // Older pipeline straggles in afterwards.
    update(
        &mut state,
        Message::PipelineCompleted {
            generation: first,
            outcome: Ok(dataset(EXAMPLE)),
        },
    );

    let snapshot = state.snapshot();
    assert_eq!(snapshot.file_name.as_deref(), Some("new.csv"));
    assert_eq!(snapshot.sample_count, 1);
}

#[test]
fn test_stale_failure_does_not_replace_loading() {
    let mut state = upload_state();
    let first = spawned_generation(&update(&mut state, upload("old.csv", EXAMPLE)));
    update(&mut state, upload("new.csv", EXAMPLE));

    update(
        &mut state,
        Message::PipelineCompleted {
            generation: first,
            outcome: Err("boom".to_string()),
        },
    );
    assert!(state.is_loading());
}

#[test]
fn test_header_only_is_ready_and_empty() {
    let mut state = upload_state();
    let content = "ts,tps,players\n";
    let generation = spawned_generation(&update(&mut state, upload("h.csv", content)));
    update(
        &mut state,
        Message::PipelineCompleted {
            generation,
            outcome: Ok(dataset(content)),
        },
    );
    let snapshot = state.snapshot();
    assert_eq!(snapshot.state, PipelineStatus::Ready);
    assert_eq!(snapshot.sample_count, 0);
    assert!(snapshot.ranked_scores.is_empty());
    assert!(snapshot.error.is_none());
}

// ─────────────────────────────────────────────────────────
// Pointer
// ─────────────────────────────────────────────────────────

#[test]
fn test_pointer_ignored_while_loading() {
    let mut state = upload_state();
    update(&mut state, upload("log.csv", EXAMPLE));
    update(&mut state, Message::PointerMoved { x: 60.0, y: 430.0 });
    assert!(state.hovered.is_none());
    assert!(state.pointer.is_none());
}

#[test]
fn test_pointer_hover_and_leave() {
    let mut state = upload_state();
    let generation = spawned_generation(&update(&mut state, upload("log.csv", EXAMPLE)));
    update(
        &mut state,
        Message::PipelineCompleted {
            generation,
            outcome: Ok(dataset(EXAMPLE)),
        },
    );

    // Sample 1 (4.0 TPS) sits at (555, 120).
    update(&mut state, Message::PointerMoved { x: 557.0, y: 118.0 });
    assert_eq!(state.hovered, Some(1));
    let tip = state.tooltip().unwrap();
    assert_eq!(tip.value_text, "4.00");
    assert_eq!(tip.participants_heading, "Players Online (1):");

    update(&mut state, Message::PointerLeft);
    assert!(state.hovered.is_none());
}

#[test]
fn test_new_upload_clears_hover() {
    let mut state = upload_state();
    let generation = spawned_generation(&update(&mut state, upload("log.csv", EXAMPLE)));
    update(
        &mut state,
        Message::PipelineCompleted {
            generation,
            outcome: Ok(dataset(EXAMPLE)),
        },
    );
    update(&mut state, Message::PointerMoved { x: 60.0, y: 430.0 });
    assert_eq!(state.hovered, Some(0));

    update(&mut state, upload("again.csv", EXAMPLE));
    assert!(state.hovered.is_none());
}

#[test]
fn test_update_result_constructors() {
    assert!(UpdateResult::none().message.is_none());
    let result = UpdateResult::message(Message::PointerLeft);
    assert!(matches!(result.message, Some(Message::PointerLeft)));
    assert!(result.action.is_none());
}
