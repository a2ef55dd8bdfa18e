//! Text runner and helpers shared with the headless runner
//!
//! Both runners drive the same [`Engine`]: acknowledge the disclaimer,
//! upload the file, wait for the pipeline, then answer pointer queries and
//! optionally export the chart.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tpsview_app::config::{self, Settings};
use tpsview_app::{Engine, Message, PipelineState, Screen};
use tpsview_chart::{DrawSurface, Point, SvgSurface};
use tpsview_core::prelude::*;

use crate::report;

/// Everything a run needs, resolved from the command line
#[derive(Debug, Clone, Default)]
pub struct RunOptions {
    /// TPS log to upload
    pub path: PathBuf,
    /// Where to write the rendered chart
    pub svg: Option<PathBuf>,
    /// Pointer positions to hit-test
    pub pointers: Vec<Point>,
    /// Ranking limit override
    pub top: Option<usize>,
    /// Explicit settings file
    pub config: Option<PathBuf>,
}

/// How a run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    Ready,
    Failed,
}

impl RunOutcome {
    pub fn exit_code(self) -> i32 {
        match self {
            RunOutcome::Ready => 0,
            RunOutcome::Failed => 1,
        }
    }
}

/// Resolve settings: an explicit `--config` must load, the default location
/// falls back to defaults.
pub fn resolve_settings(options: &RunOptions) -> Result<Settings> {
    let mut settings = match &options.config {
        Some(path) => config::load_settings_from(path)?,
        None => {
            let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
            config::load_settings(&cwd)
        }
    };
    if let Some(top) = options.top {
        settings.rankings.limit = top;
    }
    Ok(settings)
}

/// Read the file and wrap it as an upload message
pub fn read_upload(path: &Path) -> Result<Message> {
    let bytes = std::fs::read(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());
    Ok(Message::Upload {
        file_name,
        bytes: Arc::from(bytes),
    })
}

/// Render the current data to an SVG document
pub fn render_svg(engine: &Engine) -> Result<String> {
    let commands = engine
        .state
        .draw_commands()
        .ok_or_else(|| Error::render("no data to render"))?;
    let mut surface = SvgSurface::new(engine.state.settings.chart.size());
    surface.draw_all(&commands);
    Ok(surface.finish())
}

/// Write the chart to `path`
pub fn write_svg(engine: &Engine, path: &Path) -> Result<()> {
    let svg = render_svg(engine)?;
    std::fs::write(path, svg).context("Failed to write chart")?;
    info!("Wrote chart to {}", path.display());
    Ok(())
}

/// Acknowledge the disclaimer if it is showing. Returns whether it was.
pub(crate) fn acknowledge_warning(engine: &mut Engine) -> bool {
    if engine.state.screen != Screen::Warning {
        return false;
    }
    engine.process_message(Message::AcknowledgeWarning);
    true
}

/// Upload the file and wait until the pipeline settles
pub(crate) async fn upload_and_wait(engine: &mut Engine, path: &Path) -> Result<()> {
    let upload = read_upload(path)?;
    engine.process_message(upload);
    engine.wait_for_pipeline().await
}

/// Run with human-readable output
pub async fn run(options: RunOptions) -> Result<RunOutcome> {
    info!("═══════════════════════════════════════════════════════");
    info!("TPS Viewer starting");
    info!("File: {}", options.path.display());
    info!("═══════════════════════════════════════════════════════");

    let settings = resolve_settings(&options)?;
    let limit = settings.rankings.limit;
    let mut engine = Engine::new(settings);

    if engine.state.screen == Screen::Warning {
        eprintln!("{}\n", report::WARNING_BANNER);
    }
    acknowledge_warning(&mut engine);

    upload_and_wait(&mut engine, &options.path).await?;

    let outcome = match &engine.state.pipeline {
        PipelineState::Ready { file_name, dataset } => {
            print!("{}", report::summary(file_name, dataset));
            if dataset.is_empty() {
                println!("{}", report::NO_SAMPLES);
            } else {
                println!();
                print!("{}", report::legend());
                println!();
                print!("{}", report::rankings(&dataset.rankings, limit));
            }
            RunOutcome::Ready
        }
        PipelineState::Failed { file_name, message } => {
            eprintln!("Failed to load {}: {}", file_name, message);
            RunOutcome::Failed
        }
        PipelineState::Idle | PipelineState::Loading { .. } => {
            eprintln!("{}", report::EMPTY_PROMPT);
            RunOutcome::Failed
        }
    };

    if outcome == RunOutcome::Ready {
        for pointer in &options.pointers {
            engine.process_message(Message::PointerMoved {
                x: pointer.x,
                y: pointer.y,
            });
            println!();
            match engine.state.tooltip() {
                Some(tip) => print!("{}", report::tooltip(&tip)),
                None => println!("No sample at ({}, {})", pointer.x, pointer.y),
            }
            engine.process_message(Message::PointerLeft);
        }

        if let Some(path) = &options.svg {
            write_svg(&engine, path)?;
        }
    }

    engine.shutdown().await;
    info!("TPS Viewer exiting");
    Ok(outcome)
}
