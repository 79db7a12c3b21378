//! Headless mode runner - one generation without the TUI
//!
//! Drives the same [`Engine`] as the terminal UI and turns the messages it
//! observes into [`HeadlessEvent`]s.

use std::io::Write;
use std::path::PathBuf;

use flyer_app::config::Settings;
use flyer_app::{message::Message, Engine};
use flyer_core::prelude::*;
use flyer_core::{Category, SocialFormat, TargetAudience};
use flyer_genai::ContentService;

use super::HeadlessEvent;

/// Selections for a headless run
#[derive(Debug, Clone, Default)]
pub struct HeadlessOptions {
    pub target: TargetAudience,
    pub category: Category,
    pub format: SocialFormat,
    pub prompt: String,
    /// Write the flyer to the export directory after generating
    pub export: bool,
}

/// Run one generation and print NDJSON events to stdout
///
/// Returns `Ok(false)` when the run failed; the error was already reported
/// as an event.
pub async fn run_headless<S>(
    project_path: PathBuf,
    settings: Settings,
    service: S,
    options: HeadlessOptions,
) -> Result<bool>
where
    S: ContentService + Send + Sync + 'static,
{
    info!("═══════════════════════════════════════════════════════");
    info!("Flyer Studio starting in HEADLESS mode");
    info!("Project: {}", project_path.display());
    info!("═══════════════════════════════════════════════════════");

    let mut engine = Engine::new(project_path, settings, service);
    let success = run_with_engine(&mut engine, options, &mut std::io::stdout()).await;

    info!("Flyer Studio headless mode exiting (success={})", success);
    Ok(success)
}

/// Apply the selections, generate, optionally export
async fn run_with_engine<S, W>(engine: &mut Engine<S>, options: HeadlessOptions, out: &mut W) -> bool
where
    S: ContentService + Send + Sync + 'static,
    W: Write,
{
    engine.process_message(Message::SetTarget(options.target));
    engine.process_message(Message::SetCategory(options.category));
    engine.process_message(Message::SetFormat(options.format));
    engine.process_message(Message::SetUserPrompt {
        text: options.prompt,
    });

    HeadlessEvent::started(&engine.state.flyer).emit_to(out);
    engine.process_message(Message::Generate);

    loop {
        if engine.should_quit() {
            info!("Quit requested");
            HeadlessEvent::error("Interrumpido", None, true).emit_to(out);
            return false;
        }

        let Some(msg) = engine.msg_rx.recv().await else {
            warn!("Message channel closed");
            return false;
        };

        match msg {
            Message::GenerationStep(step) => {
                HeadlessEvent::step(step).emit_to(out);
                engine.process_message(msg);
            }
            Message::GenerationCompleted { .. } => {
                engine.process_message(msg);
                let Some(content) = engine.state.content() else {
                    return false;
                };
                HeadlessEvent::completed(content, engine.state.flyer.image_url.is_some())
                    .emit_to(out);

                if !options.export {
                    return true;
                }
                engine.process_message(Message::ExportFlyer);
            }
            Message::GenerationFailed { ref error } => {
                let detail = error.to_string();
                engine.process_message(msg);
                let message = engine.state.error.clone().unwrap_or_default();
                HeadlessEvent::error(message, Some(detail), true).emit_to(out);
                return false;
            }
            Message::ExportCompleted { ref files } => {
                HeadlessEvent::exported(files).emit_to(out);
                engine.process_message(msg);
                return true;
            }
            Message::ExportFailed { ref message } => {
                let detail = message.clone();
                engine.process_message(msg);
                let message = engine.state.status_message.clone().unwrap_or_default();
                HeadlessEvent::error(message, Some(detail), true).emit_to(out);
                return false;
            }
            other => engine.process_message(other),
        }
    }
}
