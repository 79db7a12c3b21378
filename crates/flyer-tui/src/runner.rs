//! Main TUI runner - entry point and event loop

use std::path::PathBuf;

use flyer_app::config::Settings;
use flyer_app::Engine;
use flyer_core::Result;
use flyer_genai::ContentService;
use tracing::info;

use super::{event, render, terminal};

/// Run the terminal UI until the user quits
///
/// Must be called from a multi-threaded tokio runtime: terminal polling
/// blocks the current worker while generation tasks run on the others.
pub async fn run<S>(project_path: PathBuf, settings: Settings, service: S) -> Result<()>
where
    S: ContentService + Send + Sync + 'static,
{
    terminal::install_panic_hook();

    let mut engine = Engine::new(project_path, settings, service);
    info!("Flyer Studio starting");

    let mut term = ratatui::init();
    let result = run_loop(&mut term, &mut engine);
    ratatui::restore();

    info!("Flyer Studio exiting");
    result
}

fn run_loop<S>(terminal: &mut ratatui::DefaultTerminal, engine: &mut Engine<S>) -> Result<()>
where
    S: ContentService + Send + Sync + 'static,
{
    while !engine.should_quit() {
        // Generation steps, results and signals
        engine.drain_pending_messages();

        terminal.draw(|frame| render::view(frame, &engine.state))?;

        if let Some(message) = event::poll()? {
            engine.process_message(message);
        }
    }

    Ok(())
}
