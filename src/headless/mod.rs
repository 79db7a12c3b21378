//! Headless mode - NDJSON event output for scripted runs
//!
//! Runs a single generation without the TUI and reports progress as
//! newline-delimited JSON on stdout, one event per line:
//!
//! ```json
//! {"event":"started","target":"kids","category":"challenge","format":"tiktok","timestamp":1704700001000}
//! {"event":"step","step":"trends","label":"Mirando qué es tendencia...","timestamp":1704700001001}
//! {"event":"completed","title":"Ahorrá para tu consola","slides":5,"hashtags":["#ahorro"],"has_image":true,"timestamp":1704700009000}
//! ```

pub mod runner;

use std::io::Write;

use chrono::Utc;
use flyer_app::LoadingStep;
use flyer_core::{FlyerContent, FlyerState};
use serde::Serialize;
use tracing::error;

pub use runner::{run_headless, HeadlessOptions};

/// Events emitted in headless mode
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum HeadlessEvent {
    /// Run accepted with these selections
    Started {
        target: String,
        category: String,
        format: String,
        timestamp: i64,
    },

    /// Orchestration entered a step
    Step {
        step: String,
        label: String,
        timestamp: i64,
    },

    /// Flyer generated
    Completed {
        title: String,
        slides: usize,
        hashtags: Vec<String>,
        has_image: bool,
        timestamp: i64,
    },

    /// Flyer written to disk
    Exported { files: Vec<String>, timestamp: i64 },

    /// Run failed; `message` is what the TUI would show
    Error {
        message: String,
        detail: Option<String>,
        fatal: bool,
        timestamp: i64,
    },
}

impl HeadlessEvent {
    /// Write this event as one JSON line and flush
    pub fn emit_to<W: Write>(&self, out: &mut W) {
        let json = match serde_json::to_string(self) {
            Ok(json) => json,
            Err(e) => {
                error!("Failed to serialize headless event: {}", e);
                return;
            }
        };

        if let Err(e) = writeln!(out, "{}", json).and_then(|_| out.flush()) {
            error!("Failed to write headless event: {}", e);
        }
    }

    fn now() -> i64 {
        Utc::now().timestamp_millis()
    }

    pub fn started(flyer: &FlyerState) -> Self {
        Self::Started {
            target: flyer.target.key().to_string(),
            category: flyer.category.key().to_string(),
            format: flyer.format.key().to_string(),
            timestamp: Self::now(),
        }
    }

    pub fn step(step: LoadingStep) -> Self {
        Self::Step {
            step: step.key().to_string(),
            label: step.label().to_string(),
            timestamp: Self::now(),
        }
    }

    pub fn completed(content: &FlyerContent, has_image: bool) -> Self {
        Self::Completed {
            title: content.title.clone(),
            slides: flyer_app::carousel::slide_count(content),
            hashtags: content.hashtags.clone(),
            has_image,
            timestamp: Self::now(),
        }
    }

    pub fn exported(files: &[std::path::PathBuf]) -> Self {
        Self::Exported {
            files: files.iter().map(|f| f.display().to_string()).collect(),
            timestamp: Self::now(),
        }
    }

    pub fn error(message: impl Into<String>, detail: Option<String>, fatal: bool) -> Self {
        Self::Error {
            message: message.into(),
            detail,
            fatal,
            timestamp: Self::now(),
        }
    }
}
