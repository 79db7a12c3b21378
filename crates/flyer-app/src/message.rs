//! Message types for the application (TEA pattern)

use std::path::PathBuf;

use flyer_core::{Category, FlyerContent, SocialFormat, TargetAudience};
use flyer_genai::GenAiError;

use crate::copy_feedback::CopyTarget;
use crate::input_key::InputKey;
use crate::state::LoadingStep;

/// All possible messages/actions in the application
#[derive(Debug, Clone)]
pub enum Message {
    /// Keyboard event from terminal
    Key(InputKey),

    /// Tick event for periodic updates (copy feedback expiry)
    Tick,

    /// Quit immediately (q, Esc, Ctrl+C, signal handler)
    Quit,

    // ─────────────────────────────────────────────────────────
    // Option Pickers
    // ─────────────────────────────────────────────────────────
    SetTarget(TargetAudience),
    SetCategory(Category),
    SetFormat(SocialFormat),
    /// Replace the free-text request
    SetUserPrompt { text: String },

    /// Move focus to the next field of the options panel
    FocusNext,
    /// Move focus to the previous field of the options panel
    FocusPrevious,
    /// Jump straight to the free-text request
    FocusPrompt,

    // ─────────────────────────────────────────────────────────
    // Generation
    // ─────────────────────────────────────────────────────────
    /// Start an orchestration run from the current selections
    Generate,

    /// The running orchestration entered a new step
    GenerationStep(LoadingStep),

    /// The orchestration finished; content and image are applied together
    GenerationCompleted {
        content: FlyerContent,
        image_url: Option<String>,
    },

    /// The orchestration aborted at the content or image step
    GenerationFailed { error: GenAiError },

    // ─────────────────────────────────────────────────────────
    // Preview
    // ─────────────────────────────────────────────────────────
    NextSlide,
    PreviousSlide,

    /// Copy caption or hashtags to the clipboard
    Copy(CopyTarget),

    // ─────────────────────────────────────────────────────────
    // Reset
    // ─────────────────────────────────────────────────────────
    /// Ask before discarding the current design
    RequestReset,
    /// Discard the current design and selections
    ConfirmReset,
    /// Keep everything as it was
    CancelReset,

    // ─────────────────────────────────────────────────────────
    // Export
    // ─────────────────────────────────────────────────────────
    /// Write the current flyer to the export directory
    ExportFlyer,
    ExportCompleted { files: Vec<PathBuf> },
    ExportFailed { message: String },
}
