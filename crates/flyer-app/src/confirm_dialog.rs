//! Confirm dialog state.
//!
//! Data model for yes/no confirmations. The rendering widget lives in
//! `flyer_tui::widgets::confirm_dialog`.

use crate::message::Message;

/// Prompt shown before discarding the current design
pub const RESET_PROMPT: &str = "¿Empezamos un diseño nuevo de cero?";

#[derive(Debug, Clone)]
pub struct ConfirmDialogState {
    pub title: String,
    pub message: String,
    /// Button labels paired with the message each one sends
    pub options: Vec<(String, Message)>,
}

impl ConfirmDialogState {
    /// Create a generic confirmation dialog
    pub fn new(
        title: impl Into<String>,
        message: impl Into<String>,
        options: Vec<(&str, Message)>,
    ) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
            options: options
                .into_iter()
                .map(|(label, msg)| (label.to_string(), msg))
                .collect(),
        }
    }

    /// Confirmation before replacing the design with a blank one
    pub fn reset_confirmation() -> Self {
        Self::new(
            "Nuevo Diseño",
            RESET_PROMPT,
            vec![
                ("(s) Sí, empezar", Message::ConfirmReset),
                ("(n) Cancelar", Message::CancelReset),
            ],
        )
    }
}
