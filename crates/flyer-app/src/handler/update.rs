//! Main update function - handles state transitions (TEA pattern)

use std::time::Instant;

use flyer_core::prelude::*;

use super::{keys, UpdateAction, UpdateResult};
use crate::confirm_dialog::ConfirmDialogState;
use crate::copy_feedback::CopyTarget;
use crate::message::Message;
use crate::state::{user_error_message, AppState, FocusField, GenerationRequest};

/// Status line when there is nothing to export yet
pub const NOTHING_TO_EXPORT: &str = "Todavía no hay un diseño para descargar.";

/// Process a message and update state
/// Returns an optional action for the event loop to execute
pub fn update(state: &mut AppState, message: Message) -> UpdateResult {
    match message {
        Message::Key(key) => match keys::handle_key(state, key) {
            Some(msg) => UpdateResult::message(msg),
            None => UpdateResult::none(),
        },

        Message::Tick => {
            let now = Instant::now();
            state.caption_copy.expire(now);
            state.hashtags_copy.expire(now);
            UpdateResult::none()
        }

        Message::Quit => {
            state.request_quit();
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Option Pickers
        // ─────────────────────────────────────────────────────────
        Message::SetTarget(target) => {
            state.flyer.target = target;
            UpdateResult::none()
        }
        Message::SetCategory(category) => {
            state.flyer.category = category;
            UpdateResult::none()
        }
        Message::SetFormat(format) => {
            state.flyer.format = format;
            UpdateResult::none()
        }
        Message::SetUserPrompt { text } => {
            state.flyer.user_prompt = text;
            UpdateResult::none()
        }
        Message::FocusNext => {
            state.focus = state.focus.next();
            UpdateResult::none()
        }
        Message::FocusPrevious => {
            state.focus = state.focus.previous();
            UpdateResult::none()
        }
        Message::FocusPrompt => {
            state.focus = FocusField::Prompt;
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Generation
        // ─────────────────────────────────────────────────────────
        Message::Generate => {
            if state.is_loading {
                debug!("Generate ignored, a run is already in flight");
                return UpdateResult::none();
            }
            state.is_loading = true;
            state.loading_step = None;
            state.error = None;
            UpdateResult::action(UpdateAction::SpawnGeneration {
                request: GenerationRequest::from_flyer(&state.flyer),
            })
        }

        Message::GenerationStep(step) => {
            if state.is_loading {
                state.loading_step = Some(step);
            }
            UpdateResult::none()
        }

        Message::GenerationCompleted { content, image_url } => {
            info!("Flyer generated: {:?}", content.title);
            state.apply_generated(content, image_url);
            state.is_loading = false;
            state.loading_step = None;
            UpdateResult::none()
        }

        Message::GenerationFailed { error } => {
            warn!("Flyer generation failed: {}", error);
            state.error = Some(user_error_message(&error).to_string());
            state.is_loading = false;
            state.loading_step = None;
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Preview
        // ─────────────────────────────────────────────────────────
        Message::NextSlide => {
            state.carousel.next();
            UpdateResult::none()
        }
        Message::PreviousSlide => {
            state.carousel.previous();
            UpdateResult::none()
        }

        Message::Copy(target) => handle_copy(state, target),

        // ─────────────────────────────────────────────────────────
        // Reset
        // ─────────────────────────────────────────────────────────
        Message::RequestReset => {
            state.show_confirm_dialog(ConfirmDialogState::reset_confirmation());
            UpdateResult::none()
        }
        Message::ConfirmReset => {
            state.hide_confirm_dialog();
            state.reset_design();
            info!("Design reset to defaults");
            UpdateResult::none()
        }
        Message::CancelReset => {
            state.hide_confirm_dialog();
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Export
        // ─────────────────────────────────────────────────────────
        Message::ExportFlyer => {
            if !state.flyer.has_flyer() {
                state.status_message = Some(NOTHING_TO_EXPORT.to_string());
                return UpdateResult::none();
            }
            UpdateResult::action(UpdateAction::ExportFlyer {
                dir: state.project_path.join(&state.settings.export.dir),
                flyer: state.flyer.clone(),
            })
        }
        Message::ExportCompleted { files } => {
            state.status_message = Some(match files.first().and_then(|f| f.parent()) {
                Some(dir) => format!("Diseño guardado en {}", dir.display()),
                None => "Diseño guardado".to_string(),
            });
            UpdateResult::none()
        }
        Message::ExportFailed { message } => {
            error!("Export failed: {}", message);
            state.status_message = Some(format!("No se pudo guardar el diseño: {}", message));
            UpdateResult::none()
        }
    }
}

fn handle_copy(state: &mut AppState, target: CopyTarget) -> UpdateResult {
    let Some(text) = state.copy_text(target) else {
        return UpdateResult::none();
    };
    state.copy_feedback_mut(target).mark(Instant::now());
    UpdateResult::action(UpdateAction::CopyToClipboard { text })
}
