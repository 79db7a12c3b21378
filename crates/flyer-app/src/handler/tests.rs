//! Tests for the update function and key handling

use std::path::PathBuf;

use flyer_core::{Category, FlyerState, SocialFormat, TargetAudience};
use flyer_genai::test_utils::sample_content;
use flyer_genai::GenAiError;

use super::keys::handle_key;
use super::*;
use crate::copy_feedback::CopyTarget;
use crate::input_key::InputKey;
use crate::state::{
    AppState, FocusField, LoadingStep, UiMode, GENERIC_ERROR_MESSAGE, QUOTA_ERROR_MESSAGE,
};

fn state_with_flyer() -> AppState {
    let mut state = AppState::new();
    update(
        &mut state,
        Message::GenerationCompleted {
            content: sample_content(),
            image_url: Some("data:image/png;base64,AA".to_string()),
        },
    );
    state
}

/// Run a message and every follow-up message it produces
fn dispatch(state: &mut AppState, message: Message) -> Vec<UpdateAction> {
    let mut actions = Vec::new();
    let mut next = Some(message);
    while let Some(msg) = next {
        let result = update(state, msg);
        actions.extend(result.action);
        next = result.message;
    }
    actions
}

// ─────────────────────────────────────────────────────────
// Generation
// ─────────────────────────────────────────────────────────

#[test]
fn test_generate_starts_run_with_snapshot() {
    let mut state = AppState::new();
    state.flyer.target = TargetAudience::Parents;
    state.flyer.category = Category::Curiosity;
    state.flyer.user_prompt = "propinas".to_string();
    state.error = Some(GENERIC_ERROR_MESSAGE.to_string());

    let result = update(&mut state, Message::Generate);

    assert!(state.is_loading);
    assert!(state.error.is_none());
    assert_eq!(
        result.action,
        Some(UpdateAction::SpawnGeneration {
            request: GenerationRequest {
                target: TargetAudience::Parents,
                category: Category::Curiosity,
                user_prompt: "propinas".to_string(),
            }
        })
    );
}

#[test]
fn test_generate_ignored_while_loading() {
    let mut state = AppState::new();
    update(&mut state, Message::Generate);

    let result = update(&mut state, Message::Generate);

    assert!(result.action.is_none());
    assert!(state.is_loading);
}

#[test]
fn test_generation_steps_update_label() {
    let mut state = AppState::new();
    update(&mut state, Message::Generate);
    assert_eq!(state.loading_label(), "Cocinando magia...");

    update(&mut state, Message::GenerationStep(LoadingStep::Content));
    assert_eq!(state.loading_label(), "Escribiendo en argentino...");
}

#[test]
fn test_step_after_completion_is_ignored() {
    let mut state = state_with_flyer();
    update(&mut state, Message::GenerationStep(LoadingStep::Image));
    assert!(state.loading_step.is_none());
}

#[test]
fn test_completion_applies_content_and_image_together() {
    let mut state = AppState::new();
    update(&mut state, Message::Generate);
    update(&mut state, Message::GenerationStep(LoadingStep::Image));

    update(
        &mut state,
        Message::GenerationCompleted {
            content: sample_content(),
            image_url: None,
        },
    );

    assert!(!state.is_loading);
    assert!(state.loading_step.is_none());
    assert_eq!(state.flyer.content, Some(sample_content()));
    assert!(state.flyer.image_url.is_none());
    assert_eq!(state.slides().len(), 5);
}

#[test]
fn test_new_content_resets_slide_index() {
    let mut state = state_with_flyer();
    update(&mut state, Message::NextSlide);
    update(&mut state, Message::NextSlide);
    assert_eq!(state.carousel.current(), 2);

    update(&mut state, Message::Generate);
    update(
        &mut state,
        Message::GenerationCompleted {
            content: sample_content(),
            image_url: None,
        },
    );

    assert_eq!(state.carousel.current(), 0);
}

#[test]
fn test_quota_failure_message() {
    let mut state = AppState::new();
    update(&mut state, Message::Generate);

    update(
        &mut state,
        Message::GenerationFailed {
            error: GenAiError::quota("Quota exceeded for requests"),
        },
    );

    assert_eq!(state.error.as_deref(), Some(QUOTA_ERROR_MESSAGE));
    assert!(!state.is_loading);
    assert!(state.loading_step.is_none());
}

#[test]
fn test_generic_failure_keeps_previous_flyer() {
    let mut state = state_with_flyer();
    update(&mut state, Message::Generate);

    update(
        &mut state,
        Message::GenerationFailed {
            error: GenAiError::http("connection refused"),
        },
    );

    assert_eq!(state.error.as_deref(), Some(GENERIC_ERROR_MESSAGE));
    assert_eq!(state.flyer.content, Some(sample_content()));
}

#[test]
fn test_selections_change_during_loading_without_touching_content() {
    let mut state = state_with_flyer();
    update(&mut state, Message::Generate);

    update(&mut state, Message::SetFormat(SocialFormat::TikTok));
    update(&mut state, Message::SetTarget(TargetAudience::Parents));

    assert_eq!(state.flyer.format, SocialFormat::TikTok);
    assert_eq!(state.flyer.target, TargetAudience::Parents);
    assert_eq!(state.flyer.content, Some(sample_content()));
}

// ─────────────────────────────────────────────────────────
// Preview & Copy
// ─────────────────────────────────────────────────────────

#[test]
fn test_slide_navigation_wraps() {
    let mut state = state_with_flyer();
    update(&mut state, Message::PreviousSlide);
    assert_eq!(state.carousel.current(), 4);
    assert_eq!(state.current_slide().unwrap().title, "¡Sumate!");

    update(&mut state, Message::NextSlide);
    assert_eq!(state.current_slide().unwrap().title, "Ahorrá para tu consola");
}

#[test]
fn test_copy_hashtags_marks_feedback_and_emits_action() {
    let mut state = state_with_flyer();

    let result = update(&mut state, Message::Copy(CopyTarget::Hashtags));

    assert_eq!(
        result.action,
        Some(UpdateAction::CopyToClipboard {
            text: "#a #b #c #d #e".to_string()
        })
    );
    assert!(state.hashtags_copy.is_active());
    assert!(!state.caption_copy.is_active());
}

#[test]
fn test_copy_without_content_does_nothing() {
    let mut state = AppState::new();
    let result = update(&mut state, Message::Copy(CopyTarget::Caption));
    assert!(result.action.is_none());
    assert!(!state.caption_copy.is_active());
}

#[test]
fn test_tick_keeps_fresh_feedback() {
    let mut state = state_with_flyer();
    update(&mut state, Message::Copy(CopyTarget::Caption));
    update(&mut state, Message::Tick);
    assert!(state.caption_copy.is_active());
}

// ─────────────────────────────────────────────────────────
// Reset
// ─────────────────────────────────────────────────────────

#[test]
fn test_confirmed_reset_restores_defaults() {
    let mut state = state_with_flyer();
    state.flyer.target = TargetAudience::Parents;
    state.flyer.user_prompt = "algo".to_string();
    state.error = Some(GENERIC_ERROR_MESSAGE.to_string());

    update(&mut state, Message::RequestReset);
    assert_eq!(state.ui_mode, UiMode::ConfirmDialog);

    update(&mut state, Message::ConfirmReset);

    assert_eq!(state.ui_mode, UiMode::Normal);
    assert_eq!(state.flyer, FlyerState::default());
    assert!(state.error.is_none());
    assert!(state.slides().is_empty());
}

#[test]
fn test_cancelled_reset_changes_nothing() {
    let mut state = state_with_flyer();
    state.flyer.user_prompt = "algo".to_string();
    let before = state.flyer.clone();

    update(&mut state, Message::RequestReset);
    update(&mut state, Message::CancelReset);

    assert_eq!(state.ui_mode, UiMode::Normal);
    assert!(state.confirm_dialog_state.is_none());
    assert_eq!(state.flyer, before);
}

#[test]
fn test_completion_after_reset_still_applies() {
    let mut state = AppState::new();
    update(&mut state, Message::Generate);
    update(&mut state, Message::RequestReset);
    update(&mut state, Message::ConfirmReset);

    update(
        &mut state,
        Message::GenerationCompleted {
            content: sample_content(),
            image_url: None,
        },
    );

    assert!(state.flyer.has_flyer());
    assert!(!state.is_loading);
}

// ─────────────────────────────────────────────────────────
// Export
// ─────────────────────────────────────────────────────────

#[test]
fn test_export_without_flyer_sets_status() {
    let mut state = AppState::new();
    let result = update(&mut state, Message::ExportFlyer);
    assert!(result.action.is_none());
    assert_eq!(
        state.status_message.as_deref(),
        Some(update::NOTHING_TO_EXPORT)
    );
}

#[test]
fn test_export_uses_configured_dir() {
    let mut state = state_with_flyer();
    state.project_path = PathBuf::from("/work");

    let result = update(&mut state, Message::ExportFlyer);

    match result.action {
        Some(UpdateAction::ExportFlyer { dir, flyer }) => {
            assert_eq!(dir, PathBuf::from("/work/flyers"));
            assert!(flyer.has_flyer());
        }
        other => panic!("unexpected action {other:?}"),
    }
}

#[test]
fn test_export_completed_reports_directory() {
    let mut state = state_with_flyer();
    update(
        &mut state,
        Message::ExportCompleted {
            files: vec![PathBuf::from("flyers/a.json")],
        },
    );
    assert_eq!(
        state.status_message.as_deref(),
        Some("Diseño guardado en flyers")
    );
}

// ─────────────────────────────────────────────────────────
// Keys
// ─────────────────────────────────────────────────────────

#[test]
fn test_typing_edits_prompt() {
    let mut state = AppState::new();
    assert_eq!(state.focus, FocusField::Prompt);

    for c in "ahorro q".chars() {
        dispatch(&mut state, Message::Key(InputKey::Char(c)));
    }
    assert_eq!(state.flyer.user_prompt, "ahorro q");
    assert!(!state.should_quit());

    dispatch(&mut state, Message::Key(InputKey::Backspace));
    assert_eq!(state.flyer.user_prompt, "ahorro ");

    dispatch(&mut state, Message::Key(InputKey::CharCtrl('u')));
    assert!(state.flyer.user_prompt.is_empty());
}

#[test]
fn test_backspace_on_empty_prompt_is_noop() {
    let state = AppState::new();
    assert!(handle_key(&state, InputKey::Backspace).is_none());
}

#[test]
fn test_left_right_cycle_focused_picker() {
    let mut state = AppState::new();
    dispatch(&mut state, Message::Key(InputKey::Tab));
    assert_eq!(state.focus, FocusField::Target);

    dispatch(&mut state, Message::Key(InputKey::Right));
    assert_eq!(state.flyer.target, TargetAudience::Parents);

    dispatch(&mut state, Message::Key(InputKey::Tab));
    dispatch(&mut state, Message::Key(InputKey::Left));
    assert_eq!(state.flyer.category, Category::Curiosity);

    dispatch(&mut state, Message::Key(InputKey::Tab));
    dispatch(&mut state, Message::Key(InputKey::Right));
    assert_eq!(state.flyer.format, SocialFormat::Facebook);
}

#[test]
fn test_enter_generates_from_any_field() {
    let mut state = AppState::new();
    let actions = dispatch(&mut state, Message::Key(InputKey::Enter));
    assert!(matches!(
        actions.as_slice(),
        [UpdateAction::SpawnGeneration { .. }]
    ));
}

#[test]
fn test_q_quits_outside_prompt_only() {
    let mut state = AppState::new();
    dispatch(&mut state, Message::Key(InputKey::Char('q')));
    assert!(!state.should_quit());

    dispatch(&mut state, Message::Key(InputKey::Esc));
    assert_eq!(state.focus, FocusField::Target);
    dispatch(&mut state, Message::Key(InputKey::Char('q')));
    assert!(state.should_quit());
}

#[test]
fn test_ctrl_c_quits_everywhere() {
    let mut state = AppState::new();
    dispatch(&mut state, Message::Key(InputKey::CharCtrl('c')));
    assert!(state.should_quit());

    let mut state = AppState::new();
    dispatch(&mut state, Message::RequestReset);
    dispatch(&mut state, Message::Key(InputKey::CharCtrl('c')));
    assert!(state.should_quit());
}

#[test]
fn test_dialog_keys() {
    let mut state = state_with_flyer();
    state.focus = FocusField::Generate;

    dispatch(&mut state, Message::Key(InputKey::Char('r')));
    assert_eq!(state.ui_mode, UiMode::ConfirmDialog);
    dispatch(&mut state, Message::Key(InputKey::Char('n')));
    assert!(state.flyer.has_flyer());

    dispatch(&mut state, Message::Key(InputKey::Char('r')));
    dispatch(&mut state, Message::Key(InputKey::Char('s')));
    assert!(!state.flyer.has_flyer());
}

#[test]
fn test_preview_keys_on_generate_field() {
    let mut state = state_with_flyer();
    state.focus = FocusField::Generate;

    dispatch(&mut state, Message::Key(InputKey::Right));
    assert_eq!(state.carousel.current(), 1);
    dispatch(&mut state, Message::Key(InputKey::Char('p')));
    dispatch(&mut state, Message::Key(InputKey::Char('p')));
    assert_eq!(state.carousel.current(), 4);

    let actions = dispatch(&mut state, Message::Key(InputKey::Char('c')));
    assert_eq!(
        actions,
        vec![UpdateAction::CopyToClipboard {
            text: "...".to_string()
        }]
    );
}
