//! Key event handlers for different UI modes

use flyer_core::{Category, SocialFormat, TargetAudience};

use crate::copy_feedback::CopyTarget;
use crate::input_key::InputKey;
use crate::message::Message;
use crate::state::{AppState, FocusField, UiMode};

/// Convert key events to messages based on current UI mode
pub fn handle_key(state: &AppState, key: InputKey) -> Option<Message> {
    if key.is_force_quit() {
        return Some(Message::Quit);
    }
    match state.ui_mode {
        UiMode::ConfirmDialog => handle_key_confirm_dialog(key),
        UiMode::Normal if state.focus == FocusField::Prompt => handle_key_prompt(state, key),
        UiMode::Normal => handle_key_normal(state, key),
    }
}

/// Handle key events while the reset confirmation is open
fn handle_key_confirm_dialog(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Char('s' | 'S' | 'y' | 'Y') | InputKey::Enter => Some(Message::ConfirmReset),
        InputKey::Char('n' | 'N') | InputKey::Esc => Some(Message::CancelReset),
        _ => None,
    }
}

/// Handle key events while typing the free-text request
fn handle_key_prompt(state: &AppState, key: InputKey) -> Option<Message> {
    match key {
        InputKey::Char(c) => {
            let mut text = state.flyer.user_prompt.clone();
            text.push(c);
            Some(Message::SetUserPrompt { text })
        }
        InputKey::Backspace => {
            let mut text = state.flyer.user_prompt.clone();
            text.pop()?;
            Some(Message::SetUserPrompt { text })
        }
        InputKey::CharCtrl('u') => Some(Message::SetUserPrompt {
            text: String::new(),
        }),

        InputKey::Enter => Some(Message::Generate),

        InputKey::Tab | InputKey::Down | InputKey::Esc => Some(Message::FocusNext),
        InputKey::BackTab | InputKey::Up => Some(Message::FocusPrevious),

        InputKey::PageDown => Some(Message::NextSlide),
        InputKey::PageUp => Some(Message::PreviousSlide),

        _ => None,
    }
}

/// Handle key events on the option pickers and the Generate button
fn handle_key_normal(state: &AppState, key: InputKey) -> Option<Message> {
    match key {
        InputKey::Char('q') | InputKey::Esc => Some(Message::Quit),

        InputKey::Tab | InputKey::Down | InputKey::Char('j') => Some(Message::FocusNext),
        InputKey::BackTab | InputKey::Up | InputKey::Char('k') => Some(Message::FocusPrevious),

        InputKey::Right | InputKey::Char('l') => cycle_focused(state, true),
        InputKey::Left | InputKey::Char('h') => cycle_focused(state, false),

        InputKey::Enter | InputKey::Char('g') => Some(Message::Generate),

        InputKey::Char('n') | InputKey::Char(']') | InputKey::PageDown => Some(Message::NextSlide),
        InputKey::Char('p') | InputKey::Char('[') | InputKey::PageUp => {
            Some(Message::PreviousSlide)
        }

        InputKey::Char('c') => Some(Message::Copy(CopyTarget::Caption)),
        InputKey::Char('t') => Some(Message::Copy(CopyTarget::Hashtags)),

        InputKey::Char('r') => Some(Message::RequestReset),
        InputKey::Char('e') => Some(Message::ExportFlyer),

        InputKey::Char('i') | InputKey::Char('/') => Some(Message::FocusPrompt),

        _ => None,
    }
}

/// Left/Right on a picker cycles its value; on Generate it moves the preview
fn cycle_focused(state: &AppState, forward: bool) -> Option<Message> {
    let flyer = &state.flyer;
    match state.focus {
        FocusField::Prompt => None,
        FocusField::Target => Some(Message::SetTarget(pick(
            flyer.target,
            forward,
            TargetAudience::next,
            TargetAudience::previous,
        ))),
        FocusField::Category => Some(Message::SetCategory(pick(
            flyer.category,
            forward,
            Category::next,
            Category::previous,
        ))),
        FocusField::Format => Some(Message::SetFormat(pick(
            flyer.format,
            forward,
            SocialFormat::next,
            SocialFormat::previous,
        ))),
        FocusField::Generate if forward => Some(Message::NextSlide),
        FocusField::Generate => Some(Message::PreviousSlide),
    }
}

fn pick<T>(value: T, forward: bool, next: fn(T) -> T, previous: fn(T) -> T) -> T {
    if forward {
        next(value)
    } else {
        previous(value)
    }
}
