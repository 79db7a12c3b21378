//! Abstract input key event, independent of terminal library.
//!
//! Key handling in `handler::keys` works on `InputKey` so the reducer can be
//! driven from tests and headless mode without pulling in crossterm.

/// Abstract input key event, converted from crossterm at the TUI boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKey {
    /// Regular character key (letters, digits, symbols, accented letters)
    Char(char),
    /// Character with Ctrl modifier (Ctrl+c, Ctrl+u)
    CharCtrl(char),

    Up,
    Down,
    Left,
    Right,
    PageUp,
    PageDown,

    Enter,
    Esc,
    Tab,
    /// Shift+Tab
    BackTab,
    Backspace,
}

impl InputKey {
    /// Keys that always terminate the application
    pub fn is_force_quit(&self) -> bool {
        matches!(self, InputKey::CharCtrl('c'))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ctrl_c_is_force_quit() {
        assert!(InputKey::CharCtrl('c').is_force_quit());
        assert!(!InputKey::Char('c').is_force_quit());
        assert!(!InputKey::CharCtrl('u').is_force_quit());
    }

    #[test]
    fn test_accented_chars_are_distinct() {
        assert_ne!(InputKey::Char('a'), InputKey::Char('á'));
    }
}
