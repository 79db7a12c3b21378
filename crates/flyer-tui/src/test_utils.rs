//! Test utilities for rendering verification
//!
//! Wraps ratatui's `TestBackend` so widget and full-frame tests can assert
//! on rendered text without a real terminal.

use flyer_app::AppState;
use flyer_core::FlyerContent;
use ratatui::backend::TestBackend;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::widgets::Widget;
use ratatui::Frame;
use ratatui::Terminal;

/// Default size, wide enough for the options panel next to a card
pub const TEST_WIDTH: u16 = 100;
pub const TEST_HEIGHT: u16 = 40;

/// In-memory terminal for widget tests
pub struct TestTerminal {
    pub terminal: Terminal<TestBackend>,
}

impl TestTerminal {
    pub fn new() -> Self {
        Self::with_size(TEST_WIDTH, TEST_HEIGHT)
    }

    pub fn with_size(width: u16, height: u16) -> Self {
        let backend = TestBackend::new(width, height);
        let terminal = Terminal::new(backend).expect("Failed to create test terminal");
        Self { terminal }
    }

    pub fn area(&self) -> Rect {
        let size = self.terminal.size().expect("Failed to get terminal size");
        Rect::new(0, 0, size.width, size.height)
    }

    pub fn render_widget<W: Widget>(&mut self, widget: W, area: Rect) {
        self.terminal
            .draw(|frame| frame.render_widget(widget, area))
            .expect("Failed to render widget");
    }

    /// Draw a full frame, e.g. `term.draw_with(|f| view(f, &state))`
    pub fn draw_with<F>(&mut self, f: F)
    where
        F: FnOnce(&mut Frame),
    {
        self.terminal.draw(f).expect("Failed to draw frame");
    }

    pub fn buffer(&self) -> &Buffer {
        self.terminal.backend().buffer()
    }

    pub fn buffer_contains(&self, text: &str) -> bool {
        self.content().contains(text)
    }

    pub fn line_contains(&self, line: u16, text: &str) -> bool {
        line_content(self.buffer(), line).contains(text)
    }

    /// Whole buffer as text, one line per row
    pub fn content(&self) -> String {
        let buffer = self.buffer();
        (0..buffer.area.height)
            .map(|y| line_content(buffer, y))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl Default for TestTerminal {
    fn default() -> Self {
        Self::new()
    }
}

fn line_content(buffer: &Buffer, line: u16) -> String {
    let mut result = String::new();
    if line < buffer.area.height {
        for x in 0..buffer.area.width {
            result.push_str(buffer[(x, line)].symbol());
        }
    }
    result
}

/// State with a generated flyer already applied
pub fn state_with_flyer(content: FlyerContent, image_url: Option<&str>) -> AppState {
    let mut state = AppState::new();
    state.apply_generated(content, image_url.map(str::to_string));
    state
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::widgets::Paragraph;

    #[test]
    fn test_custom_size() {
        let term = TestTerminal::with_size(30, 10);
        assert_eq!(term.area(), Rect::new(0, 0, 30, 10));
    }

    #[test]
    fn test_buffer_and_line_contains() {
        let mut term = TestTerminal::with_size(20, 3);
        term.render_widget(Paragraph::new("Ahorrá ya"), term.area());

        assert!(term.buffer_contains("Ahorrá ya"));
        assert!(term.line_contains(0, "Ahorrá"));
        assert!(!term.line_contains(1, "Ahorrá"));
        assert_eq!(term.content().lines().count(), 3);
    }
}
