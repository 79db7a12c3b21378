//! Footer line: status message, key hints, brand tagline

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::theme::styles;

pub const TAGLINE: &str = "Little Founders • Finanzas para el futuro";

const HINTS: &[(&str, &str)] = &[
    ("Tab", "campo"),
    ("←→", "opción"),
    ("Enter", "generar"),
    ("n/p", "diapositiva"),
    ("c/t", "copiar"),
    ("e", "descargar"),
    ("q", "salir"),
];

pub struct Footer<'a> {
    status: Option<&'a str>,
    show_hints: bool,
}

impl<'a> Footer<'a> {
    pub fn new(status: Option<&'a str>, show_hints: bool) -> Self {
        Self { status, show_hints }
    }
}

impl Widget for Footer<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 {
            return;
        }

        let left = match self.status {
            Some(status) => Line::from(Span::styled(format!(" {status}"), styles::accent())),
            None if self.show_hints => {
                let mut spans = vec![Span::raw(" ")];
                for (key, action) in HINTS {
                    spans.push(Span::styled(*key, styles::keybinding()));
                    spans.push(Span::styled(format!(" {action}  "), styles::text_muted()));
                }
                Line::from(spans)
            }
            None => Line::default(),
        };
        Paragraph::new(left).render(area, buf);

        if self.status.is_none() && !self.show_hints {
            Paragraph::new(Span::styled(TAGLINE, styles::text_muted()))
                .alignment(Alignment::Right)
                .render(area, buf);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;

    #[test]
    fn test_status_replaces_hints() {
        let mut term = TestTerminal::new();
        term.render_widget(
            Footer::new(Some("Diseño guardado en flyers"), true),
            Rect::new(0, 0, 80, 1),
        );
        assert!(term.buffer_contains("Diseño guardado en flyers"));
        assert!(!term.buffer_contains("generar"));
    }

    #[test]
    fn test_hints_shown_by_default() {
        let mut term = TestTerminal::new();
        term.render_widget(Footer::new(None, true), Rect::new(0, 0, 80, 1));
        assert!(term.buffer_contains("Enter generar"));
    }

    #[test]
    fn test_tagline_when_hints_disabled() {
        let mut term = TestTerminal::new();
        term.render_widget(Footer::new(None, false), Rect::new(0, 0, 80, 1));
        assert!(term.buffer_contains("Finanzas para el futuro"));
    }
}
