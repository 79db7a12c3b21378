//! Left-hand options panel: prompt box, the three pickers and the
//! Generate trigger, with the error banner underneath.

use flyer_app::{AppState, FocusField};
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, BorderType, Paragraph, Widget, Wrap},
};

use crate::theme::styles;

pub const PANEL_TITLE: &str = "Configurá tu Flyer";
pub const PROMPT_LABEL: &str = "¿Qué querés que genere?";
pub const PROMPT_PLACEHOLDER: &str = "Ej: Un reto de ahorro de 30 días para comprarse una consola o tips para invertir las propinas...";
pub const GENERATE_LABEL: &str = "¡Generar ahora!";

const PROMPT_HEIGHT: u16 = 5;
const CURSOR: &str = "▏";

pub struct OptionsPanel<'a> {
    state: &'a AppState,
}

impl<'a> OptionsPanel<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }

    fn focused(&self, field: FocusField) -> bool {
        self.state.focus == field
    }

    fn render_prompt(&self, area: Rect, buf: &mut Buffer) {
        let focused = self.focused(FocusField::Prompt);
        let block = styles::glass_block(focused);
        let inner = block.inner(area);
        block.render(area, buf);

        let prompt = self.state.flyer.user_prompt.as_str();
        let line = if prompt.is_empty() {
            let mut spans = Vec::new();
            if focused {
                spans.push(Span::styled(CURSOR, styles::accent()));
            }
            spans.push(Span::styled(PROMPT_PLACEHOLDER, styles::text_muted()));
            Line::from(spans)
        } else {
            let mut spans = vec![Span::styled(prompt, styles::text_primary())];
            if focused {
                spans.push(Span::styled(CURSOR, styles::accent()));
            }
            Line::from(spans)
        };

        Paragraph::new(line)
            .wrap(Wrap { trim: false })
            .render(inner, buf);
    }

    fn render_picker(&self, area: Rect, buf: &mut Buffer, field: FocusField, value: &str) {
        let focused = self.focused(field);
        let (arrow_style, value_style) = if focused {
            (styles::accent_bold(), styles::selected_option())
        } else {
            (styles::text_muted(), styles::text_primary())
        };
        let line = Line::from(vec![
            Span::styled(if focused { "▸ " } else { "  " }, arrow_style),
            Span::styled("◀ ", arrow_style),
            Span::styled(value, value_style),
            Span::styled(" ▶", arrow_style),
        ]);
        Paragraph::new(line).render(area, buf);
    }

    fn render_generate(&self, area: Rect, buf: &mut Buffer) {
        let focused = self.focused(FocusField::Generate);
        let (label, style) = if self.state.is_loading {
            (self.state.loading_label(), styles::button_disabled())
        } else {
            (GENERATE_LABEL, styles::button())
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(if focused {
                styles::border_active()
            } else {
                styles::border_inactive()
            })
            .style(style);
        let inner = block.inner(area);
        block.render(area, buf);

        Paragraph::new(label)
            .style(style)
            .alignment(Alignment::Center)
            .render(inner, buf);
    }

    fn render_error(&self, area: Rect, buf: &mut Buffer) {
        if let Some(error) = &self.state.error {
            let line = Line::from(vec![
                Span::styled("⚠ ", styles::status_red()),
                Span::styled(error.as_str(), styles::status_red()),
            ]);
            Paragraph::new(line)
                .wrap(Wrap { trim: true })
                .render(area, buf);
        }
    }
}

impl Widget for OptionsPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(false);
        let inner = block.inner(area);
        block.render(area, buf);

        let rows = Layout::vertical([
            Constraint::Length(1),             // title
            Constraint::Length(1),             // spacer
            Constraint::Length(1),             // prompt label
            Constraint::Length(PROMPT_HEIGHT), // prompt box
            Constraint::Length(1),             // "1. Público"
            Constraint::Length(1),
            Constraint::Length(1),             // "2. Estilo"
            Constraint::Length(1),
            Constraint::Length(1),             // "3. Formato"
            Constraint::Length(1),
            Constraint::Length(1),             // spacer
            Constraint::Length(3),             // generate
            Constraint::Min(0),                // error
        ])
        .split(inner);

        Paragraph::new(Span::styled(PANEL_TITLE, styles::brand_title())).render(rows[0], buf);
        Paragraph::new(Span::styled(PROMPT_LABEL, styles::label())).render(rows[2], buf);
        self.render_prompt(rows[3], buf);

        let flyer = &self.state.flyer;
        let pickers = [
            ("1. Público", FocusField::Target, flyer.target.label()),
            ("2. Estilo", FocusField::Category, flyer.category.label()),
            ("3. Formato", FocusField::Format, flyer.format.label()),
        ];
        for (i, (label, field, value)) in pickers.into_iter().enumerate() {
            let label_row = rows[4 + i * 2];
            let value_row = rows[5 + i * 2];
            Paragraph::new(Span::styled(label, styles::label())).render(label_row, buf);
            self.render_picker(value_row, buf, field, value);
        }

        self.render_generate(rows[11], buf);

        let error_area = rows[12];
        if error_area.height > 0 {
            let padded = Rect {
                y: error_area.y + 1,
                height: error_area.height.saturating_sub(1),
                ..error_area
            };
            self.render_error(padded, buf);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;
    use flyer_core::{Category, SocialFormat};

    fn render(state: &AppState) -> TestTerminal {
        let mut term = TestTerminal::with_size(38, 32);
        term.render_widget(OptionsPanel::new(state), term.area());
        term
    }

    #[test]
    fn test_renders_sections_and_defaults() {
        let term = render(&AppState::new());

        assert!(term.buffer_contains(PANEL_TITLE));
        assert!(term.buffer_contains(PROMPT_LABEL));
        assert!(term.buffer_contains("1. Público"));
        assert!(term.buffer_contains("2. Estilo"));
        assert!(term.buffer_contains("3. Formato"));
        assert!(term.buffer_contains("Niños y Adolescentes"));
        assert!(term.buffer_contains("Consejo o Tip Financiero"));
        assert!(term.buffer_contains("Instagram (1:1)"));
        assert!(term.buffer_contains(GENERATE_LABEL));
    }

    #[test]
    fn test_placeholder_until_prompt_typed() {
        let mut state = AppState::new();
        assert!(render(&state).buffer_contains("Ej: Un reto de ahorro"));

        state.flyer.user_prompt = "ahorro para consola".to_string();
        let term = render(&state);
        assert!(term.buffer_contains("ahorro para consola"));
        assert!(!term.buffer_contains("Ej: Un reto"));
    }

    #[test]
    fn test_selection_changes_are_shown() {
        let mut state = AppState::new();
        state.flyer.category = Category::Challenge;
        state.flyer.format = SocialFormat::TikTok;

        let term = render(&state);
        assert!(term.buffer_contains("◀ Reto ▶"));
        assert!(term.buffer_contains("TikTok (9:16)"));
    }

    #[test]
    fn test_loading_label_replaces_button() {
        let mut state = AppState::new();
        state.is_loading = true;
        state.loading_step = Some(flyer_app::LoadingStep::Content);

        let term = render(&state);
        assert!(term.buffer_contains("Escribiendo en argentino..."));
        assert!(!term.buffer_contains(GENERATE_LABEL));
    }

    #[test]
    fn test_error_banner() {
        let mut state = AppState::new();
        state.error = Some("Hubo un error al generar.".to_string());

        let term = render(&state);
        assert!(term.buffer_contains("Hubo un error al generar."));
    }
}
