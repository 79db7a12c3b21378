//! Confirmation dialog widget for the "new design" prompt

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Clear, Paragraph, Widget, Wrap},
};

use super::modal_overlay;
use crate::theme::styles;
pub use flyer_app::confirm_dialog::ConfirmDialogState;

const MODAL_WIDTH: u16 = 48;
const MODAL_HEIGHT: u16 = 8;

pub struct ConfirmDialog<'a> {
    state: &'a ConfirmDialogState,
}

impl<'a> ConfirmDialog<'a> {
    pub fn new(state: &'a ConfirmDialogState) -> Self {
        Self { state }
    }

    fn options_line(&self) -> Line<'a> {
        let mut spans = Vec::with_capacity(self.state.options.len() * 2);
        for (i, (label, _)) in self.state.options.iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw("   "));
            }
            let style = if i == 0 {
                styles::accent_bold()
            } else {
                styles::text_secondary()
            };
            spans.push(Span::styled(label.as_str(), style));
        }
        Line::from(spans)
    }
}

impl Widget for ConfirmDialog<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        modal_overlay::dim_background(buf, area);

        let modal = modal_overlay::centered_rect(MODAL_WIDTH, MODAL_HEIGHT, area);
        modal_overlay::render_shadow(buf, modal);
        Clear.render(modal, buf);

        let title = format!(" {} ", self.state.title);
        let block = styles::modal_block(&title).title_alignment(Alignment::Center);
        let inner = block.inner(modal);
        block.render(modal, buf);

        let chunks = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(2),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .split(inner);

        Paragraph::new(self.state.message.as_str())
            .style(styles::text_primary())
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .render(chunks[1], buf);

        Paragraph::new(self.options_line())
            .alignment(Alignment::Center)
            .render(chunks[3], buf);
    }
}
