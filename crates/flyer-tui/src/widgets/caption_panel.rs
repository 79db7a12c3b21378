//! Post text panel: caption, hashtags and their copy affordances

use flyer_app::copy_feedback::COPIED_LABEL;
use flyer_app::{AppState, CopyTarget};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};

use crate::theme::styles;

pub const PANEL_TITLE: &str = " Texto para el post ";

pub struct CaptionPanel<'a> {
    state: &'a AppState,
}

impl<'a> CaptionPanel<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }

    fn copy_button(&self, target: CopyTarget, key: &'static str) -> Vec<Span<'static>> {
        if self.state.copy_feedback(target).is_active() {
            vec![Span::styled(COPIED_LABEL, styles::status_green())]
        } else {
            vec![
                Span::styled(format!("[{key}] "), styles::keybinding()),
                Span::styled(target.label(), styles::text_secondary()),
            ]
        }
    }
}

impl Widget for CaptionPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let Some(content) = self.state.content() else {
            return;
        };

        let block = styles::glass_block(false).title(Span::styled(PANEL_TITLE, styles::label()));
        let inner = block.inner(area);
        block.render(area, buf);

        let rows = Layout::vertical([
            Constraint::Min(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(inner);

        Paragraph::new(content.caption.as_str())
            .style(styles::text_primary())
            .wrap(Wrap { trim: true })
            .render(rows[0], buf);

        Paragraph::new(Span::styled(content.hashtags_line(), styles::accent()))
            .render(rows[1], buf);

        let mut buttons = self.copy_button(CopyTarget::Caption, "c");
        buttons.push(Span::raw("   "));
        buttons.extend(self.copy_button(CopyTarget::Hashtags, "t"));
        Paragraph::new(Line::from(buttons)).render(rows[2], buf);
    }
}
