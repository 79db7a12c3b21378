//! Brand header with the "new design" shortcut

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};
use unicode_width::UnicodeWidthStr;

use crate::theme::styles;

pub const BRAND: &str = "Little Founders";
pub const PRODUCT: &str = "FLYER STUDIO";
const SHORTCUT: &str = " Nuevo Diseño ";

/// Header showing the brand and the reset keybinding
#[derive(Default)]
pub struct MainHeader {
    loading: bool,
}

impl MainHeader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Show a busy marker while a generation runs
    pub fn loading(mut self, loading: bool) -> Self {
        self.loading = loading;
        self
    }
}

impl Widget for MainHeader {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(false);
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let mut title = vec![
            Span::styled(" ✦ ", styles::accent_bold()),
            Span::styled(BRAND, styles::brand_title()),
            Span::raw("  "),
            Span::styled(PRODUCT, styles::accent()),
        ];
        if self.loading {
            title.push(Span::styled("  ●", styles::accent()));
        }
        let title = Line::from(title);
        let title_width = title.width();
        Paragraph::new(title).render(inner, buf);

        // Drop the shortcut rather than overlap the brand on narrow terminals
        let shortcut_width = SHORTCUT.width() + 4;
        if title_width + shortcut_width > inner.width as usize {
            return;
        }

        let shortcut = Line::from(vec![
            Span::styled("[r]", styles::keybinding()),
            Span::styled(SHORTCUT, styles::text_secondary()),
        ]);
        Paragraph::new(shortcut)
            .alignment(Alignment::Right)
            .render(inner, buf);
    }
}
