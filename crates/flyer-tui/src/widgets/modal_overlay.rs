//! Shared modal overlay helpers: centering, background dimming, drop shadow.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;

use crate::theme::palette;

/// Center a fixed-size rect within an area, clamped to the area.
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let w = width.min(area.width);
    let h = height.min(area.height);
    Rect::new(
        area.x + area.width.saturating_sub(w) / 2,
        area.y + area.height.saturating_sub(h) / 2,
        w,
        h,
    )
}

/// Mute every cell of `area` so the modal stands out.
pub fn dim_background(buf: &mut Buffer, area: Rect) {
    let dim = Style::default().fg(palette::TEXT_MUTED);
    let area = area.intersection(buf.area);
    for y in area.top()..area.bottom() {
        for x in area.left()..area.right() {
            if let Some(cell) = buf.cell_mut((x, y)) {
                cell.set_style(dim);
            }
        }
    }
}

/// One-cell shadow along the right and bottom edges of `modal`.
pub fn render_shadow(buf: &mut Buffer, modal: Rect) {
    let shadow = Style::default().bg(palette::SHADOW);
    let right = modal.right();
    let bottom = modal.bottom();

    let edge = (modal.top() + 1..=bottom)
        .map(|y| (right, y))
        .chain((modal.left() + 1..right).map(|x| (x, bottom)));
    for pos in edge {
        if let Some(cell) = buf.cell_mut(pos) {
            cell.set_char(' ');
            cell.set_style(shadow);
        }
    }
}
