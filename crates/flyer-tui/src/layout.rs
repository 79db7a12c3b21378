//! Screen layout definitions for the TUI
//!
//! Options panel on the left, preview on the right, a one-row footer for
//! status and key hints.

use flyer_core::SocialFormat;
use ratatui::layout::{Constraint, Layout, Rect};

/// Width of the options panel, borders included
pub const OPTIONS_WIDTH: u16 = 38;

/// Height of the caption panel below the card
pub const CAPTION_HEIGHT: u16 = 8;

/// Terminal cells are roughly twice as tall as they are wide
const CELL_ASPECT: f32 = 2.0;

/// Pixels of the web card width represented by one column
const PX_PER_COLUMN: u16 = 10;

/// Screen areas for the main layout
#[derive(Debug, Clone, Copy)]
pub struct ScreenAreas {
    /// Brand header with the reset hint
    pub header: Rect,
    /// Prompt, pickers and the Generate button
    pub options: Rect,
    /// Flyer card and caption, or the empty-state hero
    pub preview: Rect,
    /// Status line and key hints
    pub footer: Rect,
}

/// Create the main screen layout
pub fn create(area: Rect) -> ScreenAreas {
    let rows = Layout::vertical([
        Constraint::Length(3),
        Constraint::Min(8),
        Constraint::Length(1),
    ])
    .split(area);

    let columns =
        Layout::horizontal([Constraint::Length(OPTIONS_WIDTH), Constraint::Min(20)]).split(rows[1]);

    ScreenAreas {
        header: rows[0],
        options: columns[0],
        preview: columns[1],
        footer: rows[2],
    }
}

/// Split the preview into card and caption areas
pub fn split_preview(area: Rect) -> (Rect, Rect) {
    let chunks =
        Layout::vertical([Constraint::Min(6), Constraint::Length(CAPTION_HEIGHT)]).split(area);
    (chunks[0], chunks[1])
}

/// Card rect for a social format, centered at the top of `area`
///
/// The card keeps the format's aspect ratio and is capped at the format's
/// maximum width; it shrinks to fit when the area is too small.
pub fn card_rect(area: Rect, format: SocialFormat) -> Rect {
    let ratio = format.aspect_ratio();
    let max_width = format.max_width_px() / PX_PER_COLUMN;

    let mut width = max_width.min(area.width);
    let mut height = rows_for(ratio.height_for(width));

    if height > area.height {
        height = area.height;
        let columns = (height as f32 * CELL_ASPECT * ratio.width / ratio.height).round() as u16;
        width = columns.min(area.width);
    }

    let x = area.x + area.width.saturating_sub(width) / 2;
    Rect::new(x, area.y, width, height)
}

fn rows_for(height_in_columns: u16) -> u16 {
    (height_in_columns as f32 / CELL_ASPECT).round() as u16
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_layout() {
        let layout = create(Rect::new(0, 0, 100, 30));

        assert_eq!(layout.header.height, 3);
        assert_eq!(layout.footer.height, 1);
        assert_eq!(layout.footer.y, 29);
        assert_eq!(layout.options.width, OPTIONS_WIDTH);
        assert_eq!(layout.preview.width, 100 - OPTIONS_WIDTH);
        assert_eq!(layout.options.height, 26);
    }

    #[test]
    fn test_card_width_capped_per_format() {
        let area = Rect::new(0, 0, 120, 100);

        assert_eq!(card_rect(area, SocialFormat::Instagram).width, 50);
        assert_eq!(card_rect(area, SocialFormat::Facebook).width, 60);
        assert_eq!(card_rect(area, SocialFormat::TikTok).width, 35);
    }

    #[test]
    fn test_card_keeps_aspect_ratio() {
        let area = Rect::new(0, 0, 120, 100);

        // 50 columns square -> 25 rows
        assert_eq!(card_rect(area, SocialFormat::Instagram).height, 25);
        // 35 columns at 9:16 -> 62 column-units tall -> 31 rows
        assert_eq!(card_rect(area, SocialFormat::TikTok).height, 31);
        assert!(
            card_rect(area, SocialFormat::Facebook).height
                < card_rect(area, SocialFormat::Instagram).height
        );
    }

    #[test]
    fn test_card_shrinks_to_fit_height() {
        let area = Rect::new(10, 5, 80, 16);
        let card = card_rect(area, SocialFormat::TikTok);

        assert_eq!(card.height, 16);
        // 16 rows * 2 * 9 / 16 = 18 columns
        assert_eq!(card.width, 18);
        assert_eq!(card.y, 5);
        assert_eq!(card.x, 10 + (80 - 18) / 2);
    }
}
