//! Main render/view function (View in TEA pattern)


use flyer_app::{AppState, UiMode};
use ratatui::style::Style;
use ratatui::widgets::Block;
use ratatui::Frame;

use super::{layout, widgets};
use crate::theme::palette;

/// Render the complete UI (View function in TEA)
///
/// Pure with respect to `state`: everything shown is derived from it.
pub fn view(frame: &mut Frame, state: &AppState) {
    let area = frame.area();

    let bg_block = Block::default().style(Style::default().bg(palette::DEEPEST_BG));
    frame.render_widget(bg_block, area);

    let areas = layout::create(area);

    frame.render_widget(
        widgets::MainHeader::new().loading(state.is_loading),
        areas.header,
    );
    frame.render_widget(widgets::OptionsPanel::new(state), areas.options);

    if state.content().is_some() {
        let (card_area, caption_area) = layout::split_preview(areas.preview);
        frame.render_widget(widgets::FlyerPreview::new(state), card_area);
        frame.render_widget(widgets::CaptionPanel::new(state), caption_area);
    } else {
        frame.render_widget(widgets::EmptyHero, areas.preview);
    }

    frame.render_widget(
        widgets::Footer::new(state.status_message.as_deref(), state.settings.ui.show_hints),
        areas.footer,
    );

    if state.ui_mode == UiMode::ConfirmDialog {
        if let Some(dialog) = &state.confirm_dialog_state {
            frame.render_widget(widgets::ConfirmDialog::new(dialog), area);
        }
    }
}
