//! Custom widget components

mod caption_panel;
mod confirm_dialog;
mod flyer_preview;
mod footer;
mod header;
pub mod modal_overlay;
mod options_panel;

pub use caption_panel::CaptionPanel;
pub use confirm_dialog::ConfirmDialog;
pub use flyer_preview::{image_size_estimate, EmptyHero, FlyerPreview};
pub use footer::Footer;
pub use header::MainHeader;
pub use options_panel::OptionsPanel;

// Re-export state types from app layer (these are used by render/)
pub use flyer_app::confirm_dialog::ConfirmDialogState;
