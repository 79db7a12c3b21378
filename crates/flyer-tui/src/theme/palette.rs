//! Color palette, taken from the Little Founders brand colors.

use ratatui::style::Color;

// --- Background layers ---
pub const DEEPEST_BG: Color = Color::Reset;
pub const CARD_BG: Color = Color::Rgb(255, 252, 248); // warm paper
pub const POPUP_BG: Color = Color::Rgb(40, 40, 50);

// --- Brand ---
pub const BRAND_ORANGE: Color = Color::Rgb(232, 107, 50);
pub const BRAND_BLUE: Color = Color::Rgb(42, 117, 160);
pub const BRAND_ORANGE_SOFT: Color = Color::Rgb(255, 237, 213);

// --- Borders ---
pub const BORDER_DIM: Color = Color::DarkGray;
pub const BORDER_ACTIVE: Color = BRAND_ORANGE;

// --- Text ---
pub const TEXT_PRIMARY: Color = Color::White;
pub const TEXT_SECONDARY: Color = Color::Gray;
pub const TEXT_MUTED: Color = Color::DarkGray;
pub const TEXT_ON_CARD: Color = Color::Rgb(55, 65, 81);
pub const CONTRAST_FG: Color = Color::Black;

// --- Status ---
pub const STATUS_GREEN: Color = Color::Green;
pub const STATUS_RED: Color = Color::Red;
pub const STATUS_YELLOW: Color = Color::Yellow;

// --- Effects ---
pub const SHADOW: Color = Color::Black;
