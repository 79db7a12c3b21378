//! Flyer Studio Library
//!
//! Entry points shared by the binary: the terminal UI and headless mode.

pub mod headless;

// Re-export main entry points
pub use flyer_tui::run;
pub use headless::{run_headless, HeadlessOptions};
