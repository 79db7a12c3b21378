//! Configuration file parsing for Flyer Studio
//!
//! Supports `.flyer/config.toml` in the working directory.

pub mod settings;
pub mod types;

pub use settings::{
    init_config_dir, load_settings, resolve_api_key, to_gemini_config, CONFIG_FILENAME,
    FALLBACK_API_KEY_ENV, FLYER_DIR,
};
pub use types::*;
