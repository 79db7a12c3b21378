//! Settings parser for .flyer/config.toml

use std::path::Path;
use std::time::Duration;

use flyer_core::prelude::*;
use flyer_genai::GeminiConfig;

use super::types::{ServiceSettings, Settings};

pub const CONFIG_FILENAME: &str = "config.toml";
pub const FLYER_DIR: &str = ".flyer";

/// Consulted when the configured variable is unset or empty
pub const FALLBACK_API_KEY_ENV: &str = "GEMINI_API_KEY";

const DEFAULT_CONFIG: &str = r#"# Flyer Studio Configuration

[service]
base_url = "https://generativelanguage.googleapis.com/v1beta"
text_model = "gemini-3-flash-preview"
image_model = "gemini-2.5-flash-image"
# Environment variable holding the API key (GEMINI_API_KEY is tried next)
api_key_env = "API_KEY"
# timeout_secs = 60

[export]
dir = "flyers"

[ui]
show_hints = true
"#;

/// Load settings from .flyer/config.toml
///
/// Returns default settings if file doesn't exist or can't be parsed.
pub fn load_settings(project_path: &Path) -> Settings {
    let config_path = project_path.join(FLYER_DIR).join(CONFIG_FILENAME);

    if !config_path.exists() {
        debug!("No config file at {:?}, using defaults", config_path);
        return Settings::default();
    }

    match std::fs::read_to_string(&config_path) {
        Ok(content) => match toml::from_str(&content) {
            Ok(settings) => {
                debug!("Loaded settings from {:?}", config_path);
                settings
            }
            Err(e) => {
                warn!("Failed to parse {:?}: {}", config_path, e);
                Settings::default()
            }
        },
        Err(e) => {
            warn!("Failed to read {:?}: {}", config_path, e);
            Settings::default()
        }
    }
}

/// Create .flyer/config.toml with commented defaults if it is missing
pub fn init_config_dir(project_path: &Path) -> Result<()> {
    let flyer_dir = project_path.join(FLYER_DIR);

    if !flyer_dir.exists() {
        std::fs::create_dir_all(&flyer_dir)
            .map_err(|e| Error::config(format!("Failed to create .flyer dir: {}", e)))?;
        info!("Created .flyer directory");
    }

    let config_path = flyer_dir.join(CONFIG_FILENAME);
    if !config_path.exists() {
        std::fs::write(&config_path, DEFAULT_CONFIG)
            .map_err(|e| Error::config(format!("Failed to write config.toml: {}", e)))?;
    }

    Ok(())
}

fn non_empty_env(name: &str) -> Option<String> {
    std::env::var(name)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// API key from the configured variable, then [`FALLBACK_API_KEY_ENV`]
pub fn resolve_api_key(service: &ServiceSettings) -> Option<String> {
    non_empty_env(&service.api_key_env).or_else(|| non_empty_env(FALLBACK_API_KEY_ENV))
}

/// Client configuration for the service settings
///
/// A missing key is not an error here; calls fail when they are made.
pub fn to_gemini_config(service: &ServiceSettings) -> GeminiConfig {
    let api_key = resolve_api_key(service).unwrap_or_else(|| {
        warn!(
            "No API key found in ${} or ${}",
            service.api_key_env, FALLBACK_API_KEY_ENV
        );
        String::new()
    });

    GeminiConfig {
        api_key,
        base_url: service.base_url.clone(),
        text_model: service.text_model.clone(),
        image_model: service.image_model.clone(),
        timeout: service.timeout_secs.map(Duration::from_secs),
    }
}
