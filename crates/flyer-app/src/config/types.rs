//! Configuration types

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Application settings (.flyer/config.toml)
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Settings {
    #[serde(default)]
    pub service: ServiceSettings,

    #[serde(default)]
    pub export: ExportSettings,

    #[serde(default)]
    pub ui: UiSettings,
}

/// Remote content service settings
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ServiceSettings {
    /// Root of the Generative Language REST API
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Model used for trend lookup and content
    #[serde(default = "default_text_model")]
    pub text_model: String,

    /// Model used for the illustration
    #[serde(default = "default_image_model")]
    pub image_model: String,

    /// Environment variable holding the API key
    #[serde(default = "default_api_key_env")]
    pub api_key_env: String,

    /// Per-request timeout in seconds; unset waits indefinitely
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,
}

impl Default for ServiceSettings {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            text_model: default_text_model(),
            image_model: default_image_model(),
            api_key_env: default_api_key_env(),
            timeout_secs: None,
        }
    }
}

fn default_base_url() -> String {
    flyer_genai::DEFAULT_BASE_URL.to_string()
}

fn default_text_model() -> String {
    flyer_genai::DEFAULT_TEXT_MODEL.to_string()
}

fn default_image_model() -> String {
    flyer_genai::DEFAULT_IMAGE_MODEL.to_string()
}

fn default_api_key_env() -> String {
    "API_KEY".to_string()
}

/// Export settings
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ExportSettings {
    /// Directory exported flyers are written to, relative to the working directory
    #[serde(default = "default_export_dir")]
    pub dir: PathBuf,
}

impl Default for ExportSettings {
    fn default() -> Self {
        Self {
            dir: default_export_dir(),
        }
    }
}

fn default_export_dir() -> PathBuf {
    PathBuf::from("flyers")
}

/// UI settings
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct UiSettings {
    /// Show the key hint bar in the footer
    #[serde(default = "default_true")]
    pub show_hints: bool,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self { show_hints: true }
    }
}

fn default_true() -> bool {
    true
}
