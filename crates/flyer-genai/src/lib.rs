//! flyer-genai - Generative-AI content service for Flyer Studio
//!
//! Wraps the three remote capabilities the generator depends on (trend
//! lookup, structured content generation, image generation) behind the
//! [`ContentService`] trait, with a REST implementation for Google's
//! Generative Language API.

pub mod client;
pub mod error;
pub mod prompts;
pub mod protocol;
pub mod service;

#[cfg(any(test, feature = "test-helpers"))]
pub mod test_utils;

pub use client::{
    parse_flyer_content, GeminiClient, GeminiConfig, DEFAULT_BASE_URL, DEFAULT_IMAGE_MODEL,
    DEFAULT_TEXT_MODEL,
};
pub use error::{classify, GenAiError, GenAiErrorKind, GenAiResult};
pub use service::{
    image_data_uri, ContentRequest, ContentService, LocalContentService, IMAGE_DATA_URI_PREFIX,
    TREND_FALLBACK,
};
