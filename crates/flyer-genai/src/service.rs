//! Remote content operations
//!
//! This module provides the ContentService trait the orchestrator drives.
//! The production implementation is [`crate::GeminiClient`]; tests use
//! `FakeContentService` from `test_utils`.

use flyer_core::{Category, FlyerContent, TargetAudience};

use crate::error::GenAiResult;

/// Trend summary used when the trend lookup fails or comes back empty
pub const TREND_FALLBACK: &str = "Enfoque educativo clásico sobre ahorro e inversión.";

/// Prefix of every image URI produced by the image step
pub const IMAGE_DATA_URI_PREFIX: &str = "data:image/png;base64,";

/// Inputs of the structured content call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentRequest {
    pub target: TargetAudience,
    pub category: Category,
    pub trends: String,
    pub user_prompt: String,
}

/// Wrap a base64 payload as a displayable PNG data URI
pub fn image_data_uri(base64_payload: &str) -> String {
    format!("{IMAGE_DATA_URI_PREFIX}{base64_payload}")
}

/// The three remote generation capabilities
#[trait_variant::make(ContentService: Send)]
pub trait LocalContentService {
    /// Free-text summary of what is trending for the audience
    async fn fetch_trends(&self, target: TargetAudience) -> GenAiResult<String>;

    /// Structured flyer copy validated against the flyer schema
    async fn generate_content(&self, request: &ContentRequest) -> GenAiResult<FlyerContent>;

    /// Hero illustration as a data URI; `Ok(None)` when the model returned no image
    async fn generate_image(
        &self,
        content: &FlyerContent,
        target: TargetAudience,
    ) -> GenAiResult<Option<String>>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_image_data_uri_prefix() {
        let uri = image_data_uri("AAAA");
        assert_eq!(uri, "data:image/png;base64,AAAA");
        assert!(uri.starts_with(IMAGE_DATA_URI_PREFIX));
    }
}
