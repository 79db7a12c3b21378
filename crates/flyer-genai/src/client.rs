//! Google Generative Language API client
//!
//! Implements [`ContentService`] over the REST `generateContent` endpoint:
//! grounded text for trends, schema-constrained JSON for the flyer copy and
//! inline image data for the illustration.

use std::time::Duration;

use flyer_core::{FlyerContent, TargetAudience};
use reqwest::Client;
use tracing::{debug, info, warn};
use url::Url;

use crate::error::{GenAiError, GenAiResult};
use crate::prompts;
use crate::protocol::{
    ErrorEnvelope, GenerateContentRequest, GenerateContentResponse, GenerationConfig, ImageConfig,
};
use crate::service::{image_data_uri, ContentRequest, ContentService};

pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_TEXT_MODEL: &str = "gemini-3-flash-preview";
pub const DEFAULT_IMAGE_MODEL: &str = "gemini-2.5-flash-image";

const API_KEY_HEADER: &str = "x-goog-api-key";

/// Connection settings for [`GeminiClient`]
#[derive(Debug, Clone)]
pub struct GeminiConfig {
    pub api_key: String,
    pub base_url: String,
    pub text_model: String,
    pub image_model: String,
    /// Per-request timeout; `None` waits indefinitely
    pub timeout: Option<Duration>,
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            base_url: DEFAULT_BASE_URL.to_string(),
            text_model: DEFAULT_TEXT_MODEL.to_string(),
            image_model: DEFAULT_IMAGE_MODEL.to_string(),
            timeout: None,
        }
    }
}

/// Gemini API client
#[derive(Debug, Clone)]
pub struct GeminiClient {
    config: GeminiConfig,
    client: Client,
    base_url: Url,
}

impl GeminiClient {
    /// Create a new client
    ///
    /// An empty API key is accepted here so the UI can start; every call
    /// then fails with a configuration error.
    pub fn new(config: GeminiConfig) -> GenAiResult<Self> {
        let base_url = Url::parse(config.base_url.trim_end_matches('/')).map_err(|e| {
            GenAiError::config(format!("invalid base url '{}': {}", config.base_url, e))
        })?;

        let mut builder = Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build()?;

        if config.api_key.is_empty() {
            warn!("Gemini client created without an API key");
        }

        Ok(Self {
            config,
            client,
            base_url,
        })
    }

    pub fn config(&self) -> &GeminiConfig {
        &self.config
    }

    fn endpoint(&self, model: &str) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.base_url.as_str().trim_end_matches('/'),
            model
        )
    }

    /// Send one `generateContent` request and decode the envelope
    async fn send(
        &self,
        model: &str,
        request: &GenerateContentRequest,
    ) -> GenAiResult<GenerateContentResponse> {
        if self.config.api_key.is_empty() {
            return Err(GenAiError::config("API key not configured"));
        }

        let url = self.endpoint(model);
        debug!("Sending generateContent request: {}", url);

        let response = self
            .client
            .post(&url)
            .header(API_KEY_HEADER, &self.config.api_key)
            .json(request)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        debug!("generateContent response status: {}", status);

        if !status.is_success() {
            let detail = serde_json::from_str::<ErrorEnvelope>(&body)
                .map(|env| match env.error.status {
                    Some(s) => format!("{} ({})", env.error.message, s),
                    None => env.error.message,
                })
                .unwrap_or(body);
            return Err(GenAiError::from_status(status.as_u16(), &detail));
        }

        let parsed: GenerateContentResponse = serde_json::from_str(&body).map_err(|e| {
            GenAiError::invalid_response(format!("failed to decode response envelope: {e}"))
        })?;

        if let Some(usage) = &parsed.usage_metadata {
            info!(
                "Gemini usage - Prompt: {:?} tokens, Response: {:?} tokens, Total: {:?} tokens",
                usage.prompt_token_count, usage.candidates_token_count, usage.total_token_count
            );
        }
        if let Some(reason) = parsed
            .prompt_feedback
            .as_ref()
            .and_then(|f| f.block_reason.as_deref())
        {
            warn!("Prompt blocked by provider: {}", reason);
        }

        Ok(parsed)
    }
}

/// Decode the structured-output text into flyer content
pub fn parse_flyer_content(text: &str) -> GenAiResult<FlyerContent> {
    serde_json::from_str(text.trim())
        .map_err(|e| GenAiError::schema(format!("content does not match flyer schema: {e}")))
}

impl ContentService for GeminiClient {
    async fn fetch_trends(&self, target: TargetAudience) -> GenAiResult<String> {
        info!("Fetching trends for {}", target.key());
        let request = GenerateContentRequest::from_prompt(prompts::trends_prompt(target))
            .with_google_search();

        let response = self.send(&self.config.text_model, &request).await?;
        response
            .text()
            .ok_or_else(|| GenAiError::invalid_response("trend lookup returned no text"))
    }

    async fn generate_content(&self, request: &ContentRequest) -> GenAiResult<FlyerContent> {
        info!(
            "Generating content for {} / {}",
            request.target.key(),
            request.category.key()
        );
        let body = GenerateContentRequest::from_prompt(prompts::content_prompt(
            request.target,
            request.category,
            &request.trends,
            &request.user_prompt,
        ))
        .with_generation_config(GenerationConfig {
            response_mime_type: Some("application/json".to_string()),
            response_schema: Some(prompts::flyer_response_schema()),
            image_config: None,
        });

        let response = self.send(&self.config.text_model, &body).await?;
        let text = response
            .text()
            .ok_or_else(|| GenAiError::schema("content response contained no text"))?;
        parse_flyer_content(&text)
    }

    async fn generate_image(
        &self,
        content: &FlyerContent,
        target: TargetAudience,
    ) -> GenAiResult<Option<String>> {
        info!("Generating image for '{}'", content.title);
        let request = GenerateContentRequest::from_prompt(prompts::image_prompt(content, target))
            .with_generation_config(GenerationConfig {
                image_config: Some(ImageConfig {
                    aspect_ratio: prompts::IMAGE_ASPECT_RATIO.to_string(),
                }),
                ..Default::default()
            });

        let response = self.send(&self.config.image_model, &request).await?;
        match response.inline_data() {
            Some(data) => Ok(Some(image_data_uri(&data.data))),
            None => {
                debug!("Image response carried no inline data");
                Ok(None)
            }
        }
    }
}
