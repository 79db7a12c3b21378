//! Generation orchestrator
//!
//! Runs the three remote steps of one flyer generation in order: trend
//! lookup, structured content, image. The trend step never fails the run;
//! the other two abort it.

use flyer_core::FlyerContent;
use flyer_core::prelude::*;
use flyer_genai::{ContentService, GenAiResult, TREND_FALLBACK};

use crate::state::{GenerationRequest, LoadingStep};

/// Result of a successful run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedFlyer {
    pub content: FlyerContent,
    /// Absent when the image model returned no inline image
    pub image_url: Option<String>,
}

/// Trend summary for the run, falling back when the lookup fails or is empty
async fn trends_or_fallback<S: ContentService>(service: &S, request: &GenerationRequest) -> String {
    match service.fetch_trends(request.target).await {
        Ok(trends) if !trends.trim().is_empty() => trends,
        Ok(_) => {
            warn!("Trend lookup returned no text, using fallback");
            TREND_FALLBACK.to_string()
        }
        Err(e) => {
            warn!("Trend lookup failed, using fallback: {}", e);
            TREND_FALLBACK.to_string()
        }
    }
}

/// Run one orchestration
///
/// `on_step` is called as each step starts. Content and image failures are
/// returned unchanged so the caller can classify them.
pub async fn generate<S, F>(
    service: &S,
    request: &GenerationRequest,
    mut on_step: F,
) -> GenAiResult<GeneratedFlyer>
where
    S: ContentService,
    F: FnMut(LoadingStep),
{
    info!(
        target_audience = request.target.key(),
        category = request.category.key(),
        "Starting flyer generation"
    );

    on_step(LoadingStep::Trends);
    let trends = trends_or_fallback(service, request).await;

    on_step(LoadingStep::Content);
    let content = service
        .generate_content(&request.content_request(trends))
        .await?;
    debug!("Generated content titled {:?}", content.title);

    on_step(LoadingStep::Image);
    let image_url = service.generate_image(&content, request.target).await?;
    if image_url.is_none() {
        info!("Image model returned no image, continuing without one");
    }

    Ok(GeneratedFlyer { content, image_url })
}
