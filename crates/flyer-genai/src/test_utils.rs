//! Test utilities for content service consumers
//!
//! Provides a scripted [`ContentService`] double and sample content.

use std::sync::{Arc, Mutex};

use flyer_core::{FlyerContent, TargetAudience};

use crate::error::{GenAiError, GenAiResult};
use crate::service::{ContentRequest, ContentService};

/// A call observed by [`FakeContentService`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordedCall {
    Trends(TargetAudience),
    Content(ContentRequest),
    Image { title: String, target: TargetAudience },
}

/// Scripted content service
///
/// Each operation returns its configured result on every call. Calls are
/// recorded so tests can assert ordering and the arguments each step saw.
#[derive(Debug, Clone)]
pub struct FakeContentService {
    trends: GenAiResult<String>,
    content: GenAiResult<FlyerContent>,
    image: GenAiResult<Option<String>>,
    calls: Arc<Mutex<Vec<RecordedCall>>>,
}

impl Default for FakeContentService {
    fn default() -> Self {
        Self {
            trends: Ok("Retos de ahorro en TikTok".to_string()),
            content: Ok(sample_content()),
            image: Ok(Some(crate::service::image_data_uri("iVBORw0KGgo="))),
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }
}

impl FakeContentService {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_trends(mut self, trends: GenAiResult<String>) -> Self {
        self.trends = trends;
        self
    }

    pub fn with_content(mut self, content: GenAiResult<FlyerContent>) -> Self {
        self.content = content;
        self
    }

    pub fn with_image(mut self, image: GenAiResult<Option<String>>) -> Self {
        self.image = image;
        self
    }

    /// Snapshot of every call made so far, in order
    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().map(|c| c.clone()).unwrap_or_default()
    }

    fn record(&self, call: RecordedCall) {
        if let Ok(mut calls) = self.calls.lock() {
            calls.push(call);
        }
    }
}

impl ContentService for FakeContentService {
    async fn fetch_trends(&self, target: TargetAudience) -> GenAiResult<String> {
        self.record(RecordedCall::Trends(target));
        self.trends.clone()
    }

    async fn generate_content(&self, request: &ContentRequest) -> GenAiResult<FlyerContent> {
        self.record(RecordedCall::Content(request.clone()));
        self.content.clone()
    }

    async fn generate_image(
        &self,
        content: &FlyerContent,
        target: TargetAudience,
    ) -> GenAiResult<Option<String>> {
        self.record(RecordedCall::Image {
            title: content.title.clone(),
            target,
        });
        self.image.clone()
    }
}

/// Content matching the "ahorro para consola" walkthrough
pub fn sample_content() -> FlyerContent {
    FlyerContent {
        title: "Ahorrá para tu consola".to_string(),
        description: "...".to_string(),
        points: vec!["p1".to_string(), "p2".to_string(), "p3".to_string()],
        call_to_action: "Sumate ya".to_string(),
        hashtags: ["#a", "#b", "#c", "#d", "#e"]
            .iter()
            .map(|s| s.to_string())
            .collect(),
        caption: "...".to_string(),
    }
}

/// Shorthand for a failing result with a quota message
pub fn quota_error<T>() -> GenAiResult<T> {
    Err(GenAiError::quota("You exceeded your current quota"))
}
