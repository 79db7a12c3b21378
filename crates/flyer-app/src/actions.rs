//! Action handlers: execute the side effects requested by `update()`

use std::sync::Arc;

use chrono::Local;
use flyer_core::prelude::*;
use flyer_genai::ContentService;
use tokio::sync::mpsc;

use crate::handler::UpdateAction;
use crate::message::Message;
use crate::state::GenerationRequest;
use crate::{clipboard, export, orchestrator};

/// Execute an action returned by the update function
pub fn handle_action<S>(action: UpdateAction, msg_tx: mpsc::Sender<Message>, service: Arc<S>)
where
    S: ContentService + Send + Sync + 'static,
{
    match action {
        UpdateAction::SpawnGeneration { request } => {
            spawn_generation(request, msg_tx, service);
        }

        UpdateAction::CopyToClipboard { text } => {
            if let Err(e) = clipboard::copy(&text) {
                warn!("Failed to write clipboard sequence: {}", e);
            }
        }

        UpdateAction::ExportFlyer { dir, flyer } => {
            tokio::spawn(async move {
                let result =
                    tokio::task::spawn_blocking(move || export::export_flyer(&dir, &flyer, Local::now()))
                        .await;
                let msg = match result {
                    Ok(Ok(files)) => Message::ExportCompleted { files },
                    Ok(Err(e)) => Message::ExportFailed {
                        message: e.to_string(),
                    },
                    Err(e) => Message::ExportFailed {
                        message: format!("export task failed: {}", e),
                    },
                };
                let _ = msg_tx.send(msg).await;
            });
        }
    }
}

/// Run one orchestration in the background, reporting through `msg_tx`
pub fn spawn_generation<S>(
    request: GenerationRequest,
    msg_tx: mpsc::Sender<Message>,
    service: Arc<S>,
) -> tokio::task::JoinHandle<()>
where
    S: ContentService + Send + Sync + 'static,
{
    tokio::spawn(async move {
        let step_tx = msg_tx.clone();
        let result = orchestrator::generate(service.as_ref(), &request, |step| {
            if let Err(e) = step_tx.try_send(Message::GenerationStep(step)) {
                debug!("Dropped step update: {}", e);
            }
        })
        .await;

        let msg = match result {
            Ok(flyer) => Message::GenerationCompleted {
                content: flyer.content,
                image_url: flyer.image_url,
            },
            Err(error) => Message::GenerationFailed { error },
        };

        if msg_tx.send(msg).await.is_err() {
            warn!("Generation finished after the message channel closed");
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::LoadingStep;
    use flyer_core::{Category, TargetAudience};
    use flyer_genai::test_utils::{quota_error, FakeContentService};

    fn request() -> GenerationRequest {
        GenerationRequest {
            target: TargetAudience::Kids,
            category: Category::Tip,
            user_prompt: String::new(),
        }
    }

    async fn collect(mut rx: mpsc::Receiver<Message>) -> Vec<Message> {
        let mut messages = Vec::new();
        while let Some(msg) = rx.recv().await {
            messages.push(msg);
        }
        messages
    }

    #[tokio::test]
    async fn test_spawn_generation_reports_steps_then_completion() {
        let (tx, rx) = mpsc::channel(16);
        let service = Arc::new(FakeContentService::new());

        spawn_generation(request(), tx, service).await.unwrap();
        let messages = collect(rx).await;

        let steps: Vec<LoadingStep> = messages
            .iter()
            .filter_map(|m| match m {
                Message::GenerationStep(step) => Some(*step),
                _ => None,
            })
            .collect();
        assert_eq!(
            steps,
            vec![LoadingStep::Trends, LoadingStep::Content, LoadingStep::Image]
        );
        assert!(matches!(
            messages.last(),
            Some(Message::GenerationCompleted { .. })
        ));
    }

    #[tokio::test]
    async fn test_spawn_generation_reports_failure() {
        let (tx, rx) = mpsc::channel(16);
        let service = Arc::new(FakeContentService::new().with_image(quota_error()));

        spawn_generation(request(), tx, service).await.unwrap();
        let messages = collect(rx).await;

        match messages.last() {
            Some(Message::GenerationFailed { error }) => assert!(error.is_quota()),
            other => panic!("unexpected last message {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_export_action_reports_files() {
        let temp = tempfile::tempdir().unwrap();
        let (tx, mut rx) = mpsc::channel(4);
        let flyer = flyer_core::FlyerState {
            content: Some(flyer_genai::test_utils::sample_content()),
            ..Default::default()
        };

        handle_action(
            UpdateAction::ExportFlyer {
                dir: temp.path().to_path_buf(),
                flyer,
            },
            tx,
            Arc::new(FakeContentService::new()),
        );

        match rx.recv().await {
            Some(Message::ExportCompleted { files }) => assert_eq!(files.len(), 2),
            other => panic!("unexpected message {other:?}"),
        }
    }
}
