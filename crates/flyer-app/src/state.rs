//! Application state (Model in TEA pattern)

use std::path::PathBuf;

use flyer_core::{FlyerContent, FlyerState};
use flyer_genai::{ContentRequest, GenAiError};

use crate::carousel::{self, Carousel, Slide};
use crate::config::Settings;
use crate::confirm_dialog::ConfirmDialogState;
use crate::copy_feedback::{CopyFeedback, CopyTarget};

/// Shown when the service reports an exhausted quota
pub const QUOTA_ERROR_MESSAGE: &str =
    "Se alcanzó el límite de generación. Intentá de nuevo en un ratito.";

/// Shown for every other generation failure
pub const GENERIC_ERROR_MESSAGE: &str = "Hubo un error al generar. Porfa, probá otra vez.";

/// Loading label while no step has been reported yet
pub const DEFAULT_LOADING_LABEL: &str = "Cocinando magia...";

/// Current UI mode/screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UiMode {
    /// Options panel and preview
    #[default]
    Normal,

    /// Confirmation dialog (reset)
    ConfirmDialog,
}

/// Step of an orchestration run, in execution order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadingStep {
    Trends,
    Content,
    Image,
}

impl LoadingStep {
    pub fn label(&self) -> &'static str {
        match self {
            LoadingStep::Trends => "Mirando qué es tendencia...",
            LoadingStep::Content => "Escribiendo en argentino...",
            LoadingStep::Image => "Haciendo el dibujo...",
        }
    }

    /// Stable name used in headless events
    pub fn key(&self) -> &'static str {
        match self {
            LoadingStep::Trends => "trends",
            LoadingStep::Content => "content",
            LoadingStep::Image => "image",
        }
    }
}

/// Focusable fields of the options panel, in Tab order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FocusField {
    #[default]
    Prompt,
    Target,
    Category,
    Format,
    Generate,
}

impl FocusField {
    pub const ALL: [FocusField; 5] = [
        FocusField::Prompt,
        FocusField::Target,
        FocusField::Category,
        FocusField::Format,
        FocusField::Generate,
    ];

    fn position(self) -> usize {
        Self::ALL.iter().position(|f| *f == self).unwrap_or(0)
    }

    pub fn next(self) -> Self {
        Self::ALL[(self.position() + 1) % Self::ALL.len()]
    }

    pub fn previous(self) -> Self {
        Self::ALL[(self.position() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

/// Snapshot of the selections a run starts from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationRequest {
    pub target: flyer_core::TargetAudience,
    pub category: flyer_core::Category,
    pub user_prompt: String,
}

impl GenerationRequest {
    pub fn from_flyer(flyer: &FlyerState) -> Self {
        Self {
            target: flyer.target,
            category: flyer.category,
            user_prompt: flyer.user_prompt.clone(),
        }
    }

    /// Content call inputs once trends are known
    pub fn content_request(&self, trends: String) -> ContentRequest {
        ContentRequest {
            target: self.target,
            category: self.category,
            trends,
            user_prompt: self.user_prompt.clone(),
        }
    }
}

/// Map a failed run to the single message the user sees
pub fn user_error_message(error: &GenAiError) -> &'static str {
    if error.is_quota() {
        QUOTA_ERROR_MESSAGE
    } else {
        GENERIC_ERROR_MESSAGE
    }
}

/// Complete application state (the Model in TEA)
#[derive(Debug)]
pub struct AppState {
    /// Selections and the last generated flyer
    pub flyer: FlyerState,

    /// An orchestration run is in flight
    pub is_loading: bool,

    /// Step reported by the running orchestration
    pub loading_step: Option<LoadingStep>,

    /// User-facing error of the last failed run
    pub error: Option<String>,

    /// Preview position
    pub carousel: Carousel,

    pub caption_copy: CopyFeedback,
    pub hashtags_copy: CopyFeedback,

    /// Focused field of the options panel
    pub focus: FocusField,

    /// Current UI mode
    pub ui_mode: UiMode,

    /// Confirmation dialog state (when in ConfirmDialog mode)
    pub confirm_dialog_state: Option<ConfirmDialogState>,

    /// Footer status line (export results)
    pub status_message: Option<String>,

    /// Loaded settings
    pub settings: Settings,

    /// Directory the configuration was loaded from
    pub project_path: PathBuf,

    quit: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::with_settings(PathBuf::from("."), Settings::default())
    }

    pub fn with_settings(project_path: PathBuf, settings: Settings) -> Self {
        Self {
            flyer: FlyerState::default(),
            is_loading: false,
            loading_step: None,
            error: None,
            carousel: Carousel::default(),
            caption_copy: CopyFeedback::default(),
            hashtags_copy: CopyFeedback::default(),
            focus: FocusField::default(),
            ui_mode: UiMode::Normal,
            confirm_dialog_state: None,
            status_message: None,
            settings,
            project_path,
            quit: false,
        }
    }

    /// Label for the Generate trigger while a run is in flight
    pub fn loading_label(&self) -> &'static str {
        self.loading_step
            .map(|step| step.label())
            .unwrap_or(DEFAULT_LOADING_LABEL)
    }

    pub fn content(&self) -> Option<&FlyerContent> {
        self.flyer.content.as_ref()
    }

    /// Slides of the current flyer, empty when nothing was generated
    pub fn slides(&self) -> Vec<Slide> {
        self.content().map(carousel::build_slides).unwrap_or_default()
    }

    pub fn current_slide(&self) -> Option<Slide> {
        self.slides().into_iter().nth(self.carousel.current())
    }

    /// Hero image is shown only on the first slide
    pub fn hero_image(&self) -> Option<&str> {
        if self.carousel.is_first() {
            self.flyer.image_url.as_deref()
        } else {
            None
        }
    }

    /// Clipboard text for a copy target
    pub fn copy_text(&self, target: CopyTarget) -> Option<String> {
        let content = self.content()?;
        Some(match target {
            CopyTarget::Caption => content.caption.clone(),
            CopyTarget::Hashtags => content.hashtags_line(),
        })
    }

    pub fn copy_feedback(&self, target: CopyTarget) -> &CopyFeedback {
        match target {
            CopyTarget::Caption => &self.caption_copy,
            CopyTarget::Hashtags => &self.hashtags_copy,
        }
    }

    pub fn copy_feedback_mut(&mut self, target: CopyTarget) -> &mut CopyFeedback {
        match target {
            CopyTarget::Caption => &mut self.caption_copy,
            CopyTarget::Hashtags => &mut self.hashtags_copy,
        }
    }

    /// Apply a successful run: content and image land together, preview restarts
    pub fn apply_generated(&mut self, content: FlyerContent, image_url: Option<String>) {
        self.carousel.reset(carousel::slide_count(&content));
        self.flyer.content = Some(content);
        self.flyer.image_url = image_url;
        self.caption_copy.clear();
        self.hashtags_copy.clear();
    }

    /// Return to a blank design with default selections
    pub fn reset_design(&mut self) {
        self.flyer = FlyerState::default();
        self.error = None;
        self.carousel.reset(0);
        self.caption_copy.clear();
        self.hashtags_copy.clear();
        self.status_message = None;
    }

    pub fn show_confirm_dialog(&mut self, dialog: ConfirmDialogState) {
        self.confirm_dialog_state = Some(dialog);
        self.ui_mode = UiMode::ConfirmDialog;
    }

    pub fn hide_confirm_dialog(&mut self) {
        self.confirm_dialog_state = None;
        self.ui_mode = UiMode::Normal;
    }

    pub fn request_quit(&mut self) {
        self.quit = true;
    }

    pub fn should_quit(&self) -> bool {
        self.quit
    }
}
