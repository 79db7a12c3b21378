//! flyer-app - Application state and orchestration for Flyer Studio
//!
//! This crate implements the TEA (The Elm Architecture) pattern:
//! - **Model**: [`AppState`]
//! - **Message**: [`Message`]
//! - **Update**: [`handler::update`]
//!
//! The [`Engine`] ties the loop to a [`flyer_genai::ContentService`] and is
//! shared by the terminal UI and headless runners.

pub mod actions;
pub mod carousel;
pub mod clipboard;
pub mod config;
pub mod confirm_dialog;
pub mod copy_feedback;
pub mod engine;
pub mod export;
pub mod handler;
pub mod input_key;
pub mod message;
pub mod orchestrator;
pub mod signals;
pub mod state;

pub use carousel::{build_slides, Carousel, Slide, SlideKind};
pub use copy_feedback::{CopyFeedback, CopyTarget, COPY_FEEDBACK_DURATION};
pub use engine::Engine;
pub use handler::{update, UpdateAction, UpdateResult};
pub use input_key::InputKey;
pub use message::Message;
pub use orchestrator::{generate, GeneratedFlyer};
pub use state::{AppState, FocusField, GenerationRequest, LoadingStep, UiMode};
