//! Handler module - TEA update function and event handlers
//!
//! Organized into submodules:
//! - `update`: Main update() function and message dispatch
//! - `keys`: Key event handlers for UI modes

pub(crate) mod keys;
pub(crate) mod update;

#[cfg(test)]
mod tests;

use std::path::PathBuf;

use flyer_core::FlyerState;

use crate::message::Message;
use crate::state::GenerationRequest;

// Re-export main entry point
pub use update::update;

/// Actions that the event loop should perform after update
#[derive(Debug, Clone, PartialEq)]
pub enum UpdateAction {
    /// Run the orchestration in a background task
    SpawnGeneration { request: GenerationRequest },

    /// Put text on the terminal clipboard
    CopyToClipboard { text: String },

    /// Write the flyer to disk in a background task
    ExportFlyer { dir: PathBuf, flyer: FlyerState },
}

/// Result of processing a message
#[derive(Debug, Default)]
pub struct UpdateResult {
    /// Optional follow-up message to process
    pub message: Option<Message>,
    /// Optional action for the event loop to perform
    pub action: Option<UpdateAction>,
}

impl UpdateResult {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn message(msg: Message) -> Self {
        Self {
            message: Some(msg),
            action: None,
        }
    }

    pub fn action(action: UpdateAction) -> Self {
        Self {
            message: None,
            action: Some(action),
        }
    }
}
