//! Engine - shared orchestration state for TUI and headless runners
//!
//! Owns the TEA state, the message channel and the content service. Both
//! runners feed it messages and render or report from `state`.

use std::path::PathBuf;
use std::sync::Arc;

use flyer_core::prelude::*;
use flyer_genai::ContentService;
use tokio::sync::mpsc;

use crate::actions::handle_action;
use crate::config::Settings;
use crate::handler;
use crate::message::Message;
use crate::signals;
use crate::state::AppState;

/// Capacity of the unified message channel
const MESSAGE_CHANNEL_CAPACITY: usize = 256;

/// Orchestration engine for Flyer Studio.
pub struct Engine<S> {
    /// TEA application state (the Model)
    pub state: AppState,

    /// Sender half of the unified message channel.
    /// Clone this to give to input sources (signal handler, generation tasks).
    pub msg_tx: mpsc::Sender<Message>,

    /// Receiver half of the unified message channel.
    pub msg_rx: mpsc::Receiver<Message>,

    service: Arc<S>,
}

impl<S> Engine<S>
where
    S: ContentService + Send + Sync + 'static,
{
    /// Create an engine and start listening for OS signals
    ///
    /// Must be called inside a tokio runtime.
    pub fn new(project_path: PathBuf, settings: Settings, service: S) -> Self {
        let state = AppState::with_settings(project_path, settings);
        let (msg_tx, msg_rx) = mpsc::channel::<Message>(MESSAGE_CHANNEL_CAPACITY);

        signals::spawn_signal_handler(msg_tx.clone());

        Self {
            state,
            msg_tx,
            msg_rx,
            service: Arc::new(service),
        }
    }

    /// Process a single message through the TEA update cycle,
    /// dispatching actions and following up messages until none remain.
    pub fn process_message(&mut self, msg: Message) {
        let mut next = Some(msg);
        while let Some(m) = next {
            let result = handler::update(&mut self.state, m);
            if let Some(action) = result.action {
                trace!("Dispatching action {:?}", action);
                handle_action(action, self.msg_tx.clone(), self.service.clone());
            }
            next = result.message;
        }
    }

    /// Drain and process all pending messages from the channel.
    ///
    /// Returns the number of messages processed.
    pub fn drain_pending_messages(&mut self) -> usize {
        let mut count = 0;
        while let Ok(msg) = self.msg_rx.try_recv() {
            self.process_message(msg);
            count += 1;
        }
        count
    }

    pub fn should_quit(&self) -> bool {
        self.state.should_quit()
    }
}
