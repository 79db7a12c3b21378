//! Transient "copied" confirmation for the caption and hashtag copy actions

use std::time::{Duration, Instant};

/// How long a copy confirmation stays visible
pub const COPY_FEEDBACK_DURATION: Duration = Duration::from_secs(2);

/// Label shown while a copy confirmation is active
pub const COPIED_LABEL: &str = "¡Copiado!";

/// What a copy action puts on the clipboard
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyTarget {
    /// The full caption text
    Caption,
    /// All hashtags joined by single spaces
    Hashtags,
}

impl CopyTarget {
    /// Idle label of the copy affordance
    pub fn label(&self) -> &'static str {
        match self {
            CopyTarget::Caption => "Copiar Texto",
            CopyTarget::Hashtags => "Copiar Hashtags",
        }
    }
}

/// Tracks when a copy happened; active for [`COPY_FEEDBACK_DURATION`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CopyFeedback {
    copied_at: Option<Instant>,
}

impl CopyFeedback {
    /// Record a copy at `now`, restarting the window if one is already open
    pub fn mark(&mut self, now: Instant) {
        self.copied_at = Some(now);
    }

    pub fn is_active(&self) -> bool {
        self.copied_at.is_some()
    }

    /// Drop the confirmation once its window has elapsed at `now`
    pub fn expire(&mut self, now: Instant) {
        if let Some(at) = self.copied_at {
            if now.saturating_duration_since(at) >= COPY_FEEDBACK_DURATION {
                self.copied_at = None;
            }
        }
    }

    pub fn clear(&mut self) {
        self.copied_at = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_feedback_lasts_two_seconds() {
        let start = Instant::now();
        let mut feedback = CopyFeedback::default();
        assert!(!feedback.is_active());

        feedback.mark(start);
        feedback.expire(start + Duration::from_millis(1999));
        assert!(feedback.is_active());

        feedback.expire(start + COPY_FEEDBACK_DURATION);
        assert!(!feedback.is_active());
    }

    #[test]
    fn test_mark_again_restarts_window() {
        let start = Instant::now();
        let mut feedback = CopyFeedback::default();
        feedback.mark(start);
        feedback.mark(start + Duration::from_millis(1500));

        feedback.expire(start + Duration::from_millis(2500));
        assert!(feedback.is_active());
    }

    #[test]
    fn test_expire_before_mark_is_noop() {
        let mut feedback = CopyFeedback::default();
        feedback.expire(Instant::now());
        assert!(!feedback.is_active());
    }
}
