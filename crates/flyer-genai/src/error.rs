//! Structured errors for remote generation calls
//!
//! Callers branch on [`GenAiErrorKind`], never on message text. The only
//! place that inspects provider message strings is [`classify`].

use std::fmt;
use thiserror::Error;

/// Result alias for remote generation calls
pub type GenAiResult<T> = std::result::Result<T, GenAiError>;

/// Coarse classification of a failed remote call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenAiErrorKind {
    /// Quota or rate limit exhausted on the provider side
    Quota,
    /// Transport failure (DNS, TLS, connection reset, timeout)
    Http,
    /// Provider answered with a non-success status
    Api,
    /// Provider answered 200 but the envelope was unusable
    InvalidResponse,
    /// Structured output did not match the flyer schema
    Schema,
    /// Client misconfiguration (missing key, bad base URL)
    Config,
}

impl fmt::Display for GenAiErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            GenAiErrorKind::Quota => "quota exceeded",
            GenAiErrorKind::Http => "http error",
            GenAiErrorKind::Api => "api error",
            GenAiErrorKind::InvalidResponse => "invalid response",
            GenAiErrorKind::Schema => "schema mismatch",
            GenAiErrorKind::Config => "configuration error",
        };
        f.write_str(name)
    }
}

/// Error returned by every [`crate::ContentService`] operation
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("{kind}: {message}")]
pub struct GenAiError {
    pub kind: GenAiErrorKind,
    pub message: String,
}

impl GenAiError {
    pub fn new(kind: GenAiErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub fn quota(message: impl Into<String>) -> Self {
        Self::new(GenAiErrorKind::Quota, message)
    }

    pub fn http(message: impl Into<String>) -> Self {
        Self::new(GenAiErrorKind::Http, message)
    }

    pub fn invalid_response(message: impl Into<String>) -> Self {
        Self::new(GenAiErrorKind::InvalidResponse, message)
    }

    pub fn schema(message: impl Into<String>) -> Self {
        Self::new(GenAiErrorKind::Schema, message)
    }

    pub fn config(message: impl Into<String>) -> Self {
        Self::new(GenAiErrorKind::Config, message)
    }

    /// Build an error from a non-success HTTP answer
    pub fn from_status(status: u16, body: &str) -> Self {
        Self::new(classify(Some(status), body), format!("HTTP {status}: {body}"))
    }

    pub fn is_quota(&self) -> bool {
        self.kind == GenAiErrorKind::Quota
    }
}

impl From<reqwest::Error> for GenAiError {
    fn from(err: reqwest::Error) -> Self {
        let message = err.to_string();
        let kind = match classify(err.status().map(|s| s.as_u16()), &message) {
            GenAiErrorKind::Quota => GenAiErrorKind::Quota,
            _ => GenAiErrorKind::Http,
        };
        Self::new(kind, message)
    }
}

/// Map a provider status/message to an error kind
///
/// HTTP 429, `RESOURCE_EXHAUSTED` and any message mentioning "quota" are
/// treated as quota exhaustion.
pub fn classify(status: Option<u16>, message: &str) -> GenAiErrorKind {
    let lowered = message.to_lowercase();
    if status == Some(429) || lowered.contains("quota") || lowered.contains("resource_exhausted")
    {
        return GenAiErrorKind::Quota;
    }
    match status {
        Some(code) if !(200..300).contains(&code) => GenAiErrorKind::Api,
        _ => GenAiErrorKind::Http,
    }
}
