//! Error types for the matching pipeline
//!
//! Only failures that abort a request live here. Per-link fetch failures
//! and per-corpus schema problems are recovered where they occur and
//! surface as diagnostic strings, never as `Err`.

use thiserror::Error;

/// Result type alias for pipeline operations
pub type MatchResult<T> = Result<T, MatchError>;

/// Request-aborting error taxonomy
#[derive(Debug, Error)]
pub enum MatchError {
    /// Stopword resource missing or unreadable; ranking cannot proceed
    /// without normalization
    #[error("Stopword resource unavailable at '{path}': {message}")]
    ResourceUnavailable { path: String, message: String },

    /// Corpus could not be written; later ranking depends on the
    /// submission being present
    #[error("Failed to persist corpus '{name}': {message}")]
    Persistence { name: String, message: String },

    /// Marketer-supplied corpus key sanitized down to nothing
    #[error("Corpus name '{0}' does not yield a usable file name")]
    InvalidCorpusName(String),
}

impl MatchError {
    /// Whether the request can continue after this error.
    ///
    /// Always false for this enum; fetch and schema failures are handled
    /// before they ever become a `MatchError`.
    #[must_use]
    pub fn is_recoverable(&self) -> bool {
        false
    }
}
