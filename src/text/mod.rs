//! Free-text normalization against a stopword filter
//!
//! Foundation for similarity matching: description and field strings are
//! whitespace-split, lowercased, and stripped of stopwords before they
//! contribute to the query document. Token order is preserved so the
//! downstream text reconstruction stays faithful to the input.

use log::warn;
use serde_json::Value;
use std::collections::HashSet;
use std::path::Path;

use crate::error::{MatchError, MatchResult};

/// Case-folded stopword set loaded from a line-oriented file
#[derive(Debug, Clone)]
pub struct StopwordSet {
    words: HashSet<String>,
}

impl StopwordSet {
    /// Load stopwords from `path`, one word per line, trimmed and
    /// lowercased. Blank lines are ignored.
    ///
    /// # Errors
    ///
    /// Returns `MatchError::ResourceUnavailable` if the file cannot be
    /// read.
    pub async fn load(path: &Path) -> MatchResult<Self> {
        let contents =
            tokio::fs::read_to_string(path)
                .await
                .map_err(|e| MatchError::ResourceUnavailable {
                    path: path.display().to_string(),
                    message: e.to_string(),
                })?;

        let words = contents
            .lines()
            .map(|line| line.trim().to_lowercase())
            .filter(|word| !word.is_empty())
            .collect();

        Ok(Self { words })
    }

    /// Build a set directly from words (test seams and callers that
    /// already hold the list)
    #[must_use]
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            words: words
                .into_iter()
                .map(|w| w.as_ref().trim().to_lowercase())
                .collect(),
        }
    }

    /// Case-insensitive membership check
    #[must_use]
    pub fn contains(&self, token: &str) -> bool {
        self.words.contains(&token.to_lowercase())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

/// Stopword-filtered token sequences derived from one request.
/// Never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedQuery {
    /// Lowercased description tokens with stopwords removed, input order
    pub description: Vec<String>,
    /// Lowercased field/category tokens with stopwords removed, input order
    pub field: Vec<String>,
}

/// Coerce an arbitrary JSON value into text, logging when the input was
/// not already a string. This is the explicit replacement for the
/// silent `str()` fallback the form layer used to rely on.
#[must_use]
pub fn coerce_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => {
            warn!(target: "linkmatch::text", "Coercing null input to empty string");
            String::new()
        }
        Value::Array(items) => {
            warn!(
                target: "linkmatch::text",
                "Coercing array input ({} elements) to string", items.len()
            );
            items
                .iter()
                .map(coerce_text)
                .collect::<Vec<_>>()
                .join(" ")
        }
        other => {
            warn!(target: "linkmatch::text", "Coercing non-string input to string: {other}");
            other.to_string()
        }
    }
}

fn filter_tokens(text: &str, stopwords: &StopwordSet) -> Vec<String> {
    text.split_whitespace()
        .map(str::to_lowercase)
        .filter(|token| !stopwords.contains(token))
        .collect()
}

/// Strip stopwords from a description and a field string.
///
/// The stopword file is loaded fresh on every call; it is immutable for
/// the duration of use but never cached across requests.
///
/// # Errors
///
/// Returns `MatchError::ResourceUnavailable` if the stopword file cannot
/// be read.
pub async fn normalize(
    description: &str,
    field: &str,
    stopwords_path: &Path,
) -> MatchResult<NormalizedQuery> {
    let stopwords = StopwordSet::load(stopwords_path).await?;
    Ok(NormalizedQuery {
        description: filter_tokens(description, &stopwords),
        field: filter_tokens(field, &stopwords),
    })
}
