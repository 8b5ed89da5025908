//! Fluent builder for `MatchConfig`
//!
//! Validation happens in `build()`: the storage directory is required and
//! normalized to an absolute path so every later path operation agrees on
//! where corpora live.

use anyhow::{Result, anyhow};
use std::path::PathBuf;

use super::types::MatchConfig;

#[derive(Debug, Default)]
pub struct MatchConfigBuilder {
    storage_dir: Option<PathBuf>,
    stopwords_path: Option<PathBuf>,
    extractor_user_agent: Option<String>,
    scanner_user_agent: Option<String>,
    max_redirects: Option<usize>,
    request_timeout_secs: Option<u64>,
    top_k: Option<usize>,
    max_probe_links: Option<usize>,
}

impl MatchConfigBuilder {
    #[must_use]
    pub fn storage_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.storage_dir = Some(dir.into());
        self
    }

    #[must_use]
    pub fn stopwords_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.stopwords_path = Some(path.into());
        self
    }

    #[must_use]
    pub fn extractor_user_agent(mut self, agent: impl Into<String>) -> Self {
        self.extractor_user_agent = Some(agent.into());
        self
    }

    #[must_use]
    pub fn scanner_user_agent(mut self, agent: impl Into<String>) -> Self {
        self.scanner_user_agent = Some(agent.into());
        self
    }

    #[must_use]
    pub fn max_redirects(mut self, limit: usize) -> Self {
        self.max_redirects = Some(limit);
        self
    }

    #[must_use]
    pub fn request_timeout_secs(mut self, secs: u64) -> Self {
        self.request_timeout_secs = Some(secs);
        self
    }

    #[must_use]
    pub fn top_k(mut self, k: usize) -> Self {
        self.top_k = Some(k);
        self
    }

    #[must_use]
    pub fn max_probe_links(mut self, cap: usize) -> Self {
        self.max_probe_links = Some(cap);
        self
    }

    /// Validate and build the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if `storage_dir` was not provided, or if it is
    /// relative and the current directory cannot be resolved.
    pub fn build(self) -> Result<MatchConfig> {
        let defaults = MatchConfig::default();

        let storage_dir = self
            .storage_dir
            .ok_or_else(|| anyhow!("storage_dir is required"))?;

        // Normalize to absolute (config invariant)
        let storage_dir = if storage_dir.is_absolute() {
            storage_dir
        } else {
            std::env::current_dir()
                .map_err(|e| anyhow!("Failed to resolve current directory: {e}"))?
                .join(storage_dir)
        };

        Ok(MatchConfig {
            storage_dir,
            stopwords_path: self.stopwords_path.unwrap_or(defaults.stopwords_path),
            extractor_user_agent: self
                .extractor_user_agent
                .unwrap_or(defaults.extractor_user_agent),
            scanner_user_agent: self
                .scanner_user_agent
                .unwrap_or(defaults.scanner_user_agent),
            max_redirects: self.max_redirects.unwrap_or(defaults.max_redirects),
            request_timeout_secs: self
                .request_timeout_secs
                .unwrap_or(defaults.request_timeout_secs),
            top_k: self.top_k.unwrap_or(defaults.top_k),
            max_probe_links: self.max_probe_links,
        })
    }
}
