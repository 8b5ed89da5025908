//! Getter methods for `MatchConfig`

use std::path::Path;

use super::types::MatchConfig;

impl MatchConfig {
    #[must_use]
    pub fn storage_dir(&self) -> &Path {
        &self.storage_dir
    }

    #[must_use]
    pub fn stopwords_path(&self) -> &Path {
        &self.stopwords_path
    }

    #[must_use]
    pub fn extractor_user_agent(&self) -> &str {
        &self.extractor_user_agent
    }

    #[must_use]
    pub fn scanner_user_agent(&self) -> &str {
        &self.scanner_user_agent
    }

    #[must_use]
    pub fn max_redirects(&self) -> usize {
        self.max_redirects
    }

    #[must_use]
    pub fn request_timeout_secs(&self) -> u64 {
        self.request_timeout_secs
    }

    #[must_use]
    pub fn top_k(&self) -> usize {
        self.top_k
    }

    #[must_use]
    pub fn max_probe_links(&self) -> Option<usize> {
        self.max_probe_links
    }
}
