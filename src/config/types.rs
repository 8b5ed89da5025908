//! Core configuration types for the matching pipeline

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Default redirect bound for page fetches and link probes
pub const DEFAULT_MAX_REDIRECTS: usize = 3;

/// Default per-request timeout in seconds
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 15;

/// Default number of ranked matches to return
pub const DEFAULT_TOP_K: usize = 5;

/// Main configuration struct for matching pipeline runs
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchConfig {
    /// Directory holding one CSV file per stored corpus.
    ///
    /// **INVARIANT:** Always an absolute path (normalized in builder),
    /// so store reads and writes resolve identically regardless of the
    /// process working directory.
    pub(crate) storage_dir: PathBuf,

    /// Line-oriented stopword file, one word per line
    pub(crate) stopwords_path: PathBuf,

    /// User agent sent on page fetches by the link extractor
    pub(crate) extractor_user_agent: String,

    /// User agent sent on per-link probes by the broken-link scanner.
    /// Deliberately distinct from the extractor's.
    pub(crate) scanner_user_agent: String,

    /// Maximum redirects followed per request
    pub(crate) max_redirects: usize,

    /// Per-request timeout in seconds
    pub(crate) request_timeout_secs: u64,

    /// Number of ranked matches returned by the similarity ranker
    pub(crate) top_k: usize,

    /// Optional cap on the number of links probed per scan.
    ///
    /// Scan wall-clock cost is proportional to the candidate count, so
    /// callers serving untrusted pages should set this. `None` probes
    /// every candidate.
    pub(crate) max_probe_links: Option<usize>,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            storage_dir: PathBuf::from("./marketers"),
            stopwords_path: PathBuf::from("stopwords.txt"),
            extractor_user_agent: "Mozilla/5.0".to_string(),
            scanner_user_agent: "SEO Research Assistant Program".to_string(),
            max_redirects: DEFAULT_MAX_REDIRECTS,
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
            top_k: DEFAULT_TOP_K,
            max_probe_links: None,
        }
    }
}

impl MatchConfig {
    /// Start building a configuration
    #[must_use]
    pub fn builder() -> super::builder::MatchConfigBuilder {
        super::builder::MatchConfigBuilder::default()
    }
}
