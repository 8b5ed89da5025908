//! SEO link-corpus matching engine
//!
//! Crawls a target page's outbound links, persists them as a named
//! corpus, and ranks previously stored corpora by TF-IDF cosine
//! similarity against the submission's free-text signals. A companion
//! broken-link scanner classifies the same anchors as live or dead.

pub mod backlinks;
pub mod config;
pub mod error;
pub mod extractor;
pub mod keywords;
pub mod pipeline;
pub mod ranker;
pub mod scanner;
pub mod store;
pub mod text;

pub use config::MatchConfig;
pub use error::{MatchError, MatchResult};
pub use extractor::{AnchorRecord, LinkExtractor, NO_TITLE};
pub use pipeline::{MatchOutcome, MatchPipeline, MatchRequest};
pub use ranker::SimilarityResult;
pub use scanner::{BrokenLinkReport, BrokenLinkScanner, is_probe_target};
pub use store::{CorpusStore, StoredCorpus};
pub use text::{NormalizedQuery, StopwordSet};
