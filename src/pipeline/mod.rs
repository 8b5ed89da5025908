//! Request-scoped matching pipeline
//!
//! Sequences extraction, storage, normalization, ranking, and scanning
//! for one submission. Per-component failures degrade (empty anchor set,
//! skipped corpus) rather than aborting; only persistence and stopword
//! failures surface as errors, since ranking is useless without them.

use log::{debug, warn};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::config::MatchConfig;
use crate::error::MatchResult;
use crate::extractor::LinkExtractor;
use crate::keywords::url_keyword_findings;
use crate::ranker::{SimilarityResult, build_query_document, rank_corpora};
use crate::scanner::BrokenLinkScanner;
use crate::store::CorpusStore;
use crate::text::{coerce_text, normalize};

/// One inbound matching submission.
///
/// `description` and `field` arrive as raw JSON values; the form layer
/// has historically sent non-string payloads, so coercion happens here,
/// explicitly and logged. Presentation-only fields (`open_to`, `dr`)
/// are ignored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchRequest {
    /// Corpus key for this submission
    pub marketer_name: String,
    /// Page whose outbound links are profiled
    pub url: String,
    pub description: Value,
    /// Comma-separated category list
    pub field: Value,
}

/// Merged pipeline output for the presentation layer
#[derive(Debug, Clone, Serialize)]
pub struct MatchOutcome {
    /// Top-K `(corpus_name, score)` pairs, best first
    pub matches: Vec<SimilarityResult>,
    /// Broken-link report lines: count first, then broken links in
    /// probe order, then transport diagnostics
    pub broken_links: Vec<String>,
    /// Keyword-in-URL advisory lines, one per category token
    pub url_keywords: Vec<String>,
    /// Pipeline-level diagnostics accumulated during the run
    pub diagnostics: Vec<String>,
}

/// Owns the collaborating components for the lifetime of the process
pub struct MatchPipeline {
    config: MatchConfig,
    extractor: LinkExtractor,
    scanner: BrokenLinkScanner,
    store: CorpusStore,
}

impl MatchPipeline {
    /// Wire up extractor, scanner, and store from one configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if either HTTP client cannot be constructed.
    pub fn new(config: MatchConfig) -> anyhow::Result<Self> {
        let extractor = LinkExtractor::new(&config)?;
        let scanner = BrokenLinkScanner::new(&config)?;
        let store = CorpusStore::new(config.storage_dir());
        Ok(Self {
            config,
            extractor,
            scanner,
            store,
        })
    }

    /// Run the full pipeline for one submission.
    ///
    /// Extraction failure degrades to an empty anchor set; ranking and
    /// scanning still run over whatever partial data exists.
    ///
    /// # Errors
    ///
    /// Returns `MatchError::Persistence` if the submission cannot be
    /// saved, `MatchError::InvalidCorpusName` for an unusable marketer
    /// name, and `MatchError::ResourceUnavailable` if the stopword file
    /// cannot be read.
    pub async fn run(&self, request: &MatchRequest) -> MatchResult<MatchOutcome> {
        let mut diagnostics = Vec::new();

        let anchors = self.extractor.extract_links(&request.url).await;
        if anchors.is_empty() {
            diagnostics.push(format!("No links extracted from {}", request.url));
        }

        // A failed save must be visible: later ranking depends on all
        // corpora being present, this submission included.
        self.store
            .save_corpus(&request.marketer_name, &anchors)
            .await?;

        let description = coerce_text(&request.description);
        let categories = split_categories(&coerce_text(&request.field));
        let field_text = categories.join(" ");

        let query = normalize(
            &description,
            &field_text,
            self.config.stopwords_path(),
        )
        .await?;

        let corpora = self.store.load_all_corpora().await;
        debug!(
            target: "linkmatch::pipeline",
            "Ranking '{}' against {} stored corpora", request.marketer_name, corpora.len()
        );

        let extracted_titles: Vec<String> =
            anchors.iter().map(|record| record.title.clone()).collect();
        let query_document = build_query_document(&query, &extracted_titles);
        let matches = rank_corpora(&query_document, &corpora, self.config.top_k());

        // Independent of the ranking path; same anchors, no shared
        // mutable state.
        let report = self.scanner.scan(&anchors).await;
        if report.broken_count > 0 {
            warn!(
                target: "linkmatch::pipeline",
                "{} broken links on {}", report.broken_count, request.url
            );
        }

        let url_keywords = url_keyword_findings(&categories, &request.url);

        Ok(MatchOutcome {
            matches,
            broken_links: report.lines,
            url_keywords,
            diagnostics,
        })
    }
}

/// Split a comma-separated field string into trimmed category tokens
#[must_use]
pub fn split_categories(field: &str) -> Vec<String> {
    field
        .split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(str::to_string)
        .collect()
}
