//! Link extraction from a fetched page
//!
//! Fetches a URL and turns every `a[href]` element into a structured
//! `AnchorRecord`. Extraction is deliberately infallible: a page that
//! cannot be fetched yields an empty record set with a logged warning,
//! and the caller proceeds with no links rather than aborting the whole
//! pipeline.

use anyhow::{Result, anyhow};
use log::{debug, warn};
use reqwest::{Client, redirect};
use scraper::{Html, Selector};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use url::Url;

use crate::config::MatchConfig;

/// Display text recorded for anchors with no visible text
pub const NO_TITLE: &str = "No Title";

/// One anchor found on a fetched page. Immutable once created.
///
/// Field names match the corpus CSV columns (`website,title,link`) so the
/// same struct serializes straight into storage rows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnchorRecord {
    /// Domain of the page the anchor was found on, identical for every
    /// record from one fetch
    pub website: String,
    /// Trimmed display text, `"No Title"` when empty
    pub title: String,
    /// The href verbatim; may be relative, `mailto:`, `tel:`, or
    /// `javascript:`. Scheme filtering is the scanner's job.
    pub link: String,
}

/// Fetches pages and extracts structured anchor records
pub struct LinkExtractor {
    client: Client,
    anchor_selector: Selector,
}

impl LinkExtractor {
    /// Build an extractor with the configured user agent, redirect bound,
    /// and request timeout.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be constructed.
    pub fn new(config: &MatchConfig) -> Result<Self> {
        let client = Client::builder()
            .user_agent(config.extractor_user_agent())
            .redirect(redirect::Policy::limited(config.max_redirects()))
            .timeout(Duration::from_secs(config.request_timeout_secs()))
            .build()
            .map_err(|e| anyhow!("Failed to build extractor HTTP client: {e}"))?;

        let anchor_selector = Selector::parse("a[href]")
            .map_err(|e| anyhow!("Failed to parse anchor selector: {e}"))?;

        Ok(Self {
            client,
            anchor_selector,
        })
    }

    /// Fetch `url` and extract one record per anchor carrying an href.
    ///
    /// Non-success statuses and transport failures (DNS, refused
    /// connection, timeout) log a warning and return an empty vec; they
    /// never propagate to the caller.
    pub async fn extract_links(&self, url: &str) -> Vec<AnchorRecord> {
        let domain = match Url::parse(url).ok().and_then(|u| {
            u.host_str().map(str::to_string)
        }) {
            Some(host) => host,
            None => {
                warn!(target: "linkmatch::extractor", "Cannot determine domain for '{url}'");
                String::new()
            }
        };

        let response = match self.client.get(url).send().await {
            Ok(resp) => resp,
            Err(e) => {
                warn!(target: "linkmatch::extractor", "Request to {url} failed: {e}");
                return Vec::new();
            }
        };

        let status = response.status();
        if !status.is_success() {
            warn!(
                target: "linkmatch::extractor",
                "Failed to retrieve {url}: status {status}"
            );
            return Vec::new();
        }

        let body = match response.text().await {
            Ok(text) => text,
            Err(e) => {
                warn!(target: "linkmatch::extractor", "Failed to read body from {url}: {e}");
                return Vec::new();
            }
        };

        let records = self.parse_anchors(&body, &domain);
        debug!(
            target: "linkmatch::extractor",
            "Extracted {} links from {url}", records.len()
        );
        records
    }

    fn parse_anchors(&self, html: &str, domain: &str) -> Vec<AnchorRecord> {
        let document = Html::parse_document(html);
        document
            .select(&self.anchor_selector)
            .filter_map(|element| {
                let href = element.value().attr("href")?;
                let text = element.text().collect::<String>();
                let trimmed = text.trim();
                let title = if trimmed.is_empty() {
                    NO_TITLE.to_string()
                } else {
                    trimmed.to_string()
                };
                Some(AnchorRecord {
                    website: domain.to_string(),
                    title,
                    link: href.to_string(),
                })
            })
            .collect()
    }
}
