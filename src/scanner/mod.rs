//! Broken-link scanning over an extracted anchor set
//!
//! Probes web-reachable hrefs one at a time, in discovered order, and
//! classifies exact-404 responses as broken. Other statuses (including
//! other 4xx/5xx) are not reported; transport failures become diagnostic
//! lines rather than aborting the scan.

use anyhow::{Result, anyhow};
use log::{debug, warn};
use reqwest::{Client, StatusCode, redirect};
use std::time::Duration;

use crate::config::MatchConfig;
use crate::extractor::AnchorRecord;

/// Outcome of one scan. Ephemeral, produced fresh per request.
#[derive(Debug, Clone, Default)]
pub struct BrokenLinkReport {
    /// Count of confirmed 404 targets
    pub broken_count: usize,
    /// Summary line first, then one line per broken link in probe
    /// order, then transport-failure diagnostics
    pub lines: Vec<String>,
}

/// Whether an href is a candidate for probing.
///
/// Web-reachable means: starts with an absolute `http` prefix, is not a
/// `mailto:` target, and contains neither `javascript:` nor `tel:`.
/// Everything else is silently excluded: not a failure, just not a
/// probe target.
#[must_use]
pub fn is_probe_target(href: &str) -> bool {
    href.starts_with("http")
        && !href.starts_with("mailto:")
        && !href.contains("javascript:")
        && !href.contains("tel:")
}

/// Probes anchor targets and reports confirmed 404s
pub struct BrokenLinkScanner {
    client: Client,
    max_probe_links: Option<usize>,
}

impl BrokenLinkScanner {
    /// Build a scanner with the session-scoped user agent (distinct from
    /// the extractor's), redirect bound, and request timeout.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be constructed.
    pub fn new(config: &MatchConfig) -> Result<Self> {
        let client = Client::builder()
            .user_agent(config.scanner_user_agent())
            .redirect(redirect::Policy::limited(config.max_redirects()))
            .timeout(Duration::from_secs(config.request_timeout_secs()))
            .build()
            .map_err(|e| anyhow!("Failed to build scanner HTTP client: {e}"))?;

        Ok(Self {
            client,
            max_probe_links: config.max_probe_links(),
        })
    }

    /// Probe every candidate href in `anchors` and classify live vs dead.
    ///
    /// Links are scanned sequentially in discovered order. Per-link
    /// connection failures append an `Error:` diagnostic and the scan
    /// continues to the next link.
    pub async fn scan(&self, anchors: &[AnchorRecord]) -> BrokenLinkReport {
        let candidates: Vec<&str> = anchors
            .iter()
            .map(|record| record.link.as_str())
            .filter(|href| is_probe_target(href))
            .collect();

        let probed = match self.max_probe_links {
            Some(cap) if candidates.len() > cap => {
                warn!(
                    target: "linkmatch::scanner",
                    "Probe cap {} reached; skipping {} candidates",
                    cap,
                    candidates.len() - cap
                );
                &candidates[..cap]
            }
            _ => &candidates[..],
        };

        let mut broken_links = Vec::new();
        let mut errors = Vec::new();

        for href in probed {
            match self.client.get(*href).send().await {
                Ok(response) => {
                    debug!(
                        target: "linkmatch::scanner",
                        "Probed {href}: {}", response.status()
                    );
                    if response.status() == StatusCode::NOT_FOUND {
                        broken_links.push((*href).to_string());
                    }
                }
                Err(e) => {
                    errors.push(format!("Error: {e}"));
                }
            }
        }

        let broken_count = broken_links.len();
        let mut lines = Vec::with_capacity(broken_count + errors.len() + 1);
        lines.push(format!("{broken_count} broken links were found."));
        for link in &broken_links {
            lines.push(format!("Broken link found: {link}"));
        }
        lines.extend(errors);

        BrokenLinkReport {
            broken_count,
            lines,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absolute_http_targets_are_probed() {
        assert!(is_probe_target("http://example.com/a"));
        assert!(is_probe_target("https://example.com/a"));
    }

    #[test]
    fn non_web_schemes_are_excluded() {
        assert!(!is_probe_target("mailto:hi@example.com"));
        assert!(!is_probe_target("tel:+15551234"));
        assert!(!is_probe_target("javascript:void(0)"));
        assert!(!is_probe_target("http://example.com/?redirect=javascript:alert(1)"));
    }

    #[test]
    fn relative_hrefs_are_excluded() {
        assert!(!is_probe_target("/about"));
        assert!(!is_probe_target("../index.html"));
        assert!(!is_probe_target("#section"));
        assert!(!is_probe_target(""));
    }
}
