//! Data contract for the externally-produced backlink report
//!
//! The report file is produced by an outside service and read as-is;
//! this system never crawls a backlink graph itself. Only the typed
//! contract and a textual summary live here; chart rendering belongs to
//! the presentation layer.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// One dated backlink count sample
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BacklinkSample {
    /// Crawl date, `YYYY-MM-DD`
    pub date: NaiveDate,
    pub count: u64,
}

/// Externally-produced backlink authority report
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BacklinkReport {
    pub domain_authority: f64,
    pub page_authority: f64,
    pub backlinks: Vec<BacklinkSample>,
}

impl BacklinkReport {
    /// Human-readable authority summary lines
    #[must_use]
    pub fn summary_lines(&self) -> Vec<String> {
        vec![
            format!("Domain Authority: {}", self.domain_authority),
            format!("Page Authority: {}", self.page_authority),
        ]
    }
}

/// Read and summarize a report file. Failures (missing file, malformed
/// JSON) degrade to a single `Error:` line, matching the diagnostic
/// style of the rest of the pipeline.
pub async fn summarize(path: &Path) -> Vec<String> {
    let result: anyhow::Result<BacklinkReport> = async {
        let bytes = tokio::fs::read(path).await?;
        Ok(serde_json::from_slice(&bytes)?)
    }
    .await;

    match result {
        Ok(report) => report.summary_lines(),
        Err(e) => vec![format!("Error: {e}")],
    }
}
