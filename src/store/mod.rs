//! File-backed corpus storage
//!
//! One CSV file per corpus (columns `website,title,link`), keyed by the
//! submitting marketer's identifier. Writes are last-write-wins and go
//! through a temp-file-then-rename replace so readers never observe a
//! torn file. The store is deliberately a small interface (save / load
//! all) so it can later be swapped for a real document store without
//! touching the ranking logic.

use log::{debug, warn};
use std::path::{Path, PathBuf};

use crate::error::{MatchError, MatchResult};
use crate::extractor::AnchorRecord;

/// One previously stored corpus: its name (from the file stem), the CSV
/// header row, and the data rows as raw strings.
#[derive(Debug, Clone)]
pub struct StoredCorpus {
    pub name: String,
    pub columns: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl StoredCorpus {
    /// The `title` column values, or `None` when the corpus lacks a
    /// `title` column. Title-less corpora are skipped during ranking,
    /// not during load.
    #[must_use]
    pub fn titles(&self) -> Option<Vec<&str>> {
        let idx = self.columns.iter().position(|c| c == "title")?;
        Some(
            self.rows
                .iter()
                .map(|row| row.get(idx).map_or("", String::as_str))
                .collect(),
        )
    }
}

/// Exclusive owner of the persisted corpora
pub struct CorpusStore {
    root: PathBuf,
}

impl CorpusStore {
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Map a marketer-supplied name to a safe CSV file name.
    ///
    /// # Errors
    ///
    /// Returns `MatchError::InvalidCorpusName` when the name sanitizes
    /// down to nothing (path-traversal attempts, pure punctuation).
    fn file_name(name: &str) -> MatchResult<String> {
        let safe = sanitize_filename::sanitize(name.trim());
        if safe.is_empty() {
            return Err(MatchError::InvalidCorpusName(name.to_string()));
        }
        Ok(format!("{safe}.csv"))
    }

    /// Persist `anchors` under `name`, overwriting any existing corpus
    /// of the same name.
    ///
    /// The backing directory is created if absent. The rows are written
    /// to a temp file in the same directory and renamed into place, so a
    /// concurrent `load_all_corpora` sees either the old corpus or the
    /// new one, never a partial write.
    ///
    /// # Errors
    ///
    /// Returns `MatchError::Persistence` on any I/O or serialization
    /// failure; a failed save must be visible since later ranking
    /// depends on the submission being present.
    pub async fn save_corpus(
        &self,
        name: &str,
        anchors: &[AnchorRecord],
    ) -> MatchResult<PathBuf> {
        let persistence = |e: String| MatchError::Persistence {
            name: name.to_string(),
            message: e,
        };

        let file_name = Self::file_name(name)?;

        tokio::fs::create_dir_all(&self.root)
            .await
            .map_err(|e| persistence(format!("Failed to create storage dir: {e}")))?;

        let mut writer = csv::Writer::from_writer(Vec::new());
        for record in anchors {
            writer
                .serialize(record)
                .map_err(|e| persistence(format!("Failed to serialize row: {e}")))?;
        }
        let bytes = writer
            .into_inner()
            .map_err(|e| persistence(format!("Failed to flush CSV writer: {e}")))?;

        let final_path = self.root.join(&file_name);
        let tmp_path = self.root.join(format!("{file_name}.tmp"));

        tokio::fs::write(&tmp_path, bytes)
            .await
            .map_err(|e| persistence(format!("Failed to write corpus file: {e}")))?;
        tokio::fs::rename(&tmp_path, &final_path)
            .await
            .map_err(|e| persistence(format!("Failed to replace corpus file: {e}")))?;

        debug!(
            target: "linkmatch::store",
            "Saved corpus '{name}' ({} rows) to {}", anchors.len(), final_path.display()
        );
        Ok(final_path)
    }

    /// Load every stored corpus, in directory iteration order.
    ///
    /// Never fails: a missing storage directory yields an empty list
    /// with a diagnostic, and an individually unreadable corpus is
    /// skipped with a warning so one corrupt entry does not block
    /// ranking against the rest.
    pub async fn load_all_corpora(&self) -> Vec<StoredCorpus> {
        let mut dir = match tokio::fs::read_dir(&self.root).await {
            Ok(dir) => dir,
            Err(e) => {
                warn!(
                    target: "linkmatch::store",
                    "Storage dir {} is not readable: {e}", self.root.display()
                );
                return Vec::new();
            }
        };

        let mut corpora = Vec::new();
        loop {
            let entry = match dir.next_entry().await {
                Ok(Some(entry)) => entry,
                Ok(None) => break,
                Err(e) => {
                    warn!(target: "linkmatch::store", "Failed to read dir entry: {e}");
                    break;
                }
            };

            let path = entry.path();
            if path.extension().and_then(|ext| ext.to_str()) != Some("csv") {
                continue;
            }
            let Some(name) = path.file_stem().and_then(|stem| stem.to_str()) else {
                continue;
            };

            match Self::read_corpus(&path, name).await {
                Ok(corpus) => {
                    debug!(
                        target: "linkmatch::store",
                        "Loaded corpus '{}' ({} rows)", corpus.name, corpus.rows.len()
                    );
                    corpora.push(corpus);
                }
                Err(e) => {
                    warn!(
                        target: "linkmatch::store",
                        "Skipping unreadable corpus {}: {e}", path.display()
                    );
                }
            }
        }

        if corpora.is_empty() {
            debug!(
                target: "linkmatch::store",
                "No corpora found in {}", self.root.display()
            );
        }
        corpora
    }

    async fn read_corpus(path: &Path, name: &str) -> anyhow::Result<StoredCorpus> {
        let bytes = tokio::fs::read(path).await?;
        let mut reader = csv::Reader::from_reader(bytes.as_slice());

        let columns = reader
            .headers()?
            .iter()
            .map(str::to_string)
            .collect::<Vec<_>>();

        let mut rows = Vec::new();
        for record in reader.records() {
            let record = record?;
            rows.push(record.iter().map(str::to_string).collect());
        }

        Ok(StoredCorpus {
            name: name.to_string(),
            columns,
            rows,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_name_sanitizes_traversal_attempts() {
        let name = CorpusStore::file_name("../../etc/passwd").unwrap();
        assert!(!name.contains(".."));
        assert!(!name.contains('/'));
        assert!(name.ends_with(".csv"));
    }

    #[test]
    fn file_name_rejects_empty_result() {
        assert!(matches!(
            CorpusStore::file_name("   "),
            Err(MatchError::InvalidCorpusName(_))
        ));
    }

    #[test]
    fn titles_require_a_title_column() {
        let with_title = StoredCorpus {
            name: "acme".into(),
            columns: vec!["website".into(), "title".into(), "link".into()],
            rows: vec![vec!["a.com".into(), "SEO guide".into(), "/x".into()]],
        };
        assert_eq!(with_title.titles(), Some(vec!["SEO guide"]));

        let without_title = StoredCorpus {
            name: "odd".into(),
            columns: vec!["website".into(), "link".into()],
            rows: vec![vec!["a.com".into(), "/x".into()]],
        };
        assert!(without_title.titles().is_none());
    }
}
