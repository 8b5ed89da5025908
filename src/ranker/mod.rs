//! Similarity ranking of stored corpora against a query document
//!
//! For every stored corpus a fresh TF-IDF vectorizer is fit over that
//! corpus's titles plus the query document: similarity is
//! corpus-relative by design, not globally normalized. The aggregate
//! score for a corpus is the arithmetic mean of the query's cosine
//! similarity to each of its titles.

pub mod tfidf;

use log::{debug, warn};
use serde::Serialize;

use crate::store::StoredCorpus;
use crate::text::NormalizedQuery;

/// One ranked corpus. Ephemeral, produced fresh per matching request.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SimilarityResult {
    pub corpus_name: String,
    /// Mean per-title cosine similarity, in [0, 1]
    pub score: f64,
}

/// Concatenate the normalized query tokens with the freshly extracted
/// titles into one query document.
#[must_use]
pub fn build_query_document(query: &NormalizedQuery, titles: &[String]) -> String {
    let mut parts: Vec<&str> = Vec::new();
    parts.extend(query.description.iter().map(String::as_str));
    parts.extend(query.field.iter().map(String::as_str));
    parts.extend(titles.iter().map(String::as_str));
    parts.join(" ")
}

/// Score every corpus with a usable title column against
/// `query_document` and return the top `top_k` results, sorted by score
/// descending. Ties keep load order; title-less corpora are skipped with
/// a warning.
#[must_use]
pub fn rank_corpora(
    query_document: &str,
    corpora: &[StoredCorpus],
    top_k: usize,
) -> Vec<SimilarityResult> {
    let mut results = Vec::new();

    for corpus in corpora {
        let Some(titles) = corpus.titles() else {
            warn!(
                target: "linkmatch::ranker",
                "No 'title' column in corpus '{}', skipping", corpus.name
            );
            continue;
        };

        // Local document set: this corpus's titles plus the query, in
        // that order. The vectorizer is refit per corpus on purpose.
        let mut documents: Vec<String> = titles.iter().map(|t| (*t).to_string()).collect();
        documents.push(query_document.to_string());

        let matrix = tfidf::fit_transform(&documents);
        let (query_row, title_rows) = match matrix.rows.split_last() {
            Some(split) => split,
            None => continue,
        };

        let score = if title_rows.is_empty() {
            0.0
        } else {
            title_rows
                .iter()
                .map(|row| tfidf::cosine_similarity(query_row, row))
                .sum::<f64>()
                / title_rows.len() as f64
        };

        debug!(
            target: "linkmatch::ranker",
            "Corpus '{}' scored {score:.4} over {} titles", corpus.name, title_rows.len()
        );
        results.push(SimilarityResult {
            corpus_name: corpus.name.clone(),
            score,
        });
    }

    // Stable sort keeps insertion order on ties
    results.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(std::cmp::Ordering::Equal));
    results.truncate(top_k);
    results
}

#[cfg(test)]
mod tests {
    use super::*;

    fn corpus(name: &str, titles: &[&str]) -> StoredCorpus {
        StoredCorpus {
            name: name.to_string(),
            columns: vec!["website".into(), "title".into(), "link".into()],
            rows: titles
                .iter()
                .map(|t| vec!["example.com".into(), (*t).to_string(), "/".into()])
                .collect(),
        }
    }

    #[test]
    fn query_document_concatenates_tokens_and_titles() {
        let query = NormalizedQuery {
            description: vec!["best".into(), "agency".into()],
            field: vec!["marketing".into()],
        };
        let titles = vec!["SEO guide".to_string()];
        assert_eq!(
            build_query_document(&query, &titles),
            "best agency marketing SEO guide"
        );
    }

    #[test]
    fn related_corpus_outranks_unrelated() {
        let corpora = vec![
            corpus("unrelated", &["Unrelated cooking recipe"]),
            corpus("related", &["SEO guide", "Link building tips"]),
        ];
        let results = rank_corpora("seo guide link building", &corpora, 5);
        assert_eq!(results.len(), 2);
        assert_eq!(results[0].corpus_name, "related");
        assert!(results[0].score > results[1].score);
    }

    #[test]
    fn results_are_capped_at_top_k() {
        let corpora: Vec<StoredCorpus> = (0..8)
            .map(|i| corpus(&format!("c{i}"), &["seo guide"]))
            .collect();
        let results = rank_corpora("seo guide", &corpora, 5);
        assert_eq!(results.len(), 5);
    }

    #[test]
    fn ties_keep_load_order() {
        let corpora = vec![
            corpus("first", &["seo guide"]),
            corpus("second", &["seo guide"]),
        ];
        let results = rank_corpora("seo guide", &corpora, 5);
        assert_eq!(results[0].corpus_name, "first");
        assert_eq!(results[1].corpus_name, "second");
    }

    #[test]
    fn title_less_corpora_are_skipped() {
        let no_title = StoredCorpus {
            name: "broken".into(),
            columns: vec!["website".into(), "link".into()],
            rows: vec![vec!["example.com".into(), "/".into()]],
        };
        let corpora = vec![no_title, corpus("ok", &["seo guide"])];
        let results = rank_corpora("seo guide", &corpora, 5);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].corpus_name, "ok");
    }

    #[test]
    fn single_title_corpus_scores_in_unit_range() {
        let corpora = vec![corpus("solo", &["seo guide"])];
        let results = rank_corpora("seo guide link building", &corpora, 5);
        assert_eq!(results.len(), 1);
        assert!(results[0].score >= 0.0 && results[0].score <= 1.0);
    }

    #[test]
    fn empty_corpus_file_scores_zero() {
        let corpora = vec![corpus("empty", &[])];
        let results = rank_corpora("seo guide", &corpora, 5);
        assert_eq!(results[0].score, 0.0);
    }

    #[test]
    fn ranking_is_idempotent() {
        let corpora = vec![
            corpus("a", &["SEO guide", "Link building tips"]),
            corpus("b", &["Content calendars", "Editorial planning"]),
            corpus("c", &["Unrelated cooking recipe"]),
        ];
        let first = rank_corpora("seo guide link building", &corpora, 5);
        let second = rank_corpora("seo guide link building", &corpora, 5);
        assert_eq!(first, second);
    }
}
