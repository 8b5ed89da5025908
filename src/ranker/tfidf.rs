//! Deterministic TF-IDF vectorization and cosine similarity
//!
//! Weighting mirrors the scikit-learn defaults the corpus scores were
//! originally calibrated against: tokens are lowercased runs of two or
//! more alphanumeric characters, IDF is smoothed
//! (`ln((1+n)/(1+df)) + 1`), and every document vector is L2-normalized.
//! Vocabulary order is sorted-token, so repeated fits over the same
//! documents produce identical matrices.

use std::collections::{BTreeMap, HashSet};

/// Split `text` into lowercase tokens of at least two alphanumeric
/// characters. Single-character tokens and punctuation are dropped,
/// matching the `\w\w+` token pattern the scores were tuned for.
#[must_use]
pub fn tokenize(text: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    for ch in text.chars() {
        if ch.is_alphanumeric() || ch == '_' {
            current.extend(ch.to_lowercase());
        } else if !current.is_empty() {
            if current.chars().count() >= 2 {
                tokens.push(std::mem::take(&mut current));
            } else {
                current.clear();
            }
        }
    }
    if current.chars().count() >= 2 {
        tokens.push(current);
    }
    tokens
}

/// TF-IDF weights for one local document set.
///
/// Fit over exactly the documents handed to `fit_transform`; the
/// vocabulary is per-call, never global.
pub struct TfidfMatrix {
    /// Row per input document, column per vocabulary term, L2-normalized
    pub rows: Vec<Vec<f64>>,
    /// Sorted vocabulary term -> column index
    pub vocabulary: BTreeMap<String, usize>,
}

/// Fit a TF-IDF vectorizer over `documents` and return the weighted,
/// normalized document-term matrix.
#[must_use]
pub fn fit_transform(documents: &[String]) -> TfidfMatrix {
    let tokenized: Vec<Vec<String>> = documents.iter().map(|doc| tokenize(doc)).collect();

    // Sorted vocabulary for a deterministic column order
    let terms: std::collections::BTreeSet<&String> = tokenized.iter().flatten().collect();
    let vocabulary: BTreeMap<String, usize> = terms
        .into_iter()
        .enumerate()
        .map(|(idx, term)| (term.clone(), idx))
        .collect();

    // Document frequencies
    let mut df = vec![0usize; vocabulary.len()];
    for tokens in &tokenized {
        let mut seen: HashSet<&str> = HashSet::new();
        for token in tokens {
            if seen.insert(token)
                && let Some(&col) = vocabulary.get(token)
            {
                df[col] += 1;
            }
        }
    }

    // Smoothed IDF
    let n_docs = documents.len() as f64;
    let idf: Vec<f64> = df
        .iter()
        .map(|&count| ((1.0 + n_docs) / (1.0 + count as f64)).ln() + 1.0)
        .collect();

    // Term counts * IDF, then L2 normalization per row
    let rows = tokenized
        .iter()
        .map(|tokens| {
            let mut row = vec![0.0f64; vocabulary.len()];
            for token in tokens {
                if let Some(&col) = vocabulary.get(token) {
                    row[col] += 1.0;
                }
            }
            for (col, weight) in row.iter_mut().enumerate() {
                *weight *= idf[col];
            }
            let norm = row.iter().map(|w| w * w).sum::<f64>().sqrt();
            if norm > 0.0 {
                for weight in &mut row {
                    *weight /= norm;
                }
            }
            row
        })
        .collect();

    TfidfMatrix { rows, vocabulary }
}

/// Cosine of the angle between two weight vectors; 0.0 when either has
/// no magnitude.
#[must_use]
pub fn cosine_similarity(a: &[f64], b: &[f64]) -> f64 {
    let dot: f64 = a.iter().zip(b).map(|(x, y)| x * y).sum();
    let norm_a: f64 = a.iter().map(|x| x * x).sum::<f64>().sqrt();
    let norm_b: f64 = b.iter().map(|x| x * x).sum::<f64>().sqrt();
    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }
    dot / (norm_a * norm_b)
}
