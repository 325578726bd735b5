//! TF-IDF vectorization of tokenized storylines.
//!
//! Weighting follows the scikit-learn `TfidfVectorizer` defaults: raw term
//! frequency times smoothed inverse document frequency
//! (`ln((1 + n) / (1 + df)) + 1`), with each document vector L2-normalized.
//! Normalization makes cosine similarity a plain dot product downstream.

use std::collections::HashMap;

use crate::text::term_counts;

/// A sparse document vector: `(term_id, weight)` pairs sorted by term id.
pub type SparseVector = Vec<(usize, f64)>;

/// Vocabulary and IDF weights fitted on a document corpus.
#[derive(Debug, Clone)]
pub struct TfIdfModel {
    /// Term to column index.
    vocab: HashMap<String, usize>,
    /// Smoothed IDF per column.
    idf: Vec<f64>,
}

impl TfIdfModel {
    /// Fit vocabulary and IDF weights on tokenized documents.
    ///
    /// Terms are assigned ids in first-seen order; the order is irrelevant
    /// to similarity, it only has to be consistent between fit and
    /// transform.
    #[must_use]
    pub fn fit(docs: &[Vec<String>]) -> Self {
        let mut vocab: HashMap<String, usize> = HashMap::new();
        let mut doc_freq: Vec<usize> = Vec::new();

        for tokens in docs {
            let counts = term_counts(tokens);
            for term in counts.keys() {
                let next_id = vocab.len();
                let id = *vocab.entry((*term).to_string()).or_insert(next_id);
                if id == doc_freq.len() {
                    doc_freq.push(0);
                }
                doc_freq[id] += 1;
            }
        }

        let n_docs = docs.len() as f64;
        let idf = doc_freq
            .iter()
            .map(|&df| ((1.0 + n_docs) / (1.0 + df as f64)).ln() + 1.0)
            .collect();

        Self { vocab, idf }
    }

    /// Fit on a corpus and return the model together with the document
    /// matrix, one sparse vector per input document.
    #[must_use]
    pub fn fit_transform(docs: &[Vec<String>]) -> (Self, Vec<SparseVector>) {
        let model = Self::fit(docs);
        let matrix = docs.iter().map(|d| model.transform(d)).collect();
        (model, matrix)
    }

    /// Transform a token stream into an L2-normalized sparse vector.
    ///
    /// Terms outside the fitted vocabulary are ignored, matching
    /// scikit-learn's transform-time behavior. An input with no known terms
    /// yields an empty vector.
    #[must_use]
    pub fn transform(&self, tokens: &[String]) -> SparseVector {
        let counts = term_counts(tokens);

        let mut vector: SparseVector = counts
            .iter()
            .filter_map(|(term, &count)| {
                self.vocab
                    .get(*term)
                    .map(|&id| (id, count as f64 * self.idf[id]))
            })
            .collect();
        vector.sort_unstable_by_key(|&(id, _)| id);

        let norm = vector.iter().map(|&(_, w)| w * w).sum::<f64>().sqrt();
        if norm > 0.0 {
            for entry in &mut vector {
                entry.1 /= norm;
            }
        }
        vector
    }

    /// Number of distinct terms in the fitted vocabulary.
    #[must_use]
    pub fn vocab_len(&self) -> usize {
        self.vocab.len()
    }
}
