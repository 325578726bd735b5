//! Cosine similarity and top-N ranking over sparse vectors.
//!
//! Vectors produced by [`crate::tfidf::TfIdfModel`] are L2-normalized, so
//! cosine similarity reduces to a sparse dot product computed with a merge
//! join over the sorted `(term_id, weight)` pairs.

use crate::tfidf::SparseVector;

/// Cosine similarity between two L2-normalized sparse vectors.
///
/// Both inputs must be sorted by term id (as `TfIdfModel::transform`
/// guarantees). Returns `0.0` when either vector is empty.
#[must_use]
pub fn cosine(a: &SparseVector, b: &SparseVector) -> f64 {
    let mut dot = 0.0;
    let (mut i, mut j) = (0, 0);

    while i < a.len() && j < b.len() {
        let (id_a, w_a) = a[i];
        let (id_b, w_b) = b[j];
        match id_a.cmp(&id_b) {
            std::cmp::Ordering::Less => i += 1,
            std::cmp::Ordering::Greater => j += 1,
            std::cmp::Ordering::Equal => {
                dot += w_a * w_b;
                i += 1;
                j += 1;
            }
        }
    }

    // Normalized inputs keep the dot product in [0, 1]; clamp guards against
    // floating-point drift just above 1.
    dot.clamp(0.0, 1.0)
}

/// Rank documents by similarity to a query vector.
///
/// Returns up to `top_n` `(doc_index, score)` pairs with `score >= min_score`,
/// best first. Ties keep the lower document index first, so ordering is
/// deterministic.
#[must_use]
pub fn rank(
    query: &SparseVector,
    matrix: &[SparseVector],
    top_n: usize,
    min_score: f64,
) -> Vec<(usize, f64)> {
    let mut scored: Vec<(usize, f64)> = matrix
        .iter()
        .enumerate()
        .map(|(idx, doc)| (idx, cosine(query, doc)))
        .filter(|&(_, score)| score >= min_score)
        .collect();

    scored.sort_by(|a, b| {
        b.1.partial_cmp(&a.1)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| a.0.cmp(&b.0))
    });
    scored.truncate(top_n);
    scored
}
