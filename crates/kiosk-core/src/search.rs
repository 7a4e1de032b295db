//! Approximate title search over the catalog.
//!
//! The similarity metric itself is a trait seam; the infrastructure layer
//! provides the partial-ratio implementation, so the ranking logic here can
//! be tested with a stub scorer.

use crate::catalog::{Catalog, ProductRecord};

/// Default number of distinct titles kept by a search.
pub const DEFAULT_SEARCH_LIMIT: usize = 20;

/// Approximate string similarity on a 0-100 scale.
///
/// The contract mirrors a partial-ratio metric: best-aligned substring
/// similarity, case-insensitive, whitespace-tolerant. 100 means the query
/// aligns perfectly with some part of the candidate.
pub trait SimilarityScorer: Send + Sync {
    /// Scores how well `query` matches `candidate`.
    fn score(&self, query: &str, candidate: &str) -> u8;
}

/// Ranks catalog titles against a free-text query.
pub struct SearchFilter<S> {
    scorer: S,
    limit: usize,
}

impl<S: SimilarityScorer> SearchFilter<S> {
    /// Creates a filter with the default title limit.
    pub fn new(scorer: S) -> Self {
        Self::with_limit(scorer, DEFAULT_SEARCH_LIMIT)
    }

    /// Creates a filter keeping at most `limit` distinct titles per query.
    pub fn with_limit(scorer: S, limit: usize) -> Self {
        Self { scorer, limit }
    }

    /// Filters the catalog by approximate title match.
    ///
    /// An empty or all-whitespace query returns the catalog unchanged, in
    /// catalog order. Otherwise every distinct title is scored, titles are
    /// ranked by descending score with ties broken by the catalog position
    /// of the title's first occurrence, and the top `limit` titles survive.
    /// Every record whose title survived is returned, ordered by title rank
    /// and then catalog position. Records sharing a title travel together,
    /// so the result can hold more than `limit` records.
    pub fn filter(&self, query: &str, catalog: &Catalog) -> Vec<ProductRecord> {
        let query = query.trim();
        if query.is_empty() {
            return catalog.records().to_vec();
        }
        if catalog.is_empty() {
            return Vec::new();
        }

        // Distinct titles; the first occurrence fixes the tie-break position.
        let mut titles: Vec<&str> = Vec::new();
        for record in catalog.iter() {
            if !titles.contains(&record.title.as_str()) {
                titles.push(&record.title);
            }
        }

        let mut ranked: Vec<(usize, &str, u8)> = titles
            .iter()
            .enumerate()
            .map(|(pos, title)| (pos, *title, self.scorer.score(query, title)))
            .collect();
        ranked.sort_by(|a, b| b.2.cmp(&a.2).then(a.0.cmp(&b.0)));
        ranked.truncate(self.limit);

        tracing::debug!(query, kept_titles = ranked.len(), "ranked catalog titles");

        let mut results = Vec::new();
        for (_, title, _) in &ranked {
            for record in catalog.iter() {
                if record.title == *title {
                    results.push(record.clone());
                }
            }
        }
        results
    }
}
