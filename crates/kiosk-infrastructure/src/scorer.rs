//! Partial-ratio similarity scoring backed by rapidfuzz.

use kiosk_core::search::SimilarityScorer;

/// Scores query/title pairs with rapidfuzz's partial ratio.
///
/// Partial ratio measures the best alignment of the shorter string against
/// substrings of the longer one, on a 0-100 scale. Inputs are lowercased
/// and their whitespace collapsed before scoring, so "red  shoe" and
/// "Red Shoe" compare equal.
#[derive(Debug, Clone, Copy, Default)]
pub struct PartialRatioScorer;

impl PartialRatioScorer {
    pub fn new() -> Self {
        Self
    }
}

fn normalize(text: &str) -> String {
    text.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

impl SimilarityScorer for PartialRatioScorer {
    fn score(&self, query: &str, candidate: &str) -> u8 {
        let query = normalize(query);
        let candidate = normalize(candidate);
        if query.is_empty() || candidate.is_empty() {
            return 0;
        }

        let ratio = rapidfuzz::fuzz::partial_ratio(query.chars(), candidate.chars());
        ratio.round() as u8
    }
}
