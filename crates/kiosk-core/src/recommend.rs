//! Recommendation sampling over the unselected remainder.
//!
//! Recommendations are a uniform random draw from the catalog minus the
//! selection, recomputed from scratch on every view. The draw is seeded, so
//! the same catalog, selection, and seed always produce the same batch.
//! Similarity to selected items is deliberately not considered; weighting
//! the draw would be a behavior change, not a tweak.

use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;

use crate::catalog::{Catalog, ProductRecord};
use crate::session::SessionState;

/// Parameters of a recommendation draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecommendParams {
    /// Seed for the random generator.
    pub seed: u64,
    /// Maximum batch size.
    pub count: usize,
    /// Minimum number of selections before a batch is produced.
    pub min_selections: usize,
}

impl Default for RecommendParams {
    fn default() -> Self {
        Self {
            seed: 42,
            count: 10,
            min_selections: 3,
        }
    }
}

/// What the picks view gets back.
#[derive(Debug, Clone, PartialEq)]
pub enum Recommendation {
    /// A uniform random draw from the unselected remainder. Empty when
    /// every product is already selected.
    Batch(Vec<ProductRecord>),
    /// Not enough products selected yet; guidance for the user, not an
    /// error.
    Insufficient { selected: usize, required: usize },
}

/// Draws up to `params.count` unselected records without replacement.
///
/// Requires at least `params.min_selections` selected products; below that
/// threshold the result is [`Recommendation::Insufficient`]. The remainder
/// is taken in catalog order before sampling, which keeps the draw
/// reproducible for a given (catalog, selection, seed).
pub fn recommend(
    catalog: &Catalog,
    session: &SessionState,
    params: &RecommendParams,
) -> Recommendation {
    let selected = session.selection_len();
    if selected < params.min_selections {
        return Recommendation::Insufficient {
            selected,
            required: params.min_selections,
        };
    }

    let remaining: Vec<&ProductRecord> = catalog
        .iter()
        .filter(|record| !session.is_selected(&record.id))
        .collect();

    tracing::debug!(
        remaining = remaining.len(),
        seed = params.seed,
        "sampling recommendations"
    );

    let mut rng = StdRng::seed_from_u64(params.seed);
    let batch = remaining
        .choose_multiple(&mut rng, params.count.min(remaining.len()))
        .map(|record| (*record).clone())
        .collect();

    Recommendation::Batch(batch)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog(size: usize) -> Catalog {
        Catalog::from_records(
            (1..=size)
                .map(|i| ProductRecord {
                    id: i.to_string(),
                    title: format!("Product {i}"),
                    image_url: String::new(),
                })
                .collect(),
        )
        .expect("Should build catalog")
    }

    fn session_with(catalog: &Catalog, ids: &[&str]) -> SessionState {
        let mut session = SessionState::new();
        for id in ids {
            session.toggle(catalog, id).expect("Should toggle");
        }
        session
    }

    #[test]
    fn test_insufficient_below_threshold() {
        let catalog = catalog(20);
        let session = session_with(&catalog, &["1", "2"]);

        let result = recommend(&catalog, &session, &RecommendParams::default());
        assert_eq!(
            result,
            Recommendation::Insufficient {
                selected: 2,
                required: 3
            }
        );
    }

    #[test]
    fn test_batch_is_deterministic_for_a_seed() {
        let catalog = catalog(50);
        let session = session_with(&catalog, &["1", "2", "3"]);
        let params = RecommendParams::default();

        let first = recommend(&catalog, &session, &params);
        let second = recommend(&catalog, &session, &params);
        assert_eq!(first, second);
    }

    #[test]
    fn test_batch_never_contains_selected_ids() {
        let catalog = catalog(30);
        let session = session_with(&catalog, &["5", "10", "15", "20"]);

        let Recommendation::Batch(batch) =
            recommend(&catalog, &session, &RecommendParams::default())
        else {
            panic!("Expected a batch");
        };
        assert_eq!(batch.len(), 10);
        assert!(batch.iter().all(|r| !session.is_selected(&r.id)));
        assert!(batch.iter().all(|r| catalog.contains(&r.id)));
    }

    #[test]
    fn test_single_remainder_is_always_returned() {
        let catalog = catalog(4);
        let session = session_with(&catalog, &["1", "2", "3"]);

        for seed in [0, 1, 42, 1234] {
            let params = RecommendParams {
                seed,
                ..RecommendParams::default()
            };
            let Recommendation::Batch(batch) = recommend(&catalog, &session, &params) else {
                panic!("Expected a batch");
            };
            let ids: Vec<_> = batch.iter().map(|r| r.id.as_str()).collect();
            assert_eq!(ids, vec!["4"]);
        }
    }

    #[test]
    fn test_everything_selected_yields_empty_batch() {
        let catalog = catalog(3);
        let session = session_with(&catalog, &["1", "2", "3"]);

        let result = recommend(&catalog, &session, &RecommendParams::default());
        assert_eq!(result, Recommendation::Batch(Vec::new()));
    }

    #[test]
    fn test_batch_size_is_capped_by_count() {
        let catalog = catalog(40);
        let session = session_with(&catalog, &["1", "2", "3"]);
        let params = RecommendParams {
            count: 5,
            ..RecommendParams::default()
        };

        let Recommendation::Batch(batch) = recommend(&catalog, &session, &params) else {
            panic!("Expected a batch");
        };
        assert_eq!(batch.len(), 5);
    }

    #[test]
    fn test_different_seeds_may_draw_differently() {
        let catalog = catalog(60);
        let session = session_with(&catalog, &["1", "2", "3"]);

        let a = recommend(
            &catalog,
            &session,
            &RecommendParams {
                seed: 1,
                ..RecommendParams::default()
            },
        );
        let b = recommend(
            &catalog,
            &session,
            &RecommendParams {
                seed: 2,
                ..RecommendParams::default()
            },
        );
        // With 57 candidates and 10 slots, two seeds agreeing on the whole
        // batch would be astonishing.
        assert_ne!(a, b);
    }
}
