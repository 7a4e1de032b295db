//! Core domain logic for the kiosk catalog browser.
//!
//! This crate holds the catalog model, session state, search filtering, and
//! recommendation sampling, plus the shared error type. It performs no I/O;
//! loading and scoring implementations live in `kiosk-infrastructure`.

pub mod catalog;
pub mod error;
pub mod recommend;
pub mod search;
pub mod session;

// Re-export the common error type
pub use catalog::{CATALOG_CAP, Catalog, CatalogRepository, ProductRecord};
pub use error::{KioskError, Result};
pub use recommend::{Recommendation, RecommendParams, recommend};
pub use search::{DEFAULT_SEARCH_LIMIT, SearchFilter, SimilarityScorer};
pub use session::{SessionState, ToggleOutcome, View};
