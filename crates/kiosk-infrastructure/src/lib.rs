//! Infrastructure adapters for the kiosk catalog browser.
//!
//! Implementations of the core trait seams: the CSV-backed catalog
//! repository, the rapidfuzz partial-ratio scorer, and the TOML
//! configuration service.

pub mod config;
pub mod csv_catalog;
pub mod scorer;

pub use config::{AppConfig, CONFIG_FILE, ConfigService, RecommendationConfig, SearchConfig};
pub use csv_catalog::CsvCatalogRepository;
pub use scorer::PartialRatioScorer;
