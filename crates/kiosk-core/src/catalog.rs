//! Catalog domain model.
//!
//! The catalog is the fixed, loaded set of products available for browsing.
//! It is built once at startup, shared read-only for the lifetime of the
//! process, and never mutated afterwards.

use std::collections::HashMap;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::error::{KioskError, Result};

/// Maximum number of rows consumed from a catalog source.
pub const CATALOG_CAP: usize = 100;

/// A single product row: identifier, display title, image reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductRecord {
    /// Unique identifier within the catalog.
    pub id: String,
    /// Display title shown to the user.
    pub title: String,
    /// Image reference (URL or path); rendered as text in the terminal.
    pub image_url: String,
}

/// An ordered, capped, immutable sequence of products with unique ids.
#[derive(Debug, Clone)]
pub struct Catalog {
    records: Vec<ProductRecord>,
    index: HashMap<String, usize>,
}

impl Catalog {
    /// Builds a catalog from records read from a source, in source order.
    ///
    /// Only the first [`CATALOG_CAP`] records are kept.
    ///
    /// # Errors
    ///
    /// Returns [`KioskError::DuplicateProduct`] when two kept records share
    /// an id.
    pub fn from_records(records: Vec<ProductRecord>) -> Result<Self> {
        let mut records = records;
        records.truncate(CATALOG_CAP);

        let mut index = HashMap::with_capacity(records.len());
        for (pos, record) in records.iter().enumerate() {
            if index.insert(record.id.clone(), pos).is_some() {
                return Err(KioskError::duplicate_product(&record.id));
            }
        }

        Ok(Self { records, index })
    }

    /// Number of products in the catalog.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the catalog holds no products.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// All records in catalog order.
    pub fn records(&self) -> &[ProductRecord] {
        &self.records
    }

    /// Looks up a record by id.
    pub fn get(&self, id: &str) -> Option<&ProductRecord> {
        self.index.get(id).map(|&pos| &self.records[pos])
    }

    /// Whether a record with this id exists.
    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    /// Iterates over records in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = &ProductRecord> {
        self.records.iter()
    }
}

/// Read access to the product catalog.
///
/// Implementations load from their source once and memoize the result, so
/// the per-interaction "reload" of the catalog is a cache hit.
pub trait CatalogRepository: Send + Sync {
    /// Returns the catalog, loading it from the source on first call.
    ///
    /// # Errors
    ///
    /// Returns a load error when the source is missing, unreadable, or
    /// violates the catalog invariants. No partial catalog is ever served.
    fn load(&self) -> Result<Arc<Catalog>>;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: &str, title: &str) -> ProductRecord {
        ProductRecord {
            id: id.to_string(),
            title: title.to_string(),
            image_url: format!("https://img.example/{id}.jpg"),
        }
    }

    #[test]
    fn test_from_records_preserves_order() {
        let catalog = Catalog::from_records(vec![
            record("1", "Red Shoe"),
            record("2", "Blue Shoe"),
            record("3", "Red Hat"),
        ])
        .expect("Should build catalog");

        assert_eq!(catalog.len(), 3);
        let titles: Vec<_> = catalog.iter().map(|r| r.title.as_str()).collect();
        assert_eq!(titles, vec!["Red Shoe", "Blue Shoe", "Red Hat"]);
    }

    #[test]
    fn test_from_records_truncates_to_cap() {
        let records: Vec<_> = (0..CATALOG_CAP + 25)
            .map(|i| record(&i.to_string(), &format!("Product {i}")))
            .collect();

        let catalog = Catalog::from_records(records).expect("Should build catalog");
        assert_eq!(catalog.len(), CATALOG_CAP);
        // Rows past the cap are never consumed.
        assert!(!catalog.contains(&CATALOG_CAP.to_string()));
    }

    #[test]
    fn test_from_records_rejects_duplicate_id() {
        let err = Catalog::from_records(vec![record("1", "Red Shoe"), record("1", "Blue Shoe")])
            .expect_err("Duplicate id should fail");
        assert!(matches!(err, KioskError::DuplicateProduct { ref id } if id == "1"));
    }

    #[test]
    fn test_lookup_by_id() {
        let catalog =
            Catalog::from_records(vec![record("1", "Red Shoe"), record("2", "Blue Shoe")])
                .expect("Should build catalog");

        assert!(catalog.contains("2"));
        assert_eq!(catalog.get("2").map(|r| r.title.as_str()), Some("Blue Shoe"));
        assert!(catalog.get("7").is_none());
    }
}
