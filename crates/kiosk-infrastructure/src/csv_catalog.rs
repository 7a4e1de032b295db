//! CSV-backed catalog repository.
//!
//! Reads the product catalog from a CSV file with `product_id`, `title`,
//! and `url` columns, consuming at most [`CATALOG_CAP`] rows. The result is
//! memoized, so the per-interaction "reload" is a cache hit.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use once_cell::sync::OnceCell;

use kiosk_core::catalog::{CATALOG_CAP, Catalog, CatalogRepository, ProductRecord};
use kiosk_core::error::{KioskError, Result};

/// Column names the catalog source must provide.
const ID_COLUMN: &str = "product_id";
const TITLE_COLUMN: &str = "title";
const IMAGE_COLUMN: &str = "url";

/// Loads the catalog from a CSV file and memoizes the result.
///
/// One repository instance serves one source path, so the instance itself
/// is the cache key. The catalog is shared as an `Arc` because every view
/// re-reads it on each interaction.
pub struct CsvCatalogRepository {
    path: PathBuf,
    cache: OnceCell<Arc<Catalog>>,
}

impl CsvCatalogRepository {
    /// Creates a repository for the given CSV file path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            cache: OnceCell::new(),
        }
    }

    /// The source path this repository reads from.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_catalog(path: &Path) -> Result<Catalog> {
        let mut reader = csv::Reader::from_path(path).map_err(|e| {
            KioskError::catalog_source(
                path.display().to_string(),
                format!("failed to open CSV: {e}"),
            )
        })?;

        let headers = reader
            .headers()
            .map_err(|e| {
                KioskError::catalog_source(
                    path.display().to_string(),
                    format!("failed to read headers: {e}"),
                )
            })?
            .clone();

        let id_idx = column_index(&headers, ID_COLUMN)?;
        let title_idx = column_index(&headers, TITLE_COLUMN)?;
        let image_idx = column_index(&headers, IMAGE_COLUMN)?;

        let mut records = Vec::with_capacity(CATALOG_CAP);
        for (row, result) in reader.records().enumerate() {
            // Rows past the cap are never consumed, so errors there cannot
            // fail the load.
            if records.len() == CATALOG_CAP {
                break;
            }

            let row_number = row + 1;
            let record = result.map_err(|e| {
                KioskError::catalog_source(
                    path.display().to_string(),
                    format!("row {row_number}: {e}"),
                )
            })?;

            records.push(ProductRecord {
                id: required_field(&record, row_number, id_idx, ID_COLUMN)?,
                title: required_field(&record, row_number, title_idx, TITLE_COLUMN)?,
                image_url: required_field(&record, row_number, image_idx, IMAGE_COLUMN)?,
            });
        }

        Catalog::from_records(records)
    }
}

fn column_index(headers: &csv::StringRecord, column: &'static str) -> Result<usize> {
    headers
        .iter()
        .position(|header| header == column)
        .ok_or_else(|| KioskError::missing_column(column))
}

fn required_field(
    record: &csv::StringRecord,
    row: usize,
    idx: usize,
    column: &'static str,
) -> Result<String> {
    match record.get(idx) {
        Some(value) if !value.trim().is_empty() => Ok(value.trim().to_string()),
        _ => Err(KioskError::empty_field(row, column)),
    }
}

impl CatalogRepository for CsvCatalogRepository {
    fn load(&self) -> Result<Arc<Catalog>> {
        let catalog = self.cache.get_or_try_init(|| {
            let catalog = Self::read_catalog(&self.path)?;
            tracing::info!(
                path = %self.path.display(),
                records = catalog.len(),
                "catalog loaded"
            );
            Ok::<_, KioskError>(Arc::new(catalog))
        })?;

        Ok(Arc::clone(catalog))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_column_index_reports_missing_column() {
        let headers = csv::StringRecord::from(vec!["product_id", "title"]);
        let err = column_index(&headers, IMAGE_COLUMN).expect_err("Should be missing");
        assert!(matches!(err, KioskError::MissingColumn { ref column } if column == "url"));
    }

    #[test]
    fn test_required_field_trims_and_rejects_empty() {
        let record = csv::StringRecord::from(vec!["  7 ", ""]);
        assert_eq!(
            required_field(&record, 1, 0, ID_COLUMN).expect("Should read field"),
            "7"
        );
        let err = required_field(&record, 1, 1, TITLE_COLUMN).expect_err("Should be empty");
        assert!(matches!(err, KioskError::EmptyField { row: 1, .. }));
    }
}
