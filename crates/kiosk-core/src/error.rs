//! Error types for the kiosk application.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A shared error type for the entire kiosk application.
///
/// This provides typed, structured error variants with automatic conversion
/// from common error types via the `From` trait. Load failures are fatal at
/// startup; `UnknownProduct` is recovered at the view layer.
#[derive(Error, Debug, Clone, Serialize, Deserialize)]
pub enum KioskError {
    /// The catalog source is missing or unreadable.
    #[error("Catalog source error: {path}: {message}")]
    CatalogSource { path: String, message: String },

    /// A required column is absent from the catalog source.
    #[error("Catalog source is missing required column '{column}'")]
    MissingColumn { column: String },

    /// A required field is empty on one of the consumed rows.
    #[error("Catalog row {row} has an empty '{column}' field")]
    EmptyField { row: usize, column: String },

    /// Two consumed catalog rows share an id.
    #[error("Duplicate product id '{id}' in catalog source")]
    DuplicateProduct { id: String },

    /// An operation referenced an id that is not in the catalog.
    #[error("Unknown product id '{id}'")]
    UnknownProduct { id: String },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// IO error (file system operations)
    #[error("IO error: {message}")]
    Io { message: String },

    /// Internal error (should not happen in normal operation)
    #[error("Internal error: {0}")]
    Internal(String),
}

impl KioskError {
    /// Creates a CatalogSource error
    pub fn catalog_source(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self::CatalogSource {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Creates a MissingColumn error
    pub fn missing_column(column: impl Into<String>) -> Self {
        Self::MissingColumn {
            column: column.into(),
        }
    }

    /// Creates an EmptyField error
    pub fn empty_field(row: usize, column: impl Into<String>) -> Self {
        Self::EmptyField {
            row,
            column: column.into(),
        }
    }

    /// Creates a DuplicateProduct error
    pub fn duplicate_product(id: impl Into<String>) -> Self {
        Self::DuplicateProduct { id: id.into() }
    }

    /// Creates an UnknownProduct error
    pub fn unknown_product(id: impl Into<String>) -> Self {
        Self::UnknownProduct { id: id.into() }
    }

    /// Creates a Config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Creates an Internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    /// Check if this error means the catalog could not be served at all.
    ///
    /// Returns true for every load-time failure: unreadable source, missing
    /// column, empty required field, duplicate id.
    pub fn is_load_error(&self) -> bool {
        matches!(
            self,
            Self::CatalogSource { .. }
                | Self::MissingColumn { .. }
                | Self::EmptyField { .. }
                | Self::DuplicateProduct { .. }
        )
    }

    /// Check if this is an UnknownProduct error
    pub fn is_unknown_product(&self) -> bool {
        matches!(self, Self::UnknownProduct { .. })
    }

    /// Check if this is a config error
    pub fn is_config(&self) -> bool {
        matches!(self, Self::Config(_))
    }
}

impl From<std::io::Error> for KioskError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            message: format!("{} (kind: {:?})", err, err.kind()),
        }
    }
}

impl From<toml::de::Error> for KioskError {
    fn from(err: toml::de::Error) -> Self {
        Self::Config(err.to_string())
    }
}

/// A type alias for `Result<T, KioskError>`.
pub type Result<T> = std::result::Result<T, KioskError>;
