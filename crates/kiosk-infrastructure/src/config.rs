//! Application configuration loaded from an optional `kiosk.toml`.
//!
//! The process boundary carries no CLI flags or environment variables, so
//! the only tunables live in a TOML file next to the working directory. A
//! missing file is not an error: defaults apply.

use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock};

use serde::{Deserialize, Serialize};

use kiosk_core::error::Result;
use kiosk_core::recommend::RecommendParams;
use kiosk_core::search::DEFAULT_SEARCH_LIMIT;

/// File the configuration is read from, relative to the working directory.
pub const CONFIG_FILE: &str = "kiosk.toml";

fn default_catalog_path() -> PathBuf {
    PathBuf::from("clean.csv")
}

fn default_search_limit() -> usize {
    DEFAULT_SEARCH_LIMIT
}

fn default_seed() -> u64 {
    42
}

fn default_count() -> usize {
    10
}

fn default_min_selections() -> usize {
    3
}

/// Search tunables.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Distinct titles kept per query.
    #[serde(default = "default_search_limit")]
    pub limit: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            limit: default_search_limit(),
        }
    }
}

/// Recommendation tunables.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendationConfig {
    /// Seed for the sampling generator.
    #[serde(default = "default_seed")]
    pub seed: u64,
    /// Maximum batch size.
    #[serde(default = "default_count")]
    pub count: usize,
    /// Selections required before a batch is produced.
    #[serde(default = "default_min_selections")]
    pub min_selections: usize,
}

impl Default for RecommendationConfig {
    fn default() -> Self {
        Self {
            seed: default_seed(),
            count: default_count(),
            min_selections: default_min_selections(),
        }
    }
}

impl RecommendationConfig {
    /// The draw parameters this configuration describes.
    pub fn params(&self) -> RecommendParams {
        RecommendParams {
            seed: self.seed,
            count: self.count,
            min_selections: self.min_selections,
        }
    }
}

/// Root configuration for the kiosk binary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Path of the catalog CSV file.
    #[serde(default = "default_catalog_path")]
    pub catalog: PathBuf,
    #[serde(default)]
    pub search: SearchConfig,
    #[serde(default)]
    pub recommendations: RecommendationConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            catalog: default_catalog_path(),
            search: SearchConfig::default(),
            recommendations: RecommendationConfig::default(),
        }
    }
}

/// Configuration service that loads and caches the application configuration.
///
/// The configuration is read from [`CONFIG_FILE`] on first access and cached
/// to avoid repeated file I/O.
#[derive(Debug, Clone, Default)]
pub struct ConfigService {
    /// Cached configuration loaded from file.
    /// Uses RwLock for thread-safe lazy loading.
    config: Arc<RwLock<Option<AppConfig>>>,
}

impl ConfigService {
    /// Creates a new ConfigService.
    ///
    /// The configuration is loaded lazily on first access.
    pub fn new() -> Self {
        Self::default()
    }

    /// Gets the configuration, loading from file if not cached.
    ///
    /// # Errors
    ///
    /// Returns a config error when the file exists but cannot be read or
    /// parsed. A missing file yields the defaults.
    pub fn get_config(&self) -> Result<AppConfig> {
        // Check if already cached
        {
            let read_lock = self.config.read().unwrap();
            if let Some(ref cached) = *read_lock {
                return Ok(cached.clone());
            }
        }

        let loaded = Self::load_from(Path::new(CONFIG_FILE))?;

        // Cache it
        {
            let mut write_lock = self.config.write().unwrap();
            *write_lock = Some(loaded.clone());
        }

        Ok(loaded)
    }

    /// Invalidates the cache, forcing a reload on next access.
    pub fn invalidate_cache(&self) {
        let mut write_lock = self.config.write().unwrap();
        *write_lock = None;
    }

    /// Loads the configuration from a specific path.
    ///
    /// # Errors
    ///
    /// Returns an IO error when the file exists but cannot be read, or a
    /// config error when it cannot be parsed.
    pub fn load_from(path: &Path) -> Result<AppConfig> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(AppConfig::default());
        }

        let raw = std::fs::read_to_string(path)?;
        let config: AppConfig = toml::from_str(&raw)?;
        tracing::info!(path = %path.display(), "configuration loaded");
        Ok(config)
    }
}
