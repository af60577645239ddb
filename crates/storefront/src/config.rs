//! Storefront configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Optional
//! - `SHELF_DATA_DIR` - Directory holding the data files (default: `data`)
//! - `SHELF_CATALOG_FILE` - Catalog file name (default: `catalog.json`)
//! - `SHELF_CART_FILE` - Cart file name (default: `cart.json`)
//! - `SHELF_RECEIPTS_FILE` - Receipt log file name (default: `receipts.json`)
//!
//! File names are resolved against the data directory unless absolute.

use std::path::{Path, PathBuf};

use thiserror::Error;

const DEFAULT_DATA_DIR: &str = "data";
const DEFAULT_CATALOG_FILE: &str = "catalog.json";
const DEFAULT_CART_FILE: &str = "cart.json";
const DEFAULT_RECEIPTS_FILE: &str = "receipts.json";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Locations of the storefront's data files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorefrontConfig {
    /// Directory the relative file names are resolved against
    pub data_dir: PathBuf,
    /// Product catalog (read-only)
    pub catalog_path: PathBuf,
    /// Persisted cart, rewritten on every mutation
    pub cart_path: PathBuf,
    /// Append-only receipt log
    pub receipts_path: PathBuf,
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self::in_dir(DEFAULT_DATA_DIR)
    }
}

impl StorefrontConfig {
    /// Default file names inside `data_dir`.
    #[must_use]
    pub fn in_dir(data_dir: impl Into<PathBuf>) -> Self {
        let data_dir = data_dir.into();
        Self {
            catalog_path: data_dir.join(DEFAULT_CATALOG_FILE),
            cart_path: data_dir.join(DEFAULT_CART_FILE),
            receipts_path: data_dir.join(DEFAULT_RECEIPTS_FILE),
            data_dir,
        }
    }

    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set but empty.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration from an arbitrary variable lookup.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is present but empty.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str, default: &str| -> Result<String, ConfigError> {
            match lookup(key) {
                None => Ok(default.to_string()),
                Some(value) if value.trim().is_empty() => Err(ConfigError::InvalidEnvVar(
                    key.to_string(),
                    "must not be empty".to_string(),
                )),
                Some(value) => Ok(value),
            }
        };

        let data_dir = PathBuf::from(get("SHELF_DATA_DIR", DEFAULT_DATA_DIR)?);
        let catalog_file = get("SHELF_CATALOG_FILE", DEFAULT_CATALOG_FILE)?;
        let cart_file = get("SHELF_CART_FILE", DEFAULT_CART_FILE)?;
        let receipts_file = get("SHELF_RECEIPTS_FILE", DEFAULT_RECEIPTS_FILE)?;

        Ok(Self {
            catalog_path: data_dir.join(catalog_file),
            cart_path: data_dir.join(cart_file),
            receipts_path: data_dir.join(receipts_file),
            data_dir,
        })
    }

    /// Move every path that lives under the current data directory to
    /// `data_dir`. Absolute file overrides are left alone.
    #[must_use]
    pub fn with_data_dir(self, data_dir: impl Into<PathBuf>) -> Self {
        let data_dir = data_dir.into();
        let relocate = |path: PathBuf| rebase(&self.data_dir, &data_dir, path);
        Self {
            catalog_path: relocate(self.catalog_path.clone()),
            cart_path: relocate(self.cart_path.clone()),
            receipts_path: relocate(self.receipts_path.clone()),
            data_dir,
        }
    }
}

fn rebase(old_dir: &Path, new_dir: &Path, path: PathBuf) -> PathBuf {
    match path.strip_prefix(old_dir) {
        Ok(relative) => new_dir.join(relative),
        Err(_) => path,
    }
}
