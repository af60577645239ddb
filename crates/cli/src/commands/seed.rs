//! Seed a data directory with the bundled sample catalog.
//!
//! # Usage
//!
//! ```bash
//! # Write data/catalog.json unless it already exists
//! shelf seed
//!
//! # Overwrite an existing catalog
//! shelf seed --force
//! ```

use std::io::Write;
use std::path::PathBuf;

use shelf_core::Product;
use shelf_storefront::{Storage, StorageError};
use thiserror::Error;
use tracing::info;

const SAMPLE_CATALOG: &str = include_str!("../../data/sample_catalog.json");

/// Errors that can occur while seeding.
#[derive(Debug, Error)]
pub enum SeedError {
    /// A catalog is already present and `--force` was not given.
    #[error("Catalog already exists at {0} (use --force to overwrite)")]
    CatalogExists(PathBuf),

    /// The bundled sample data is malformed.
    #[error("Invalid sample catalog: {0}")]
    InvalidSample(#[from] serde_json::Error),

    /// Writing the catalog failed.
    #[error(transparent)]
    Storage(#[from] StorageError),

    /// Writing the summary failed.
    #[error(transparent)]
    Output(#[from] std::io::Error),
}

/// The bundled sample products.
///
/// # Errors
///
/// Returns `serde_json::Error` if the bundled file is malformed.
pub fn sample_products() -> Result<Vec<Product>, serde_json::Error> {
    serde_json::from_str(SAMPLE_CATALOG)
}

/// Write the sample catalog.
///
/// # Arguments
///
/// * `storage` - Target data files
/// * `force` - Overwrite an existing catalog file
///
/// # Errors
///
/// Returns `SeedError` if a catalog exists and `force` is false, or if the
/// catalog cannot be written.
pub fn catalog(storage: &Storage, force: bool, out: &mut impl Write) -> Result<(), SeedError> {
    let path = &storage.config().catalog_path;
    if path.exists() && !force {
        return Err(SeedError::CatalogExists(path.clone()));
    }

    let products = sample_products()?;
    info!(path = %path.display(), products = products.len(), "Seeding catalog");
    storage.try_save_catalog(&products)?;

    writeln!(
        out,
        "Wrote {} products to {}",
        products.len(),
        path.display()
    )?;
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use shelf_core::Catalog;
    use shelf_storefront::StorefrontConfig;
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_sample_catalog_is_valid() {
        let products = sample_products().unwrap();
        let catalog = Catalog::from_products(products.clone());
        assert_eq!(catalog.len(), products.len(), "sample ids must be unique");
        assert!(!catalog.categories().is_empty());
    }

    #[test]
    fn test_seed_writes_catalog() {
        let dir = TempDir::new().unwrap();
        let storage = Storage::new(StorefrontConfig::in_dir(dir.path()));
        let mut out = Vec::new();

        catalog(&storage, false, &mut out).unwrap();

        assert_eq!(storage.load_catalog().len(), sample_products().unwrap().len());
        assert!(String::from_utf8(out).unwrap().starts_with("Wrote 10 products"));
    }

    #[test]
    fn test_seed_refuses_to_overwrite() {
        let dir = TempDir::new().unwrap();
        let storage = Storage::new(StorefrontConfig::in_dir(dir.path()));
        catalog(&storage, false, &mut Vec::new()).unwrap();

        let err = catalog(&storage, false, &mut Vec::new()).unwrap_err();
        assert!(matches!(err, SeedError::CatalogExists(_)));
        assert!(catalog(&storage, true, &mut Vec::new()).is_ok());
    }
}
