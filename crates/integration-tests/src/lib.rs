//! Integration tests for Shelf.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p shelf-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `checkout` - Cart to receipt scenarios against real files
//! - `persistence` - Degraded reads and cart round-trips
//!
//! Every test gets its own data directory from [`TestContext::new`].

use std::fs;
use std::path::Path;

use shelf_core::{Price, Product, ProductId};
use shelf_storefront::{Session, Storage, StorefrontConfig};
use tempfile::TempDir;

/// A throwaway data directory with a storage handle pointing into it.
pub struct TestContext {
    /// Kept alive so the directory is removed on drop.
    pub dir: TempDir,
    pub storage: Storage,
}

impl TestContext {
    /// Create an empty data directory.
    ///
    /// # Panics
    ///
    /// Panics if the temp directory cannot be created.
    #[must_use]
    pub fn new() -> Self {
        let dir = TempDir::new().expect("failed to create temp dir");
        let storage = Storage::new(StorefrontConfig::in_dir(dir.path()));
        Self { dir, storage }
    }

    /// Create a data directory whose catalog holds `products`.
    ///
    /// # Panics
    ///
    /// Panics if the catalog cannot be written.
    #[must_use]
    pub fn with_catalog(products: &[Product]) -> Self {
        let ctx = Self::new();
        ctx.storage
            .try_save_catalog(products)
            .expect("failed to write catalog");
        ctx
    }

    /// Open a fresh session, as the shell does at startup.
    #[must_use]
    pub fn open(&self) -> Session {
        Session::open(&self.storage)
    }

    /// Overwrite a file in the data directory with raw content.
    ///
    /// # Panics
    ///
    /// Panics if the file cannot be written.
    pub fn write_raw(&self, path: &Path, content: &str) {
        fs::write(path, content).expect("failed to write raw file");
    }
}

impl Default for TestContext {
    fn default() -> Self {
        Self::new()
    }
}

/// A product with a price given in cents.
#[must_use]
pub fn product(id: i32, name: &str, category: &str, cents: u32) -> Product {
    Product::new(ProductId::new(id), name, category, Price::from_cents(cents))
}

/// A small clothing catalog used across tests.
#[must_use]
pub fn clothing_catalog() -> Vec<Product> {
    vec![
        product(1, "Oxford Shirt", "Shirts", 3900),
        product(2, "Plain Tee", "T-Shirts", 1200),
        product(3, "Chinos", "Trousers", 5500),
        product(4, "Wool Beanie", "Hats", 1500),
        product(5, "Enamel Mug", "Accessories", 350),
    ]
}
