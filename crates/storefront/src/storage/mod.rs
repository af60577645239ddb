//! Flat-file JSON persistence for the catalog, cart and receipt log.
//!
//! # Files
//!
//! - `catalog.json` - Product records, read once at startup
//! - `cart.json` - Current cart, rewritten after every mutation
//! - `receipts.json` - Receipt log, read-modify-rewritten on checkout
//!
//! The public `load_*`/`save_*` methods never fail: errors are logged and
//! degrade to an empty result (reads) or a dropped write. Each has a
//! `try_*` counterpart that returns the underlying
//! [`StorageError`](crate::error::StorageError).
//!
//! Checkout is not transactional. A crash between reading and rewriting the
//! receipt log can lose receipts appended in between, which only matters if
//! more than one process shares the data directory.

pub mod json;

use chrono::Utc;
use shelf_core::{Cart, CartItem, Catalog, Price, Product, Receipt};
use tracing::{error, info, warn};

use crate::config::StorefrontConfig;
use crate::error::Result;

/// Access to the storefront's data files.
#[derive(Debug, Clone)]
pub struct Storage {
    config: StorefrontConfig,
}

impl Storage {
    /// Create a storage handle for the files named in `config`.
    #[must_use]
    pub const fn new(config: StorefrontConfig) -> Self {
        Self { config }
    }

    /// The configured file locations.
    #[must_use]
    pub const fn config(&self) -> &StorefrontConfig {
        &self.config
    }

    // =========================================================================
    // Catalog
    // =========================================================================

    /// Load the catalog, or an empty one if the file is missing or invalid.
    #[must_use]
    pub fn load_catalog(&self) -> Catalog {
        self.try_load_catalog().unwrap_or_else(|e| {
            warn!(error = %e, "Failed to load catalog, starting with an empty catalog");
            Catalog::new()
        })
    }

    /// Load the catalog.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the file exists but cannot be read or parsed.
    pub fn try_load_catalog(&self) -> Result<Catalog> {
        let path = &self.config.catalog_path;
        let products: Vec<Product> = json::read_list(path)?;
        let catalog = Catalog::from_products(products);
        info!(path = %path.display(), products = catalog.len(), "Catalog loaded");
        Ok(catalog)
    }

    /// Overwrite the catalog file.
    ///
    /// The application treats the catalog as read-only; this exists for
    /// seeding a data directory.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the file cannot be written.
    pub fn try_save_catalog(&self, products: &[Product]) -> Result<()> {
        json::write_pretty(&self.config.catalog_path, products)?;
        info!(
            path = %self.config.catalog_path.display(),
            products = products.len(),
            "Catalog written"
        );
        Ok(())
    }

    // =========================================================================
    // Cart
    // =========================================================================

    /// Load the persisted cart, or an empty cart on any failure.
    #[must_use]
    pub fn load_cart(&self) -> Cart {
        self.try_load_cart().unwrap_or_else(|e| {
            warn!(error = %e, "Failed to load cart, starting with an empty cart");
            Cart::new()
        })
    }

    /// Load the persisted cart.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the file exists but cannot be read or parsed.
    pub fn try_load_cart(&self) -> Result<Cart> {
        let items: Vec<CartItem> = json::read_list(&self.config.cart_path)?;
        Ok(items.into_iter().collect())
    }

    /// Persist `cart`, logging and dropping any failure.
    ///
    /// Returns whether the write succeeded.
    pub fn save_cart(&self, cart: &Cart) -> bool {
        match self.try_save_cart(cart) {
            Ok(()) => true,
            Err(e) => {
                error!(error = %e, "Failed to save cart");
                false
            }
        }
    }

    /// Persist `cart`.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the file cannot be written.
    pub fn try_save_cart(&self, cart: &Cart) -> Result<()> {
        json::write_pretty(&self.config.cart_path, cart)?;
        info!(
            path = %self.config.cart_path.display(),
            items = cart.len(),
            "Cart saved"
        );
        Ok(())
    }

    // =========================================================================
    // Receipts
    // =========================================================================

    /// Load the receipt log, or an empty log on any failure.
    #[must_use]
    pub fn load_receipts(&self) -> Vec<Receipt> {
        self.try_load_receipts().unwrap_or_else(|e| {
            warn!(error = %e, "Failed to load receipt log, treating it as empty");
            Vec::new()
        })
    }

    /// Load the receipt log.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the file exists but cannot be read or parsed.
    pub fn try_load_receipts(&self) -> Result<Vec<Receipt>> {
        json::read_list(&self.config.receipts_path)
    }

    /// Append a receipt for `cart` to the log.
    ///
    /// Returns the new receipt, or `None` if the log could not be written.
    pub fn save_receipt(&self, cart: &Cart, total: Price) -> Option<Receipt> {
        self.try_save_receipt(cart, total)
            .inspect_err(|e| error!(error = %e, "Failed to save receipt"))
            .ok()
    }

    /// Append a receipt for `cart` to the log.
    ///
    /// An unreadable existing log is treated as empty and replaced.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the log cannot be written.
    pub fn try_save_receipt(&self, cart: &Cart, total: Price) -> Result<Receipt> {
        let mut receipts = self.load_receipts();
        let receipt = Receipt::new(cart, total, Utc::now());
        receipts.push(receipt.clone());

        json::write_pretty(&self.config.receipts_path, &receipts)?;
        info!(
            path = %self.config.receipts_path.display(),
            receipt_id = %receipt.id,
            items = receipt.items.len(),
            total = %receipt.total,
            "Receipt saved"
        );
        Ok(receipt)
    }
}

impl From<StorefrontConfig> for Storage {
    fn from(config: StorefrontConfig) -> Self {
        Self::new(config)
    }
}
