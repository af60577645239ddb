//! Session state and the actions that transform it.
//!
//! A [`Session`] holds everything the shell would otherwise keep in
//! globals: the loaded catalog, the current cart and the active filter.
//! Each action takes the current session and returns the next one,
//! persisting the cart whenever it changes.

use std::sync::Arc;

use shelf_core::{Cart, Catalog, Product, ProductFilter, ProductId, Receipt};
use tracing::{error, info, instrument};

use crate::error::ActionError;
use crate::storage::Storage;

/// The shell's mutable state, passed to and returned from every action.
///
/// Cloning is cheap: the catalog is shared via `Arc`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    catalog: Arc<Catalog>,
    cart: Cart,
    filter: ProductFilter,
}

impl Session {
    /// Create a session over `catalog` with `cart` and no filter.
    #[must_use]
    pub fn new(catalog: Catalog, cart: Cart) -> Self {
        Self {
            catalog: Arc::new(catalog),
            cart,
            filter: ProductFilter::all(),
        }
    }

    /// Load the catalog and persisted cart from `storage`.
    #[must_use]
    pub fn open(storage: &Storage) -> Self {
        let session = Self::new(storage.load_catalog(), storage.load_cart());
        info!(
            products = session.catalog.len(),
            cart_items = session.cart.len(),
            "Session opened"
        );
        session
    }

    /// The loaded catalog.
    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// The current cart.
    #[must_use]
    pub const fn cart(&self) -> &Cart {
        &self.cart
    }

    /// The active catalog filter.
    #[must_use]
    pub const fn filter(&self) -> &ProductFilter {
        &self.filter
    }

    /// Products matching the active filter, in catalog order.
    #[must_use]
    pub fn visible_products(&self) -> Vec<&Product> {
        self.filter.apply(&self.catalog)
    }

    /// Switch to a different filtered view. Nothing is persisted.
    #[must_use]
    pub fn with_filter(&self, filter: ProductFilter) -> Self {
        Self {
            filter,
            ..self.clone()
        }
    }

    /// Add one unit of the selected product to the cart and persist it.
    ///
    /// # Errors
    ///
    /// Returns `ActionError::NoSelection` if nothing is selected, or
    /// `ActionError::UnknownProduct` if the ID is not in the catalog.
    #[instrument(skip(self, storage))]
    pub fn add_to_cart(
        &self,
        selection: Option<ProductId>,
        storage: &Storage,
    ) -> Result<Self, ActionError> {
        let id = selection.ok_or(ActionError::NoSelection)?;
        let product = self
            .catalog
            .lookup(id)
            .ok_or(ActionError::UnknownProduct(id))?;

        let cart = self.cart.add(product);
        storage.save_cart(&cart);
        info!(product = %product.name, cart_items = cart.len(), "Added to cart");

        Ok(self.with_cart(cart))
    }

    /// Remove one unit of the selected product from the cart and persist it.
    ///
    /// Selecting a product that is not in the cart leaves everything as is.
    ///
    /// # Errors
    ///
    /// Returns `ActionError::NoSelection` if nothing is selected.
    #[instrument(skip(self, storage))]
    pub fn remove_from_cart(
        &self,
        selection: Option<ProductId>,
        storage: &Storage,
    ) -> Result<Self, ActionError> {
        let id = selection.ok_or(ActionError::NoSelection)?;

        let cart = self.cart.remove(id);
        if cart == self.cart {
            return Ok(self.clone());
        }
        storage.save_cart(&cart);
        info!(%id, cart_items = cart.len(), "Removed from cart");

        Ok(self.with_cart(cart))
    }

    /// Record a receipt for the cart, then empty and persist the cart.
    ///
    /// # Errors
    ///
    /// Returns `ActionError::EmptyCart` if there is nothing to buy, or
    /// `ActionError::ReceiptNotSaved` if the receipt log could not be
    /// written. The cart is left untouched in both cases.
    #[instrument(skip(self, storage))]
    pub fn checkout(&self, storage: &Storage) -> Result<(Self, Receipt), ActionError> {
        if self.cart.is_empty() {
            return Err(ActionError::EmptyCart);
        }

        let total = self.cart.total();
        let receipt = storage
            .save_receipt(&self.cart, total)
            .ok_or(ActionError::ReceiptNotSaved)?;

        let cart = Cart::new();
        if !storage.save_cart(&cart) {
            error!(
                receipt_id = %receipt.id,
                "Receipt recorded but the purchased cart is still on disk"
            );
        }
        info!(receipt_id = %receipt.id, %total, "Checkout complete");

        Ok((self.with_cart(cart), receipt))
    }

    fn with_cart(&self, cart: Cart) -> Self {
        Self {
            catalog: Arc::clone(&self.catalog),
            cart,
            filter: self.filter.clone(),
        }
    }
}
