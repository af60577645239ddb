//! Shopping cart.
//!
//! Cart operations never mutate their input: [`Cart::add`] and
//! [`Cart::remove`] return a new cart value.

use std::num::NonZeroU32;

use serde::{Deserialize, Serialize};

use crate::pricing;
use crate::product::Product;
use crate::types::{Price, ProductId};

/// A line in the cart.
///
/// A quantity of zero cannot be represented; dropping to zero removes the
/// line instead.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartItem {
    /// Snapshot of the product at the time it was added.
    pub product: Product,
    /// Number of units.
    pub quantity: NonZeroU32,
}

impl CartItem {
    /// A single unit of `product`.
    #[must_use]
    pub const fn single(product: Product) -> Self {
        Self {
            product,
            quantity: NonZeroU32::MIN,
        }
    }

    /// Price of this line.
    #[must_use]
    pub fn line_total(&self) -> Price {
        pricing::line_total(self)
    }
}

/// Ordered collection of cart lines, one per distinct product ID.
///
/// Serializes as a plain array of lines. Lines read back with a repeated
/// product ID are merged into the first one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<CartItem>", into = "Vec<CartItem>")]
pub struct Cart {
    items: Vec<CartItem>,
}

impl Cart {
    /// Create an empty cart.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Return a cart with one more unit of `product`.
    ///
    /// Increments the existing line for `product.id`, or appends a new line
    /// with quantity 1.
    #[must_use]
    pub fn add(&self, product: &Product) -> Self {
        let mut items = self.items.clone();
        match items.iter_mut().find(|item| item.product.id == product.id) {
            Some(item) => item.quantity = item.quantity.saturating_add(1),
            None => items.push(CartItem::single(product.clone())),
        }
        Self { items }
    }

    /// Return a cart with one fewer unit of `product_id`.
    ///
    /// A line with quantity 1 is removed entirely. An absent ID leaves the
    /// cart unchanged.
    #[must_use]
    pub fn remove(&self, product_id: ProductId) -> Self {
        self.items
            .iter()
            .filter_map(|item| {
                if item.product.id != product_id {
                    return Some(item.clone());
                }
                NonZeroU32::new(item.quantity.get() - 1).map(|quantity| CartItem {
                    product: item.product.clone(),
                    quantity,
                })
            })
            .collect()
    }

    /// The line for `product_id`, if present.
    #[must_use]
    pub fn get(&self, product_id: ProductId) -> Option<&CartItem> {
        self.items.iter().find(|item| item.product.id == product_id)
    }

    /// All lines in insertion order.
    #[must_use]
    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    /// Number of distinct lines.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the cart has no lines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Total number of units across all lines.
    #[must_use]
    pub fn total_quantity(&self) -> u64 {
        self.items
            .iter()
            .map(|item| u64::from(item.quantity.get()))
            .sum()
    }

    /// Total price of the cart.
    #[must_use]
    pub fn total(&self) -> Price {
        pricing::total(self)
    }
}

impl FromIterator<CartItem> for Cart {
    fn from_iter<I: IntoIterator<Item = CartItem>>(iter: I) -> Self {
        let mut items: Vec<CartItem> = Vec::new();
        for line in iter {
            match items.iter_mut().find(|item| item.product.id == line.product.id) {
                Some(item) => item.quantity = item.quantity.saturating_add(line.quantity.get()),
                None => items.push(line),
            }
        }
        Self { items }
    }
}

impl From<Vec<CartItem>> for Cart {
    fn from(items: Vec<CartItem>) -> Self {
        items.into_iter().collect()
    }
}

impl From<Cart> for Vec<CartItem> {
    fn from(cart: Cart) -> Self {
        cart.items
    }
}
