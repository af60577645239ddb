//! Product records.

use serde::{Deserialize, Serialize};

use crate::types::{Price, ProductId};

/// A purchasable product.
///
/// Products are immutable once loaded into a [`Catalog`](crate::Catalog).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// Unique product ID.
    pub id: ProductId,
    /// Display name.
    pub name: String,
    /// Category name, compared case-sensitively when filtering.
    pub category: String,
    /// Unit price.
    pub price: Price,
}

impl Product {
    /// Create a new product.
    #[must_use]
    pub fn new(
        id: ProductId,
        name: impl Into<String>,
        category: impl Into<String>,
        price: Price,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            category: category.into(),
            price,
        }
    }
}
