//! Checkout receipts.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::cart::{Cart, CartItem};
use crate::types::Price;

/// Immutable record of a completed checkout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Receipt {
    /// Unique receipt ID.
    pub id: Uuid,
    /// When the checkout happened.
    pub date: DateTime<Utc>,
    /// Cart lines at checkout.
    pub items: Vec<CartItem>,
    /// Amount charged.
    pub total: Price,
}

impl Receipt {
    /// Snapshot `cart` into a receipt dated `date`.
    #[must_use]
    pub fn new(cart: &Cart, total: Price, date: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4(),
            date,
            items: cart.items().to_vec(),
            total,
        }
    }

    /// Total number of units purchased.
    #[must_use]
    pub fn total_quantity(&self) -> u64 {
        self.items
            .iter()
            .map(|item| u64::from(item.quantity.get()))
            .sum()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::product::Product;
    use crate::types::ProductId;

    #[test]
    fn test_receipt_snapshots_cart() {
        let product = Product::new(ProductId::new(1), "Mug", "Kitchen", Price::from_cents(350));
        let cart = Cart::new().add(&product).add(&product);
        let receipt = Receipt::new(&cart, cart.total(), Utc::now());

        assert_eq!(receipt.items, cart.items());
        assert_eq!(receipt.total.to_string(), "7.00");
        assert_eq!(receipt.total_quantity(), 2);
    }

    #[test]
    fn test_receipt_ids_are_unique() {
        let cart = Cart::new();
        let a = Receipt::new(&cart, Price::ZERO, Utc::now());
        let b = Receipt::new(&cart, Price::ZERO, Utc::now());
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_receipt_json_fields() {
        let receipt = Receipt::new(&Cart::new(), Price::ZERO, Utc::now());
        let json = serde_json::to_value(&receipt).unwrap();

        for field in ["id", "date", "items", "total"] {
            assert!(json.get(field).is_some(), "missing field {field}");
        }
    }
}
