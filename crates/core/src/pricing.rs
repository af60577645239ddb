//! Cart pricing.
//!
//! No tax, discounts or currency conversion: a total is the plain sum of
//! unit price times quantity.

use crate::cart::{Cart, CartItem};
use crate::types::Price;

/// Price of a single cart line.
#[must_use]
pub fn line_total(item: &CartItem) -> Price {
    item.product.price.times(item.quantity.get())
}

/// Total price of a cart. Zero for an empty cart.
#[must_use]
pub fn total(cart: &Cart) -> Price {
    cart.items().iter().map(line_total).sum()
}

#[cfg(test)]
mod tests {
    use std::num::NonZeroU32;

    use rust_decimal::Decimal;

    use super::*;
    use crate::product::Product;
    use crate::types::ProductId;

    fn item(id: i32, cents: u32, quantity: u32) -> CartItem {
        CartItem {
            product: Product::new(ProductId::new(id), "Item", "General", Price::from_cents(cents)),
            quantity: NonZeroU32::new(quantity).unwrap_or(NonZeroU32::MIN),
        }
    }

    #[test]
    fn test_total_empty_cart_is_zero() {
        assert_eq!(total(&Cart::new()), Price::ZERO);
    }

    #[test]
    fn test_total_sums_price_times_quantity() {
        let cart: Cart = [item(1, 1000, 2), item(2, 500, 1)].into_iter().collect();
        assert_eq!(total(&cart).amount(), Decimal::new(25, 0));
    }

    #[test]
    fn test_line_total() {
        assert_eq!(line_total(&item(1, 350, 2)).to_string(), "7.00");
    }

    #[test]
    fn test_cart_total_delegates() {
        let cart: Cart = [item(1, 199, 3)].into_iter().collect();
        assert_eq!(cart.total(), total(&cart));
        assert_eq!(cart.total().to_string(), "5.97");
    }
}
