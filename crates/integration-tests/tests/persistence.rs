//! Integration tests for degraded reads and file formats.
//!
//! Missing, empty and malformed files must never surface as errors from the
//! non-`try_` storage API.

#![allow(clippy::unwrap_used, clippy::indexing_slicing)]

use rust_decimal::Decimal;
use shelf_core::{Cart, ProductId};
use shelf_integration_tests::{TestContext, clothing_catalog, product};

// =============================================================================
// Catalog
// =============================================================================

#[test]
fn test_every_catalog_product_can_be_looked_up() {
    let products = clothing_catalog();
    let ctx = TestContext::with_catalog(&products);
    let catalog = ctx.storage.load_catalog();

    for p in &products {
        assert_eq!(catalog.lookup(p.id), Some(p));
    }
}

#[test]
fn test_catalog_degrades_to_empty() {
    let ctx = TestContext::new();
    let path = ctx.storage.config().catalog_path.clone();

    assert!(ctx.storage.load_catalog().is_empty());

    ctx.write_raw(&path, "");
    assert!(ctx.storage.load_catalog().is_empty());

    ctx.write_raw(&path, "[{\"id\": 1, \"name\": ");
    assert!(ctx.storage.load_catalog().is_empty());
}

#[test]
fn test_catalog_hand_written_json() {
    let ctx = TestContext::new();
    ctx.write_raw(
        &ctx.storage.config().catalog_path,
        r#"[
            {"id": 2, "name": "Chinos", "category": "Trousers", "price": 55},
            {"id": 1, "name": "Tee", "category": "T-Shirts", "price": "12.00"},
            {"id": 2, "name": "Cords", "category": "Trousers", "price": 60.5}
        ]"#,
    );

    let catalog = ctx.storage.load_catalog();
    assert_eq!(catalog.len(), 2);
    let cords = catalog.lookup(ProductId::new(2)).unwrap();
    assert_eq!(cords.name, "Cords");
    assert_eq!(cords.price.amount(), Decimal::new(605, 1));
    assert_eq!(catalog.categories(), vec!["T-Shirts", "Trousers"]);
}

#[test]
fn test_catalog_with_negative_price_is_rejected() {
    let ctx = TestContext::new();
    ctx.write_raw(
        &ctx.storage.config().catalog_path,
        r#"[{"id": 1, "name": "Refund", "category": "Misc", "price": -5}]"#,
    );

    assert!(ctx.storage.try_load_catalog().is_err());
    assert!(ctx.storage.load_catalog().is_empty());
}

// =============================================================================
// Cart
// =============================================================================

#[test]
fn test_cart_round_trip_field_for_field() {
    let ctx = TestContext::new();
    let shirt = product(1, "Oxford Shirt", "Shirts", 3900);
    let mug = product(5, "Enamel Mug", "Accessories", 350);
    let cart = Cart::new().add(&shirt).add(&mug).add(&mug);

    assert!(ctx.storage.save_cart(&cart));
    assert_eq!(ctx.storage.load_cart(), cart);
}

#[test]
fn test_cart_file_is_indented_array() {
    let ctx = TestContext::new();
    let cart = Cart::new().add(&product(1, "Oxford Shirt", "Shirts", 3900));
    ctx.storage.save_cart(&cart);

    let raw = std::fs::read_to_string(&ctx.storage.config().cart_path).unwrap();
    assert!(raw.starts_with("[\n  {"));

    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(value[0]["quantity"], 1);
    assert_eq!(value[0]["product"]["name"], "Oxford Shirt");
    assert_eq!(value[0]["product"]["price"], "39.00");
}

#[test]
fn test_cart_degrades_to_empty() {
    let ctx = TestContext::new();
    let path = ctx.storage.config().cart_path.clone();

    assert!(ctx.storage.load_cart().is_empty());

    ctx.write_raw(&path, "   ");
    assert!(ctx.storage.load_cart().is_empty());

    ctx.write_raw(&path, "not json at all");
    assert!(ctx.storage.load_cart().is_empty());
}

#[test]
fn test_cart_file_with_repeated_line_loads_as_one() {
    let ctx = TestContext::with_catalog(&clothing_catalog());
    let line = r#"{"product": {"id": 4, "name": "Wool Beanie", "category": "Hats", "price": "15.00"}, "quantity": 2}"#;
    ctx.write_raw(&ctx.storage.config().cart_path, &format!("[{line}, {line}]"));

    let session = ctx.open();
    assert_eq!(session.cart().len(), 1);
    assert_eq!(session.cart().total().amount(), Decimal::new(6000, 2));

    let session = session
        .remove_from_cart(Some(ProductId::new(4)), &ctx.storage)
        .unwrap();
    assert_eq!(session.cart().total_quantity(), 3);
    assert_eq!(ctx.open().cart(), session.cart());
}

// =============================================================================
// Receipts
// =============================================================================

#[test]
fn test_corrupt_receipt_log_is_replaced() {
    let ctx = TestContext::new();
    ctx.write_raw(&ctx.storage.config().receipts_path, "{broken");
    let cart = Cart::new().add(&product(1, "Mug", "Kitchen", 350));

    let receipt = ctx.storage.save_receipt(&cart, cart.total()).unwrap();

    assert_eq!(ctx.storage.try_load_receipts().unwrap(), vec![receipt]);
}
