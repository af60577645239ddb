//! Shelf Core - Storefront domain library.
//!
//! This crate provides the data layer used by the other Shelf components:
//! - `storefront` - Persistence, configuration and session handling
//! - `cli` - The `shelf` command-line shell
//!
//! # Architecture
//!
//! The core crate contains only types and pure operations - no I/O, no
//! logging, no configuration. Every cart operation returns a new value
//! instead of mutating its input.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for IDs and prices
//! - [`product`] - Product records
//! - [`catalog`] - ID-to-product mapping and category listing
//! - [`cart`] - Cart lines with increment/decrement semantics
//! - [`pricing`] - Cart totals
//! - [`search`] - Category filter and text search
//! - [`receipt`] - Checkout receipts

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod cart;
pub mod catalog;
pub mod pricing;
pub mod product;
pub mod receipt;
pub mod search;
pub mod types;

pub use cart::{Cart, CartItem};
pub use catalog::Catalog;
pub use product::Product;
pub use receipt::Receipt;
pub use search::ProductFilter;
pub use types::*;
