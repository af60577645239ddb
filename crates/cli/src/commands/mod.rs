//! Subcommand implementations.
//!
//! Commands write their views to the supplied writer so they can be
//! exercised without a terminal.

pub mod cart;
pub mod catalog;
pub mod receipts;
pub mod seed;
