//! Cart and checkout commands.
//!
//! Every mutating command persists the cart before rendering it.
//!
//! # Usage
//!
//! ```bash
//! shelf cart show
//! shelf cart add 3
//! shelf cart remove 3
//! shelf checkout
//! ```

use std::io::{self, Write};

use shelf_core::ProductId;
use shelf_storefront::{Session, Storage};

use crate::render;

/// Show the current cart.
///
/// # Errors
///
/// Returns `io::Error` if writing to `out` fails.
pub fn show(session: &Session, out: &mut impl Write) -> io::Result<()> {
    out.write_all(render::cart_view(session.cart()).as_bytes())
}

/// Add one unit of a product.
///
/// # Errors
///
/// Returns `ActionError` if the product is unknown, or `io::Error` if
/// writing to `out` fails.
pub fn add(
    session: &Session,
    storage: &Storage,
    id: ProductId,
    out: &mut impl Write,
) -> Result<Session, Box<dyn std::error::Error>> {
    let session = session.add_to_cart(Some(id), storage)?;
    show(&session, out)?;
    Ok(session)
}

/// Remove one unit of a product.
///
/// # Errors
///
/// Returns `io::Error` if writing to `out` fails.
pub fn remove(
    session: &Session,
    storage: &Storage,
    id: ProductId,
    out: &mut impl Write,
) -> Result<Session, Box<dyn std::error::Error>> {
    let session = session.remove_from_cart(Some(id), storage)?;
    show(&session, out)?;
    Ok(session)
}

/// Check out the cart, printing the receipt.
///
/// # Errors
///
/// Returns `ActionError::EmptyCart` if the cart is empty,
/// `ActionError::ReceiptNotSaved` if the receipt could not be stored, or
/// `io::Error` if writing to `out` fails.
pub fn checkout(
    session: &Session,
    storage: &Storage,
    out: &mut impl Write,
) -> Result<Session, Box<dyn std::error::Error>> {
    let (session, receipt) = session.checkout(storage)?;
    out.write_all(render::receipt_detail(&receipt).as_bytes())?;
    writeln!(out, "Thank you for your purchase!")?;
    Ok(session)
}
