//! Receipt log commands.

use std::io::{self, Write};

use shelf_storefront::Storage;

use crate::render;

/// List every receipt, oldest first, followed by the grand total.
///
/// # Errors
///
/// Returns `io::Error` if writing to `out` fails.
pub fn list(storage: &Storage, out: &mut impl Write) -> io::Result<()> {
    let receipts = storage.load_receipts();
    if receipts.is_empty() {
        return writeln!(out, "No receipts yet.");
    }

    for receipt in &receipts {
        out.write_all(render::receipt_line(receipt).as_bytes())?;
    }
    let spent: shelf_core::Price = receipts.iter().map(|r| r.total).sum();
    writeln!(out, "{} receipt(s), {} spent", receipts.len(), spent)
}
