//! Plain-text views of the catalog, cart and receipts.

use std::fmt::Write;

use shelf_core::{Cart, Product, Receipt};

/// Render products as an aligned table.
#[must_use]
pub fn product_table(products: &[&Product]) -> String {
    if products.is_empty() {
        return "No products found.\n".to_string();
    }

    let name_width = column_width("NAME", products.iter().map(|p| p.name.as_str()));
    let category_width = column_width("CATEGORY", products.iter().map(|p| p.category.as_str()));

    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:>5}  {:<name_width$}  {:<category_width$}  {:>10}",
        "ID", "NAME", "CATEGORY", "PRICE"
    );
    for p in products {
        let _ = writeln!(
            out,
            "{:>5}  {:<name_width$}  {:<category_width$}  {:>10}",
            p.id, p.name, p.category, p.price
        );
    }
    out
}

/// Render a single product.
#[must_use]
pub fn product_detail(product: &Product) -> String {
    format!(
        "#{} {}\nCategory: {}\nPrice: {}\n",
        product.id, product.name, product.category, product.price
    )
}

/// Render category names, one per line.
#[must_use]
pub fn category_list(categories: &[String]) -> String {
    if categories.is_empty() {
        return "No categories.\n".to_string();
    }
    categories.iter().fold(String::new(), |mut out, c| {
        let _ = writeln!(out, "{c}");
        out
    })
}

/// Render the cart with line totals and a grand total.
#[must_use]
pub fn cart_view(cart: &Cart) -> String {
    if cart.is_empty() {
        return "Your cart is empty.\n".to_string();
    }

    let name_width = column_width("ITEM", cart.items().iter().map(|i| i.product.name.as_str()));

    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:>5}  {:<name_width$}  {:>10}  {:>10}",
        "QTY", "ITEM", "EACH", "SUBTOTAL"
    );
    for item in cart.items() {
        let _ = writeln!(
            out,
            "{:>5}  {:<name_width$}  {:>10}  {:>10}",
            item.quantity,
            item.product.name,
            item.product.price,
            item.line_total()
        );
    }
    let _ = writeln!(out, "Total: {}", cart.total());
    out
}

/// Render a one-line receipt summary.
#[must_use]
pub fn receipt_line(receipt: &Receipt) -> String {
    format!(
        "{}  {}  {} item(s)  {}\n",
        receipt.date.format("%Y-%m-%d %H:%M:%S"),
        receipt.id,
        receipt.total_quantity(),
        receipt.total
    )
}

/// Render a receipt with every line.
#[must_use]
pub fn receipt_detail(receipt: &Receipt) -> String {
    let mut out = format!(
        "Receipt {}\nDate: {}\n",
        receipt.id,
        receipt.date.format("%Y-%m-%d %H:%M:%S UTC")
    );
    for item in &receipt.items {
        let _ = writeln!(
            out,
            "  {} x {} @ {} = {}",
            item.quantity,
            item.product.name,
            item.product.price,
            item.line_total()
        );
    }
    let _ = writeln!(out, "Total: {}", receipt.total);
    out
}

fn column_width<'a>(header: &str, values: impl Iterator<Item = &'a str>) -> usize {
    values
        .map(|v| v.chars().count())
        .chain(std::iter::once(header.len()))
        .max()
        .unwrap_or(0)
}
