//! Catalog browsing commands.
//!
//! # Usage
//!
//! ```bash
//! shelf products
//! shelf products --category Shirts
//! shelf products --search tee
//! shelf categories
//! shelf product 3
//! ```

use std::io::{self, Write};

use shelf_core::{ProductFilter, ProductId};
use shelf_storefront::{ActionError, Session};

use crate::render;

/// List products, optionally filtered by exact category and/or text.
///
/// # Errors
///
/// Returns `io::Error` if writing to `out` fails.
pub fn products(
    session: &Session,
    category: Option<String>,
    search: Option<String>,
    out: &mut impl Write,
) -> io::Result<()> {
    let session = session.with_filter(ProductFilter { category, query: search });
    out.write_all(render::product_table(&session.visible_products()).as_bytes())
}

/// List the distinct category names.
///
/// # Errors
///
/// Returns `io::Error` if writing to `out` fails.
pub fn categories(session: &Session, out: &mut impl Write) -> io::Result<()> {
    out.write_all(render::category_list(&session.catalog().categories()).as_bytes())
}

/// Show a single product.
///
/// # Errors
///
/// Returns `ActionError::UnknownProduct` if the ID is not in the catalog.
pub fn product(
    session: &Session,
    id: ProductId,
    out: &mut impl Write,
) -> Result<(), Box<dyn std::error::Error>> {
    let product = session
        .catalog()
        .lookup(id)
        .ok_or(ActionError::UnknownProduct(id))?;
    out.write_all(render::product_detail(product).as_bytes())?;
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use shelf_core::{Cart, Catalog, Price, Product};

    use super::*;

    fn session() -> Session {
        let catalog = Catalog::from_products([
            Product::new(ProductId::new(1), "Oxford Shirt", "Shirts", Price::from_cents(3900)),
            Product::new(ProductId::new(2), "Plain Tee", "T-Shirts", Price::from_cents(1200)),
            Product::new(ProductId::new(3), "Wool Beanie", "Hats", Price::from_cents(1500)),
        ]);
        Session::new(catalog, Cart::new())
    }

    fn run(f: impl FnOnce(&mut Vec<u8>)) -> String {
        let mut out = Vec::new();
        f(&mut out);
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_products_unfiltered() {
        let output = run(|out| products(&session(), None, None, out).unwrap());
        assert_eq!(output.lines().count(), 4);
    }

    #[test]
    fn test_products_by_category_is_exact() {
        let output = run(|out| products(&session(), Some("Shirts".into()), None, out).unwrap());
        assert!(output.contains("Oxford Shirt"));
        assert!(!output.contains("Plain Tee"));

        let output = run(|out| products(&session(), Some("shirts".into()), None, out).unwrap());
        assert_eq!(output, "No products found.\n");
    }

    #[test]
    fn test_products_search_ignores_case() {
        let output = run(|out| products(&session(), None, Some("SHIRT".into()), out).unwrap());
        assert!(output.contains("Oxford Shirt"));
        assert!(output.contains("Plain Tee"));
        assert!(!output.contains("Wool Beanie"));
    }

    #[test]
    fn test_categories_sorted() {
        let output = run(|out| categories(&session(), out).unwrap());
        assert_eq!(output, "Hats\nShirts\nT-Shirts\n");
    }

    #[test]
    fn test_product_unknown_id() {
        let err = product(&session(), ProductId::new(9), &mut Vec::new()).unwrap_err();
        assert_eq!(
            err.downcast_ref::<ActionError>(),
            Some(&ActionError::UnknownProduct(ProductId::new(9)))
        );
    }

    #[test]
    fn test_product_detail() {
        let output = run(|out| product(&session(), ProductId::new(3), out).unwrap());
        assert!(output.starts_with("#3 Wool Beanie"));
        assert!(output.contains("Price: 15.00"));
    }
}
