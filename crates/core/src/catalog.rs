//! The product catalog.
//!
//! A [`Catalog`] is built once from persisted product records and never
//! mutated afterwards. Iteration is in ascending product ID order.

use std::collections::{BTreeMap, BTreeSet};

use crate::product::Product;
use crate::types::ProductId;

/// Immutable mapping from product ID to product.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    products: BTreeMap<ProductId, Product>,
}

impl Catalog {
    /// Create an empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a catalog from product records.
    ///
    /// When two records share an ID the later one wins.
    #[must_use]
    pub fn from_products(products: impl IntoIterator<Item = Product>) -> Self {
        products.into_iter().collect()
    }

    /// Look up a product by ID.
    #[must_use]
    pub fn lookup(&self, id: ProductId) -> Option<&Product> {
        self.products.get(&id)
    }

    /// Distinct category names, sorted ascending.
    #[must_use]
    pub fn categories(&self) -> Vec<String> {
        self.products
            .values()
            .map(|p| p.category.as_str())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .map(str::to_owned)
            .collect()
    }

    /// Iterate over all products in ID order.
    pub fn products(&self) -> impl Iterator<Item = &Product> {
        self.products.values()
    }

    /// Number of products.
    #[must_use]
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Whether the catalog has no products.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

impl FromIterator<Product> for Catalog {
    fn from_iter<I: IntoIterator<Item = Product>>(iter: I) -> Self {
        let products = iter.into_iter().map(|p| (p.id, p)).collect();
        Self { products }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::types::Price;

    fn product(id: i32, name: &str, category: &str) -> Product {
        Product::new(ProductId::new(id), name, category, Price::from_cents(100))
    }

    #[test]
    fn test_lookup_returns_every_source_product() {
        let source = vec![
            product(1, "Oxford Shirt", "Shirts"),
            product(2, "Chinos", "Trousers"),
            product(3, "Beanie", "Hats"),
        ];
        let catalog = Catalog::from_products(source.clone());

        for p in &source {
            assert_eq!(catalog.lookup(p.id), Some(p));
        }
        assert_eq!(catalog.len(), 3);
    }

    #[test]
    fn test_lookup_missing_id() {
        let catalog = Catalog::from_products([product(1, "Chinos", "Trousers")]);
        assert!(catalog.lookup(ProductId::new(99)).is_none());
    }

    #[test]
    fn test_duplicate_ids_later_wins() {
        let catalog = Catalog::from_products([
            product(1, "First", "A"),
            product(1, "Second", "B"),
        ]);

        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.lookup(ProductId::new(1)).unwrap().name, "Second");
    }

    #[test]
    fn test_categories_sorted_and_distinct() {
        let catalog = Catalog::from_products([
            product(1, "Beanie", "Hats"),
            product(2, "Oxford", "Shirts"),
            product(3, "Cap", "Hats"),
            product(4, "Belt", "Accessories"),
        ]);

        assert_eq!(catalog.categories(), vec!["Accessories", "Hats", "Shirts"]);
    }

    #[test]
    fn test_empty_catalog() {
        let catalog = Catalog::new();
        assert!(catalog.is_empty());
        assert!(catalog.categories().is_empty());
        assert_eq!(catalog.products().count(), 0);
    }

    #[test]
    fn test_products_iterate_in_id_order() {
        let catalog = Catalog::from_products([
            product(3, "C", "X"),
            product(1, "A", "X"),
            product(2, "B", "X"),
        ]);
        let ids: Vec<i32> = catalog.products().map(|p| p.id.as_i32()).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }
}
