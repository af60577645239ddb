//! Catalog filtering and search.
//!
//! Category filtering is an exact, case-sensitive comparison. Text search
//! is a case-insensitive substring match on name or category. The two
//! intentionally disagree on case handling.

use crate::catalog::Catalog;
use crate::product::Product;

/// Products whose category equals `category` exactly, in catalog order.
#[must_use]
pub fn filter_by_category<'a>(category: &str, catalog: &'a Catalog) -> Vec<&'a Product> {
    catalog
        .products()
        .filter(|p| p.category == category)
        .collect()
}

/// Products whose name or category contains `query`, ignoring case.
///
/// The query is trimmed and lowercased first. A blank query matches every
/// product; callers that want "no filter" semantics should skip the call.
#[must_use]
pub fn search<'a>(query: &str, catalog: &'a Catalog) -> Vec<&'a Product> {
    let needle = normalize(query);
    catalog
        .products()
        .filter(|p| matches_query(p, &needle))
        .collect()
}

fn normalize(query: &str) -> String {
    query.trim().to_lowercase()
}

fn matches_query(product: &Product, needle: &str) -> bool {
    product.name.to_lowercase().contains(needle) || product.category.to_lowercase().contains(needle)
}

/// Combined category and text filter used to build a catalog view.
///
/// `None` for either field disables that filter. A query that is blank
/// after trimming is treated as `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductFilter {
    /// Exact category to keep.
    pub category: Option<String>,
    /// Free-text query.
    pub query: Option<String>,
}

impl ProductFilter {
    /// A filter that keeps every product.
    #[must_use]
    pub fn all() -> Self {
        Self::default()
    }

    /// Keep only products in `category`.
    #[must_use]
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Keep only products matching `query`.
    #[must_use]
    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = Some(query.into());
        self
    }

    /// Whether this filter keeps every product.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.category.is_none() && self.active_query().is_none()
    }

    fn active_query(&self) -> Option<String> {
        self.query
            .as_deref()
            .map(normalize)
            .filter(|q| !q.is_empty())
    }

    /// Apply the filter to `catalog`, preserving catalog order.
    #[must_use]
    pub fn apply<'a>(&self, catalog: &'a Catalog) -> Vec<&'a Product> {
        let needle = self.active_query();
        catalog
            .products()
            .filter(|p| self.category.as_ref().is_none_or(|c| &p.category == c))
            .filter(|p| needle.as_deref().is_none_or(|n| matches_query(p, n)))
            .collect()
    }
}
