//! The criteria tuple driving the visible product projection.

use serde::Serialize;

use crate::browse::{apply_filter, apply_sort, BrandFilter, SortMode};
use crate::catalog::{Catalog, Product};

/// (search text, brand selection, sort mode).
///
/// Held by the session; the projection is a pure function of
/// (catalog, criteria) with no cached output.
#[derive(Debug, Clone, Serialize, PartialEq, Default)]
pub struct BrowseCriteria {
    /// Search text. Empty matches everything.
    pub search: String,
    /// Brand selection.
    pub brand: BrandFilter,
    /// Sort mode.
    pub sort: SortMode,
}

impl BrowseCriteria {
    /// Compute the visible projection: filter first, then sort.
    pub fn project<'a>(&self, catalog: &'a Catalog) -> Vec<&'a Product> {
        let filtered = apply_filter(catalog, &self.search, &self.brand);
        apply_sort(&filtered, self.sort)
    }

    /// Whether the criteria match the whole catalog in original order.
    pub fn is_unfiltered(&self) -> bool {
        self.search.is_empty() && self.brand == BrandFilter::All && self.sort == SortMode::Default
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::tests::product;
    use crate::currency::Currency;

    #[test]
    fn test_filter_composes_before_sort() {
        let catalog = Catalog::new(
            vec![
                product("p1", "Phone A", "X", 1000),
                product("p2", "Phone B", "Y", 500),
                product("p3", "Phone C", "X", 750),
            ],
            Currency::INR,
        )
        .unwrap();

        let criteria = BrowseCriteria {
            search: String::new(),
            brand: BrandFilter::Only("X".to_string()),
            sort: SortMode::PriceLow,
        };

        let view = criteria.project(&catalog);
        let ids: Vec<&str> = view.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["p3", "p1"]);
    }

    #[test]
    fn test_default_criteria_are_unfiltered() {
        let criteria = BrowseCriteria::default();
        assert!(criteria.is_unfiltered());

        let catalog = Catalog::new(
            vec![product("p1", "Phone A", "X", 1000)],
            Currency::INR,
        )
        .unwrap();
        assert_eq!(criteria.project(&catalog).len(), 1);
    }
}
