//! Brand and search filtering.

use serde::{Deserialize, Serialize};

use crate::catalog::{Catalog, Product};

/// Wire/CLI sentinel meaning "no brand filter".
pub const ALL_BRANDS_TOKEN: &str = "ALL";

/// Brand selection for the browse projection.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum BrandFilter {
    /// Match every brand.
    #[default]
    All,
    /// Match a single brand exactly.
    Only(String),
}

impl BrandFilter {
    /// Parse the presentation token: "ALL" maps to [`BrandFilter::All`],
    /// anything else selects that brand.
    pub fn from_token(token: &str) -> Self {
        if token == ALL_BRANDS_TOKEN {
            BrandFilter::All
        } else {
            BrandFilter::Only(token.to_string())
        }
    }

    /// The presentation token for this selection.
    pub fn as_token(&self) -> &str {
        match self {
            BrandFilter::All => ALL_BRANDS_TOKEN,
            BrandFilter::Only(brand) => brand,
        }
    }

    /// Whether a product brand passes this filter.
    pub fn matches(&self, brand: &str) -> bool {
        match self {
            BrandFilter::All => true,
            BrandFilter::Only(selected) => selected == brand,
        }
    }
}

/// Distinct brands in first-seen catalog order.
///
/// The "ALL" sentinel is a presentation concern and is never included.
pub fn brand_list(catalog: &Catalog) -> Vec<String> {
    let mut brands: Vec<String> = Vec::new();
    for product in catalog.iter() {
        if !brands.iter().any(|b| b == &product.brand) {
            brands.push(product.brand.clone());
        }
    }
    brands
}

/// Filter the catalog by brand selection and search text.
///
/// The search gate is empty-matches-everything OR a case-insensitive
/// substring match against the product name or brand. Catalog order is
/// preserved.
pub fn apply_filter<'a>(
    catalog: &'a Catalog,
    search: &str,
    brand: &BrandFilter,
) -> Vec<&'a Product> {
    let needle = search.to_lowercase();
    catalog
        .iter()
        .filter(|p| brand.matches(&p.brand))
        .filter(|p| {
            needle.is_empty()
                || p.name.to_lowercase().contains(&needle)
                || p.brand.to_lowercase().contains(&needle)
        })
        .collect()
}
