//! Sort modes for the browse projection.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::str::FromStr;

use crate::catalog::Product;
use crate::error::StoreError;

/// Sort modes and their wire tokens (the storefront's `<option>` values).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum SortMode {
    /// Catalog order, no reordering.
    #[default]
    Default,
    /// Price, low to high.
    PriceLow,
    /// Price, high to low.
    PriceHigh,
    /// Highest rated first.
    Rating,
    /// Name A-Z.
    Name,
}

impl SortMode {
    /// Every mode, in presentation order.
    pub const ALL: [SortMode; 5] = [
        SortMode::Default,
        SortMode::PriceLow,
        SortMode::PriceHigh,
        SortMode::Rating,
        SortMode::Name,
    ];

    /// The wire token (e.g., "price-low").
    pub fn as_str(&self) -> &'static str {
        match self {
            SortMode::Default => "default",
            SortMode::PriceLow => "price-low",
            SortMode::PriceHigh => "price-high",
            SortMode::Rating => "rating",
            SortMode::Name => "name",
        }
    }

    /// Human-readable option label.
    pub fn display_name(&self) -> &'static str {
        match self {
            SortMode::Default => "Default",
            SortMode::PriceLow => "Price: Low to High",
            SortMode::PriceHigh => "Price: High to Low",
            SortMode::Rating => "Rating",
            SortMode::Name => "Name (A-Z)",
        }
    }
}

impl FromStr for SortMode {
    type Err = StoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "default" => Ok(SortMode::Default),
            "price-low" => Ok(SortMode::PriceLow),
            "price-high" => Ok(SortMode::PriceHigh),
            "rating" => Ok(SortMode::Rating),
            "name" => Ok(SortMode::Name),
            _ => Err(StoreError::UnknownSortMode(s.to_string())),
        }
    }
}

/// Sort a filtered view. Returns a new sequence; the input is untouched.
///
/// All sorts are stable, so products that compare equal keep their
/// relative order from the input sequence.
pub fn apply_sort<'a>(filtered: &[&'a Product], mode: SortMode) -> Vec<&'a Product> {
    let mut sorted = filtered.to_vec();
    match mode {
        SortMode::Default => {}
        SortMode::PriceLow => sorted.sort_by_key(|p| p.price),
        SortMode::PriceHigh => sorted.sort_by(|a, b| b.price.cmp(&a.price)),
        SortMode::Rating => sorted.sort_by(|a, b| b.rating.total_cmp(&a.rating)),
        SortMode::Name => sorted.sort_by(|a, b| compare_names(&a.name, &b.name)),
    }
    sorted
}

/// Case-insensitive name comparison over Unicode lowercase folds.
fn compare_names(a: &str, b: &str) -> Ordering {
    a.chars()
        .flat_map(char::to_lowercase)
        .cmp(b.chars().flat_map(char::to_lowercase))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::tests::product;

    #[test]
    fn test_mode_tokens_round_trip() {
        for mode in SortMode::ALL {
            assert_eq!(mode.as_str().parse::<SortMode>().unwrap(), mode);
        }
        assert!("price".parse::<SortMode>().is_err());
    }

    #[test]
    fn test_default_is_identity() {
        let a = product("p1", "B", "X", 500);
        let b = product("p2", "A", "X", 100);
        let view = vec![&a, &b];

        let sorted = apply_sort(&view, SortMode::Default);
        let ids: Vec<&str> = sorted.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["p1", "p2"]);
    }

    #[test]
    fn test_price_low_and_high() {
        let a = product("p1", "A", "X", 500);
        let b = product("p2", "B", "X", 100);
        let c = product("p3", "C", "X", 300);
        let view = vec![&a, &b, &c];

        let low = apply_sort(&view, SortMode::PriceLow);
        let prices: Vec<i64> = low.iter().map(|p| p.price).collect();
        assert_eq!(prices, vec![100, 300, 500]);

        let high = apply_sort(&view, SortMode::PriceHigh);
        let prices: Vec<i64> = high.iter().map(|p| p.price).collect();
        assert_eq!(prices, vec![500, 300, 100]);
    }

    #[test]
    fn test_price_ties_are_stable() {
        let a = product("p1", "A", "X", 100);
        let b = product("p2", "B", "X", 100);
        let c = product("p3", "C", "X", 50);
        let view = vec![&a, &b, &c];

        let sorted = apply_sort(&view, SortMode::PriceLow);
        let ids: Vec<&str> = sorted.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["p3", "p1", "p2"]);
    }

    #[test]
    fn test_rating_descending() {
        let mut a = product("p1", "A", "X", 100);
        let mut b = product("p2", "B", "X", 100);
        a.rating = 3.5;
        b.rating = 4.8;
        let view = vec![&a, &b];

        let sorted = apply_sort(&view, SortMode::Rating);
        let ids: Vec<&str> = sorted.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["p2", "p1"]);
    }

    #[test]
    fn test_name_sort_ignores_case() {
        let a = product("p1", "zephyr", "X", 100);
        let b = product("p2", "Alpha", "X", 100);
        let c = product("p3", "beta", "X", 100);
        let view = vec![&a, &b, &c];

        let sorted = apply_sort(&view, SortMode::Name);
        let names: Vec<&str> = sorted.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Alpha", "beta", "zephyr"]);
    }

    #[test]
    fn test_sort_does_not_mutate_input() {
        let a = product("p1", "A", "X", 500);
        let b = product("p2", "B", "X", 100);
        let view = vec![&a, &b];

        let _ = apply_sort(&view, SortMode::PriceLow);
        let ids: Vec<&str> = view.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["p1", "p2"]);
    }
}
