//! Browse projection: filter, sort, and the criteria tuple.
//!
//! Everything here is purely functional over (catalog, criteria); the
//! projection is recomputed on every read and never cached.

mod criteria;
mod filter;
mod sort;

pub use criteria::BrowseCriteria;
pub use filter::{apply_filter, brand_list, BrandFilter};
pub use sort::{apply_sort, SortMode};
