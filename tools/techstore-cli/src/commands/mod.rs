//! CLI command implementations.

pub mod brands;
pub mod browse;
pub mod shop;

use clap::Args;

/// Arguments for the browse command.
#[derive(Args)]
pub struct BrowseArgs {
    /// Search text matched against product names and brands.
    #[arg(short, long, default_value = "")]
    pub search: String,

    /// Brand to filter by ("ALL" for no filter).
    #[arg(short, long, default_value = "ALL")]
    pub brand: String,

    /// Sort mode: default, price-low, price-high, rating, name.
    #[arg(long, default_value = "default")]
    pub sort: String,
}

/// Arguments for the brands command.
#[derive(Args)]
pub struct BrandsArgs {}
