//! One-shot catalog projection.

use anyhow::Result;
use techstore_core::prelude::*;

use super::BrowseArgs;
use crate::context::Context;
use crate::output::{product_badges, rating_stars};

/// Run the browse command.
pub fn run(args: BrowseArgs, ctx: &Context) -> Result<()> {
    let catalog = ctx.load_catalog()?;
    let sort: SortMode = args.sort.parse()?;

    let mut session = Session::new(catalog);
    session.set_search_text(args.search);
    session.set_brand_filter(BrandFilter::from_token(&args.brand));
    session.set_sort_mode(sort);

    let products = session.visible_products();
    tracing::info!(visible = products.len(), "projection computed");

    if ctx.output.is_json() {
        ctx.output.json(&products);
        return Ok(());
    }

    ctx.output.header("TechStore");
    print_product_table(&products, session.currency(), ctx);
    ctx.output.info("");
    ctx.output
        .info(&format!("Showing {} products", session.visible_count()));
    Ok(())
}

/// Print a product table: name, brand, price, rating, badges.
pub fn print_product_table(products: &[Product], currency: Currency, ctx: &Context) {
    if products.is_empty() {
        ctx.output.info("No products match.");
        return;
    }

    ctx.output.table_row(
        &["NAME", "BRAND", "PRICE", "RATING", ""],
        &[30, 10, 12, 12, 20],
    );
    ctx.output.info(&"-".repeat(90));

    for product in products {
        let price = currency.format(product.price);
        let rating = rating_stars(product.rating);
        let badges = product_badges(product);
        ctx.output.table_row(
            &[&product.name, &product.brand, &price, &rating, &badges],
            &[30, 10, 12, 12, 20],
        );
    }
}
