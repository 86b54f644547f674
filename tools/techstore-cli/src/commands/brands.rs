//! Brand facet listing.

use anyhow::Result;
use serde::Serialize;
use techstore_core::prelude::*;

use super::BrandsArgs;
use crate::context::Context;

#[derive(Serialize)]
struct BrandFacet {
    brand: String,
    count: usize,
}

/// Run the brands command.
pub fn run(_args: BrandsArgs, ctx: &Context) -> Result<()> {
    let catalog = ctx.load_catalog()?;

    let facets: Vec<BrandFacet> = brand_list(&catalog)
        .into_iter()
        .map(|brand| {
            let count = apply_filter(&catalog, "", &BrandFilter::Only(brand.clone())).len();
            BrandFacet { brand, count }
        })
        .collect();

    if ctx.output.is_json() {
        ctx.output.json(&facets);
        return Ok(());
    }

    ctx.output.header("Brands");
    for facet in &facets {
        ctx.output.list_item(&format!(
            "{} ({} product{})",
            facet.brand,
            facet.count,
            if facet.count == 1 { "" } else { "s" }
        ));
    }
    ctx.output.info("");
    ctx.output
        .info(&format!("Total: {} brand(s)", facets.len()));
    Ok(())
}
