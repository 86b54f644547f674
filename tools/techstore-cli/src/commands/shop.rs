//! Interactive storefront session.
//!
//! A terminal stand-in for the storefront page: the loops here only
//! dispatch session intents and re-render from session queries, never
//! touching store internals.

use anyhow::Result;
use dialoguer::{Input, Select};
use techstore_core::prelude::*;

use crate::context::Context;
use crate::output::rating_stars;

/// Run the interactive shop.
pub fn run(ctx: &Context) -> Result<()> {
    let catalog = ctx.load_catalog()?;
    let mut session = Session::new(catalog);

    session.subscribe(|change| match change {
        StoreChange::Cart(state) => {
            tracing::debug!(items = state.item_count(), subtotal = state.subtotal(), "cart changed")
        }
        StoreChange::Wishlist(state) => tracing::debug!(len = state.len(), "wishlist changed"),
        StoreChange::Criteria(criteria) => tracing::debug!(sort = criteria.sort.as_str(), "criteria changed"),
        StoreChange::Theme(theme) => tracing::debug!(theme = theme.as_attr(), "theme changed"),
        StoreChange::CartPanel(open) => tracing::debug!(open, "cart panel toggled"),
    });

    ctx.output.header("TechStore");

    loop {
        let currency = session.currency();
        let cart_label = if session.cart_count() > 0 {
            format!(
                "Cart ({} items, {})",
                session.cart_count(),
                currency.format(session.cart_subtotal())
            )
        } else {
            "Cart (empty)".to_string()
        };

        let items = vec![
            format!("Browse products ({} showing)", session.visible_count()),
            format!("Search (current: \"{}\")", session.criteria().search),
            format!("Filter by brand (current: {})", session.criteria().brand.as_token()),
            format!("Sort (current: {})", session.criteria().sort.display_name()),
            cart_label,
            format!("Wishlist ({})", session.wishlist_count()),
            format!("Toggle theme (now: {})", session.theme().as_attr()),
            "Quit".to_string(),
        ];

        let choice = Select::new()
            .with_prompt("TechStore")
            .items(&items)
            .default(0)
            .interact()?;

        match choice {
            0 => browse_loop(&mut session, ctx)?,
            1 => {
                let text: String = Input::new()
                    .with_prompt("Search products")
                    .allow_empty(true)
                    .interact_text()?;
                session.set_search_text(text);
            }
            2 => pick_brand(&mut session)?,
            3 => pick_sort(&mut session)?,
            4 => cart_loop(&mut session, ctx)?,
            5 => show_wishlist(&session, ctx),
            6 => session.toggle_theme(),
            _ => break,
        }
    }

    Ok(())
}

fn browse_loop(session: &mut Session, ctx: &Context) -> Result<()> {
    loop {
        let products = session.visible_products();
        if products.is_empty() {
            ctx.output.info("No products match the current filters.");
            return Ok(());
        }

        let currency = session.currency();
        let mut items: Vec<String> = products
            .iter()
            .map(|p| {
                let heart = if session.is_wishlisted(&p.id) { " ♥" } else { "" };
                format!(
                    "{} — {} — {}{}",
                    p.name,
                    currency.format(p.price),
                    rating_stars(p.rating),
                    heart
                )
            })
            .collect();
        items.push("Back".to_string());

        let choice = Select::new()
            .with_prompt(format!("Showing {} products", products.len()))
            .items(&items)
            .default(0)
            .interact()?;

        if choice == products.len() {
            return Ok(());
        }
        product_menu(session, &products[choice], ctx)?;
    }
}

fn product_menu(session: &mut Session, product: &Product, ctx: &Context) -> Result<()> {
    let wish_label = if session.is_wishlisted(&product.id) {
        "Remove from wishlist"
    } else {
        "Add to wishlist"
    };
    let items = vec!["Add to cart", wish_label, "Back"];

    let choice = Select::new()
        .with_prompt(product.name.clone())
        .items(&items)
        .default(0)
        .interact()?;

    match choice {
        0 => {
            session.add_to_cart(&product.id);
            ctx.output
                .success(&format!("Added {} to cart", product.name));
        }
        1 => session.toggle_wishlist(&product.id),
        _ => {}
    }
    Ok(())
}

fn cart_loop(session: &mut Session, ctx: &Context) -> Result<()> {
    session.open_cart();
    loop {
        let cart = session.cart();
        let currency = session.currency();

        if cart.is_empty() {
            ctx.output.info("Your cart is empty.");
            ctx.output.info("Add some products to get started!");
            break;
        }

        let mut items: Vec<String> = cart
            .entries()
            .iter()
            .map(|e| {
                format!(
                    "{} × {} = {}",
                    e.name,
                    e.quantity,
                    currency.format(e.line_total())
                )
            })
            .collect();
        items.push("Clear cart".to_string());
        items.push("Checkout".to_string());
        items.push("Close".to_string());

        let prompt = format!(
            "Your Cart — total {} ({} items)",
            currency.format(cart.subtotal()),
            cart.item_count()
        );
        let choice = Select::new()
            .with_prompt(prompt)
            .items(&items)
            .default(0)
            .interact()?;

        let lines = cart.line_count();
        if choice < lines {
            line_menu(session, &cart.entries()[choice].product_id.clone())?;
        } else if choice == lines {
            session.clear_cart();
        } else if choice == lines + 1 {
            if session.can_checkout() {
                // Checkout is a stub; there is no payment flow.
                ctx.output
                    .success("Checkout is not implemented in this demo.");
            }
        } else {
            break;
        }
    }
    session.close_cart();
    Ok(())
}

fn line_menu(session: &mut Session, id: &ProductId) -> Result<()> {
    let items = vec!["+1", "-1", "Remove", "Back"];
    let choice = Select::new()
        .with_prompt("Quantity")
        .items(&items)
        .default(0)
        .interact()?;

    let quantity = session
        .cart()
        .get(id)
        .map(|e| e.quantity)
        .unwrap_or_default();
    match choice {
        0 => session.update_quantity(id, quantity + 1),
        1 => session.update_quantity(id, quantity - 1),
        2 => session.remove_from_cart(id),
        _ => {}
    }
    Ok(())
}

fn pick_brand(session: &mut Session) -> Result<()> {
    let brands = session.brands();
    let mut items = vec!["All Brands".to_string()];
    items.extend(brands.iter().cloned());

    let choice = Select::new()
        .with_prompt("Brand")
        .items(&items)
        .default(0)
        .interact()?;

    let filter = if choice == 0 {
        BrandFilter::All
    } else {
        BrandFilter::Only(brands[choice - 1].clone())
    };
    session.set_brand_filter(filter);
    Ok(())
}

fn pick_sort(session: &mut Session) -> Result<()> {
    let items: Vec<&str> = SortMode::ALL.iter().map(|m| m.display_name()).collect();
    let choice = Select::new()
        .with_prompt("Sort by")
        .items(&items)
        .default(0)
        .interact()?;
    session.set_sort_mode(SortMode::ALL[choice]);
    Ok(())
}

fn show_wishlist(session: &Session, ctx: &Context) {
    let wishlist = session.wishlist();
    if wishlist.is_empty() {
        ctx.output.info("Your wishlist is empty.");
        return;
    }

    ctx.output.header("Wishlist");
    for id in wishlist.ids() {
        if let Some(product) = session.catalog().get(id) {
            ctx.output.list_item(&format!(
                "{} — {}",
                product.name,
                session.currency().format(product.price)
            ));
        }
    }
}
