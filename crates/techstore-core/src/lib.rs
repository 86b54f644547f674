//! Storefront state engine for TechStore.
//!
//! This crate is the headless core of a single-page storefront: it owns
//! the in-memory session state and the rules for mutating and projecting
//! it. Rendering is someone else's job.
//!
//! - **Catalog**: immutable product list supplied at session start
//! - **Cart**: merge-on-add entries, price snapshots, derived totals
//! - **Wishlist**: toggleable set of product ids
//! - **Browse**: pure search/brand/sort projection over the catalog
//! - **Session**: the facade presentation layers talk to
//!
//! Every state-changing operation publishes a new immutable snapshot
//! (`Arc`-held) and notifies observers; nothing mutates in place from a
//! consumer's point of view.
//!
//! # Example
//!
//! ```rust
//! use techstore_core::prelude::*;
//!
//! let catalog = Catalog::from_json(
//!     r#"{"currency": "INR", "products": [
//!         {"id": "p1", "name": "UltraPhone", "brand": "Nova",
//!          "price": 49999, "rating": 4.6, "image": "/p1.jpg"}
//!     ]}"#,
//! )
//! .unwrap();
//!
//! let mut session = Session::new(catalog);
//! session.add_to_cart(&ProductId::new("p1"));
//! assert_eq!(session.cart_count(), 1);
//! assert_eq!(session.cart_subtotal(), 49999);
//! ```

pub mod error;
pub mod ids;

pub mod browse;
pub mod cart;
pub mod catalog;
pub mod currency;
pub mod session;
pub mod theme;
pub mod wishlist;

pub use error::StoreError;
pub use ids::ProductId;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::StoreError;
    pub use crate::ids::ProductId;

    pub use crate::catalog::{Catalog, Product};
    pub use crate::currency::Currency;

    pub use crate::cart::{CartEntry, CartState, CartStore};
    pub use crate::wishlist::{WishlistState, WishlistStore};

    pub use crate::browse::{
        apply_filter, apply_sort, brand_list, BrandFilter, BrowseCriteria, SortMode,
    };

    pub use crate::session::{Session, StoreChange};
    pub use crate::theme::Theme;
}
