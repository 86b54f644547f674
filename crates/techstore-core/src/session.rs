//! The session facade: the presentation boundary over all stores.
//!
//! A `Session` owns the catalog, the cart and wishlist stores, the browse
//! criteria, the theme flag, and the cart-panel flag. Presentation layers
//! dispatch intents into it and read derived views back out; every
//! effective intent publishes exactly one [`StoreChange`] to subscribed
//! observers, synchronously, before the intent returns.

use std::sync::Arc;

use crate::browse::{brand_list, BrandFilter, BrowseCriteria, SortMode};
use crate::cart::{CartState, CartStore};
use crate::catalog::{Catalog, Product};
use crate::currency::Currency;
use crate::ids::ProductId;
use crate::theme::Theme;
use crate::wishlist::{WishlistState, WishlistStore};

/// A state change published to observers.
///
/// Carries the fresh snapshot so observers never need to re-query the
/// session mid-notification.
#[derive(Debug, Clone)]
pub enum StoreChange {
    /// The cart was mutated.
    Cart(Arc<CartState>),
    /// The wishlist was toggled.
    Wishlist(Arc<WishlistState>),
    /// Search text, brand selection, or sort mode changed.
    Criteria(BrowseCriteria),
    /// The theme was toggled.
    Theme(Theme),
    /// The cart panel was opened or closed.
    CartPanel(bool),
}

type Listener = Box<dyn FnMut(&StoreChange)>;

/// One storefront session: all state for a single run.
pub struct Session {
    catalog: Catalog,
    cart: CartStore,
    wishlist: WishlistStore,
    criteria: BrowseCriteria,
    theme: Theme,
    cart_open: bool,
    listeners: Vec<Listener>,
}

impl Session {
    /// Start a session over a catalog.
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog,
            cart: CartStore::new(),
            wishlist: WishlistStore::new(),
            criteria: BrowseCriteria::default(),
            theme: Theme::default(),
            cart_open: false,
            listeners: Vec::new(),
        }
    }

    /// Register an observer. Listeners run synchronously, in registration
    /// order, once per effective intent.
    pub fn subscribe(&mut self, listener: impl FnMut(&StoreChange) + 'static) {
        self.listeners.push(Box::new(listener));
    }

    fn notify(&mut self, change: StoreChange) {
        for listener in &mut self.listeners {
            listener(&change);
        }
    }

    // ---- cart intents ----

    /// Add one unit of a catalog product to the cart.
    ///
    /// Unknown ids are a silent no-op: only products in the catalog can
    /// enter the cart.
    pub fn add_to_cart(&mut self, id: &ProductId) {
        let Some(product) = self.catalog.get(id).cloned() else {
            return;
        };
        let state = self.cart.add(&product);
        self.notify(StoreChange::Cart(state));
    }

    /// Set a cart line's quantity exactly; zero or below removes it.
    /// Unknown ids are a silent no-op.
    pub fn update_quantity(&mut self, id: &ProductId, quantity: i64) {
        let before = self.cart.state();
        let after = self.cart.set_quantity(id, quantity);
        if !Arc::ptr_eq(&before, &after) {
            self.notify(StoreChange::Cart(after));
        }
    }

    /// Remove a cart line. No-op if absent.
    pub fn remove_from_cart(&mut self, id: &ProductId) {
        let before = self.cart.state();
        let after = self.cart.remove(id);
        if !Arc::ptr_eq(&before, &after) {
            self.notify(StoreChange::Cart(after));
        }
    }

    /// Empty the cart.
    pub fn clear_cart(&mut self) {
        let before = self.cart.state();
        let after = self.cart.clear();
        if !Arc::ptr_eq(&before, &after) {
            self.notify(StoreChange::Cart(after));
        }
    }

    // ---- wishlist intents ----

    /// Toggle wishlist membership for a catalog product.
    ///
    /// Ids not present in the catalog are a silent no-op.
    pub fn toggle_wishlist(&mut self, id: &ProductId) {
        if !self.catalog.contains(id) {
            return;
        }
        let state = self.wishlist.toggle(id.clone());
        self.notify(StoreChange::Wishlist(state));
    }

    // ---- criteria intents ----

    /// Set the search text.
    pub fn set_search_text(&mut self, text: impl Into<String>) {
        let text = text.into();
        if self.criteria.search == text {
            return;
        }
        self.criteria.search = text;
        let criteria = self.criteria.clone();
        self.notify(StoreChange::Criteria(criteria));
    }

    /// Set the brand filter.
    pub fn set_brand_filter(&mut self, brand: BrandFilter) {
        if self.criteria.brand == brand {
            return;
        }
        self.criteria.brand = brand;
        let criteria = self.criteria.clone();
        self.notify(StoreChange::Criteria(criteria));
    }

    /// Set the sort mode.
    pub fn set_sort_mode(&mut self, sort: SortMode) {
        if self.criteria.sort == sort {
            return;
        }
        self.criteria.sort = sort;
        let criteria = self.criteria.clone();
        self.notify(StoreChange::Criteria(criteria));
    }

    // ---- theme and cart panel intents ----

    /// Flip between light and dark.
    pub fn toggle_theme(&mut self) {
        self.theme = self.theme.toggled();
        let theme = self.theme;
        self.notify(StoreChange::Theme(theme));
    }

    /// Open the cart panel. No-op when already open.
    pub fn open_cart(&mut self) {
        if !self.cart_open {
            self.cart_open = true;
            self.notify(StoreChange::CartPanel(true));
        }
    }

    /// Close the cart panel. No-op when already closed.
    pub fn close_cart(&mut self) {
        if self.cart_open {
            self.cart_open = false;
            self.notify(StoreChange::CartPanel(false));
        }
    }

    // ---- queries ----

    /// The visible projection: filtered by the current criteria, then
    /// sorted. Recomputed on every call and cloned as a snapshot.
    pub fn visible_products(&self) -> Vec<Product> {
        self.criteria
            .project(&self.catalog)
            .into_iter()
            .cloned()
            .collect()
    }

    /// Number of products in the visible projection.
    pub fn visible_count(&self) -> usize {
        self.criteria.project(&self.catalog).len()
    }

    /// Distinct brands in first-seen catalog order.
    pub fn brands(&self) -> Vec<String> {
        brand_list(&self.catalog)
    }

    /// Current cart snapshot.
    pub fn cart(&self) -> Arc<CartState> {
        self.cart.state()
    }

    /// Total item count across cart lines.
    pub fn cart_count(&self) -> i64 {
        self.cart.state().item_count()
    }

    /// Cart subtotal over stored price snapshots.
    pub fn cart_subtotal(&self) -> i64 {
        self.cart.state().subtotal()
    }

    /// Current wishlist snapshot.
    pub fn wishlist(&self) -> Arc<WishlistState> {
        self.wishlist.state()
    }

    /// Number of wishlisted products.
    pub fn wishlist_count(&self) -> usize {
        self.wishlist.state().len()
    }

    /// Wishlist membership test.
    pub fn is_wishlisted(&self, id: &ProductId) -> bool {
        self.wishlist.state().contains(id)
    }

    /// The current criteria tuple.
    pub fn criteria(&self) -> &BrowseCriteria {
        &self.criteria
    }

    /// The current theme.
    pub fn theme(&self) -> Theme {
        self.theme
    }

    /// Whether the cart panel is open.
    pub fn is_cart_open(&self) -> bool {
        self.cart_open
    }

    /// Whether checkout may proceed (cart non-empty). Checkout itself is
    /// a stub; this only gates the button.
    pub fn can_checkout(&self) -> bool {
        !self.cart.state().is_empty()
    }

    /// The session display currency.
    pub fn currency(&self) -> Currency {
        self.catalog.currency()
    }

    /// The underlying catalog.
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }
}
