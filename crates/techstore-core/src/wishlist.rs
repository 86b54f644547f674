//! Wishlist store and published wishlist snapshots.
//!
//! Same replace-state contract as the cart store: effective toggles
//! publish a fresh `Arc<WishlistState>`.

use serde::Serialize;
use std::collections::HashSet;
use std::sync::Arc;

use crate::ids::ProductId;

/// An immutable wishlist snapshot.
///
/// Ids are kept in insertion order for display; a derived hash index
/// backs O(1) membership and is skipped on serialization.
#[derive(Debug, Clone, Serialize, Default)]
pub struct WishlistState {
    ids: Vec<ProductId>,
    #[serde(skip)]
    index: HashSet<ProductId>,
}

impl WishlistState {
    /// Wishlisted ids in insertion order.
    pub fn ids(&self) -> &[ProductId] {
        &self.ids
    }

    /// Membership test.
    pub fn contains(&self, id: &ProductId) -> bool {
        self.index.contains(id)
    }

    /// Number of wishlisted products.
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Whether the wishlist is empty.
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

/// The wishlist store. Owns the current snapshot.
#[derive(Debug, Default)]
pub struct WishlistStore {
    state: Arc<WishlistState>,
}

impl WishlistStore {
    /// Create an empty wishlist store.
    pub fn new() -> Self {
        Self::default()
    }

    /// The current snapshot.
    pub fn state(&self) -> Arc<WishlistState> {
        Arc::clone(&self.state)
    }

    /// Toggle membership: present → removed, absent → added.
    ///
    /// Two toggles of the same id restore the original membership.
    pub fn toggle(&mut self, id: ProductId) -> Arc<WishlistState> {
        let mut ids = self.state.ids.clone();
        let mut index = self.state.index.clone();
        if index.remove(&id) {
            ids.retain(|existing| existing != &id);
        } else {
            index.insert(id.clone());
            ids.push(id);
        }
        self.state = Arc::new(WishlistState { ids, index });
        self.state()
    }
}
