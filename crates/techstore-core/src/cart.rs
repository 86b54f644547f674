//! Cart store and published cart snapshots.
//!
//! The store holds an `Arc<CartState>` and follows a replace-state
//! contract: every effective mutation clones the entries, applies the
//! change, and publishes a fresh `Arc`. Operations that change nothing
//! return the current snapshot unchanged, so consumers can detect
//! "no change" by pointer equality.

use serde::Serialize;
use std::sync::Arc;

use crate::catalog::Product;
use crate::ids::ProductId;

/// A cart line: product reference, display snapshot, price snapshot,
/// quantity.
///
/// `unit_price` is the product price at add time; later catalog changes
/// do not affect it.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CartEntry {
    /// Product being purchased.
    pub product_id: ProductId,
    /// Product name at add time.
    pub name: String,
    /// Brand at add time.
    pub brand: String,
    /// Image reference at add time.
    pub image: String,
    /// Price at add time, in whole currency units.
    pub unit_price: i64,
    /// Quantity. Always positive; an entry at zero is removed instead.
    pub quantity: i64,
}

impl CartEntry {
    fn from_product(product: &Product) -> Self {
        Self {
            product_id: product.id.clone(),
            name: product.name.clone(),
            brand: product.brand.clone(),
            image: product.image.clone(),
            unit_price: product.price,
            quantity: 1,
        }
    }

    /// Line total: `unit_price × quantity`, saturating.
    pub fn line_total(&self) -> i64 {
        self.unit_price.saturating_mul(self.quantity)
    }
}

/// An immutable cart snapshot.
///
/// Derived values are recomputed on every call rather than cached, so a
/// snapshot can never disagree with its own entries.
#[derive(Debug, Clone, Serialize, PartialEq, Default)]
pub struct CartState {
    entries: Vec<CartEntry>,
}

impl CartState {
    /// Entries in insertion order.
    pub fn entries(&self) -> &[CartEntry] {
        &self.entries
    }

    /// Get the entry for a product, if present.
    pub fn get(&self, id: &ProductId) -> Option<&CartEntry> {
        self.entries.iter().find(|e| &e.product_id == id)
    }

    /// Total item count (sum of quantities).
    pub fn item_count(&self) -> i64 {
        self.entries.iter().map(|e| e.quantity).sum()
    }

    /// Cart subtotal over stored price snapshots, saturating.
    pub fn subtotal(&self) -> i64 {
        self.entries
            .iter()
            .fold(0i64, |acc, e| acc.saturating_add(e.line_total()))
    }

    /// Number of distinct lines.
    pub fn line_count(&self) -> usize {
        self.entries.len()
    }

    /// Whether the cart has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// The cart store. Owns the current snapshot.
#[derive(Debug, Default)]
pub struct CartStore {
    state: Arc<CartState>,
}

impl CartStore {
    /// Create an empty cart store.
    pub fn new() -> Self {
        Self::default()
    }

    /// The current snapshot.
    pub fn state(&self) -> Arc<CartState> {
        Arc::clone(&self.state)
    }

    /// Add one unit of a product.
    ///
    /// An existing entry has its quantity incremented; otherwise a new
    /// entry is appended with quantity 1, copying the product's display
    /// fields and price at this moment. Always succeeds.
    pub fn add(&mut self, product: &Product) -> Arc<CartState> {
        let mut entries = self.state.entries.clone();
        if let Some(existing) = entries.iter_mut().find(|e| e.product_id == product.id) {
            existing.quantity = existing.quantity.saturating_add(1);
        } else {
            entries.push(CartEntry::from_product(product));
        }
        self.publish(entries)
    }

    /// Set an entry's quantity exactly.
    ///
    /// A quantity of zero or below removes the entry. An unknown id is a
    /// silent no-op, returning the current snapshot unchanged.
    pub fn set_quantity(&mut self, id: &ProductId, quantity: i64) -> Arc<CartState> {
        if quantity <= 0 {
            return self.remove(id);
        }
        match self.state.entries.iter().position(|e| &e.product_id == id) {
            Some(pos) => {
                if self.state.entries[pos].quantity == quantity {
                    return self.state();
                }
                let mut entries = self.state.entries.clone();
                entries[pos].quantity = quantity;
                self.publish(entries)
            }
            None => self.state(),
        }
    }

    /// Remove an entry. No-op if absent.
    pub fn remove(&mut self, id: &ProductId) -> Arc<CartState> {
        if !self.state.entries.iter().any(|e| &e.product_id == id) {
            return self.state();
        }
        let mut entries = self.state.entries.clone();
        entries.retain(|e| &e.product_id != id);
        self.publish(entries)
    }

    /// Empty the cart. No-op when already empty.
    pub fn clear(&mut self) -> Arc<CartState> {
        if self.state.entries.is_empty() {
            return self.state();
        }
        self.publish(Vec::new())
    }

    fn publish(&mut self, entries: Vec<CartEntry>) -> Arc<CartState> {
        self.state = Arc::new(CartState { entries });
        self.state()
    }
}
