//! Catalog and product types.
//!
//! The catalog is an immutable ordered sequence of products supplied once
//! at session start. Field names on the wire are camelCase, matching the
//! shape of the original storefront dataset.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::currency::Currency;
use crate::error::StoreError;
use crate::ids::ProductId;

/// A purchasable product. Immutable for the lifetime of a session.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Unique product identifier.
    pub id: ProductId,
    /// Display name.
    pub name: String,
    /// Brand name.
    pub brand: String,
    /// Current price in whole currency units.
    pub price: i64,
    /// Pre-discount price, if the product is on sale.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_price: Option<i64>,
    /// Advertised discount percentage.
    #[serde(default, rename = "discount", skip_serializing_if = "Option::is_none")]
    pub discount_percent: Option<i64>,
    /// Average customer rating, 0.0 to 5.0.
    pub rating: f64,
    /// Image reference or URL.
    pub image: String,
    /// Best-seller badge flag.
    #[serde(default)]
    pub is_best_seller: bool,
}

impl Product {
    /// Whether the product is currently discounted below its original price.
    pub fn is_on_sale(&self) -> bool {
        self.original_price.is_some_and(|orig| orig > self.price)
    }

    /// Amount saved versus the original price. Zero when not on sale.
    pub fn savings(&self) -> i64 {
        self.original_price
            .map(|orig| (orig - self.price).max(0))
            .unwrap_or(0)
    }
}

/// Wire shape of a catalog JSON document.
#[derive(Debug, Serialize, Deserialize)]
struct CatalogDocument {
    #[serde(default)]
    currency: Currency,
    products: Vec<Product>,
}

/// The read-only product catalog for a session.
///
/// Construction validates id uniqueness; an empty catalog is legal.
#[derive(Debug, Clone)]
pub struct Catalog {
    products: Vec<Product>,
    index: HashMap<ProductId, usize>,
    currency: Currency,
}

impl Catalog {
    /// Build a catalog from an ordered product list.
    pub fn new(products: Vec<Product>, currency: Currency) -> Result<Self, StoreError> {
        let mut index = HashMap::with_capacity(products.len());
        for (pos, product) in products.iter().enumerate() {
            if index.insert(product.id.clone(), pos).is_some() {
                return Err(StoreError::DuplicateProduct(product.id.to_string()));
            }
        }
        Ok(Self {
            products,
            index,
            currency,
        })
    }

    /// Parse a catalog from a JSON document of the form
    /// `{"currency": "INR", "products": [...]}`.
    pub fn from_json(json: &str) -> Result<Self, StoreError> {
        let doc: CatalogDocument = serde_json::from_str(json)?;
        Self::new(doc.products, doc.currency)
    }

    /// Look up a product by id.
    pub fn get(&self, id: &ProductId) -> Option<&Product> {
        self.index.get(id).map(|&pos| &self.products[pos])
    }

    /// Whether the catalog contains the given id.
    pub fn contains(&self, id: &ProductId) -> bool {
        self.index.contains_key(id)
    }

    /// All products in catalog order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Iterate products in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = &Product> {
        self.products.iter()
    }

    /// Number of products.
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Whether the catalog has no products.
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// The session display currency.
    pub fn currency(&self) -> Currency {
        self.currency
    }
}
