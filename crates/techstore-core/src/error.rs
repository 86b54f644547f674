//! Store error types.

use thiserror::Error;

/// Errors raised at the edges of the store.
///
/// Normal store operations are total and never fail; errors only occur
/// when constructing a catalog or parsing external tokens.
#[derive(Error, Debug)]
pub enum StoreError {
    /// Two catalog products share the same identifier.
    #[error("duplicate product id in catalog: {0}")]
    DuplicateProduct(String),

    /// Catalog JSON could not be parsed.
    #[error("catalog parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// Unrecognized sort mode token.
    #[error("unknown sort mode: {0}")]
    UnknownSortMode(String),

    /// Unrecognized currency code.
    #[error("unknown currency code: {0}")]
    UnknownCurrency(String),
}
