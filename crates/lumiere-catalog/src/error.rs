//! Catalog error types.

use thiserror::Error;

/// Errors raised while assembling or validating a catalog.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum CatalogError {
    /// Two products share an id.
    #[error("Duplicate product id: {0}")]
    DuplicateProduct(String),

    /// A price string is not a single whole-currency amount.
    #[error("Invalid price {price:?}: {reason}")]
    InvalidPrice { price: String, reason: &'static str },
}
