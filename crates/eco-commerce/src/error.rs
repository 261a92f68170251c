//! Commerce error types.

use thiserror::Error;

/// Errors that can occur at the edges of the commerce domain.
///
/// Cart and carousel operations are total and never produce these; they
/// come from parsing external data (prices, product dumps, sort names).
#[derive(Error, Debug)]
pub enum CommerceError {
    /// Product not found.
    #[error("Product not found: {0}")]
    ProductNotFound(u64),

    /// A price string could not be parsed.
    #[error("Invalid price: {0:?}")]
    InvalidPrice(String),

    /// A shop sort name that is not one of the known options.
    #[error("Unknown sort '{0}': use popular, price-asc or price-desc")]
    UnknownSort(String),

    /// Serialization error.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for CommerceError {
    fn from(e: serde_json::Error) -> Self {
        CommerceError::Serialization(e.to_string())
    }
}
