//! Commerce error types.

use thiserror::Error;

/// Errors raised while building domain values from outside input.
///
/// Cart and session transitions never fail; these only come out of
/// decoding prices and reading configuration.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommerceError {
    /// Price is negative or not a finite number.
    #[error("Invalid price: {0}")]
    InvalidPrice(String),

    /// Page size is zero or not a number.
    #[error("Invalid page size: {0:?}")]
    InvalidPageSize(String),
}
