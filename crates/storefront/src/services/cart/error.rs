//! Cart service error types.

use thiserror::Error;

use basket_core::EmailError;

use crate::store::StoreError;

/// Errors that can occur during cart operations.
#[derive(Debug, Error)]
pub enum CartError {
    /// Checkout was submitted with nothing in the cart.
    #[error("Your cart is empty.")]
    EmptyCart,

    /// Checkout email failed validation.
    #[error("invalid email: {0}")]
    InvalidEmail(#[from] EmailError),

    /// The cart store failed.
    #[error("cart store error: {0}")]
    Store(#[from] StoreError),
}
