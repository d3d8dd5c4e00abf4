//! Cart persistence.
//!
//! The cart lives in a per-browser key-value store under a single key,
//! [`CART_KEY`], as a JSON array of line items:
//!
//! ```json
//! [{"id": "a", "name": "Apple", "price": 10.5, "quantity": 2}]
//! ```
//!
//! Every operation reloads the cart from the store; nothing is cached
//! between calls.
//!
//! # Implementations
//!
//! - [`SessionCartStore`] - the browser's session (production)
//! - [`MemoryCartStore`] - a shared in-process slot (tests)

mod memory;
mod session;

use async_trait::async_trait;
use serde_json::Value;

use basket_core::Cart;

pub use memory::MemoryCartStore;
pub use session::SessionCartStore;

/// Key the cart is stored under.
pub const CART_KEY: &str = "cart";

/// Errors from the underlying key-value store.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The session backend failed to read or write.
    #[error("session store error: {0}")]
    Session(#[from] tower_sessions::session::Error),

    /// The cart could not be serialized.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Load/save/clear access to the persisted cart.
#[async_trait]
pub trait CartStore: Send + Sync {
    /// Read the cart.
    ///
    /// Returns an empty cart if nothing is stored. A stored value that does
    /// not deserialize is logged and treated as empty.
    async fn load(&self) -> Result<Cart, StoreError>;

    /// Replace the stored cart with `cart`.
    async fn save(&self, cart: &Cart) -> Result<(), StoreError>;

    /// Remove the stored cart entirely.
    async fn clear(&self) -> Result<(), StoreError>;
}

/// Decode a raw stored value, falling back to an empty cart.
pub(crate) fn decode_cart(raw: Option<Value>) -> Cart {
    let Some(value) = raw else {
        return Cart::new();
    };

    match serde_json::from_value::<Cart>(value) {
        Ok(cart) => cart,
        Err(e) => {
            tracing::warn!(error = %e, key = CART_KEY, "Discarding unreadable stored cart");
            Cart::new()
        }
    }
}
