//! In-process cart store.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;
use tokio::sync::Mutex;

use basket_core::Cart;

use super::{CartStore, StoreError, decode_cart};

/// A single shared slot holding the raw stored value.
///
/// Clones share the slot, so a test can hand one clone to a service and
/// inspect the other.
#[derive(Debug, Clone, Default)]
pub struct MemoryCartStore {
    slot: Arc<Mutex<Option<Value>>>,
}

impl MemoryCartStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store already holding `raw`, which need not be a valid cart.
    #[must_use]
    pub fn with_raw(raw: Value) -> Self {
        Self {
            slot: Arc::new(Mutex::new(Some(raw))),
        }
    }

    /// The raw stored value, if any.
    pub async fn raw(&self) -> Option<Value> {
        self.slot.lock().await.clone()
    }
}

#[async_trait]
impl CartStore for MemoryCartStore {
    async fn load(&self) -> Result<Cart, StoreError> {
        Ok(decode_cart(self.raw().await))
    }

    async fn save(&self, cart: &Cart) -> Result<(), StoreError> {
        let value = serde_json::to_value(cart)?;
        *self.slot.lock().await = Some(value);
        Ok(())
    }

    async fn clear(&self) -> Result<(), StoreError> {
        self.slot.lock().await.take();
        Ok(())
    }
}
