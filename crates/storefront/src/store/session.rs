//! Session-backed cart store.

use async_trait::async_trait;
use tower_sessions::Session;

use basket_core::Cart;

use super::{CART_KEY, CartStore, StoreError, decode_cart};

/// Cart store backed by the browser's session.
///
/// Cheap to construct; build one per request from the `Session` extractor.
#[derive(Clone)]
pub struct SessionCartStore {
    session: Session,
}

impl SessionCartStore {
    /// Wrap a request's session.
    #[must_use]
    pub const fn new(session: Session) -> Self {
        Self { session }
    }
}

#[async_trait]
impl CartStore for SessionCartStore {
    async fn load(&self) -> Result<Cart, StoreError> {
        let raw = self.session.get_value(CART_KEY).await?;
        Ok(decode_cart(raw))
    }

    async fn save(&self, cart: &Cart) -> Result<(), StoreError> {
        self.session.insert(CART_KEY, cart).await?;
        Ok(())
    }

    async fn clear(&self) -> Result<(), StoreError> {
        self.session.remove_value(CART_KEY).await?;
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::sync::Arc;

    use basket_core::{Price, Product, ProductId};
    use tower_sessions::MemoryStore;

    use super::*;

    fn session() -> Session {
        Session::new(None, Arc::new(MemoryStore::default()), None)
    }

    #[tokio::test]
    async fn test_load_without_value_is_empty() {
        let store = SessionCartStore::new(session());
        assert!(store.load().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_save_then_load() {
        let store = SessionCartStore::new(session());
        let cart = Cart::new().with_added(Product::new(
            ProductId::parse("a").unwrap(),
            "Apple",
            Price::from_cents(1000),
        ));

        store.save(&cart).await.unwrap();
        assert_eq!(store.load().await.unwrap(), cart);
    }

    #[tokio::test]
    async fn test_clear_removes_key() {
        let session = session();
        let store = SessionCartStore::new(session.clone());
        store.save(&Cart::new()).await.unwrap();

        store.clear().await.unwrap();
        assert!(session.get_value(CART_KEY).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_malformed_value_loads_as_empty() {
        let session = session();
        session.insert(CART_KEY, "garbage").await.unwrap();

        let store = SessionCartStore::new(session);
        assert!(store.load().await.unwrap().is_empty());
    }
}
