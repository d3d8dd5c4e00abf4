//! Cart service.
//!
//! Every operation is a read-mutate-write against the injected
//! [`CartStore`]: load the cart, apply a pure `Cart` operation, save. The
//! updated cart is returned so the caller can refresh the badge and
//! re-render without another load.

mod error;

pub use error::CartError;

use basket_core::{Cart, Email, Price, Product, ProductId};

use crate::store::CartStore;

/// Details collected by the checkout form, as submitted.
///
/// The email is validated by [`CartService::checkout`] once the cart is
/// known to be non-empty.
#[derive(Debug, Clone)]
pub struct CheckoutDetails {
    pub name: String,
    pub email: String,
    pub address: String,
}

/// Summary of a placed order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Receipt {
    pub item_count: u64,
    pub total: Price,
    pub email: Email,
    pub address: String,
}

/// Cart service.
///
/// Handles add, remove and checkout for one shopper's cart.
pub struct CartService<S> {
    store: S,
}

impl<S: CartStore> CartService<S> {
    /// Create a new cart service over `store`.
    #[must_use]
    pub const fn new(store: S) -> Self {
        Self { store }
    }

    /// Current cart, straight from the store.
    ///
    /// # Errors
    ///
    /// Returns `CartError::Store` if the store cannot be read.
    pub async fn snapshot(&self) -> Result<Cart, CartError> {
        Ok(self.store.load().await?)
    }

    /// Add one unit of `product`.
    ///
    /// # Errors
    ///
    /// Returns `CartError::Store` if the store cannot be read or written.
    pub async fn add(&self, product: Product) -> Result<Cart, CartError> {
        let product_id = product.id.clone();
        let cart = self.store.load().await?.with_added(product);
        self.store.save(&cart).await?;

        tracing::debug!(
            product_id = %product_id,
            item_count = cart.item_count(),
            "Added to cart"
        );
        Ok(cart)
    }

    /// Remove every line for `id`. Unknown IDs leave the cart unchanged.
    ///
    /// # Errors
    ///
    /// Returns `CartError::Store` if the store cannot be read or written.
    pub async fn remove(&self, id: &ProductId) -> Result<Cart, CartError> {
        let mut cart = self.store.load().await?;
        let removed = cart.remove(id);
        self.store.save(&cart).await?;

        tracing::debug!(product_id = %id, removed, "Removed from cart");
        Ok(cart)
    }

    /// Place the order: clear the cart and return a receipt.
    ///
    /// # Errors
    ///
    /// Returns `CartError::EmptyCart` if there is nothing to check out,
    /// `CartError::InvalidEmail` if the email does not parse, or
    /// `CartError::Store` if the store fails. The store is untouched unless
    /// the order is placed.
    pub async fn checkout(&self, details: CheckoutDetails) -> Result<Receipt, CartError> {
        let cart = self.store.load().await?;
        if cart.is_empty() {
            return Err(CartError::EmptyCart);
        }
        let email = Email::parse(&details.email)?;

        self.store.clear().await?;

        let receipt = Receipt {
            item_count: cart.item_count(),
            total: cart.total(),
            email,
            address: details.address.trim().to_string(),
        };
        tracing::info!(
            customer = %details.name.trim(),
            email = %receipt.email,
            address = %receipt.address,
            item_count = receipt.item_count,
            total = %receipt.total,
            "Order placed"
        );
        Ok(receipt)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::store::MemoryCartStore;

    fn product(id: &str, cents: u32) -> Product {
        Product::new(ProductId::parse(id).unwrap(), format!("Item {id}"), Price::from_cents(cents))
    }

    fn details() -> CheckoutDetails {
        CheckoutDetails {
            name: "Sam Shopper".to_string(),
            email: "sam@example.com".to_string(),
            address: "1 Main St".to_string(),
        }
    }

    #[tokio::test]
    async fn test_add_persists() {
        let store = MemoryCartStore::new();
        let service = CartService::new(store.clone());

        service.add(product("a", 1000)).await.unwrap();
        let cart = service.add(product("a", 1000)).await.unwrap();

        assert_eq!(cart.len(), 1);
        assert_eq!(cart.item_count(), 2);
        assert_eq!(
            store.raw().await,
            Some(json!([{"id": "a", "name": "Item a", "price": 10.0, "quantity": 2}]))
        );
    }

    #[tokio::test]
    async fn test_remove_unknown_keeps_cart() {
        let service = CartService::new(MemoryCartStore::new());
        service.add(product("a", 500)).await.unwrap();

        let cart = service
            .remove(&ProductId::parse("missing").unwrap())
            .await
            .unwrap();
        assert_eq!(cart.item_count(), 1);
    }

    #[tokio::test]
    async fn test_remove_persists() {
        let store = MemoryCartStore::new();
        let service = CartService::new(store.clone());
        service.add(product("a", 500)).await.unwrap();
        service.add(product("b", 700)).await.unwrap();

        service.remove(&ProductId::parse("a").unwrap()).await.unwrap();
        let cart = service.snapshot().await.unwrap();
        assert_eq!(cart.len(), 1);
        assert_eq!(cart.total().to_fixed(), "7.00");
    }

    #[tokio::test]
    async fn test_checkout_clears_store() {
        let store = MemoryCartStore::new();
        let service = CartService::new(store.clone());
        service.add(product("a", 1000)).await.unwrap();
        service.add(product("b", 250)).await.unwrap();

        let receipt = service.checkout(details()).await.unwrap();

        assert_eq!(receipt.item_count, 2);
        assert_eq!(receipt.total.to_fixed(), "12.50");
        assert_eq!(receipt.address, "1 Main St");
        assert_eq!(store.raw().await, None);
    }

    #[tokio::test]
    async fn test_checkout_invalid_email_keeps_cart() {
        let store = MemoryCartStore::new();
        let service = CartService::new(store.clone());
        service.add(product("a", 1000)).await.unwrap();

        let err = service
            .checkout(CheckoutDetails {
                email: "not-an-email".to_string(),
                ..details()
            })
            .await
            .unwrap_err();

        assert!(matches!(err, CartError::InvalidEmail(_)));
        assert_eq!(service.snapshot().await.unwrap().item_count(), 1);
    }

    #[tokio::test]
    async fn test_checkout_empty_cart_wins_over_invalid_email() {
        let service = CartService::new(MemoryCartStore::new());

        let err = service
            .checkout(CheckoutDetails {
                email: String::new(),
                ..details()
            })
            .await
            .unwrap_err();

        assert!(matches!(err, CartError::EmptyCart));
    }

    #[tokio::test]
    async fn test_checkout_empty_cart_is_rejected() {
        let store = MemoryCartStore::with_raw(json!([]));
        let service = CartService::new(store.clone());

        let err = service.checkout(details()).await.unwrap_err();

        assert!(matches!(err, CartError::EmptyCart));
        assert_eq!(store.raw().await, Some(json!([])));
    }

    #[tokio::test]
    async fn test_add_over_malformed_value_starts_fresh() {
        let store = MemoryCartStore::with_raw(json!("corrupt"));
        let service = CartService::new(store);

        let cart = service.add(product("a", 100)).await.unwrap();
        assert_eq!(cart.item_count(), 1);
    }
}
