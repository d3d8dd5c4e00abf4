//! Business logic services for storefront.
//!
//! # Services
//!
//! - `cart` - Cart operations (add, remove, checkout) over a `CartStore`

pub mod cart;

pub use cart::{CartError, CartService, CheckoutDetails, Receipt};
