//! Core types for Basket.
//!
//! This module provides type-safe wrappers for the cart domain.

pub mod cart;
pub mod email;
pub mod id;
pub mod price;

pub use cart::{Cart, LineItem, Product};
pub use email::{Email, EmailError};
pub use id::{ProductId, ProductIdError};
pub use price::{Price, PriceError};
