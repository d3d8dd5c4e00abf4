//! Display data derived from the cart for templates.
//!
//! Views are plain structs with pre-formatted strings; templates never do
//! arithmetic or number formatting.

mod badge;
mod cart;
mod checkout;
mod product;

pub use badge::CartBadge;
pub use cart::{CartItemView, CartView, EMPTY_CART_MESSAGE};
pub use checkout::{CheckoutFormView, ORDER_CONFIRMATION};
pub use product::{AddButtonView, FEEDBACK_DELAY, ProductView};
