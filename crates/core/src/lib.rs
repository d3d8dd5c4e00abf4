//! Basket Core - Cart domain types.
//!
//! This crate provides the types shared by every Basket component:
//! - `storefront` - The server-rendered cart widget
//! - `integration-tests` - End-to-end tests against the storefront router
//!
//! # Architecture
//!
//! The core crate contains only types and pure functions - no I/O, no
//! sessions, no HTTP. Cart mutations return the updated cart and leave
//! persistence and rendering to the caller.
//!
//! # Modules
//!
//! - [`types`] - Product IDs, prices, emails, line items and the cart itself

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
