//! Shopping cart module.
//!
//! Contains the in-memory cart and its line items.

mod cart;

pub use cart::{Cart, CartItem};
