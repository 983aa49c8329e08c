//! Product catalog module.
//!
//! Contains the product type and the state of the one-shot catalog load.

mod product;
mod state;

pub use product::Product;
pub use state::{CatalogState, FETCH_FAILED_MESSAGE};
