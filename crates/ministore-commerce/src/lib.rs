//! Storefront domain types and state for Ministore.
//!
//! This crate holds everything the storefront knows without touching the
//! network or the DOM:
//!
//! - **Catalog**: products and the loading/ready/failed catalog state
//! - **Pagination**: page slicing and clamping over the loaded catalog
//! - **Cart**: in-memory cart with derived item count and total
//! - **Session**: the owned [`Storefront`] state and its event transitions
//!
//! # Example
//!
//! ```rust
//! use ministore_commerce::prelude::*;
//!
//! let config = StoreConfig::default();
//! let mut store = Storefront::new(&config);
//!
//! let mug = Product::new("1", "Mug", Money::new(Decimal::new(1999, 2)));
//! store.dispatch(Event::CatalogResolved(CatalogState::Ready(vec![mug.clone()])));
//! store.dispatch(Event::AddToCart(mug));
//!
//! assert_eq!(store.cart_count(), 1);
//! assert_eq!(store.cart_total().display(), "19.99 zł");
//! ```

pub mod config;
pub mod error;
pub mod ids;
pub mod money;

pub mod cart;
pub mod catalog;
pub mod pagination;
pub mod session;
pub mod toast;

pub use config::StoreConfig;
pub use error::CommerceError;
pub use ids::ProductId;
pub use money::Money;
pub use session::{Event, Storefront, ViewMode};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::config::StoreConfig;
    pub use crate::error::CommerceError;
    pub use crate::ids::ProductId;
    pub use crate::money::{Decimal, Money};

    // Catalog
    pub use crate::catalog::{CatalogState, Product, FETCH_FAILED_MESSAGE};

    // Cart
    pub use crate::cart::{Cart, CartItem};

    // Pagination
    pub use crate::pagination::{clamp_page, slice, total_pages, Pagination};

    // Session
    pub use crate::session::{Event, Storefront, ViewMode};
    pub use crate::toast::{Toast, ToastId, Toaster};
}
