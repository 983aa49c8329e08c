//! Catalog load state.

use crate::catalog::Product;

/// Message shown when the catalog could not be retrieved.
pub const FETCH_FAILED_MESSAGE: &str = "Nie uda\u{142}o si\u{119} pobra\u{107} produkt\u{f3}w";

/// Where the one-shot catalog load stands.
///
/// Starts as `Loading` and moves once, to `Ready` or `Failed`. A failed
/// load never carries partial data.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum CatalogState {
    #[default]
    Loading,
    Ready(Vec<Product>),
    Failed(String),
}

impl CatalogState {
    /// A failure carrying the standard user-facing message.
    pub fn fetch_failed() -> Self {
        CatalogState::Failed(FETCH_FAILED_MESSAGE.to_string())
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, CatalogState::Loading)
    }

    /// The error message, if the load failed.
    pub fn error(&self) -> Option<&str> {
        match self {
            CatalogState::Failed(message) => Some(message),
            _ => None,
        }
    }

    /// Loaded products; empty unless the load succeeded.
    pub fn products(&self) -> &[Product] {
        match self {
            CatalogState::Ready(products) => products,
            _ => &[],
        }
    }

    pub fn product_count(&self) -> usize {
        self.products().len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Money;

    #[test]
    fn test_initial_state_is_loading() {
        let state = CatalogState::default();
        assert!(state.is_loading());
        assert!(state.error().is_none());
        assert!(state.products().is_empty());
    }

    #[test]
    fn test_failed_state_has_no_products() {
        let state = CatalogState::fetch_failed();
        assert!(!state.is_loading());
        assert_eq!(state.error(), Some(FETCH_FAILED_MESSAGE));
        assert_eq!(state.product_count(), 0);
    }

    #[test]
    fn test_ready_state_exposes_products() {
        let products = vec![Product::new("1", "A", Money::zero())];
        let state = CatalogState::Ready(products.clone());
        assert_eq!(state.products(), products.as_slice());
        assert!(state.error().is_none());
    }
}
