//! Storefront session state.
//!
//! [`Storefront`] owns everything a browsing session mutates: the catalog
//! load state, the cart, the current page, the view mode, the cart panel and
//! the current toast. It changes only through [`Event`]s, and
//! [`Storefront::apply`] is a pure `(state, event) -> state` function, so
//! the whole flow is testable without a renderer.

use std::num::NonZeroUsize;

use serde::{Deserialize, Serialize};

use crate::cart::Cart;
use crate::catalog::{CatalogState, Product};
use crate::config::StoreConfig;
use crate::ids::ProductId;
use crate::money::Money;
use crate::pagination::{clamp_page, total_pages, Pagination};
use crate::toast::{Toast, ToastId, Toaster};

/// How the product list is laid out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum ViewMode {
    #[default]
    Grid,
    List,
}

impl ViewMode {
    pub fn is_grid(&self) -> bool {
        matches!(self, ViewMode::Grid)
    }
}

/// Something that happened to the session: a user intent or the catalog
/// load finishing.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// The catalog load finished.
    CatalogResolved(CatalogState),
    /// Add one unit of a product, announce it and open the cart panel.
    AddToCart(Product),
    /// Change an item's quantity by `delta`.
    AdjustQuantity { product_id: ProductId, delta: i64 },
    /// Drop an item from the cart.
    RemoveFromCart(ProductId),
    /// Empty the cart.
    ClearCart,
    /// Go to a page; out-of-range requests are clamped.
    ChangePage(i64),
    SetViewMode(ViewMode),
    /// Open or close the cart panel.
    ToggleCart,
    /// Close the cart panel (click outside it).
    CloseCart,
    /// The user closed the toast.
    DismissToast,
    /// The auto-dismiss timer for a toast ran out.
    ExpireToast(ToastId),
}

/// The state of one storefront session.
#[derive(Debug, Clone, PartialEq)]
pub struct Storefront {
    catalog: CatalogState,
    cart: Cart,
    page: usize,
    page_size: NonZeroUsize,
    view_mode: ViewMode,
    cart_open: bool,
    toast: Option<Toast>,
    toaster: Toaster,
}

impl Storefront {
    /// A fresh session: catalog loading, empty cart, first page, grid view.
    pub fn new(config: &StoreConfig) -> Self {
        Self {
            catalog: CatalogState::Loading,
            cart: Cart::new(),
            page: 1,
            page_size: config.page_size,
            view_mode: ViewMode::default(),
            cart_open: false,
            toast: None,
            toaster: Toaster::new(),
        }
    }

    /// Apply an event, returning the next state.
    pub fn apply(mut self, event: Event) -> Self {
        self.dispatch(event);
        self
    }

    /// Apply an event in place.
    pub fn dispatch(&mut self, event: Event) {
        tracing::debug!(?event, "storefront event");

        match event {
            Event::CatalogResolved(state) => {
                self.catalog = state;
                self.page = 1;
            }
            Event::AddToCart(product) => {
                self.toast = Some(self.toaster.added_to_cart(&product.title));
                self.cart.add(product);
                self.cart_open = true;
            }
            Event::AdjustQuantity { product_id, delta } => {
                self.cart.adjust_quantity(&product_id, delta);
            }
            Event::RemoveFromCart(product_id) => {
                self.cart.remove(&product_id);
            }
            Event::ClearCart => self.cart.clear(),
            Event::ChangePage(requested) => {
                self.page = clamp_page(requested, self.total_pages());
            }
            Event::SetViewMode(mode) => self.view_mode = mode,
            Event::ToggleCart => self.cart_open = !self.cart_open,
            Event::CloseCart => self.cart_open = false,
            Event::DismissToast => self.toast = None,
            Event::ExpireToast(id) => {
                if self.toast.as_ref().is_some_and(|t| t.id == id) {
                    self.toast = None;
                }
            }
        }
    }

    pub fn catalog(&self) -> &CatalogState {
        &self.catalog
    }

    pub fn is_loading(&self) -> bool {
        self.catalog.is_loading()
    }

    pub fn error(&self) -> Option<&str> {
        self.catalog.error()
    }

    /// All loaded products.
    pub fn products(&self) -> &[Product] {
        self.catalog.products()
    }

    /// Products on the current page.
    pub fn visible_products(&self) -> &[Product] {
        self.pagination().slice(self.products())
    }

    pub fn pagination(&self) -> Pagination {
        Pagination::new(self.page, self.page_size, self.products().len())
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn total_pages(&self) -> usize {
        total_pages(self.products().len(), self.page_size)
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    /// Badge count: sum of quantities.
    pub fn cart_count(&self) -> i64 {
        self.cart.item_count()
    }

    pub fn cart_total(&self) -> Money {
        self.cart.total()
    }

    pub fn is_cart_open(&self) -> bool {
        self.cart_open
    }

    pub fn view_mode(&self) -> ViewMode {
        self.view_mode
    }

    pub fn toast(&self) -> Option<&Toast> {
        self.toast.as_ref()
    }
}

impl Default for Storefront {
    fn default() -> Self {
        Self::new(&StoreConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Decimal;

    fn products(n: usize) -> Vec<Product> {
        (1..=n)
            .map(|i| Product::new(i.to_string(), format!("Product {i}"), Money::new(Decimal::ONE)))
            .collect()
    }

    fn loaded(n: usize) -> Storefront {
        Storefront::default().apply(Event::CatalogResolved(CatalogState::Ready(products(n))))
    }

    #[test]
    fn test_new_session() {
        let store = Storefront::default();
        assert!(store.is_loading());
        assert!(store.cart().is_empty());
        assert_eq!(store.page(), 1);
        assert_eq!(store.view_mode(), ViewMode::Grid);
        assert!(!store.is_cart_open());
        assert!(store.toast().is_none());
    }

    #[test]
    fn test_add_to_cart_opens_panel_and_toasts() {
        let store = loaded(2);
        let first = store.products()[0].clone();
        let store = store.apply(Event::AddToCart(first));

        assert!(store.is_cart_open());
        assert_eq!(store.cart_count(), 1);
        assert_eq!(
            store.toast().map(|t| t.message.as_str()),
            Some("Dodano \"Product 1\" do koszyka")
        );
    }

    #[test]
    fn test_add_to_open_cart_keeps_it_open() {
        let store = loaded(1).apply(Event::ToggleCart);
        let first = store.products()[0].clone();
        let store = store.apply(Event::AddToCart(first));
        assert!(store.is_cart_open());
    }

    #[test]
    fn test_dismiss_toast() {
        let store = loaded(1);
        let first = store.products()[0].clone();
        let store = store.apply(Event::AddToCart(first)).apply(Event::DismissToast);
        assert!(store.toast().is_none());
    }

    #[test]
    fn test_stale_expiry_keeps_newer_toast() {
        let store = loaded(2);
        let (a, b) = (store.products()[0].clone(), store.products()[1].clone());

        let store = store.apply(Event::AddToCart(a));
        let stale = store.toast().map(|t| t.id).unwrap();
        let store = store.apply(Event::AddToCart(b));
        let current = store.toast().map(|t| t.id).unwrap();

        let store = store.apply(Event::ExpireToast(stale));
        assert_eq!(store.toast().map(|t| t.id), Some(current));

        let store = store.apply(Event::ExpireToast(current));
        assert!(store.toast().is_none());
    }

    #[test]
    fn test_change_page_clamps() {
        let store = loaded(13); // 3 pages of 6
        assert_eq!(store.total_pages(), 3);

        let store = store.apply(Event::ChangePage(0));
        assert_eq!(store.page(), 1);

        let store = store.apply(Event::ChangePage(42));
        assert_eq!(store.page(), 3);
        assert_eq!(store.visible_products().len(), 1);

        let store = store.apply(Event::ChangePage(2));
        let ids: Vec<&str> = store.visible_products().iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["7", "8", "9", "10", "11", "12"]);
    }

    #[test]
    fn test_change_page_while_loading_stays_on_first() {
        let store = Storefront::default().apply(Event::ChangePage(5));
        assert_eq!(store.page(), 1);
        assert_eq!(store.total_pages(), 1);
    }

    #[test]
    fn test_catalog_resolution_resets_page() {
        let store = loaded(20).apply(Event::ChangePage(3));
        let store = store.apply(Event::CatalogResolved(CatalogState::Ready(products(4))));
        assert_eq!(store.page(), 1);
    }

    #[test]
    fn test_view_mode_and_cart_toggle() {
        let store = loaded(1)
            .apply(Event::SetViewMode(ViewMode::List))
            .apply(Event::ToggleCart);
        assert_eq!(store.view_mode(), ViewMode::List);
        assert!(store.is_cart_open());

        let store = store.apply(Event::ToggleCart);
        assert!(!store.is_cart_open());

        let store = store.apply(Event::ToggleCart).apply(Event::CloseCart);
        assert!(!store.is_cart_open());
    }

    #[test]
    fn test_failed_catalog() {
        let store = Storefront::default().apply(Event::CatalogResolved(CatalogState::fetch_failed()));
        assert!(!store.is_loading());
        assert!(store.error().is_some());
        assert!(store.visible_products().is_empty());
    }

    #[test]
    fn test_apply_is_deterministic() {
        let events = vec![
            Event::CatalogResolved(CatalogState::Ready(products(8))),
            Event::ChangePage(2),
            Event::AddToCart(products(1).remove(0)),
            Event::AdjustQuantity { product_id: "1".into(), delta: 3 },
            Event::RemoveFromCart("missing".into()),
        ];

        let run = || events.iter().cloned().fold(Storefront::default(), Storefront::apply);
        assert_eq!(run(), run());
        assert_eq!(run().cart_count(), 4);
    }
}
