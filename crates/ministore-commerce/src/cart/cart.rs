//! Cart and cart item types.

use crate::catalog::Product;
use crate::ids::ProductId;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// A shopping cart.
///
/// Holds at most one [`CartItem`] per product id, in insertion order. Every
/// operation is total: unknown ids are no-ops and an item whose quantity
/// would drop to zero or below is removed instead.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Cart {
    /// Items in the cart.
    items: Vec<CartItem>,
}

impl Cart {
    /// Create an empty cart.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one unit of a product.
    ///
    /// Increments the existing item, or inserts a snapshot of the product
    /// with quantity 1. Returns the resulting quantity.
    pub fn add(&mut self, product: Product) -> i64 {
        if let Some(existing) = self.items.iter_mut().find(|i| i.product.id == product.id) {
            existing.quantity = existing.quantity.saturating_add(1);
            tracing::debug!(product_id = %product.id, quantity = existing.quantity, "cart item incremented");
            return existing.quantity;
        }

        tracing::debug!(product_id = %product.id, "cart item inserted");
        self.items.push(CartItem::new(product));
        1
    }

    /// Change an item's quantity by `delta`.
    ///
    /// Does nothing if the product is not in the cart. Removes the item when
    /// the new quantity is zero or below. Returns the resulting quantity, or
    /// `None` if the item is absent afterwards.
    pub fn adjust_quantity(&mut self, product_id: &ProductId, delta: i64) -> Option<i64> {
        let index = self.position(product_id)?;
        let next = self.items[index].quantity.saturating_add(delta);

        if next <= 0 {
            self.items.remove(index);
            tracing::debug!(%product_id, delta, "cart item removed by adjustment");
            return None;
        }

        self.items[index].quantity = next;
        tracing::debug!(%product_id, delta, quantity = next, "cart item adjusted");
        Some(next)
    }

    /// Remove an item from the cart. Returns whether anything was removed.
    pub fn remove(&mut self, product_id: &ProductId) -> bool {
        let len_before = self.items.len();
        self.items.retain(|i| &i.product.id != product_id);
        let removed = self.items.len() < len_before;
        if removed {
            tracing::debug!(%product_id, "cart item removed");
        }
        removed
    }

    /// Clear all items from the cart.
    pub fn clear(&mut self) {
        self.items.clear();
        tracing::debug!("cart cleared");
    }

    /// Total item count (sum of quantities).
    pub fn item_count(&self) -> i64 {
        self.items.iter().map(|i| i.quantity).sum()
    }

    /// Sum of `price × quantity` over all items.
    ///
    /// Exact; only [`Money::display`] rounds. Saturates at the largest
    /// representable amount rather than overflowing.
    pub fn total(&self) -> Money {
        self.items.iter().map(CartItem::subtotal).sum()
    }

    /// Number of distinct products.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if cart is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Get an item by product ID.
    pub fn get(&self, product_id: &ProductId) -> Option<&CartItem> {
        self.items.iter().find(|i| &i.product.id == product_id)
    }

    /// Items in insertion order.
    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    fn position(&self, product_id: &ProductId) -> Option<usize> {
        self.items.iter().position(|i| &i.product.id == product_id)
    }
}

/// A product snapshot with a positive quantity.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartItem {
    /// Product as it was when added.
    pub product: Product,
    /// Quantity, always at least 1 while the item is in a cart.
    pub quantity: i64,
}

impl CartItem {
    fn new(product: Product) -> Self {
        Self {
            product,
            quantity: 1,
        }
    }

    /// Line subtotal (unit price × quantity), exact like [`Cart::total`].
    pub fn subtotal(&self) -> Money {
        self.product.price.saturating_mul(self.quantity)
    }
}
