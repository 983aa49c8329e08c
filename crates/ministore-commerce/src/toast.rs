//! Toast notifications.

use serde::{Deserialize, Serialize};

/// Identifies one toast within a session.
///
/// Ids only grow, so a timer scheduled for an old toast can tell that a
/// newer one has replaced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ToastId(u64);

impl ToastId {
    pub fn get(&self) -> u64 {
        self.0
    }
}

/// A transient notification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Toast {
    pub id: ToastId,
    pub message: String,
}

/// Hands out toasts with increasing ids.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Toaster {
    next_id: u64,
}

impl Toaster {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a toast with the next id.
    pub fn toast(&mut self, message: impl Into<String>) -> Toast {
        let id = ToastId(self.next_id);
        self.next_id = self.next_id.wrapping_add(1);
        Toast {
            id,
            message: message.into(),
        }
    }

    /// The toast shown after a product lands in the cart.
    pub fn added_to_cart(&mut self, title: &str) -> Toast {
        self.toast(format!("Dodano \"{title}\" do koszyka"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_increase() {
        let mut toaster = Toaster::new();
        let a = toaster.toast("a");
        let b = toaster.toast("b");
        assert!(b.id > a.id);
    }

    #[test]
    fn test_added_to_cart_message() {
        let mut toaster = Toaster::new();
        assert_eq!(
            toaster.added_to_cart("Product 1").message,
            "Dodano \"Product 1\" do koszyka"
        );
    }
}
