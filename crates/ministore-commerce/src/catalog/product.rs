//! Product type.

use crate::ids::ProductId;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// A product in the catalog.
///
/// Mirrors one record of the catalog resource:
/// `{id, title, description, price, image}`. Products are immutable once
/// loaded; the cart keeps its own snapshot. Every field is required.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    /// Unique product identifier.
    pub id: ProductId,
    /// Display name.
    pub title: String,
    /// Short description for listings.
    pub description: String,
    /// Unit price, exact. Carried as a JSON number.
    pub price: Money,
    /// Image URL or path.
    pub image: String,
}

impl Product {
    /// Create a product with an empty description and image.
    pub fn new(id: impl Into<ProductId>, title: impl Into<String>, price: Money) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: String::new(),
            price,
            image: String::new(),
        }
    }

    /// Set the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Set the image reference.
    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = image.into();
        self
    }

    /// Price formatted for display (e.g., "19.99 zł").
    pub fn price_display(&self) -> String {
        self.price.display()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Decimal;

    fn pln(cents: i64) -> Money {
        Money::new(Decimal::new(cents, 2))
    }

    #[test]
    fn test_product_decodes_catalog_record() {
        let json = r#"{
            "id": "1",
            "title": "Product 1",
            "description": "Description 1",
            "price": 19.99,
            "image": "/product-1.jpg"
        }"#;

        let product: Product = serde_json::from_str(json).unwrap();
        assert_eq!(product.id.as_str(), "1");
        assert_eq!(product.title, "Product 1");
        assert_eq!(product.price, pln(1999));
        assert_eq!(product.image, "/product-1.jpg");
    }

    #[test]
    fn test_product_rejects_negative_price() {
        let json = r#"{"id": "1", "title": "Broken", "description": "", "price": -5, "image": ""}"#;
        let err = serde_json::from_str::<Product>(json).unwrap_err();
        assert!(err.to_string().contains("Invalid price"));
    }

    #[test]
    fn test_product_keeps_sub_cent_price() {
        let json = r#"{"id": "3", "title": "Bolt", "description": "M3", "price": 0.333, "image": "/bolt.jpg"}"#;
        let product: Product = serde_json::from_str(json).unwrap();
        assert_eq!(product.price.amount(), Decimal::new(333, 3));
        assert_eq!(product.price_display(), "0.33 z\u{142}");
    }

    #[test]
    fn test_product_requires_every_field() {
        for json in [
            r#"{"id": "1", "title": "A", "price": 1, "image": "/a.jpg"}"#,
            r#"{"id": "1", "title": "A", "description": "d", "price": 1}"#,
            r#"{"id": "1", "title": "A", "description": "d", "image": "/a.jpg"}"#,
        ] {
            let err = serde_json::from_str::<Product>(json).unwrap_err();
            assert!(err.to_string().contains("missing field"), "{json}: {err}");
        }
    }

    #[test]
    fn test_product_rejects_out_of_range_price() {
        let json = r#"{"id": "1", "title": "Huge", "description": "", "price": 1e30, "image": ""}"#;
        let err = serde_json::from_str::<Product>(json).unwrap_err();
        assert!(err.to_string().contains("Invalid price"));
    }

    #[test]
    fn test_product_encodes_price_as_number() {
        let product = Product::new("7", "Lamp", pln(2999));
        let value = serde_json::to_value(&product).unwrap();
        assert_eq!(value["price"], serde_json::json!(29.99));
        assert_eq!(value["id"], serde_json::json!("7"));
    }

    #[test]
    fn test_builder() {
        let product = Product::new("2", "Cup", pln(500))
            .with_description("Ceramic")
            .with_image("/cup.jpg");
        assert_eq!(product.description, "Ceramic");
        assert_eq!(product.image, "/cup.jpg");
        assert_eq!(product.price_display(), "5.00 z\u{142}");
    }
}
