//! Where the catalog comes from.

use async_trait::async_trait;
use ministore_commerce::catalog::Product;
use ministore_commerce::StoreConfig;

use crate::{FetchClient, FetchError, Response};

/// A place the product catalog can be read from.
///
/// Browser futures are not `Send`, so on wasm32 neither is this trait.
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
pub trait CatalogSource {
    /// Read the full product list.
    async fn fetch_products(&self) -> Result<Vec<Product>, FetchError>;
}

/// The catalog as a static JSON array served over HTTP.
#[derive(Debug, Clone)]
pub struct HttpCatalog {
    client: FetchClient,
    path: String,
}

impl HttpCatalog {
    pub fn new(client: FetchClient, path: impl Into<String>) -> Self {
        Self {
            client,
            path: path.into(),
        }
    }

    /// Read from the configured catalog path.
    pub fn from_config(client: FetchClient, config: &StoreConfig) -> Self {
        Self::new(client, config.catalog_path.clone())
    }

    pub fn path(&self) -> &str {
        &self.path
    }
}

#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
impl CatalogSource for HttpCatalog {
    async fn fetch_products(&self) -> Result<Vec<Product>, FetchError> {
        tracing::debug!(path = %self.path, "fetching catalog");

        let response = self
            .client
            .get(&self.path)
            .header("Accept", "application/json")
            .send()
            .await?;

        decode_products(response)
    }
}

/// Check the status and decode the body as a product array.
pub(crate) fn decode_products(response: Response) -> Result<Vec<Product>, FetchError> {
    let response = response.error_for_status()?;
    if !response.content_type().is_some_and(|ct| ct.contains("json")) {
        tracing::debug!(
            content_type = ?response.content_type(),
            "catalog not served as JSON, decoding anyway"
        );
    }
    response.json()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn response(status: u16, body: &str) -> Response {
        Response::new(status, HashMap::new(), body.as_bytes().to_vec())
    }

    #[test]
    fn test_decode_products() {
        let body = r#"[
            {"id": "1", "title": "Product 1", "description": "Description 1", "price": 19.99, "image": "/product-1.jpg"},
            {"id": "2", "title": "Product 2", "description": "Description 2", "price": 29.99, "image": "/product-2.jpg"}
        ]"#;

        let products = decode_products(response(200, body)).unwrap();
        assert_eq!(products.len(), 2);
        assert_eq!(products[1].price.display(), "29.99 z\u{142}");
    }

    #[test]
    fn test_decode_rejects_error_status() {
        let err = decode_products(response(500, "boom")).unwrap_err();
        assert!(matches!(err, FetchError::HttpError { status: 500, .. }));
    }

    #[test]
    fn test_decode_rejects_malformed_body() {
        let err = decode_products(response(200, r#"{"not": "an array"}"#)).unwrap_err();
        assert!(matches!(err, FetchError::ParseError(_)));
    }

    #[test]
    fn test_from_config_uses_catalog_path() {
        let catalog = HttpCatalog::from_config(FetchClient::new(), &StoreConfig::default());
        assert_eq!(catalog.path(), "/products.json");
    }
}
