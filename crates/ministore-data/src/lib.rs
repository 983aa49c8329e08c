//! Catalog fetching for Ministore.
//!
//! Provides a small HTTP client over `reqwest` (browser `fetch` on wasm32),
//! the [`CatalogSource`] seam, and the one-shot [`CatalogLoader`] that turns
//! a fetch into a [`CatalogState`](ministore_commerce::catalog::CatalogState).
//!
//! # Example
//!
//! ```rust,ignore
//! use ministore_data::{CatalogLoader, FetchClient, HttpCatalog};
//!
//! let client = FetchClient::new().with_base_url("https://shop.example");
//! let loader = CatalogLoader::new(HttpCatalog::new(client, "/products.json"));
//! let guard = loader.guard();
//!
//! // Some(state) unless `guard.teardown()` ran while the fetch was in flight
//! if let Some(state) = loader.load().await {
//!     store.dispatch(Event::CatalogResolved(state));
//! }
//! ```

mod error;
mod loader;
mod response;
mod source;

pub use error::FetchError;
pub use loader::{into_catalog_state, CatalogLoader, LoadGuard};
pub use response::Response;
pub use source::{CatalogSource, HttpCatalog};

/// HTTP client for reading static resources.
///
/// A thin wrapper around `reqwest::Client` that joins relative paths onto a
/// base URL and reads whole responses into [`Response`].
#[derive(Debug, Clone)]
pub struct FetchClient {
    inner: reqwest::Client,
    base_url: Option<String>,
}

impl Default for FetchClient {
    fn default() -> Self {
        Self::new()
    }
}

impl FetchClient {
    /// Create a new HTTP client.
    pub fn new() -> Self {
        Self {
            inner: reqwest::Client::new(),
            base_url: None,
        }
    }

    /// Create a client with a base URL that will be prepended to relative paths.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Resolve `url` against the base URL. Absolute URLs pass through.
    pub fn resolve_url(&self, url: &str) -> String {
        match &self.base_url {
            Some(base) if !(url.starts_with("http://") || url.starts_with("https://")) => {
                format!(
                    "{}/{}",
                    base.trim_end_matches('/'),
                    url.trim_start_matches('/')
                )
            }
            _ => url.to_string(),
        }
    }

    /// Create a GET request.
    pub fn get(&self, url: &str) -> ClientRequestBuilder {
        ClientRequestBuilder {
            builder: self.inner.get(self.resolve_url(url)),
        }
    }
}

/// A request builder bound to a client.
pub struct ClientRequestBuilder {
    builder: reqwest::RequestBuilder,
}

impl ClientRequestBuilder {
    /// Add a header to the request.
    pub fn header(mut self, key: &str, value: &str) -> Self {
        self.builder = self.builder.header(key, value);
        self
    }

    /// Send the request and read the whole response.
    pub async fn send(self) -> Result<Response, FetchError> {
        let response = self.builder.send().await?;
        Response::read(response).await
    }
}

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{
        CatalogLoader, CatalogSource, FetchClient, FetchError, HttpCatalog, LoadGuard, Response,
    };
}
