//! One-shot catalog loader.
//!
//! `CatalogLoader::load` consumes the loader, so each loader reads its
//! source at most once. The owner (a mounted view, a test) holds a
//! [`LoadGuard`] and tears it down when it goes away; a fetch that resolves
//! after that is dropped instead of being applied to dead state.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use ministore_commerce::catalog::{CatalogState, Product};

use crate::{CatalogSource, FetchError};

/// Marks whether the owner of a pending load is still around.
#[derive(Debug, Clone, Default)]
pub struct LoadGuard {
    torn_down: Arc<AtomicBool>,
}

impl LoadGuard {
    pub fn new() -> Self {
        Self::default()
    }

    /// The owner is gone; discard whatever the load produces.
    pub fn teardown(&self) {
        self.torn_down.store(true, Ordering::Release);
    }

    pub fn is_torn_down(&self) -> bool {
        self.torn_down.load(Ordering::Acquire)
    }
}

/// Loads the catalog once from a [`CatalogSource`].
pub struct CatalogLoader<S> {
    source: S,
    guard: LoadGuard,
}

impl<S: CatalogSource> CatalogLoader<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            guard: LoadGuard::new(),
        }
    }

    /// A handle the owner uses to cancel delivery of the result.
    pub fn guard(&self) -> LoadGuard {
        self.guard.clone()
    }

    /// Fetch the catalog.
    ///
    /// Returns the resolved state, or `None` if the guard was torn down
    /// before the fetch finished.
    pub async fn load(self) -> Option<CatalogState> {
        let result = self.source.fetch_products().await;

        if self.guard.is_torn_down() {
            tracing::debug!("catalog resolved after teardown, discarding");
            return None;
        }

        Some(into_catalog_state(result))
    }
}

/// Turn a fetch result into the catalog state shown to the user.
///
/// Every failure collapses into the single user-facing message; the cause
/// only goes to the log.
pub fn into_catalog_state(result: Result<Vec<Product>, FetchError>) -> CatalogState {
    match result {
        Ok(products) => {
            tracing::info!(count = products.len(), "catalog loaded");
            CatalogState::Ready(products)
        }
        Err(e) => {
            tracing::warn!(error = %e, "catalog fetch failed");
            CatalogState::fetch_failed()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use ministore_commerce::catalog::FETCH_FAILED_MESSAGE;
    use ministore_commerce::money::{Decimal, Money};
    use std::sync::atomic::AtomicUsize;
    use tokio::sync::oneshot;

    struct FixedCatalog {
        result: Result<Vec<Product>, FetchError>,
        calls: Arc<AtomicUsize>,
    }

    #[async_trait]
    impl CatalogSource for FixedCatalog {
        async fn fetch_products(&self) -> Result<Vec<Product>, FetchError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.result.clone()
        }
    }

    /// Resolves only once the test sends the products through.
    struct GatedCatalog {
        gate: tokio::sync::Mutex<Option<oneshot::Receiver<Vec<Product>>>>,
    }

    #[async_trait]
    impl CatalogSource for GatedCatalog {
        async fn fetch_products(&self) -> Result<Vec<Product>, FetchError> {
            let rx = self.gate.lock().await.take();
            match rx {
                Some(rx) => rx
                    .await
                    .map_err(|e| FetchError::RequestError(e.to_string())),
                None => Err(FetchError::RequestError("already fetched".to_string())),
            }
        }
    }

    fn sample() -> Vec<Product> {
        vec![
            Product::new("1", "Product 1", Money::new(Decimal::new(1999, 2))),
            Product::new("2", "Product 2", Money::new(Decimal::new(2999, 2))),
        ]
    }

    #[tokio::test]
    async fn test_load_success() {
        let calls = Arc::new(AtomicUsize::new(0));
        let loader = CatalogLoader::new(FixedCatalog {
            result: Ok(sample()),
            calls: calls.clone(),
        });

        let state = loader.load().await;
        assert_eq!(state, Some(CatalogState::Ready(sample())));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_load_failure_has_message_and_no_products() {
        let loader = CatalogLoader::new(FixedCatalog {
            result: Err(FetchError::HttpError {
                status: 404,
                message: "Not Found".to_string(),
            }),
            calls: Arc::new(AtomicUsize::new(0)),
        });

        let state = loader.load().await.unwrap();
        assert!(!state.is_loading());
        assert_eq!(state.error(), Some(FETCH_FAILED_MESSAGE));
        assert!(state.products().is_empty());
    }

    #[tokio::test]
    async fn test_teardown_before_resolution_discards_result() {
        let (tx, rx) = oneshot::channel();
        let loader = CatalogLoader::new(GatedCatalog {
            gate: tokio::sync::Mutex::new(Some(rx)),
        });
        let guard = loader.guard();

        let pending = tokio::spawn(loader.load());
        guard.teardown();
        tx.send(sample()).unwrap();

        assert_eq!(pending.await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_guard_untouched_delivers_result() {
        let (tx, rx) = oneshot::channel();
        let loader = CatalogLoader::new(GatedCatalog {
            gate: tokio::sync::Mutex::new(Some(rx)),
        });
        let guard = loader.guard();

        let pending = tokio::spawn(loader.load());
        tx.send(sample()).unwrap();

        assert_eq!(pending.await.unwrap(), Some(CatalogState::Ready(sample())));
        assert!(!guard.is_torn_down());
    }

    #[test]
    fn test_into_catalog_state_maps_transport_error() {
        let state = into_catalog_state(Err(FetchError::RequestError("offline".to_string())));
        assert_eq!(state, CatalogState::fetch_failed());
    }
}
