//! Storefront configuration.

use std::num::NonZeroUsize;

use serde::{Deserialize, Serialize};

use crate::error::CommerceError;

/// Environment variable overriding the number of products per page.
pub const PAGE_SIZE_ENV: &str = "MINISTORE_PRODUCTS_PER_PAGE";

/// Products per page when no override is given.
pub const DEFAULT_PAGE_SIZE: usize = 6;

/// Location of the catalog resource, relative to the page origin.
pub const DEFAULT_CATALOG_PATH: &str = "/products.json";

/// How long a toast stays up before it dismisses itself.
pub const DEFAULT_TOAST_TIMEOUT_MS: u32 = 3_000;

/// Storefront configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Maximum number of products shown on one page.
    #[serde(default = "default_page_size")]
    pub page_size: NonZeroUsize,

    /// Path of the static catalog resource.
    #[serde(default = "default_catalog_path")]
    pub catalog_path: String,

    /// Auto-dismiss delay for toasts, in milliseconds.
    #[serde(default = "default_toast_timeout_ms")]
    pub toast_timeout_ms: u32,
}

fn default_page_size() -> NonZeroUsize {
    NonZeroUsize::new(DEFAULT_PAGE_SIZE).unwrap_or(NonZeroUsize::MIN)
}

fn default_catalog_path() -> String {
    DEFAULT_CATALOG_PATH.to_string()
}

fn default_toast_timeout_ms() -> u32 {
    DEFAULT_TOAST_TIMEOUT_MS
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
            catalog_path: default_catalog_path(),
            toast_timeout_ms: default_toast_timeout_ms(),
        }
    }
}

impl StoreConfig {
    /// Build a config from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from an arbitrary key lookup.
    ///
    /// The storefront feeds this from `option_env!`, since a browser has no
    /// process environment.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self::default().with_page_size_override(lookup(PAGE_SIZE_ENV).as_deref())
    }

    /// Apply a raw page-size override.
    ///
    /// Values that are not a positive integer keep the current page size.
    pub fn with_page_size_override(mut self, raw: Option<&str>) -> Self {
        let Some(raw) = raw else {
            return self;
        };

        match parse_page_size(raw) {
            Ok(size) => self.page_size = size,
            Err(e) => {
                tracing::warn!(
                    error = %e,
                    fallback = self.page_size.get(),
                    "ignoring {PAGE_SIZE_ENV}"
                );
            }
        }
        self
    }

    /// Set the page size.
    pub fn with_page_size(mut self, page_size: NonZeroUsize) -> Self {
        self.page_size = page_size;
        self
    }
}

/// Parse a page size, rejecting zero and non-numeric input.
pub fn parse_page_size(raw: &str) -> Result<NonZeroUsize, CommerceError> {
    raw.trim()
        .parse::<usize>()
        .ok()
        .and_then(NonZeroUsize::new)
        .ok_or_else(|| CommerceError::InvalidPageSize(raw.to_string()))
}
