//! Newtype IDs for type-safe identifiers.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a catalog product.
///
/// Serialized as a bare string, matching the `id` field of the catalog
/// resource.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(String);

impl ProductId {
    /// Create a new ID from a string.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the ID as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for ProductId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for ProductId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_from_str() {
        let id: ProductId = "prod-456".into();
        assert_eq!(id.as_str(), "prod-456");
        assert_eq!(format!("{}", id), "prod-456");
    }

    #[test]
    fn test_id_serializes_as_plain_string() {
        let id = ProductId::new("42");
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"42\"");

        let back: ProductId = serde_json::from_str("\"42\"").unwrap();
        assert_eq!(back, id);
    }
}
