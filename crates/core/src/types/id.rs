//! Newtype IDs for type-safe catalog references.
//!
//! Catalog records are keyed by opaque strings (`"1"`, `"2"`, ...). Wrapping
//! them keeps a product id from being mixed up with a category or mood name,
//! which are also plain strings.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Identifier of a wallpaper in the catalog.
///
/// Cart lines and wishlist entries hold this id as a weak reference; the
/// record itself is always looked up in the [`Catalog`](crate::Catalog).
///
/// # Example
///
/// ```rust
/// # use mahatta_core::WallpaperId;
/// let id = WallpaperId::from("3");
/// assert_eq!(id.as_str(), "3");
/// assert_eq!(id.to_string(), "3");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WallpaperId(String);

impl WallpaperId {
    /// Create a new ID from any string-like value.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the underlying string value.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for WallpaperId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for WallpaperId {
    fn from(id: &str) -> Self {
        Self(id.to_owned())
    }
}

impl From<String> for WallpaperId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<WallpaperId> for String {
    fn from(id: WallpaperId) -> Self {
        id.0
    }
}

impl AsRef<str> for WallpaperId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_compare_by_value() {
        assert_eq!(WallpaperId::from("5"), WallpaperId::new(String::from("5")));
        assert_ne!(WallpaperId::from("5"), WallpaperId::from("05"));
    }

    #[test]
    fn test_id_serializes_transparently() {
        let json = serde_json::to_string(&WallpaperId::from("4")).ok();
        assert_eq!(json.as_deref(), Some("\"4\""));
    }
}
