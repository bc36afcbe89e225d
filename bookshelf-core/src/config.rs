//! Store configuration

use crate::storage::STORAGE_KEY;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Number of books shown per page
pub const DEFAULT_BOOKS_PER_PAGE: usize = 10;

/// Settings fixed for a store's lifetime
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Storage key holding the serialized collection
    pub storage_key: String,

    /// Page size of the paginated view (must be positive)
    pub books_per_page: usize,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            storage_key: STORAGE_KEY.to_string(),
            books_per_page: DEFAULT_BOOKS_PER_PAGE,
        }
    }
}

impl StoreConfig {
    pub fn with_books_per_page(mut self, books_per_page: usize) -> Self {
        self.books_per_page = books_per_page.max(1);
        self
    }

    pub fn with_storage_key(mut self, key: impl Into<String>) -> Self {
        self.storage_key = key.into();
        self
    }
}

/// How long each simulated backend call takes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LatencyConfig {
    #[serde(with = "millis")]
    pub create: Duration,
    #[serde(with = "millis")]
    pub update: Duration,
    #[serde(with = "millis")]
    pub delete: Duration,
}

impl Default for LatencyConfig {
    fn default() -> Self {
        Self {
            create: Duration::from_millis(1000),
            update: Duration::from_millis(1000),
            delete: Duration::from_millis(500),
        }
    }
}

impl LatencyConfig {
    /// No delay at all
    pub fn instant() -> Self {
        Self {
            create: Duration::ZERO,
            update: Duration::ZERO,
            delete: Duration::ZERO,
        }
    }
}

mod millis {
    use serde::{Deserialize, Deserializer, Serializer};
    use std::time::Duration;

    pub fn serialize<S: Serializer>(value: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u64(value.as_millis() as u64)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Duration, D::Error> {
        u64::deserialize(deserializer).map(Duration::from_millis)
    }
}
