//! Bookshelf Core Library
//!
//! This crate provides the book-catalog state container: the canonical
//! collection of book records, the commands that mutate it, the filtered and
//! paginated views derived from it, and its persistence to key-value storage.

pub mod backend;
pub mod config;
pub mod error;
pub mod state;
pub mod storage;
pub mod store;
pub mod types;
pub mod view;

pub use backend::{CatalogBackend, SimulatedBackend};
pub use config::{LatencyConfig, StoreConfig};
pub use error::{BackendError, Result, StorageError, StoreError, ValidationError};
pub use state::{reduce, Action, StoreState};
pub use storage::{FileStorage, KeyValueStore, MemoryStorage, STORAGE_KEY};
pub use store::{BookStore, StoreEvent};
pub use types::{Book, BookDraft, BookId, BookStatus, FilterCriteria};
pub use view::CatalogStats;
