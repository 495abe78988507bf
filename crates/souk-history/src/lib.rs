//! Bounded, deduplicated, persisted history of user search queries.
//!
//! [`SearchHistory`] owns the in-memory list and writes it through to a
//! [`HistoryStorage`] slot after every mutation. [`MemoryStorage`] backs
//! tests; [`FileStorage`] keeps the slot as a JSON file on disk.

pub mod error;
pub mod storage;
pub mod store;
pub mod types;

pub use error::HistoryError;
pub use storage::{FileStorage, HistoryStorage, MemoryStorage};
pub use store::{SearchHistory, DEFAULT_CAPACITY, DEFAULT_RECENT_LIMIT};
pub use types::SearchHistoryItem;
