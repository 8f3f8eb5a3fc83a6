//! In-memory storage backend.
//!
//! Keeps tasks in a `BTreeMap` wrapped in `Arc<RwLock<_>>`, with ids handed
//! out from an atomic counter the way an autoincrement column would. Useful
//! for development and tests where persistence is not required.
//!
//! # Example
//!
//! ```rust,ignore
//! use todolist::storage::inmemory::InMemoryStore;
//!
//! let store = InMemoryStore::new();
//! ```

mod store;

pub use store::InMemoryStore;
