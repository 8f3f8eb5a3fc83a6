//! Cached repository decorator.
//!
//! Wraps a [`TaskStore`](todolist_core::storage::TaskStore) with the
//! cache-aside pattern:
//!
//! - **Reads**: Check the snapshot in cache first, on miss read the store and
//!   repopulate the snapshot
//! - **Writes**: Mutate the store, then delete the snapshot
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//!
//! let store = Arc::new(SqliteStore::new("todolist.db").await?);
//! let cache = Arc::new(MemoryCache::new(10_000));
//!
//! let repo = CachedTaskRepository::new(store, cache, None);
//! ```

mod task;

pub use task::CachedTaskRepository;
