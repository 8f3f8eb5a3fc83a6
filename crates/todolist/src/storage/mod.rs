//! Storage backend implementations.
//!
//! This module provides concrete implementations of the `TaskStore` trait
//! defined in `todolist_core::storage`, plus the cache-aside decorator that
//! turns a store into a `TaskRepository`. The store is selected at compile
//! time via feature flags.
//!
//! # Feature Flags
//!
//! - `sqlite` (default): SQLite store using `rusqlite` and `tokio-rusqlite`
//! - `inmemory`: In-memory store for development and tests
//!
//! These features are mutually exclusive - only one store can be enabled at
//! a time.
//!
//! # Examples
//!
//! Build with SQLite (default):
//! ```bash
//! cargo build -p todolist
//! ```
//!
//! Build with the in-memory store:
//! ```bash
//! cargo build -p todolist --no-default-features --features inmemory,memory
//! ```

// Compile-time checks for mutual exclusivity
#[cfg(all(feature = "sqlite", feature = "inmemory"))]
compile_error!(
    "Features 'sqlite' and 'inmemory' are mutually exclusive. \
    Enable only one storage backend at a time."
);

#[cfg(not(any(feature = "sqlite", feature = "inmemory")))]
compile_error!(
    "No storage backend selected. Enable 'sqlite' or 'inmemory' feature. \
    Example: cargo build -p todolist --features sqlite"
);

pub mod cached;

#[cfg(feature = "sqlite")]
pub mod sqlite;

#[cfg(feature = "inmemory")]
pub mod inmemory;

#[cfg(feature = "sqlite")]
pub use sqlite::SqliteStore;

#[cfg(feature = "inmemory")]
pub use inmemory::InMemoryStore;
