//! Domain core for the todolist service.
//!
//! Pure types, validation, error taxonomies and the storage/cache contracts.
//! Concrete adapters (SQLite, Redis, in-memory) live in the `todolist` crate.

pub mod cache;
pub mod storage;
pub mod task;
