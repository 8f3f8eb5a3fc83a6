//! Redis cache backend implementation.
//!
//! Provides a shared cache for multi-instance deployments. Every instance
//! sees the same `tasks` snapshot, so invalidation on one instance is
//! visible to all.

mod cache;
mod error;

pub use cache::RedisCache;
