//! Application state.
//!
//! Wires the selected store and cache backends into a
//! `CachedTaskRepository` and hands the resulting `TaskService` to every
//! request handler. Backends are chosen at compile time via feature flags.

use std::sync::Arc;

use todolist_core::storage::TaskRepository;
use todolist_core::task::TaskService;

use crate::config::Config;
use crate::storage::cached::CachedTaskRepository;

/// Shared application state.
///
/// Cloned for each request handler; the service itself only holds an `Arc`.
#[derive(Clone)]
pub struct AppState {
    pub tasks: TaskService,
}

impl AppState {
    /// Creates AppState over an already-built repository.
    pub fn from_repository(repository: Arc<dyn TaskRepository>) -> Self {
        Self {
            tasks: TaskService::new(repository),
        }
    }

    /// Creates AppState with the configured store behind the configured cache.
    pub async fn new(config: &Config) -> Result<Self, anyhow::Error> {
        let store = Arc::new(open_store(config).await?);
        let cache = Arc::new(open_cache(config).await?);

        tracing::info!(
            ttl_seconds = config.cache_ttl_seconds,
            "Task repository ready"
        );

        let repository = CachedTaskRepository::new(store, cache, config.cache_ttl());
        Ok(Self::from_repository(Arc::new(repository)))
    }
}

// ============================================================================
// Backend factories
// ============================================================================

#[cfg(feature = "sqlite")]
async fn open_store(config: &Config) -> Result<crate::storage::SqliteStore, anyhow::Error> {
    tracing::info!(path = %config.sqlite_path, "Opening SQLite store");
    Ok(crate::storage::SqliteStore::new(&config.sqlite_path).await?)
}

#[cfg(feature = "inmemory")]
async fn open_store(_config: &Config) -> Result<crate::storage::InMemoryStore, anyhow::Error> {
    tracing::info!("Using in-memory store");
    Ok(crate::storage::InMemoryStore::new())
}

#[cfg(feature = "memory")]
async fn open_cache(config: &Config) -> Result<crate::cache::MemoryCache, anyhow::Error> {
    tracing::info!(max_entries = config.cache_max_entries, "Using in-memory cache");
    Ok(crate::cache::MemoryCache::new(config.cache_max_entries))
}

#[cfg(feature = "redis")]
async fn open_cache(config: &Config) -> Result<crate::cache::RedisCache, anyhow::Error> {
    tracing::info!(url = %config.redis_url, "Connecting to Redis cache");
    Ok(crate::cache::RedisCache::new(&config.redis_url).await?)
}
