//! Cached task repository decorator.
//!
//! The whole collection is cached as one snapshot under [`TASKS_KEY`]. The
//! store is the system of record: cache failures are logged and swallowed,
//! store failures are returned.
//!
//! A list that races a write can repopulate the snapshot with pre-write rows
//! if its store read lands before the write and its cache set lands after the
//! write's invalidation. The next write clears it again.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;

use todolist_core::cache::{deserialize_tasks, serialize_tasks, Cache, TASKS_KEY};
use todolist_core::storage::{Result, TaskRepository, TaskStore, WriteOutcome};
use todolist_core::task::Task;

/// Cached task repository decorator.
///
/// # Type Parameters
///
/// * `S` - The underlying store implementation
/// * `C` - The cache implementation
pub struct CachedTaskRepository<S, C>
where
    S: TaskStore,
    C: Cache,
{
    store: Arc<S>,
    cache: Arc<C>,
    ttl: Option<Duration>,
}

impl<S, C> CachedTaskRepository<S, C>
where
    S: TaskStore,
    C: Cache,
{
    /// Creates a new cached task repository.
    ///
    /// # Arguments
    ///
    /// * `store` - The relational store holding the tasks
    /// * `cache` - The cache holding the snapshot
    /// * `ttl` - Snapshot lifetime, `None` keeps it until the next write
    pub fn new(store: Arc<S>, cache: Arc<C>, ttl: Option<Duration>) -> Self {
        Self { store, cache, ttl }
    }

    /// Reads the snapshot, returning `None` on a miss, an empty snapshot or
    /// any cache failure.
    async fn cached_tasks(&self) -> Option<Vec<Task>> {
        let bytes = match self.cache.get(TASKS_KEY).await {
            Ok(Some(bytes)) => bytes,
            Ok(None) => {
                tracing::trace!("Cache miss for tasks");
                return None;
            }
            Err(err) => {
                tracing::warn!(error = %err, "Cache read failed, falling back to store");
                return None;
            }
        };

        match deserialize_tasks(&bytes) {
            Ok(tasks) if !tasks.is_empty() => {
                tracing::trace!(count = tasks.len(), "Cache hit for tasks");
                Some(tasks)
            }
            Ok(_) => {
                tracing::trace!("Cached task snapshot is empty");
                None
            }
            Err(err) => {
                tracing::warn!(error = %err, "Cache tasks deserialization failed");
                None
            }
        }
    }

    async fn populate(&self, tasks: &[Task]) {
        let bytes = match serialize_tasks(tasks) {
            Ok(bytes) => bytes,
            Err(err) => {
                tracing::warn!(error = %err, "Failed to serialize tasks for cache");
                return;
            }
        };

        if let Err(err) = self.cache.set(TASKS_KEY, &bytes, self.ttl).await {
            tracing::warn!(error = %err, "Failed to cache tasks");
        }
    }

    async fn invalidate(&self) {
        if let Err(err) = self.cache.delete(TASKS_KEY).await {
            tracing::warn!(error = %err, "Failed to invalidate tasks cache");
        }
    }
}

#[async_trait]
impl<S, C> TaskRepository for CachedTaskRepository<S, C>
where
    S: TaskStore + 'static,
    C: Cache + 'static,
{
    async fn list_all(&self) -> Result<Vec<Task>> {
        if let Some(tasks) = self.cached_tasks().await {
            return Ok(tasks);
        }

        let rows = self.store.fetch_all().await?;

        // A row that fails to decode is dropped, the rest of the read survives.
        let tasks: Vec<Task> = rows
            .into_iter()
            .filter_map(|row| match row {
                Ok(task) => Some(task),
                Err(err) => {
                    tracing::warn!(error = %err, "Skipping undecodable task row");
                    None
                }
            })
            .collect();

        self.populate(&tasks).await;

        Ok(tasks)
    }

    async fn create(&self, task: &Task) -> Result<Task> {
        // 1. Persist to storage
        let inserted = self.store.insert(task).await;

        // 2. Invalidate snapshot whether or not the insert succeeded
        self.invalidate().await;

        let id = inserted?;
        tracing::debug!(task_id = id, task_name = %task.task_name, "Task created");
        Ok(task.clone().with_id(id))
    }

    async fn update(&self, task: &Task) -> Result<WriteOutcome> {
        let updated = self.store.update(task).await;
        self.invalidate().await;

        let outcome = WriteOutcome::from_rows_affected(updated?);
        tracing::debug!(task_id = task.id, ?outcome, "Task updated");
        Ok(outcome)
    }

    async fn delete(&self, id: i64) -> Result<WriteOutcome> {
        let deleted = self.store.delete(id).await;
        self.invalidate().await;

        let outcome = WriteOutcome::from_rows_affected(deleted?);
        tracing::debug!(task_id = id, ?outcome, "Task deleted");
        Ok(outcome)
    }
}
