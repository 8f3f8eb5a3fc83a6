use async_trait::async_trait;

use crate::task::Task;

use super::{RepositoryError, Result, WriteOutcome};

/// A single decoded row from [`TaskStore::fetch_all`].
///
/// Decode failures are reported per row so callers can skip a corrupt row
/// without losing the rest of the read.
pub type RowResult = std::result::Result<Task, RepositoryError>;

/// Relational store adapter over the `tasks` table (`id, task_name, is_done`).
#[async_trait]
pub trait TaskStore: Send + Sync {
    /// Fetches every row in store-natural (ascending id) order.
    ///
    /// The outer error is a connection or statement failure.
    async fn fetch_all(&self) -> Result<Vec<RowResult>>;

    /// Inserts a task and returns the id generated by the store.
    async fn insert(&self, task: &Task) -> Result<i64>;

    /// Updates `task_name` and `is_done` of the row with `task.id`.
    /// Returns the number of rows affected.
    async fn update(&self, task: &Task) -> Result<u64>;

    /// Deletes the row with the given id. Returns the number of rows affected.
    async fn delete(&self, id: i64) -> Result<u64>;
}

/// Storage contract consumed by [`crate::task::TaskService`].
#[async_trait]
pub trait TaskRepository: Send + Sync {
    /// Lists every task.
    async fn list_all(&self) -> Result<Vec<Task>>;

    /// Persists a new task and returns it with the store-assigned id attached.
    async fn create(&self, task: &Task) -> Result<Task>;

    /// Updates an existing task by id.
    async fn update(&self, task: &Task) -> Result<WriteOutcome>;

    /// Deletes a task by id.
    async fn delete(&self, id: i64) -> Result<WriteOutcome>;
}
