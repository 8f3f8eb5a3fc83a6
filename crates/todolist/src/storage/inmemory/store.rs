//! In-memory store implementation.

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use todolist_core::storage::{Result, RowResult, TaskStore};
use todolist_core::task::Task;

/// In-memory task store.
///
/// Rows are ordered by id, matching the SQLite backend's `ORDER BY id`.
/// Data is not persisted and will be lost when the store is dropped.
#[derive(Debug, Clone)]
pub struct InMemoryStore {
    tasks: Arc<RwLock<BTreeMap<i64, Task>>>,
    next_id: Arc<AtomicI64>,
}

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryStore {
    /// Creates a new empty store. The first inserted task gets id 1.
    pub fn new() -> Self {
        Self {
            tasks: Arc::new(RwLock::new(BTreeMap::new())),
            next_id: Arc::new(AtomicI64::new(1)),
        }
    }
}

#[async_trait]
impl TaskStore for InMemoryStore {
    async fn fetch_all(&self) -> Result<Vec<RowResult>> {
        let tasks = self.tasks.read().await;
        Ok(tasks.values().cloned().map(Ok).collect())
    }

    async fn insert(&self, task: &Task) -> Result<i64> {
        let mut tasks = self.tasks.write().await;
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        tasks.insert(id, task.clone().with_id(id));
        Ok(id)
    }

    async fn update(&self, task: &Task) -> Result<u64> {
        let mut tasks = self.tasks.write().await;
        match tasks.get_mut(&task.id) {
            Some(existing) => {
                existing.task_name = task.task_name.clone();
                existing.is_done = task.is_done;
                Ok(1)
            }
            None => Ok(0),
        }
    }

    async fn delete(&self, id: i64) -> Result<u64> {
        let mut tasks = self.tasks.write().await;
        Ok(tasks.remove(&id).map_or(0, |_| 1))
    }
}
