//! Use case layer: one business operation per call.
//!
//! Translates repository outcomes into [`TaskError`]. No caching and no
//! retries happen here; any repository failure ends the call.

use std::sync::Arc;

use crate::storage::{TaskRepository, WriteOutcome};

use super::{Task, TaskError};

/// Orchestrates task operations over a [`TaskRepository`].
#[derive(Clone)]
pub struct TaskService {
    repository: Arc<dyn TaskRepository>,
}

impl TaskService {
    pub fn new(repository: Arc<dyn TaskRepository>) -> Self {
        Self { repository }
    }

    /// Lists every task. Repository errors propagate unchanged.
    pub async fn list_tasks(&self) -> Result<Vec<Task>, TaskError> {
        Ok(self.repository.list_all().await?)
    }

    /// Creates a task. A task returned without a store-assigned id counts as
    /// a failed creation.
    pub async fn create_task(&self, task: Task) -> Result<Task, TaskError> {
        match self.repository.create(&task).await {
            Ok(created) if created.is_persisted() => Ok(created),
            Ok(_) => {
                tracing::warn!(task_name = %task.task_name, "Store assigned no id to new task");
                Err(TaskError::CreateFailed)
            }
            Err(err) => {
                tracing::error!(task_name = %task.task_name, error = %err, "Failed to create task");
                Err(TaskError::CreateFailed)
            }
        }
    }

    /// Updates the task addressed by `task.id`.
    pub async fn update_task(&self, task: Task) -> Result<Task, TaskError> {
        match self.repository.update(&task).await {
            Ok(WriteOutcome::Applied) => Ok(task),
            Ok(WriteOutcome::NotFound) => {
                tracing::debug!(task_id = task.id, "Update affected no rows");
                Err(TaskError::UpdateFailed)
            }
            Err(err) => {
                tracing::error!(task_id = task.id, error = %err, "Failed to update task");
                Err(TaskError::UpdateFailed)
            }
        }
    }

    /// Deletes the task with the given id.
    pub async fn delete_task(&self, id: i64) -> Result<(), TaskError> {
        match self.repository.delete(id).await {
            Ok(WriteOutcome::Applied) => Ok(()),
            Ok(WriteOutcome::NotFound) => {
                tracing::debug!(task_id = id, "Delete affected no rows");
                Err(TaskError::DeleteFailed)
            }
            Err(err) => {
                tracing::error!(task_id = id, error = %err, "Failed to delete task");
                Err(TaskError::DeleteFailed)
            }
        }
    }
}
