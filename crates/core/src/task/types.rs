use serde::{Deserialize, Serialize};

/// A single item of the task list.
///
/// `id` is zero until the store assigns one at creation time and never
/// changes afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: i64,
    pub task_name: String,
    pub is_done: bool,
}

impl Task {
    /// Creates a task that has not been persisted yet.
    pub fn new(task_name: impl Into<String>, is_done: bool) -> Self {
        Self {
            id: 0,
            task_name: task_name.into(),
            is_done,
        }
    }

    /// Sets the id for this task.
    pub fn with_id(mut self, id: i64) -> Self {
        self.id = id;
        self
    }

    /// Returns true once the store has assigned an id.
    pub fn is_persisted(&self) -> bool {
        self.id != 0
    }
}
