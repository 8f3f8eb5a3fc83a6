//! Inbound request body and its validation.

use serde::Deserialize;

use super::{FieldError, Task, TaskError};

/// JSON body accepted by the create and update endpoints.
///
/// Any `id` in the body is ignored; ids come from the store or the URL.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct TaskPayload {
    #[serde(default)]
    pub task_name: Option<String>,
    #[serde(default)]
    pub is_done: Option<bool>,
}

impl TaskPayload {
    /// Validates the payload and converts it into an unpersisted [`Task`].
    ///
    /// `task_name` must be present and non-empty. `is_done` defaults to false.
    pub fn validate(self) -> Result<Task, TaskError> {
        match self.task_name {
            Some(name) if !name.is_empty() => Ok(Task::new(name, self.is_done.unwrap_or(false))),
            _ => Err(TaskError::Validation(vec![FieldError::required("task_name")])),
        }
    }
}
