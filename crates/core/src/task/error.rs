use serde::Serialize;
use thiserror::Error;

use crate::storage::RepositoryError;

/// A single rejected input field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    /// Builds the error reported for a missing required field.
    pub fn required(field: &str) -> Self {
        Self {
            field: field.to_string(),
            message: format!("{field} is required"),
        }
    }
}

/// Errors surfaced by [`super::TaskService`] and inbound validation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TaskError {
    #[error("Invalid Request Data")]
    Validation(Vec<FieldError>),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
    #[error("error, create task failed")]
    CreateFailed,
    #[error("error, update task failed")]
    UpdateFailed,
    #[error("error, delete task failed")]
    DeleteFailed,
}
