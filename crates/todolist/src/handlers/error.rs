use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use todolist_core::task::TaskError;

use super::response::{ErrorResponse, ResponseStandard, StatusResponse};

/// Error type returned by the task handlers.
#[derive(Debug, Error)]
pub enum AppError {
    /// The request body was not valid JSON for a task.
    #[error("Invalid Request Data")]
    InvalidBody(#[from] JsonRejection),
    /// The `{id}` path segment is not an integer.
    #[error("To do list not found")]
    TaskNotFound,
    #[error(transparent)]
    Task(#[from] TaskError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::InvalidBody(rejection) => {
                tracing::debug!(error = %rejection, "Rejected request body");
                (
                    StatusCode::UNPROCESSABLE_ENTITY,
                    Json(ErrorResponse::new("Invalid Request Data")),
                )
                    .into_response()
            }
            AppError::TaskNotFound => (
                StatusCode::NOT_FOUND,
                Json(ErrorResponse::new("To do list not found")),
            )
                .into_response(),
            AppError::Task(TaskError::Validation(fields)) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                Json(ErrorResponse::new("Invalid Request Data").with_fields(fields)),
            )
                .into_response(),
            AppError::Task(
                err @ (TaskError::CreateFailed | TaskError::UpdateFailed | TaskError::DeleteFailed),
            ) => (
                StatusCode::OK,
                Json(ResponseStandard::new(
                    err.to_string(),
                    StatusResponse { status: false },
                )),
            )
                .into_response(),
            AppError::Task(TaskError::Repository(err)) => {
                tracing::error!(error = %err, "Repository failure");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorResponse::new("Internal Server Error")),
                )
                    .into_response()
            }
        }
    }
}
