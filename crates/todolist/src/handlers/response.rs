//! JSON envelopes shared by the task endpoints.

use serde::Serialize;

use todolist_core::task::FieldError;

/// Success and business-failure envelope: `{"message": ..., "data": ...}`.
#[derive(Debug, Serialize)]
pub struct ResponseStandard<T> {
    pub message: String,
    pub data: T,
}

impl<T> ResponseStandard<T> {
    pub fn new(message: impl Into<String>, data: T) -> Self {
        Self {
            message: message.into(),
            data,
        }
    }
}

/// `{"status": bool}` payload for deletes and failed writes.
#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub status: bool,
}

/// Error envelope: `{"message": ..., "error": [...]}`.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<Vec<FieldError>>,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            error: None,
        }
    }

    pub fn with_fields(mut self, fields: Vec<FieldError>) -> Self {
        self.error = Some(fields);
        self
    }
}
