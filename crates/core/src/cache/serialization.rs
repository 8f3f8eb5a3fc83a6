//! Pure functions for serializing the task snapshot to/from cache bytes.
//!
//! JSON keeps cache values human-readable and easy to inspect with `redis-cli`.

use crate::task::Task;
use thiserror::Error;

/// Errors that can occur during cache serialization/deserialization.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SerializationError {
    /// Failed to serialize a value to bytes.
    #[error("Failed to serialize: {0}")]
    SerializeFailed(String),
    /// Failed to deserialize bytes to a value.
    #[error("Failed to deserialize: {0}")]
    DeserializeFailed(String),
}

/// Result type for serialization operations.
pub type Result<T> = std::result::Result<T, SerializationError>;

/// Serializes a slice of tasks to JSON bytes.
pub fn serialize_tasks(tasks: &[Task]) -> Result<Vec<u8>> {
    serde_json::to_vec(tasks).map_err(|e| SerializationError::SerializeFailed(e.to_string()))
}

/// Deserializes JSON bytes to a vector of tasks.
pub fn deserialize_tasks(bytes: &[u8]) -> Result<Vec<Task>> {
    serde_json::from_slice(bytes).map_err(|e| SerializationError::DeserializeFailed(e.to_string()))
}
