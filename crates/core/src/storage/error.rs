use thiserror::Error;

/// Errors that can occur during store and repository operations.
///
/// `ConnectionFailed` and `QueryFailed` mean the store could not serve the
/// call; `InvalidData` reports a single row that failed to decode.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RepositoryError {
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),
    #[error("Query failed: {0}")]
    QueryFailed(String),
    #[error("Invalid data: {0}")]
    InvalidData(String),
}

/// Result type for repository operations.
pub type Result<T> = std::result::Result<T, RepositoryError>;
