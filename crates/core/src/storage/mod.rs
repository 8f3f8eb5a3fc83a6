mod error;
mod traits;
mod types;

pub use error::{RepositoryError, Result};
pub use traits::{RowResult, TaskRepository, TaskStore};
pub use types::WriteOutcome;
