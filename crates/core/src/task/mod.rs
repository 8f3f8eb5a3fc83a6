mod error;
mod service;
mod types;
mod validation;

pub use error::{FieldError, TaskError};
pub use service::TaskService;
pub use types::Task;
pub use validation::TaskPayload;
