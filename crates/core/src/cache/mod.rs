mod error;
mod keys;
mod serialization;
mod traits;

pub use error::{CacheError, Result};
pub use keys::TASKS_KEY;
pub use serialization::{deserialize_tasks, serialize_tasks, SerializationError};
pub use traits::Cache;
