pub mod docs;
pub mod error;
pub mod health;
pub mod response;
pub mod tasks;

pub use error::AppError;
