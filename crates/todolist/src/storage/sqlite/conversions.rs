//! SQLite row conversion functions.
//!
//! Pure functions for converting between SQLite rows and domain types.

use rusqlite::Row;
use todolist_core::storage::RepositoryError;
use todolist_core::task::Task;

/// Convert a SQLite row to a Task.
///
/// Expected columns: id, task_name, is_done
pub fn row_to_task(row: &Row) -> rusqlite::Result<Task> {
    let id: i64 = row.get(0)?;
    let task_name: String = row.get(1)?;
    let is_done: bool = row.get(2)?;

    Ok(Task {
        id,
        task_name,
        is_done,
    })
}

/// Convert a per-row decode failure into a repository error.
pub fn row_error(err: rusqlite::Error) -> RepositoryError {
    RepositoryError::InvalidData(format!("Failed to decode task row: {err}"))
}
