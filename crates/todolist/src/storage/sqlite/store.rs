//! SQLite store implementation.
//!
//! Implements `TaskStore` from `todolist_core::storage` using SQLite.

use async_trait::async_trait;
use tokio_rusqlite::Connection;

use todolist_core::storage::{RepositoryError, Result, RowResult, TaskStore};
use todolist_core::task::Task;

use super::conversions::{row_error, row_to_task};
use super::error::map_tokio_rusqlite_error;
use super::schema;

/// Helper to wrap rusqlite errors for tokio_rusqlite closures.
fn wrap_err(e: rusqlite::Error) -> tokio_rusqlite::Error {
    tokio_rusqlite::Error::Rusqlite(e)
}

/// SQLite-based task store.
///
/// The connection handle is shared by all requests; `tokio-rusqlite` runs
/// every call on its own background thread.
pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    /// Creates a new store with a file-based database.
    ///
    /// The database file will be created if it doesn't exist.
    /// The schema is created automatically.
    pub async fn new(path: &str) -> Result<Self> {
        let conn = Connection::open(path)
            .await
            .map_err(|e| RepositoryError::ConnectionFailed(e.to_string()))?;

        Self::init_schema(&conn).await?;

        Ok(Self { conn })
    }

    /// Creates a new store with an in-memory database.
    ///
    /// Useful for testing - data is lost when the connection is dropped.
    pub async fn new_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()
            .await
            .map_err(|e| RepositoryError::ConnectionFailed(e.to_string()))?;

        Self::init_schema(&conn).await?;

        Ok(Self { conn })
    }

    async fn init_schema(conn: &Connection) -> Result<()> {
        conn.call(|conn| {
            conn.execute_batch(schema::CREATE_TABLES)
                .map_err(wrap_err)?;
            Ok(())
        })
        .await
        .map_err(|e| RepositoryError::QueryFailed(e.to_string()))
    }
}

#[async_trait]
impl TaskStore for SqliteStore {
    async fn fetch_all(&self) -> Result<Vec<RowResult>> {
        self.conn
            .call(|conn| {
                let mut stmt = conn.prepare(schema::SELECT_ALL_TASKS).map_err(wrap_err)?;
                let rows = stmt.query_map([], row_to_task).map_err(wrap_err)?;

                // Decode failures stay per row so one bad row cannot sink the read
                let rows: Vec<RowResult> = rows.map(|row| row.map_err(row_error)).collect();
                Ok(rows)
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, "Task"))
    }

    async fn insert(&self, task: &Task) -> Result<i64> {
        let task_name = task.task_name.clone();
        let is_done = task.is_done;

        self.conn
            .call(move |conn| {
                conn.query_row(
                    schema::INSERT_TASK_RETURNING_ID,
                    rusqlite::params![task_name, is_done],
                    |row| row.get(0),
                )
                .map_err(wrap_err)
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, "Task"))
    }

    async fn update(&self, task: &Task) -> Result<u64> {
        let id = task.id;
        let task_name = task.task_name.clone();
        let is_done = task.is_done;

        self.conn
            .call(move |conn| {
                let rows = conn
                    .execute(
                        schema::UPDATE_TASK,
                        rusqlite::params![task_name, is_done, id],
                    )
                    .map_err(wrap_err)?;
                Ok(rows as u64)
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, "Task"))
    }

    async fn delete(&self, id: i64) -> Result<u64> {
        self.conn
            .call(move |conn| {
                let rows = conn
                    .execute(schema::DELETE_TASK, [id])
                    .map_err(wrap_err)?;
                Ok(rows as u64)
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, "Task"))
    }
}
