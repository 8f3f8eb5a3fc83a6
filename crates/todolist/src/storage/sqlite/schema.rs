//! SQLite schema definition and SQL query constants.
//!
//! Pure data, no I/O.

/// SQL statement to create the tasks table.
pub const CREATE_TABLES: &str = r#"
CREATE TABLE IF NOT EXISTS tasks (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    task_name TEXT NOT NULL,
    is_done INTEGER NOT NULL DEFAULT 0
);
"#;

pub const SELECT_ALL_TASKS: &str = r#"
SELECT id, task_name, is_done
FROM tasks
ORDER BY id
"#;

pub const INSERT_TASK_RETURNING_ID: &str = r#"
INSERT INTO tasks (task_name, is_done)
VALUES (?1, ?2)
RETURNING id
"#;

pub const UPDATE_TASK: &str = r#"
UPDATE tasks
SET task_name = ?1, is_done = ?2
WHERE id = ?3
"#;

pub const DELETE_TASK: &str = r#"
DELETE FROM tasks
WHERE id = ?1
"#;
