use std::{
    path::Path,
    sync::{Mutex, MutexGuard},
    time::Duration,
};

use rusqlite::{params, Connection, OptionalExtension, Row};

use crate::model::{Todo, TodoRecord};

use super::{StorageError, StorageResult, TodoRepository};

const SCHEMA: &str = "
CREATE TABLE IF NOT EXISTS todos (
    id        INTEGER PRIMARY KEY AUTOINCREMENT,
    title     TEXT    NOT NULL,
    completed INTEGER NOT NULL DEFAULT 0
);
";

/// Todos stored in a single SQLite table.
pub struct SqliteTodoRepository {
    conn: Mutex<Connection>,
}

impl SqliteTodoRepository {
    /// Opens (creating if needed) the database at `path` and ensures the
    /// schema exists. `":memory:"` gives a private in-memory database.
    pub fn open(path: impl AsRef<Path>) -> StorageResult<Self> {
        let conn = Connection::open(path)?;
        conn.busy_timeout(Duration::from_secs(5))?;
        Self::from_connection(conn)
    }

    pub fn open_in_memory() -> StorageResult<Self> {
        Self::from_connection(Connection::open_in_memory()?)
    }

    fn from_connection(conn: Connection) -> StorageResult<Self> {
        conn.execute_batch(SCHEMA)?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    fn conn(&self) -> StorageResult<MutexGuard<'_, Connection>> {
        self.conn.lock().map_err(|_| StorageError::Poisoned)
    }
}

fn row_to_todo(row: &Row<'_>) -> rusqlite::Result<Todo> {
    Ok(Todo {
        id: row.get(0)?,
        title: row.get(1)?,
        completed: row.get(2)?,
    })
}

impl TodoRepository for SqliteTodoRepository {
    fn find_all(&self) -> StorageResult<Vec<Todo>> {
        let conn = self.conn()?;
        let mut stmt = conn.prepare("SELECT id, title, completed FROM todos ORDER BY id")?;
        let todos = stmt
            .query_map([], row_to_todo)?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(todos)
    }

    fn find_by_id(&self, id: i64) -> StorageResult<Option<Todo>> {
        let conn = self.conn()?;
        let todo = conn
            .query_row(
                "SELECT id, title, completed FROM todos WHERE id = ?1",
                params![id],
                row_to_todo,
            )
            .optional()?;
        Ok(todo)
    }

    fn save(&self, record: TodoRecord) -> StorageResult<Todo> {
        let conn = self.conn()?;
        let id = match record.id {
            None => {
                conn.execute(
                    "INSERT INTO todos (title, completed) VALUES (?1, ?2)",
                    params![record.title, record.completed],
                )?;
                conn.last_insert_rowid()
            }
            Some(id) => {
                conn.execute(
                    "INSERT INTO todos (id, title, completed) VALUES (?1, ?2, ?3)
                     ON CONFLICT(id) DO UPDATE SET
                         title = excluded.title,
                         completed = excluded.completed",
                    params![id, record.title, record.completed],
                )?;
                id
            }
        };

        Ok(Todo {
            id,
            title: record.title,
            completed: record.completed,
        })
    }

    fn delete_by_id(&self, id: i64) -> StorageResult<()> {
        self.conn()?
            .execute("DELETE FROM todos WHERE id = ?1", params![id])?;
        Ok(())
    }
}
