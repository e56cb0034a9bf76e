use crate::{
    error::{Result, TaskFlowError},
    storage::Storage,
};
use async_trait::async_trait;
use rusqlite::{params, Connection, OptionalExtension};
use std::path::Path;
use std::sync::Mutex;

/// SQLite-backed storage: blobs live in a single `kv` table
pub struct SqliteStorage {
    connection: Mutex<Connection>,
}

fn sqlite_error(e: rusqlite::Error) -> TaskFlowError {
    TaskFlowError::StorageError(e.to_string())
}

impl SqliteStorage {
    /// Opens (or creates) the database at `database_path`
    pub fn open(database_path: impl AsRef<Path>) -> Result<Self> {
        let connection = Connection::open(database_path).map_err(sqlite_error)?;
        Self::with_connection(connection)
    }

    /// Opens a private in-memory database
    pub fn in_memory() -> Result<Self> {
        let connection = Connection::open_in_memory().map_err(sqlite_error)?;
        Self::with_connection(connection)
    }

    fn with_connection(connection: Connection) -> Result<Self> {
        connection
            .execute(
                "CREATE TABLE IF NOT EXISTS kv (key TEXT PRIMARY KEY, value TEXT NOT NULL)",
                [],
            )
            .map_err(sqlite_error)?;
        Ok(Self {
            connection: Mutex::new(connection),
        })
    }

    fn with_conn<T>(&self, f: impl FnOnce(&Connection) -> rusqlite::Result<T>) -> Result<T> {
        let conn = self
            .connection
            .lock()
            .map_err(|_| TaskFlowError::StorageError("sqlite connection poisoned".to_string()))?;
        f(&conn).map_err(sqlite_error)
    }
}

#[async_trait]
impl Storage for SqliteStorage {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        self.with_conn(|conn| {
            conn.query_row("SELECT value FROM kv WHERE key = ?1", params![key], |row| {
                row.get(0)
            })
            .optional()
        })
    }

    async fn set(&self, key: &str, blob: &str) -> Result<()> {
        self.with_conn(|conn| {
            conn.execute(
                "INSERT INTO kv (key, value) VALUES (?1, ?2) \
                 ON CONFLICT(key) DO UPDATE SET value = excluded.value",
                params![key, blob],
            )
            .map(|_| ())
        })
    }

    async fn remove(&self, key: &str) -> Result<()> {
        self.with_conn(|conn| {
            conn.execute("DELETE FROM kv WHERE key = ?1", params![key])
                .map(|_| ())
        })
    }
}
