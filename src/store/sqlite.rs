use std::path::Path;
use std::sync::{Arc, Mutex};

use anyhow::{Context, Result};
use chrono::Utc;
use rusqlite::{Connection, OptionalExtension};

use super::{Store, StoreError, STORAGE_KEY};

/// SQLite-backed key-value store.
///
/// Holds a single row in the `kv` table. Several processes may share one
/// database file; the last write wins.
#[derive(Clone)]
pub struct SqliteStore {
    conn: Arc<Mutex<Connection>>,
}

impl SqliteStore {
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let parent = path
            .parent()
            .ok_or_else(|| anyhow::anyhow!("Database path has no parent directory"))?;
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
        let conn = Connection::open(path)?;
        conn.pragma_update(None, "journal_mode", "WAL")?;
        tracing::debug!("Opened quest database at {}", path.display());
        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    pub fn open_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    /// Create the `kv` table if it is missing. Safe to run on every start.
    pub fn migrate(&self) -> Result<()> {
        let conn = self.conn.lock().expect("database lock poisoned");
        conn.execute_batch(
            "CREATE TABLE IF NOT EXISTS kv (
                key TEXT PRIMARY KEY,
                value TEXT NOT NULL,
                updated_at TEXT NOT NULL
            )",
        )
        .context("Failed to create kv table")?;
        Ok(())
    }
}

impl Store for SqliteStore {
    fn raw_value(&self) -> Result<Option<String>, StoreError> {
        let conn = self.conn.lock().expect("database lock poisoned");
        let value = conn
            .query_row(
                "SELECT value FROM kv WHERE key = ?",
                [STORAGE_KEY],
                |row| row.get(0),
            )
            .optional()?;
        Ok(value)
    }

    fn write_raw(&self, raw: &str) -> Result<(), StoreError> {
        let mut conn = self.conn.lock().expect("database lock poisoned");
        let tx = conn.transaction()?;
        tx.execute(
            "INSERT INTO kv (key, value, updated_at) VALUES (?, ?, ?)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at",
            (STORAGE_KEY, raw, Utc::now().to_rfc3339()),
        )?;
        tx.commit()?;
        Ok(())
    }
}
