//! Database module for `SQLite` storage (key-value blobs, daily poem)

use anyhow::{Context, Result};
use chrono::{DateTime, Local};
use rusqlite::{Connection, OptionalExtension, params};
use std::path::Path;

use crate::models::{DailyPoemRecord, Poem};
use crate::paths;

/// Database connection wrapper
pub struct Database {
    conn: Connection,
}

/// Raw daily poem row, before decoding
#[derive(Debug, Clone)]
pub struct DailyPoemRow {
    /// Poem title
    pub title: String,
    /// Author name
    pub author: String,
    /// JSON array of lines
    pub lines_json: String,
    /// RFC 3339 timestamp
    pub acquired_at: String,
}

impl DailyPoemRow {
    /// Decode into a record; `None` if any column is malformed
    pub fn decode(self) -> Option<DailyPoemRecord> {
        let lines: Vec<String> = serde_json::from_str(&self.lines_json).ok()?;
        let acquired_at = DateTime::parse_from_rfc3339(&self.acquired_at)
            .ok()?
            .with_timezone(&Local);

        Some(DailyPoemRecord::new(
            Poem {
                title: self.title,
                author: self.author,
                lines,
            },
            acquired_at,
        ))
    }
}

impl Database {
    /// Open or create the database at the default location
    pub fn open() -> Result<Self> {
        let path = paths::database_path()?;
        Self::open_path(&path)
    }

    /// Open or create the database at a specific path
    pub fn open_path(path: &Path) -> Result<Self> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).context("Failed to create data directory")?;
        }

        let conn = Connection::open(path).context("Failed to open database")?;

        let db = Self { conn };
        db.init()?;

        Ok(db)
    }

    /// Initialize the database schema
    fn init(&self) -> Result<()> {
        self.conn.execute_batch(
            r"
            -- Key-value blobs
            CREATE TABLE IF NOT EXISTS kv (
                key TEXT PRIMARY KEY,
                value TEXT NOT NULL
            );

            -- Daily poem (at most one row)
            CREATE TABLE IF NOT EXISTS daily_poem (
                id INTEGER PRIMARY KEY CHECK (id = 1),
                title TEXT NOT NULL,
                author TEXT NOT NULL,
                lines TEXT NOT NULL,
                acquired_at TEXT NOT NULL
            );
            ",
        )?;

        Ok(())
    }

    // ==================== Key-Value ====================

    /// Get the value stored under `key`
    pub fn get_value(&self, key: &str) -> Result<Option<String>> {
        let value = self
            .conn
            .query_row("SELECT value FROM kv WHERE key = ?1", params![key], |row| {
                row.get(0)
            })
            .optional()?;
        Ok(value)
    }

    /// Store `value` under `key`, replacing any previous value
    pub fn set_value(&self, key: &str, value: &str) -> Result<()> {
        self.conn.execute(
            "INSERT OR REPLACE INTO kv (key, value) VALUES (?1, ?2)",
            params![key, value],
        )?;
        Ok(())
    }

    // ==================== Daily Poem ====================

    /// Get the daily poem row, if any
    pub fn get_daily_poem(&self) -> Result<Option<DailyPoemRow>> {
        let row = self
            .conn
            .query_row(
                "SELECT title, author, lines, acquired_at FROM daily_poem LIMIT 1",
                [],
                |row| {
                    Ok(DailyPoemRow {
                        title: row.get(0)?,
                        author: row.get(1)?,
                        lines_json: row.get(2)?,
                        acquired_at: row.get(3)?,
                    })
                },
            )
            .optional()?;
        Ok(row)
    }

    /// Replace the daily poem with a new one
    ///
    /// The delete and the insert commit together.
    pub fn replace_daily_poem(&self, poem: &Poem, acquired_at: DateTime<Local>) -> Result<()> {
        let lines_json =
            serde_json::to_string(&poem.lines).context("Failed to encode poem lines")?;

        let tx = self.conn.unchecked_transaction()?;
        tx.execute("DELETE FROM daily_poem", [])?;
        tx.execute(
            r"INSERT INTO daily_poem (id, title, author, lines, acquired_at)
               VALUES (1, ?1, ?2, ?3, ?4)",
            params![poem.title, poem.author, lines_json, acquired_at.to_rfc3339()],
        )?;
        tx.commit()?;

        Ok(())
    }

    /// Overwrite raw daily poem columns (used to simulate damaged rows)
    #[cfg(test)]
    pub(crate) fn put_raw_daily_poem(&self, row: &DailyPoemRow) -> Result<()> {
        self.conn.execute(
            r"INSERT OR REPLACE INTO daily_poem (id, title, author, lines, acquired_at)
               VALUES (1, ?1, ?2, ?3, ?4)",
            params![row.title, row.author, row.lines_json, row.acquired_at],
        )?;
        Ok(())
    }
}
