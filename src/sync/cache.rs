//! Single-record cache for the daily poem

use chrono::{DateTime, Local};

use crate::db::Database;
use crate::models::{DailyPoemRecord, Poem};

/// Holds zero or one [`DailyPoemRecord`]
pub struct DailyPoemCache<'a> {
    db: &'a Database,
}

impl<'a> DailyPoemCache<'a> {
    /// Create a cache backed by `db`
    pub const fn new(db: &'a Database) -> Self {
        Self { db }
    }

    /// Load the cached record
    ///
    /// Absent, unreadable and malformed records all load as `None`.
    pub fn load(&self) -> Option<DailyPoemRecord> {
        let row = match self.db.get_daily_poem() {
            Ok(row) => row?,
            Err(e) => {
                tracing::warn!("Failed to read daily poem: {e}");
                return None;
            }
        };

        let record = row.decode();
        if record.is_none() {
            tracing::warn!("Ignoring corrupt daily poem record");
        }
        record
    }

    /// Replace any cached record with `poem`, fetched at `acquired_at`
    ///
    /// Returns whether the write succeeded. Failures are logged, not raised.
    pub fn save(&self, poem: &Poem, acquired_at: DateTime<Local>) -> bool {
        match self.db.replace_daily_poem(poem, acquired_at) {
            Ok(()) => true,
            Err(e) => {
                tracing::warn!("Failed to save daily poem: {e}");
                false
            }
        }
    }
}
