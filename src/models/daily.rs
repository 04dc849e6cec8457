//! Daily poem record

use chrono::{DateTime, Local, NaiveDate};

use super::Poem;

/// The single cached "poem of the day"
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DailyPoemRecord {
    /// The cached poem
    pub poem: Poem,
    /// When the poem was fetched
    pub acquired_at: DateTime<Local>,
}

impl DailyPoemRecord {
    /// Create a record for a poem fetched at `acquired_at`
    pub const fn new(poem: Poem, acquired_at: DateTime<Local>) -> Self {
        Self { poem, acquired_at }
    }

    /// Local calendar date the poem was fetched on
    pub fn acquired_on(&self) -> NaiveDate {
        self.acquired_at.date_naive()
    }

    /// Whether the record belongs to the calendar day of `now`
    pub fn is_for_day_of(&self, now: DateTime<Local>) -> bool {
        self.acquired_on() == now.date_naive()
    }
}
