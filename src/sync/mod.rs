//! Daily poem refresh
//!
//! Serves the cached poem while it belongs to the current local calendar
//! day, otherwise fetches a new random poem and caches it.

mod cache;

pub use cache::DailyPoemCache;

use chrono::{DateTime, Local};

use crate::api::{ApiError, PoemSource};
use crate::models::Poem;

/// Source of the current time
pub trait Clock {
    /// Current local time
    fn now(&self) -> DateTime<Local>;
}

/// Wall clock
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Local> {
        Local::now()
    }
}

/// Where the daily poem came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Origin {
    /// Cached earlier today
    Cache,
    /// Fetched by this call
    Network,
}

/// Today's poem
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DailyPoem {
    /// The poem
    pub poem: Poem,
    /// Where it came from
    pub origin: Origin,
}

/// Decides between the cached daily poem and a fresh fetch
pub struct DailySync<'a, S, C = SystemClock> {
    source: S,
    cache: DailyPoemCache<'a>,
    clock: C,
}

impl<'a, S: PoemSource> DailySync<'a, S> {
    /// Create a daily sync using the wall clock
    pub const fn new(source: S, cache: DailyPoemCache<'a>) -> Self {
        Self::with_clock(source, cache, SystemClock)
    }
}

impl<'a, S: PoemSource, C: Clock> DailySync<'a, S, C> {
    /// Create a daily sync with an explicit clock
    pub const fn with_clock(source: S, cache: DailyPoemCache<'a>, clock: C) -> Self {
        Self {
            source,
            cache,
            clock,
        }
    }

    /// The poem source
    pub const fn source(&self) -> &S {
        &self.source
    }

    /// Get today's poem
    ///
    /// A failed fetch leaves the cache untouched.
    pub async fn today(&self) -> Result<DailyPoem, ApiError> {
        let now = self.clock.now();

        if let Some(record) = self.cache.load()
            && record.is_for_day_of(now)
        {
            tracing::debug!("Daily poem cache hit for {}", record.acquired_on());
            return Ok(DailyPoem {
                poem: record.poem,
                origin: Origin::Cache,
            });
        }

        tracing::debug!("Daily poem cache miss, fetching a random poem");
        let poem = self.source.random().await?;
        self.cache.save(&poem, now);

        Ok(DailyPoem {
            poem,
            origin: Origin::Network,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::testing::FakeSource;
    use crate::db::Database;
    use chrono::TimeZone;
    use tempfile::tempdir;

    struct FixedClock(DateTime<Local>);

    impl Clock for FixedClock {
        fn now(&self) -> DateTime<Local> {
            self.0
        }
    }

    fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> DateTime<Local> {
        Local.with_ymd_and_hms(y, m, d, h, min, 0).unwrap()
    }

    fn open() -> (tempfile::TempDir, Database) {
        let dir = tempdir().unwrap();
        let db = Database::open_path(&dir.path().join("test.sqlite")).unwrap();
        (dir, db)
    }

    fn cached() -> Poem {
        Poem::new("Cached", "Old", &["c"])
    }

    fn fresh() -> Poem {
        Poem::new("Fresh", "New", &["f"])
    }

    #[test]
    fn test_empty_cache_fetches_once_and_saves() {
        let (_dir, db) = open();
        let now = at(2024, 3, 1, 10, 0);
        let sync = DailySync::with_clock(
            FakeSource::serving(fresh()),
            DailyPoemCache::new(&db),
            FixedClock(now),
        );

        let daily = tokio_test::block_on(sync.today()).unwrap();

        assert_eq!(daily.poem, fresh());
        assert_eq!(daily.origin, Origin::Network);
        assert_eq!(sync.source().random_calls.get(), 1);

        let record = DailyPoemCache::new(&db).load().unwrap();
        assert_eq!(record.poem, fresh());
        assert_eq!(record.acquired_on(), now.date_naive());
    }

    #[test]
    fn test_same_day_is_a_hit_regardless_of_time() {
        let (_dir, db) = open();
        DailyPoemCache::new(&db).save(&cached(), at(2024, 3, 1, 23, 59));
        let sync = DailySync::with_clock(
            FakeSource::serving(fresh()),
            DailyPoemCache::new(&db),
            FixedClock(at(2024, 3, 1, 0, 1)),
        );

        let daily = tokio_test::block_on(sync.today()).unwrap();

        assert_eq!(daily.poem, cached());
        assert_eq!(daily.origin, Origin::Cache);
        assert_eq!(sync.source().random_calls.get(), 0);
    }

    #[test]
    fn test_next_day_is_a_miss() {
        let (_dir, db) = open();
        DailyPoemCache::new(&db).save(&cached(), at(2024, 3, 1, 23, 59));
        let sync = DailySync::with_clock(
            FakeSource::serving(fresh()),
            DailyPoemCache::new(&db),
            FixedClock(at(2024, 3, 2, 0, 1)),
        );

        let daily = tokio_test::block_on(sync.today()).unwrap();

        assert_eq!(daily.poem, fresh());
        assert_eq!(daily.origin, Origin::Network);
        assert_eq!(sync.source().random_calls.get(), 1);
        assert_eq!(
            DailyPoemCache::new(&db).load().unwrap().acquired_on(),
            at(2024, 3, 2, 0, 1).date_naive()
        );
    }

    #[test]
    fn test_second_call_same_day_uses_cache() {
        let (_dir, db) = open();
        let sync = DailySync::with_clock(
            FakeSource::serving(fresh()),
            DailyPoemCache::new(&db),
            FixedClock(at(2024, 3, 1, 8, 0)),
        );

        tokio_test::block_on(sync.today()).unwrap();
        let second = tokio_test::block_on(sync.today()).unwrap();

        assert_eq!(second.origin, Origin::Cache);
        assert_eq!(sync.source().random_calls.get(), 1);
    }

    #[test]
    fn test_failed_fetch_leaves_cache_alone() {
        let (_dir, db) = open();
        let yesterday = at(2024, 3, 1, 12, 0);
        DailyPoemCache::new(&db).save(&cached(), yesterday);
        let sync = DailySync::with_clock(
            FakeSource::failing(ApiError::Transport("offline".to_string())),
            DailyPoemCache::new(&db),
            FixedClock(at(2024, 3, 2, 9, 0)),
        );

        let err = tokio_test::block_on(sync.today()).unwrap_err();

        assert_eq!(err, ApiError::Transport("offline".to_string()));
        let record = DailyPoemCache::new(&db).load().unwrap();
        assert_eq!(record.poem, cached());
        assert_eq!(record.acquired_at, yesterday);
    }

    #[test]
    fn test_failed_fetch_with_empty_cache_writes_nothing() {
        let (_dir, db) = open();
        let sync = DailySync::with_clock(
            FakeSource::failing(ApiError::Empty),
            DailyPoemCache::new(&db),
            FixedClock(at(2024, 3, 2, 9, 0)),
        );

        assert_eq!(tokio_test::block_on(sync.today()), Err(ApiError::Empty));
        assert!(DailyPoemCache::new(&db).load().is_none());
    }
}
