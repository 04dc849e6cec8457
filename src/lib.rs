//! # Stanza
//!
//! A terminal poetry reader backed by [PoetryDB](https://poetrydb.org).
//!
//! ## Overview
//!
//! Stanza shows one poem of the day, refreshed once per local calendar
//! day, lets you search poems by title, author or line count, and keeps a
//! list of favorite poems on disk.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                          CLI                                │
//! │   Opens the database, builds the client, runs one command   │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!          ┌───────────────────┼───────────────────┐
//!          ▼                   ▼                   ▼
//! ┌─────────────────┐ ┌─────────────────┐ ┌─────────────────┐
//! │   DailySync     │ │   Favorites     │ │     Config      │
//! │                 │ │                 │ │                 │
//! │ • Date check    │ │ • Dedup by      │ │ • Load/Save     │
//! │ • Fetch on miss │ │   content       │ │ • API base URL  │
//! │ • Cache write   │ │ • Toggle/remove │ │ • Wrap width    │
//! └─────────────────┘ └─────────────────┘ └─────────────────┘
//!          │                   │
//!          ▼                   ▼
//! ┌─────────────────┐ ┌─────────────────┐
//! │       API       │ │    Database     │
//! │                 │ │                 │
//! │ • PoetryDB      │ │ • Key-value     │
//! │ • Search kinds  │ │ • Daily poem    │
//! └─────────────────┘ └─────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`api`] — PoetryDB client and the [`api::PoemSource`] trait
//! - [`config`] — Configuration management
//! - [`db`] — `SQLite` storage for favorites and the daily poem
//! - [`favorites`] — Favorite poems
//! - [`models`] — Data models (Poem, `DailyPoemRecord`, search queries)
//! - [`sync`] — Daily poem refresh
//!
//! ## Example
//!
//! ```no_run
//! use stanza::api::poetrydb::PoetryDbClient;
//! use stanza::sync::{DailyPoemCache, DailySync};
//! use stanza::Database;
//!
//! # async fn run() -> anyhow::Result<()> {
//! let db = Database::open()?;
//! let sync = DailySync::new(PoetryDbClient::default(), DailyPoemCache::new(&db));
//! let daily = sync.today().await?;
//! println!("{} by {}", daily.poem.title, daily.poem.author);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::option_if_let_else)]
#![allow(clippy::should_implement_trait)]
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::doc_markdown)]

pub mod api;
pub mod config;
pub mod db;
pub mod favorites;
pub mod models;
pub mod paths;
pub mod sync;

// Re-export main types for convenience
pub use api::{ApiError, PoemSource};
pub use config::Config;
pub use db::Database;
pub use favorites::FavoritesStore;
pub use models::{DailyPoemRecord, Poem, SearchKind, SearchQuery};
pub use sync::{DailyPoem, DailyPoemCache, DailySync, Origin};

/// Application version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
