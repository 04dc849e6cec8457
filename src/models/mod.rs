//! Data models for Stanza

mod daily;
mod poem;
mod search;

pub use daily::DailyPoemRecord;
pub use poem::Poem;
pub use search::{SearchKind, SearchQuery};
