//! Search kinds and validated search queries

use std::num::IntErrorKind;

use serde::{Deserialize, Serialize};

use crate::api::ApiError;

/// What a search matches against
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchKind {
    /// Title contains the query
    #[default]
    Title,
    /// Author name contains the query
    Author,
    /// Exact number of lines
    Lines,
}

impl SearchKind {
    /// Get the display name
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Title => "Title",
            Self::Author => "Author",
            Self::Lines => "Lines",
        }
    }

    /// Parse from string
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "title" | "t" => Some(Self::Title),
            "author" | "a" => Some(Self::Author),
            "lines" | "linecount" | "l" => Some(Self::Lines),
            _ => None,
        }
    }
}

impl std::fmt::Display for SearchKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A search that has passed input validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchQuery {
    /// Search by title
    Title(String),
    /// Search by author
    Author(String),
    /// Search by exact line count
    Lines(u32),
}

impl SearchQuery {
    /// Validate raw user input for a search kind.
    ///
    /// Nothing is sent over the network for input rejected here.
    pub fn parse(kind: SearchKind, raw: &str) -> Result<Self, ApiError> {
        let query = raw.trim();

        match kind {
            SearchKind::Title | SearchKind::Author if query.is_empty() => Err(
                ApiError::InvalidRequest(format!("{} search needs a query", kind.name())),
            ),
            SearchKind::Title => Ok(Self::Title(query.to_string())),
            SearchKind::Author => Ok(Self::Author(query.to_string())),
            SearchKind::Lines => query.parse::<u32>().map(Self::Lines).map_err(|e| {
                let msg = if *e.kind() == IntErrorKind::PosOverflow {
                    format!("line count is too large (at most {}), got '{query}'", u32::MAX)
                } else {
                    format!("line count must be a non-negative whole number, got '{query}'")
                };
                ApiError::InvalidRequest(msg)
            }),
        }
    }
}
