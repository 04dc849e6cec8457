//! API client for the poem service

pub mod poetrydb;

use thiserror::Error;

use crate::models::{Poem, SearchKind, SearchQuery};

/// Errors from poem API operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// Input rejected before anything was sent
    #[error("invalid query: {0}")]
    InvalidRequest(String),

    /// Connection or transport failure
    #[error("network error: {0}")]
    Transport(String),

    /// Response body is not a list of poems
    #[error("failed to decode API response: {0}")]
    Decode(String),

    /// The API answered with no poems where one was required
    #[error("no poem received from the API")]
    Empty,

    /// The API answered with an error status
    #[error("API error {status}: {reason}")]
    Remote {
        /// Status reported by the API
        status: u16,
        /// Reason reported by the API
        reason: String,
    },
}

impl ApiError {
    /// Whether the error was raised before any request was made
    pub const fn is_invalid_request(&self) -> bool {
        matches!(self, Self::InvalidRequest(_))
    }
}

/// Source of poems
///
/// Each call is a single request whose outcome is reported once. There
/// are no retries and no caching at this layer.
#[allow(async_fn_in_trait)]
pub trait PoemSource {
    /// Fetch one random poem
    async fn random(&self) -> Result<Poem, ApiError>;

    /// Poems whose title contains `title`
    async fn search_by_title(&self, title: &str) -> Result<Vec<Poem>, ApiError>;

    /// Poems whose author name contains `author`
    async fn search_by_author(&self, author: &str) -> Result<Vec<Poem>, ApiError>;

    /// Poems with exactly `count` lines
    async fn search_by_line_count(&self, count: u32) -> Result<Vec<Poem>, ApiError>;

    /// Run a validated search
    async fn search(&self, query: &SearchQuery) -> Result<Vec<Poem>, ApiError> {
        match query {
            SearchQuery::Title(title) => self.search_by_title(title).await,
            SearchQuery::Author(author) => self.search_by_author(author).await,
            SearchQuery::Lines(count) => self.search_by_line_count(*count).await,
        }
    }

    /// Validate raw user input, then search
    async fn search_input(&self, kind: SearchKind, raw: &str) -> Result<Vec<Poem>, ApiError> {
        let query = SearchQuery::parse(kind, raw)?;
        self.search(&query).await
    }
}


#[cfg(test)]
mod tests {
    use super::testing::FakeSource;
    use super::*;

    #[test]
    fn test_non_numeric_line_count_never_reaches_source() {
        let source = FakeSource::default();
        let err = tokio_test::block_on(source.search_input(SearchKind::Lines, "abc")).unwrap_err();

        assert!(err.is_invalid_request());
        assert!(source.searches.borrow().is_empty());
    }

    #[test]
    fn test_numeric_line_count_searches_by_lines() {
        let source = FakeSource {
            results: vec![Poem::new("A", "B", &["x"])],
            ..FakeSource::default()
        };
        let poems = tokio_test::block_on(source.search_input(SearchKind::Lines, "14")).unwrap();

        assert_eq!(poems.len(), 1);
        assert_eq!(*source.searches.borrow(), vec!["lines:14".to_string()]);
    }

    #[test]
    fn test_search_dispatches_by_kind() {
        let source = FakeSource::default();
        tokio_test::block_on(source.search(&SearchQuery::Author("Keats".to_string()))).unwrap();
        tokio_test::block_on(source.search(&SearchQuery::Title("Ode".to_string()))).unwrap();

        assert_eq!(
            *source.searches.borrow(),
            vec!["author:Keats".to_string(), "title:Ode".to_string()]
        );
    }

    #[test]
    fn test_error_display() {
        let err = ApiError::Remote {
            status: 405,
            reason: "Method not allowed".to_string(),
        };
        assert_eq!(err.to_string(), "API error 405: Method not allowed");
        assert!(ApiError::Empty.to_string().contains("no poem"));
    }
}
