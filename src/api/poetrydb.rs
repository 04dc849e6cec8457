//! PoetryDB API client

use reqwest::{Client, StatusCode};
use serde::Deserialize;

use crate::models::Poem;

use super::{ApiError, PoemSource};

/// Public PoetryDB instance
pub const DEFAULT_BASE_URL: &str = "https://poetrydb.org";

/// PoetryDB API client
pub struct PoetryDbClient {
    client: Client,
    base_url: String,
}

impl Default for PoetryDbClient {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

impl PoetryDbClient {
    /// Create a new client for the instance at `base_url`
    pub fn new(base_url: &str) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Build API URL
    fn api_url(&self, endpoint: &str) -> String {
        format!("{}{}", self.base_url, endpoint)
    }

    /// Poems matching both an author and a title
    pub async fn search_by_author_and_title(
        &self,
        author: &str,
        title: &str,
    ) -> Result<Vec<Poem>, ApiError> {
        self.get_poems(&author_and_title_endpoint(author, title)).await
    }

    async fn get_poems(&self, endpoint: &str) -> Result<Vec<Poem>, ApiError> {
        let url = self.api_url(endpoint);
        tracing::debug!("GET {url}");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        if status == StatusCode::NOT_FOUND {
            return Ok(Vec::new());
        }

        if !status.is_success() {
            return Err(ApiError::Remote {
                status: status.as_u16(),
                reason: status
                    .canonical_reason()
                    .unwrap_or("unexpected status")
                    .to_string(),
            });
        }

        decode_poems(&body)
    }
}

impl PoemSource for PoetryDbClient {
    async fn random(&self) -> Result<Poem, ApiError> {
        self.get_poems("/random")
            .await?
            .into_iter()
            .next()
            .ok_or(ApiError::Empty)
    }

    async fn search_by_title(&self, title: &str) -> Result<Vec<Poem>, ApiError> {
        self.get_poems(&format!("/title/{}", urlencoding::encode(title))).await
    }

    async fn search_by_author(&self, author: &str) -> Result<Vec<Poem>, ApiError> {
        self.get_poems(&format!("/author/{}", urlencoding::encode(author))).await
    }

    async fn search_by_line_count(&self, count: u32) -> Result<Vec<Poem>, ApiError> {
        self.get_poems(&format!("/lines/{count}")).await
    }
}

fn author_and_title_endpoint(author: &str, title: &str) -> String {
    format!(
        "/author,title/{};{}",
        urlencoding::encode(author),
        urlencoding::encode(title)
    )
}

// ==================== API Types ====================

/// PoetryDB answers with either a poem array or a status object
/// (`{"status":404,"reason":"Not found"}` when nothing matches).
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum PoetryDbResponse {
    Poems(Vec<Poem>),
    Status {
        status: serde_json::Value,
        reason: String,
    },
}

/// Decode a PoetryDB response body into poems
pub fn decode_poems(body: &str) -> Result<Vec<Poem>, ApiError> {
    let response: PoetryDbResponse =
        serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))?;

    match response {
        PoetryDbResponse::Poems(poems) => Ok(poems),
        PoetryDbResponse::Status { status, reason } => {
            let status = status
                .as_u64()
                .or_else(|| status.as_str().and_then(|s| s.parse().ok()))
                .and_then(|s| u16::try_from(s).ok())
                .ok_or_else(|| ApiError::Decode(format!("unexpected status value: {status}")))?;

            if status == 404 {
                Ok(Vec::new())
            } else {
                Err(ApiError::Remote { status, reason })
            }
        }
    }
}
