//! HTTP client for the Notion API.

use reqwest::StatusCode;

use super::models::{Page, QueryRequest, QueryResponse};

const NOTION_VERSION: &str = "2022-06-28";
const DEFAULT_BASE_URL: &str = "https://api.notion.com";

/// Failure talking to the store.
///
/// [`NotionError::Status`] with a 404 is the one case the repository treats
/// as "record absent"; everything else is a fetch failure.
#[derive(Debug, thiserror::Error)]
pub enum NotionError {
    #[error("request to Notion failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("Notion returned {status}: {body}")]
    Status { status: StatusCode, body: String },
}

impl NotionError {
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::Status {
                status: StatusCode::NOT_FOUND,
                ..
            }
        )
    }
}

/// Thin client over the two Notion endpoints this service uses.
///
/// Holds no per-request state; one instance is shared for the process
/// lifetime. The request timeout comes from the [`reqwest::Client`] passed in
/// at construction - there is no retry logic here, a failed round trip is
/// surfaced to the caller immediately.
#[derive(Debug, Clone)]
pub struct NotionClient {
    http: reqwest::Client,
    token: String,
    base_url: String,
}

impl NotionClient {
    pub fn new(http: reqwest::Client, token: impl Into<String>) -> Self {
        Self {
            http,
            token: token.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    /// Overrides the API base URL. Used by tests to point at a local stub.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// `POST /v1/databases/{id}/query`
    pub async fn query_database(
        &self,
        database_id: &str,
        request: &QueryRequest,
    ) -> Result<QueryResponse, NotionError> {
        let url = format!("{}/v1/databases/{database_id}/query", self.base_url);
        let response = self
            .http
            .post(&url)
            .bearer_auth(&self.token)
            .header("Notion-Version", NOTION_VERSION)
            .json(request)
            .send()
            .await?;

        Self::read_json(response).await
    }

    /// `GET /v1/pages/{id}`
    pub async fn get_page(&self, page_id: &str) -> Result<Page, NotionError> {
        let url = format!("{}/v1/pages/{page_id}", self.base_url);
        let response = self
            .http
            .get(&url)
            .bearer_auth(&self.token)
            .header("Notion-Version", NOTION_VERSION)
            .send()
            .await?;

        Self::read_json(response).await
    }

    async fn read_json<T: serde::de::DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T, NotionError> {
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(NotionError::Status { status, body });
        }

        Ok(response.json().await?)
    }
}
