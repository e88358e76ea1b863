//! Typed HTTP client for the Wayfarer API.
//!
//! Mirrors the REST surface one method per endpoint. Consumers own
//! caching and refetch-after-mutation policy; this crate only does the
//! wire work, plus a bounded retry-with-backoff on journey detail
//! fetch (the one read the UI blocks on).

mod retry;
mod types;

use reqwest::StatusCode;
use serde::Deserialize;

pub use types::{Journey, NewNode, TreeNodeRecord};
pub use wayfarer_core::tree::TreeNode;

use retry::RetryPolicy;

/// Errors surfaced by [`ApiClient`] calls.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// The request never produced an HTTP response.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The server answered with a non-success status. Carries the
    /// server's `{"message": ...}` body when one was present.
    #[error("api error ({status}): {message}")]
    Api { status: StatusCode, message: String },
}

/// Server error body shape.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: String,
}

/// Client for one Wayfarer API server.
#[derive(Debug, Clone)]
pub struct ApiClient {
    base_url: String,
    http: reqwest::Client,
}

impl ApiClient {
    /// `base_url` is the server root, e.g. `http://localhost:3000`;
    /// a trailing slash is tolerated.
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self {
            base_url,
            http: reqwest::Client::new(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// GET /api/journeys
    pub async fn list_journeys(&self) -> Result<Vec<Journey>, ClientError> {
        let response = self.http.get(self.url("/api/journeys")).send().await?;
        parse(response).await
    }

    /// POST /api/journeys
    pub async fn create_journey(&self, name: &str) -> Result<Journey, ClientError> {
        let response = self
            .http
            .post(self.url("/api/journeys"))
            .json(&serde_json::json!({ "name": name }))
            .send()
            .await?;
        parse(response).await
    }

    /// GET /api/journeys/{id}
    ///
    /// Retries transient failures (transport errors, 5xx) with bounded
    /// exponential backoff. Not-found and other client errors are
    /// returned immediately; a missing journey will not appear by
    /// asking again.
    pub async fn get_journey(&self, id: i64) -> Result<Journey, ClientError> {
        let policy = RetryPolicy::default();
        let mut attempt = 0;
        loop {
            let result = match self
                .http
                .get(self.url(&format!("/api/journeys/{id}")))
                .send()
                .await
            {
                Ok(response) => parse(response).await,
                Err(err) => Err(ClientError::Transport(err)),
            };

            match result {
                Err(ref err) if policy.should_retry(err, attempt) => {
                    let delay = policy.backoff(attempt);
                    tracing::debug!(%id, attempt, ?delay, "retrying journey fetch");
                    tokio::time::sleep(delay).await;
                    attempt += 1;
                }
                other => return other,
            }
        }
    }

    /// PUT /api/journeys/{id}
    pub async fn rename_journey(&self, id: i64, name: &str) -> Result<Journey, ClientError> {
        let response = self
            .http
            .put(self.url(&format!("/api/journeys/{id}")))
            .json(&serde_json::json!({ "name": name }))
            .send()
            .await?;
        parse(response).await
    }

    /// DELETE /api/journeys/{id}
    pub async fn delete_journey(&self, id: i64) -> Result<(), ClientError> {
        let response = self
            .http
            .delete(self.url(&format!("/api/journeys/{id}")))
            .send()
            .await?;
        expect_no_content(response).await
    }

    /// GET /api/journeys/{id}/tree
    pub async fn fetch_tree(&self, journey_id: i64) -> Result<Vec<TreeNode>, ClientError> {
        let response = self
            .http
            .get(self.url(&format!("/api/journeys/{journey_id}/tree")))
            .send()
            .await?;
        parse(response).await
    }

    /// POST /api/journeys/{id}/tree/nodes
    pub async fn add_node(
        &self,
        journey_id: i64,
        node: &NewNode,
    ) -> Result<TreeNodeRecord, ClientError> {
        let response = self
            .http
            .post(self.url(&format!("/api/journeys/{journey_id}/tree/nodes")))
            .json(node)
            .send()
            .await?;
        parse(response).await
    }

    /// DELETE /api/journeys/{id}/tree/nodes/{node_id}
    pub async fn delete_node(&self, journey_id: i64, node_id: &str) -> Result<(), ClientError> {
        let response = self
            .http
            .delete(self.url(&format!(
                "/api/journeys/{journey_id}/tree/nodes/{node_id}"
            )))
            .send()
            .await?;
        expect_no_content(response).await
    }
}

/// Deserialize a success body, or lift the server's error message into
/// [`ClientError::Api`].
async fn parse<T: serde::de::DeserializeOwned>(
    response: reqwest::Response,
) -> Result<T, ClientError> {
    if response.status().is_success() {
        Ok(response.json().await?)
    } else {
        Err(api_error(response).await)
    }
}

/// For 204-style endpoints: success carries no body.
async fn expect_no_content(response: reqwest::Response) -> Result<(), ClientError> {
    if response.status().is_success() {
        Ok(())
    } else {
        Err(api_error(response).await)
    }
}

async fn api_error(response: reqwest::Response) -> ClientError {
    let status = response.status();
    let message = match response.json::<ErrorBody>().await {
        Ok(body) => body.message,
        Err(_) => status
            .canonical_reason()
            .unwrap_or("unknown error")
            .to_string(),
    };
    ClientError::Api { status, message }
}
