//! Trello adapter. Implements the source ports via the Trello REST API.
//!
//! Query-string authenticated with `key` and `token`, both fixed at
//! construction. One request per call: single page, no retry.

use crate::domain::{Board, Card, DomainError, List};
use crate::ports::{BoardCleanupPort, BoardSourcePort};
use reqwest::{Client, StatusCode};

const TRELLO_BASE_URL: &str = "https://api.trello.com/1";

/// Trello API client.
///
/// Requires API key and token from https://trello.com/app-key.
pub struct TrelloClient {
    client: Client,
    base_url: String,
    api_key: String,
    token: String,
}

impl TrelloClient {
    /// Create a client against the production API.
    pub fn new(api_key: String, token: String) -> Self {
        Self::with_base_url(api_key, token, TRELLO_BASE_URL.to_string())
    }

    /// Create a client against a custom base URL (tests).
    pub fn with_base_url(api_key: String, token: String, base_url: String) -> Self {
        Self {
            client: Client::new(),
            base_url,
            api_key,
            token,
        }
    }

    fn auth_query(&self) -> [(&'static str, &str); 2] {
        [("key", self.api_key.as_str()), ("token", self.token.as_str())]
    }

    async fn get_json<T: serde::de::DeserializeOwned>(
        &self,
        path: &str,
        op: &str,
    ) -> Result<T, DomainError> {
        let url = format!("{}{}", self.base_url, path);
        let res = self
            .client
            .get(&url)
            .query(&self.auth_query())
            .send()
            .await
            .map_err(|e| DomainError::RequestFailed(format!("Request failed: {e}")))?;

        ensure_success(op, res.status())?;

        res.json::<T>()
            .await
            .map_err(|e| DomainError::RequestFailed(format!("Failed to parse API response: {e}")))
    }
}

/// Maps a non-success status: 429 to `RateLimited`, anything else to
/// `RequestFailed` carrying the operation name and the remote status text.
fn ensure_success(op: &str, status: StatusCode) -> Result<(), DomainError> {
    if status == StatusCode::TOO_MANY_REQUESTS {
        return Err(DomainError::RateLimited);
    }
    if !status.is_success() {
        return Err(DomainError::RequestFailed(format!("{op}: {status}")));
    }
    Ok(())
}

#[async_trait::async_trait]
impl BoardSourcePort for TrelloClient {
    async fn get_board(&self, board_id: &str) -> Result<Board, DomainError> {
        let url = format!("{}/boards/{}", self.base_url, board_id);
        let res = self
            .client
            .get(&url)
            .query(&self.auth_query())
            .send()
            .await
            .map_err(|e| DomainError::RequestFailed(format!("Request failed: {e}")))?;

        // Absence is a distinct kind for the board lookup only.
        if res.status() == StatusCode::NOT_FOUND {
            return Err(DomainError::NotFound("Board"));
        }
        ensure_success("Failed to get board", res.status())?;

        res.json::<Board>()
            .await
            .map_err(|e| DomainError::RequestFailed(format!("Failed to parse API response: {e}")))
    }

    async fn get_board_lists(&self, board_id: &str) -> Result<Vec<List>, DomainError> {
        self.get_json(
            &format!("/boards/{board_id}/lists"),
            "Failed to get board lists",
        )
        .await
    }

    async fn get_list_cards(&self, list_id: &str) -> Result<Vec<Card>, DomainError> {
        self.get_json(&format!("/lists/{list_id}/cards"), "Failed to get list cards")
            .await
    }
}

#[async_trait::async_trait]
impl BoardCleanupPort for TrelloClient {
    async fn list_boards(&self) -> Result<Vec<Board>, DomainError> {
        self.get_json("/members/me/boards", "Failed to list boards")
            .await
    }

    async fn delete_board(&self, board_id: &str) -> Result<(), DomainError> {
        let url = format!("{}/boards/{}", self.base_url, board_id);
        let res = self
            .client
            .delete(&url)
            .query(&self.auth_query())
            .send()
            .await
            .map_err(|e| DomainError::RequestFailed(format!("Request failed: {e}")))?;

        ensure_success("Failed to delete board", res.status())
    }
}
