//! HTTP client for the favorite-toggle endpoint.

use std::time::Duration;

use serde::Deserialize;
use thiserror::Error;

use crate::routes;

const TOGGLE_TIMEOUT: Duration = Duration::from_secs(10);

/// Errors that can occur toggling a favorite
#[derive(Debug, Clone, Error)]
pub enum FavoriteError {
    /// Transport-level failure
    #[error("Network error: {0}")]
    Network(String),

    /// Endpoint answered with a non-success status
    #[error("Favorite endpoint returned status {code}")]
    Status { code: u16 },

    /// Response body was not the expected JSON object
    #[error("Parse error: {0}")]
    Parse(String),

    /// Endpoint answered `success: false`
    #[error("Favorite toggle rejected: {0}")]
    Rejected(String),
}

/// Wire shape of the toggle response: `{success, is_favorited}` on success,
/// `{success: false, error}` otherwise.
#[derive(Debug, Deserialize)]
struct ToggleReply {
    success: bool,
    #[serde(default)]
    is_favorited: bool,
    #[serde(default)]
    error: Option<String>,
}

/// Blocking HTTP client for the favorite-toggle endpoint.
#[derive(Debug, Clone)]
pub struct FavoriteClient {
    http: reqwest::blocking::Client,
    base_url: String,
}

impl FavoriteClient {
    /// Create a client for the given base address.
    ///
    /// Fails if the underlying HTTP client cannot be built rather than fall
    /// back to one without the request timeout.
    pub fn new(base_url: impl Into<String>) -> Result<Self, FavoriteError> {
        let http = reqwest::blocking::Client::builder()
            .timeout(TOGGLE_TIMEOUT)
            .build()
            .map_err(|e| FavoriteError::Network(e.to_string()))?;
        Ok(Self {
            http,
            base_url: base_url.into(),
        })
    }

    /// Toggle the favorite state of an article.
    ///
    /// Returns the new favorited state reported by the endpoint.
    pub fn toggle(&self, article_id: &str) -> Result<bool, FavoriteError> {
        let url = routes::toggle_favorite(&self.base_url, article_id);
        log::debug!("Toggle favorite: {}", url);

        let response = self
            .http
            .post(&url)
            .header("Content-Type", "application/json")
            .send()
            .map_err(|e| FavoriteError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FavoriteError::Status {
                code: status.as_u16(),
            });
        }

        let body = response
            .text()
            .map_err(|e| FavoriteError::Network(e.to_string()))?;
        interpret_reply(&body)
    }
}

/// Interpret the endpoint's JSON reply as a toggle outcome.
pub(super) fn interpret_reply(body: &str) -> Result<bool, FavoriteError> {
    let reply: ToggleReply =
        serde_json::from_str(body).map_err(|e| FavoriteError::Parse(e.to_string()))?;

    if !reply.success {
        return Err(FavoriteError::Rejected(
            reply.error.unwrap_or_else(|| "unknown error".to_string()),
        ));
    }

    Ok(reply.is_favorited)
}
