//! HTTP lookup client for the suggestion endpoint.

use std::time::Duration;

use serde::Deserialize;
use thiserror::Error;

use crate::routes;

/// Request timeout for suggestion lookups.
///
/// Lookups cannot be aborted once issued, only ignored, so a stuck request
/// must time out on its own rather than hold the worker forever.
const LOOKUP_TIMEOUT: Duration = Duration::from_secs(10);

/// One candidate search result record.
///
/// Immutable once received; owned solely by the rendered result list.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Suggestion {
    /// Opaque identifier keying the article-detail view.
    ///
    /// The endpoint sends this as a JSON number (the database primary key),
    /// but the identifier is only ever interpolated into addresses, so it is
    /// stringified on receipt. String ids are accepted too.
    #[serde(deserialize_with = "id_as_string")]
    pub id: String,
    /// Display title
    pub title: String,
    /// Display summary
    pub summary: String,
}

fn id_as_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Number(serde_json::Number),
        Text(String),
    }

    Ok(match RawId::deserialize(deserializer)? {
        RawId::Number(n) => n.to_string(),
        RawId::Text(s) => s,
    })
}

/// Errors that can occur during a suggestion lookup
#[derive(Debug, Clone, Error)]
pub enum LookupError {
    /// Transport-level failure (connection refused, timeout, DNS)
    #[error("Network error: {0}")]
    Network(String),

    /// Endpoint answered with a non-success status
    #[error("Lookup endpoint returned status {code}")]
    Status { code: u16 },

    /// Response body was not the expected JSON array
    #[error("Parse error: {0}")]
    Parse(String),
}

/// Source of suggestions for a query.
///
/// The seam between the suggester and the transport: production code uses
/// [`HttpLookup`], tests substitute a stub.
pub trait SuggestionSource {
    /// Fetch suggestions for the trimmed query.
    ///
    /// An empty vector signals no matches, which is not an error.
    fn suggestions(&self, query: &str) -> Result<Vec<Suggestion>, LookupError>;
}

/// Blocking HTTP client for the suggestion endpoint.
///
/// Issues `GET {base}/api/search?q={query}` and expects a JSON array of
/// suggestion records.
#[derive(Debug, Clone)]
pub struct HttpLookup {
    http: reqwest::blocking::Client,
    base_url: String,
}

impl HttpLookup {
    /// Create a client for the given base address.
    ///
    /// Fails if the underlying HTTP client cannot be built; a client without
    /// the lookup timeout would hold the worker on a stuck request.
    pub fn new(base_url: impl Into<String>) -> Result<Self, LookupError> {
        let http = reqwest::blocking::Client::builder()
            .timeout(LOOKUP_TIMEOUT)
            .build()
            .map_err(|e| LookupError::Network(e.to_string()))?;
        Ok(Self {
            http,
            base_url: base_url.into(),
        })
    }

    /// The base address this client talks to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

impl SuggestionSource for HttpLookup {
    fn suggestions(&self, query: &str) -> Result<Vec<Suggestion>, LookupError> {
        let url = routes::suggest(&self.base_url, query);
        log::debug!("Lookup request: {}", url);

        let response = self
            .http
            .get(&url)
            .send()
            .map_err(|e| LookupError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(LookupError::Status {
                code: status.as_u16(),
            });
        }

        let body = response
            .text()
            .map_err(|e| LookupError::Network(e.to_string()))?;

        serde_json::from_str(&body).map_err(|e| LookupError::Parse(e.to_string()))
    }
}
