use reqwest::{Client, Url};
use serde_json::Value;
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};

use crate::models::item::ClothingItem;
use crate::models::outcome::{SearchError, SearchOutcome};
use crate::models::query::{Query, SearchRequest};
use crate::models::shape::ensure_array;

const SEARCH_PATH: &str = "/api/search";

/// Client for the clothing search endpoint.
pub struct SearchClient {
    http: Client,
    endpoint: Url,
}

impl SearchClient {
    /// Create a client for `base_url`.
    ///
    /// `timeout` is handed to the HTTP transport; `None` leaves requests
    /// unbounded.
    pub fn new(base_url: &str, timeout: Option<Duration>) -> Result<Self, ClientError> {
        let endpoint = endpoint_for(base_url)?;

        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            http: builder.build()?,
            endpoint,
        })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Run one search exchange. Always resolves; failures come back as
    /// [`SearchOutcome::Failure`].
    pub async fn execute(&self, query: &Query) -> SearchOutcome {
        metrics::counter!("search_requests_total").increment(1);
        let started = Instant::now();

        info!(query = %query, "Submitting search");
        let outcome = match self.exchange(query).await {
            Ok(items) => {
                info!(query = %query, results = items.len(), "Search resolved");
                metrics::counter!("search_results_total").increment(items.len() as u64);
                SearchOutcome::Success(items)
            }
            Err(err) => {
                warn!(query = %query, kind = err.kind(), error = %err, "Search failed");
                metrics::counter!("search_failures_total", "kind" => err.kind()).increment(1);
                SearchOutcome::Failure(err)
            }
        };

        metrics::histogram!("search_request_seconds").record(started.elapsed().as_secs_f64());
        outcome
    }

    async fn exchange(&self, query: &Query) -> Result<Vec<ClothingItem>, SearchError> {
        let response = self
            .http
            .post(self.endpoint.clone())
            .json(&SearchRequest::from(query))
            .send()
            .await
            .map_err(|e| SearchError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(SearchError::Protocol {
                status: status.as_u16(),
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| SearchError::Transport(e.to_string()))?;

        parse_items(&body)
    }
}

/// Decode a 2xx response body into items.
///
/// Invalid JSON is an error; valid JSON that is not an array is treated as
/// an empty result.
pub fn parse_items(body: &[u8]) -> Result<Vec<ClothingItem>, SearchError> {
    let value: Value =
        serde_json::from_slice(body).map_err(|e| SearchError::Decode(e.to_string()))?;

    if !value.is_array() {
        debug!(body_kind = json_kind(&value), "Non-array search response, treating as empty");
    }

    Ok(ensure_array(value)
        .iter()
        .map(ClothingItem::from_value)
        .collect())
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

fn endpoint_for(base_url: &str) -> Result<Url, ClientError> {
    let trimmed = base_url.trim().trim_end_matches('/');
    let url = Url::parse(&format!("{trimmed}{SEARCH_PATH}"))
        .map_err(|e| ClientError::InvalidBaseUrl(format!("{base_url}: {e}")))?;

    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(ClientError::InvalidBaseUrl(format!(
            "{base_url}: unsupported scheme {other}"
        ))),
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("Invalid search API base URL {0}")]
    InvalidBaseUrl(String),

    #[error("Failed to initialize HTTP client: {0}")]
    Http(#[from] reqwest::Error),
}
