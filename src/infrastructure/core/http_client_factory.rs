use crate::config::ExchangeEnvConfig;
use crate::domain::errors::ListingError;
use reqwest::{Client, Response};
use serde_json::Value;
use std::time::Duration;

pub struct HttpClientFactory;

impl HttpClientFactory {
    /// Creates the HTTP client shared by every listing source.
    ///
    /// A single attempt per request: the timeout covers the whole exchange
    /// and a failed call is reported, not retried. Fails if the configured
    /// user agent is not a valid header value.
    pub fn create_client(config: &ExchangeEnvConfig) -> reqwest::Result<Client> {
        Client::builder()
            .pool_max_idle_per_host(5)
            .timeout(Duration::from_secs(config.timeout_secs))
            .connect_timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(config.user_agent.clone())
            .build()
    }
}

/// Sends a GET and returns the body as JSON.
///
/// Transport errors, timeouts and non-2xx statuses map to
/// `UpstreamUnavailable`; a body that is not JSON maps to `UpstreamFormat`.
pub async fn get_json(client: &Client, exchange: &str, url: &str) -> Result<Value, ListingError> {
    let response = client
        .get(url)
        .header("accept", "application/json")
        .send()
        .await
        .map_err(|e| ListingError::unavailable(exchange, describe_request_error(&e)))?;

    let response = ensure_success(exchange, response).await?;

    let body = response
        .text()
        .await
        .map_err(|e| ListingError::unavailable(exchange, describe_request_error(&e)))?;

    serde_json::from_str(&body)
        .map_err(|e| ListingError::format(exchange, format!("body is not JSON: {}", e)))
}

async fn ensure_success(exchange: &str, response: Response) -> Result<Response, ListingError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let error_text = response.text().await.unwrap_or_default();
    Err(ListingError::unavailable(
        exchange,
        format!("HTTP {}: {}", status, truncate(&error_text, 200)),
    ))
}

fn describe_request_error(e: &reqwest::Error) -> String {
    if e.is_timeout() {
        format!("request timed out: {}", e)
    } else if e.is_connect() {
        format!("connection failed: {}", e)
    } else {
        e.to_string()
    }
}

fn truncate(s: &str, max_chars: usize) -> String {
    s.chars().take(max_chars).collect()
}
