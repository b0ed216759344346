//! Shared outbound HTTP client.

use std::time::Duration;

use reqwest::Client;

use crate::error::SentimentError;

/// Build the client used for feed lookups and article downloads.
///
/// Every request made through it is bounded by `timeout_secs`.
///
/// # Errors
///
/// Returns [`SentimentError::Http`] if the underlying `reqwest::Client`
/// cannot be constructed (e.g., invalid TLS config).
pub fn build_http_client(timeout_secs: u64, user_agent: &str) -> Result<Client, SentimentError> {
    let timeout = Duration::from_secs(timeout_secs);
    let client = Client::builder()
        .timeout(timeout)
        .connect_timeout(timeout)
        .user_agent(user_agent)
        .build()?;
    Ok(client)
}
