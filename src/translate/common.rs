use reqwest::{Client, Response, StatusCode};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::debug;

use super::ProviderKind;
use crate::error::{Result, TerjemahError};

/// Error body shape shared by LibreTranslate-style services
#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: String,
}

/// Build the HTTP client used by a single provider
pub fn build_client(timeout: Duration) -> Result<Client> {
    Client::builder()
        .timeout(timeout)
        .build()
        .map_err(|e| TerjemahError::Config(format!("Failed to create HTTP client: {}", e)))
}

/// Describe a transport failure for the user-facing warning
pub fn describe_request_error(error: &reqwest::Error) -> String {
    if error.is_timeout() {
        "request timed out".to_string()
    } else if error.is_connect() {
        format!("connection failed: {}", error)
    } else {
        format!("HTTP request failed: {}", error)
    }
}

/// Require HTTP 200 and decode the JSON body
pub async fn read_json<T: DeserializeOwned>(provider: ProviderKind, response: Response) -> Result<T> {
    let status = response.status();
    if status != StatusCode::OK {
        let error_text = response.text().await.unwrap_or_default();
        let detail = match serde_json::from_str::<ErrorBody>(&error_text) {
            Ok(body) => body.error,
            Err(_) => truncate(error_text.trim(), 200),
        };
        return Err(TerjemahError::unavailable(
            provider,
            if detail.is_empty() {
                format!("API error {}", status)
            } else {
                format!("API error {}: {}", status, detail)
            },
        ));
    }

    let body = response
        .text()
        .await
        .map_err(|e| TerjemahError::unavailable(provider, describe_request_error(&e)))?;
    debug!("Raw {} response: {}", provider, body);

    serde_json::from_str(&body)
        .map_err(|e| TerjemahError::unavailable(provider, format!("Failed to parse response: {}", e)))
}

/// Accept only non-blank extracted text, returned as the service sent it
pub fn usable_text(provider: ProviderKind, text: Option<String>) -> Result<String> {
    match text {
        Some(t) if !t.trim().is_empty() => Ok(t),
        Some(_) => Err(TerjemahError::unavailable(provider, "Empty translation received")),
        None => Err(TerjemahError::unavailable(
            provider,
            "Response did not contain a translation",
        )),
    }
}

fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() > max_chars {
        let prefix: String = text.chars().take(max_chars).collect();
        format!("{}...", prefix)
    } else {
        text.to_string()
    }
}
