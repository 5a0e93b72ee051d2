//! Shared HTTP plumbing for the REST and GraphQL clients

use std::time::Duration;

use reqwest::{Client as HttpClient, Response, StatusCode};
use serde::Deserialize;
use serde::de::DeserializeOwned;

use crate::error::{ApiError, Result};

/// Request timeout applied to every API call
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Default wait reported when a 429 carries no retry-after header
const DEFAULT_RETRY_AFTER_SECS: u64 = 60;

/// User agent sent with every request
pub fn user_agent() -> String {
    format!("circleci-cli/{}", env!("CARGO_PKG_VERSION"))
}

/// Build the underlying HTTP client
pub fn build_http_client() -> Result<HttpClient> {
    HttpClient::builder()
        .timeout(REQUEST_TIMEOUT)
        .user_agent(user_agent())
        .build()
        .map_err(|e| ApiError::Network(e.to_string()).into())
}

/// Error body shape used by the REST and policy services
#[derive(Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    error: Option<String>,
}

/// Pull a human-readable message out of an error body.
///
/// Prefers the JSON `message` (or `error`) field, falling back to the raw body
/// and then to `fallback` when the body is empty.
pub fn error_message(body: &str, fallback: &str) -> String {
    if let Ok(parsed) = serde_json::from_str::<ErrorBody>(body) {
        if let Some(msg) = parsed.message.or(parsed.error) {
            return msg;
        }
    }

    let trimmed = body.trim();
    if trimmed.is_empty() {
        fallback.to_string()
    } else {
        trimmed.to_string()
    }
}

/// Map a non-success response onto an `ApiError`; pass success through.
pub async fn check_status(response: Response) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let retry_after = response
        .headers()
        .get("retry-after")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.parse::<u64>().ok())
        .unwrap_or(DEFAULT_RETRY_AFTER_SECS);

    let body = response.text().await.unwrap_or_default();

    let err = match status {
        StatusCode::UNAUTHORIZED => ApiError::Unauthorized,
        StatusCode::FORBIDDEN => ApiError::Forbidden,
        StatusCode::NOT_FOUND => ApiError::NotFound(error_message(&body, "Resource not found")),
        StatusCode::TOO_MANY_REQUESTS => ApiError::RateLimit(Duration::from_secs(retry_after)),
        StatusCode::BAD_REQUEST | StatusCode::UNPROCESSABLE_ENTITY => {
            ApiError::BadRequest(error_message(&body, "Bad request"))
        }
        status if status.is_server_error() => {
            ApiError::ServerError(error_message(&body, &format!("Server error: {}", status)))
        }
        status => ApiError::InvalidResponse(format!(
            "Unexpected status code {}: {}",
            status,
            error_message(&body, "no body")
        )),
    };

    Err(err.into())
}

/// Decode a JSON body, treating an empty body as `null`.
///
/// This lets `()` and `Option<T>` targets accept 204 responses.
pub async fn decode_json<T: DeserializeOwned>(response: Response) -> Result<T> {
    let text = response
        .text()
        .await
        .map_err(|e| ApiError::InvalidResponse(format!("Failed to read response: {}", e)))?;

    let body = if text.trim().is_empty() {
        "null"
    } else {
        text.as_str()
    };

    serde_json::from_str(body).map_err(|e| {
        ApiError::InvalidResponse(format!("Failed to parse response: {}", e)).into()
    })
}
