//! Shared HTTP response helpers for upstream clients.
//!
//! Centralizes status-code checks (429 rate limiting with `Retry-After`
//! parsing, non-success → [`EnrichError::Api`]) so clients stay focused on
//! request construction and response mapping.

use crate::error::EnrichError;

/// Check an HTTP response for common error conditions.
///
/// Returns the response unchanged on success. Handles:
/// - **429 Too Many Requests** → [`EnrichError::RateLimited`] with
///   `Retry-After` header parsing (falls back to 60 s if absent or
///   unparseable).
/// - **Non-success status** → [`EnrichError::Api`] with status code and the
///   body's error message (see [`error_message`]).
pub async fn check_response(resp: reqwest::Response) -> Result<reqwest::Response, EnrichError> {
    if resp.status() == 429 {
        let retry_after = parse_retry_after(&resp);
        return Err(EnrichError::RateLimited {
            retry_after_secs: retry_after,
        });
    }
    if !resp.status().is_success() {
        let status = resp.status().as_u16();
        let body = resp.text().await.unwrap_or_default();
        return Err(EnrichError::Api {
            status,
            message: error_message(&body),
        });
    }
    Ok(resp)
}

/// Pull a readable message out of an error body.
///
/// Understands Google's `{"error":{"message":..}}` envelope and the
/// `{"error":".."}` shape served by `/api/enrich`; anything else is
/// returned as-is.
pub fn error_message(body: &str) -> String {
    let Ok(value) = serde_json::from_str::<serde_json::Value>(body) else {
        return body.to_string();
    };
    let error = &value["error"];
    error["message"]
        .as_str()
        .or_else(|| error.as_str())
        .map_or_else(|| body.to_string(), str::to_string)
}

/// Parse the `Retry-After` header as seconds, falling back to 60 s.
fn parse_retry_after(resp: &reqwest::Response) -> u64 {
    resp.headers()
        .get(reqwest::header::RETRY_AFTER)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.parse::<u64>().ok())
        .unwrap_or(60)
}
