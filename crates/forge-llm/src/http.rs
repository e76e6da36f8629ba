//! Shared HTTP response helpers for the completion client.
//!
//! Centralizes status-code checks (429 rate limiting with `Retry-After`
//! parsing, non-success → [`LlmError::Api`]) so the client stays focused on
//! request construction and reply extraction.

use crate::error::LlmError;

/// Check an HTTP response for common error conditions.
///
/// Returns the response unchanged on success. Handles:
/// - **429 Too Many Requests** → [`LlmError::RateLimited`] with
///   `Retry-After` header parsing (falls back to 60 s if absent or
///   unparseable).
/// - **Non-success status** → [`LlmError::Api`] with status code and the
///   API's error message, or the raw body when it carries none.
pub async fn check_response(resp: reqwest::Response) -> Result<reqwest::Response, LlmError> {
    if resp.status() == 429 {
        let retry_after = parse_retry_after(&resp);
        return Err(LlmError::RateLimited {
            retry_after_secs: retry_after,
        });
    }
    if !resp.status().is_success() {
        let status = resp.status().as_u16();
        let body = resp.text().await.unwrap_or_default();
        return Err(LlmError::Api {
            status,
            message: api_error_message(&body),
        });
    }
    Ok(resp)
}

/// Parse the `Retry-After` header as seconds, falling back to 60 s.
fn parse_retry_after(resp: &reqwest::Response) -> u64 {
    resp.headers()
        .get(reqwest::header::RETRY_AFTER)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.parse::<u64>().ok())
        .unwrap_or(60)
}

/// Pull `error.message` out of an OpenAI-style error body.
fn api_error_message(body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|v| {
            v.pointer("/error/message")
                .and_then(serde_json::Value::as_str)
                .map(str::to_string)
        })
        .unwrap_or_else(|| body.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mock_response(status: u16, body: &'static str) -> reqwest::Response {
        reqwest::Response::from(
            ::http::Response::builder()
                .status(status)
                .body(body)
                .unwrap(),
        )
    }

    fn mock_response_with_retry_after(status: u16, value: &str) -> reqwest::Response {
        reqwest::Response::from(
            ::http::Response::builder()
                .status(status)
                .header("Retry-After", value)
                .body("")
                .unwrap(),
        )
    }

    #[test]
    fn parse_retry_after_from_header() {
        let resp = mock_response_with_retry_after(429, "120");
        assert_eq!(parse_retry_after(&resp), 120);
    }

    #[test]
    fn parse_retry_after_missing_header() {
        let resp = mock_response(429, "");
        assert_eq!(parse_retry_after(&resp), 60);
    }

    #[test]
    fn parse_retry_after_non_numeric() {
        let resp = mock_response_with_retry_after(429, "Wed, 21 Oct 2026 07:28:00 GMT");
        assert_eq!(parse_retry_after(&resp), 60);
    }

    #[test]
    fn api_error_message_prefers_error_field() {
        let body = r#"{"error": {"message": "Incorrect API key provided", "type": "invalid_request_error"}}"#;
        assert_eq!(api_error_message(body), "Incorrect API key provided");
        assert_eq!(
            api_error_message(" upstream timeout \n"),
            "upstream timeout"
        );
    }

    #[tokio::test]
    async fn check_response_rate_limited_with_header() {
        let resp = mock_response_with_retry_after(429, "30");
        let err = check_response(resp).await.unwrap_err();
        assert!(matches!(
            err,
            LlmError::RateLimited {
                retry_after_secs: 30
            }
        ));
    }

    #[tokio::test]
    async fn check_response_rate_limited_default() {
        let resp = mock_response(429, "");
        let err = check_response(resp).await.unwrap_err();
        assert!(matches!(
            err,
            LlmError::RateLimited {
                retry_after_secs: 60
            }
        ));
    }

    #[tokio::test]
    async fn check_response_api_error() {
        let resp = mock_response(401, r#"{"error": {"message": "bad key"}}"#);
        let err = check_response(resp).await.unwrap_err();
        assert!(matches!(err, LlmError::Api { status: 401, ref message } if message == "bad key"));
    }

    #[tokio::test]
    async fn check_response_success() {
        let resp = mock_response(200, "{}");
        assert!(check_response(resp).await.is_ok());
    }
}
