//! PostgREST response checks.

use serde_json::Value;

use crate::error::StoreError;

const DEFAULT_RETRY_AFTER_SECS: u64 = 60;

/// Pass a successful response through; turn anything else into a [`StoreError`].
///
/// 429 becomes `RateLimited` (seconds from `Retry-After`, default 60). Other
/// failures become `Api`, with the PostgREST `message`/`hint` when the body is
/// a JSON error object and the raw body otherwise.
pub async fn check_response(resp: reqwest::Response) -> Result<reqwest::Response, StoreError> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }
    if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
        return Err(StoreError::RateLimited {
            retry_after_secs: retry_after_secs(&resp),
        });
    }

    let body = resp.text().await.unwrap_or_default();
    Err(StoreError::Api {
        status: status.as_u16(),
        message: postgrest_message(&body),
    })
}

fn retry_after_secs(resp: &reqwest::Response) -> u64 {
    resp.headers()
        .get(reqwest::header::RETRY_AFTER)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(DEFAULT_RETRY_AFTER_SECS)
}

/// `{"message": ..., "hint": ...}` joined, or the trimmed body as-is.
fn postgrest_message(body: &str) -> String {
    let Ok(Value::Object(error)) = serde_json::from_str::<Value>(body) else {
        return body.trim().to_string();
    };
    let field = |key: &str| {
        error
            .get(key)
            .and_then(Value::as_str)
            .filter(|s| !s.is_empty())
    };
    match (field("message"), field("hint")) {
        (Some(message), Some(hint)) => format!("{message} (hint: {hint})"),
        (Some(message), None) => message.to_string(),
        _ => body.trim().to_string(),
    }
}
