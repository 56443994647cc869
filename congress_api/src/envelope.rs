//! The JSON envelope wrapping every API response, and the checks applied to it.

use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::Error;

/// Envelope `status` value of a successful response.
pub const STATUS_OK: &str = "OK";

/// Typed view of a response envelope, for use with [`Typed`](crate::Typed).
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Envelope<T> {
    pub status: String,
    #[serde(default)]
    pub copyright: Option<String>,
    pub results: Vec<T>,
}

/// Validates a raw response and returns its parsed JSON body.
///
/// A non-2xx status fails before the body is parsed. A body that is not JSON
/// is a [`Error::Decode`]. A parsed body whose `status` is missing or not
/// `"OK"` fails with the same [`Error::Api`] kind as an HTTP failure.
pub(crate) fn check(status: StatusCode, body: &str) -> Result<Value, Error> {
    if !status.is_success() {
        let snippet = truncate_body(body);
        tracing::error!("Request failed with status {}: {}", status, snippet);
        return Err(Error::Api {
            status: status.as_u16(),
            api_status: None,
            body: snippet,
        });
    }

    let json: Value = serde_json::from_str(body).map_err(|e| {
        tracing::error!("Failed to parse response: {} | body: {}", e, truncate_body(body));
        e
    })?;

    match json.get("status") {
        Some(Value::String(s)) if s == STATUS_OK => Ok(json),
        other => {
            let api_status = other.map(|s| match s {
                Value::String(s) => s.clone(),
                s => s.to_string(),
            });
            tracing::warn!("API returned envelope status {:?}", api_status);
            Err(Error::Api {
                status: status.as_u16(),
                api_status,
                body: truncate_body(body),
            })
        }
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 2000;
    match body.char_indices().nth(MAX) {
        Some((end, _)) => format!("{}...[truncated]", &body[..end]),
        None => body.to_string(),
    }
}
