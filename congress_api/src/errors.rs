//! Error types for the API client.

/// Errors that can occur when building, sending, or shaping API requests.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// A call argument is not one of the values the endpoint accepts.
    /// Raised before any request is sent.
    #[error("Invalid {name} {value:?}, expected one of: {}", .allowed.join(", "))]
    InvalidArgument {
        name: &'static str,
        value: String,
        allowed: &'static [&'static str],
    },
    /// A caller-supplied validator rejected the request.
    #[error("Validation failed: {0}")]
    Validation(String),
    /// The base URL template or a path segment did not form a valid URL.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
    /// The HTTP request could not be sent or its body could not be read.
    #[error("Request failed")]
    RequestFailed(#[source] reqwest::Error),
    /// The API rejected the request: either the HTTP status was not a
    /// success, or the envelope `status` field was not `"OK"`.
    #[error("Request failed with status {status}{}", envelope_suffix(.api_status))]
    Api {
        status: u16,
        api_status: Option<String>,
        body: String,
    },
    /// The response body was not valid JSON, or did not match the requested type.
    #[error("Failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),
    /// The response lacked a field the shaper needs (e.g. `results[0].members`).
    #[error("Response is missing {0}")]
    MissingField(String),
    /// The field exists but is not an array of JSON objects.
    #[error("Response field {0} is not a list of records")]
    NotRecords(String),
    /// Writing a table as CSV failed.
    #[error("CSV output failed: {0}")]
    Csv(#[from] csv::Error),
    /// A required environment variable is not set.
    #[error("Environment variable {0} is not set")]
    MissingEnv(&'static str),
}

fn envelope_suffix(api_status: &Option<String>) -> String {
    match api_status {
        Some(s) => format!(" (envelope status {})", s),
        None => String::new(),
    }
}

impl Error {
    /// Returns true for the single API failure kind, whether it came from
    /// the HTTP status or from the envelope status.
    pub fn is_api(&self) -> bool {
        matches!(self, Error::Api { .. })
    }

    /// Returns true if the request was rejected before any network I/O.
    pub fn is_validation(&self) -> bool {
        matches!(self, Error::InvalidArgument { .. } | Error::Validation(_))
    }
}
