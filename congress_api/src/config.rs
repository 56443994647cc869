//! Client configuration: API key, base URL template, and API version.

use std::fmt;

use crate::Error;

/// Production base URL. `{version}` is replaced with the configured version.
pub const DEFAULT_BASE_URL: &str = "https://api.propublica.org/congress/{version}";

/// API version used unless overridden.
pub const DEFAULT_VERSION: &str = "v1";

/// Header carrying the API key on every request.
pub const API_KEY_HEADER: &str = "X-API-KEY";

pub const API_KEY_ENV: &str = "PROPUBLICA_API_KEY";
pub const API_VERSION_ENV: &str = "PROPUBLICA_API_VERSION";
pub const BASE_URL_ENV: &str = "PROPUBLICA_BASE_URL";

/// API key wrapper that never reveals its contents in Debug/Display.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    /// The raw key, for the request header.
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("<redacted>")
    }
}

impl fmt::Display for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("<redacted>")
    }
}

/// Immutable client configuration.
///
/// Builder methods consume `self`, so a `Config` never changes once it has
/// been handed to a [`Client`](crate::Client) or an endpoint facade.
#[derive(Clone, Debug)]
pub struct Config {
    api_key: ApiKey,
    base_url: String,
    version: String,
}

impl Config {
    /// Creates a configuration for the production API, version `v1`.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: ApiKey::new(api_key),
            base_url: DEFAULT_BASE_URL.to_string(),
            version: DEFAULT_VERSION.to_string(),
        }
    }

    /// Reads the configuration from the environment, loading `.env` first if
    /// one exists. `PROPUBLICA_API_KEY` is required; `PROPUBLICA_API_VERSION`
    /// and `PROPUBLICA_BASE_URL` fall back to the defaults.
    pub fn from_env() -> Result<Self, Error> {
        if let Err(e) = dotenvy::dotenv() {
            tracing::debug!("No .env file loaded: {}", e);
        }
        let api_key = env_string(API_KEY_ENV).ok_or(Error::MissingEnv(API_KEY_ENV))?;
        let mut config = Self::new(api_key);
        if let Some(version) = env_string(API_VERSION_ENV) {
            config = config.with_version(version);
        }
        if let Some(base_url) = env_string(BASE_URL_ENV) {
            config = config.with_base_url(base_url);
        }
        Ok(config)
    }

    /// Uses a different API version (e.g. `"v2"`).
    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = version.into();
        self
    }

    /// Uses a different base URL template. Used for testing with wiremock.
    /// The template may contain `{version}`.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn api_key(&self) -> &ApiKey {
        &self.api_key
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn version(&self) -> &str {
        &self.version
    }
}

fn env_string(name: &str) -> Option<String> {
    std::env::var(name)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
