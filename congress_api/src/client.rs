//! Generic blocking client for the ProPublica Congress API.

use reqwest::StatusCode;
use url::Url;

use crate::{
    config::{Config, API_KEY_HEADER},
    envelope, route, Error, NoValidation, QueryParams, Raw, Shaper, Validator,
};

/// Generic client: validates arguments, builds the URL, issues one GET,
/// checks the envelope, and shapes the result.
///
/// The shaper and validator are chosen at construction time. A client holds
/// no per-call state, so one instance can be reused for any number of calls.
#[derive(Clone, Debug)]
pub struct Client<S = Raw, V = NoValidation> {
    config: Config,
    shaper: S,
    validator: V,
}

impl Client {
    /// Creates a client returning raw envelopes with no argument checks.
    pub fn raw(config: Config) -> Self {
        Self::new(config, Raw, NoValidation)
    }
}

impl<S: Shaper, V: Validator> Client<S, V> {
    pub fn new(config: Config, shaper: S, validator: V) -> Self {
        Self {
            config,
            shaper,
            validator,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Joins the configured base URL with `segments`, in order.
    pub fn build_url<P: AsRef<str>>(&self, segments: &[P]) -> Result<Url, Error> {
        let url = route::build_url(self.config.base_url(), self.config.version(), segments)?;
        Ok(Url::parse(&url)?)
    }

    /// Fetches `segments` with `params` as the query string and shapes the result.
    ///
    /// Validation runs first; if it fails, no request is sent. A single
    /// attempt is made: there are no retries.
    pub fn get<P: AsRef<str>>(
        &self,
        segments: &[P],
        params: &QueryParams,
    ) -> Result<S::Output, Error> {
        let parts: Vec<&str> = segments.iter().map(AsRef::as_ref).collect();
        self.validator.validate(&parts, params)?;

        let url = params.add_to_url(&self.build_url(&parts[..])?);
        let (status, body) = self.send(url)?;
        let json = envelope::check(status, &body)?;
        self.shaper.shape(json)
    }

    fn send(&self, url: Url) -> Result<(StatusCode, String), Error> {
        tracing::debug!("GET {}", url);
        let client = reqwest::blocking::Client::builder()
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| {
                tracing::error!("Failed to build HTTP client: {}", e);
                Error::RequestFailed(e)
            })?;
        let resp = client
            .get(url)
            .header(API_KEY_HEADER, self.config.api_key().expose())
            .header("accept", "application/json")
            .send()
            .map_err(|e| {
                tracing::error!("Failed to get resource: {}", e);
                Error::RequestFailed(e)
            })?;

        let status = resp.status();
        let body = resp.text().map_err(|e| {
            tracing::error!("Failed to read response body: {}", e);
            Error::RequestFailed(e)
        })?;
        Ok((status, body))
    }
}
