//! Pre-flight argument checks, run before any request is sent.

use crate::{Error, QueryParams};

/// Chambers accepted by most member and vote endpoints.
pub const CHAMBERS: &[&str] = &["house", "senate"];

/// Chambers accepted by endpoints that can span both houses.
pub const CHAMBERS_OR_BOTH: &[&str] = &["house", "senate", "both"];

/// Vote types accepted by the votes-by-type endpoint.
pub const VOTE_TYPES: &[&str] = &["missed", "party", "loneno", "perfect"];

/// Bill listings accepted by the recent-bills endpoint.
pub const BILL_TYPES: &[&str] = &[
    "introduced", "updated", "active", "passed", "enacted", "vetoed",
];

/// Checks a request's path segments and query parameters before it is sent.
/// An error returned here aborts the call with no network I/O.
pub trait Validator {
    fn validate(&self, segments: &[&str], params: &QueryParams) -> Result<(), Error>;
}

/// Accepts every request.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoValidation;

impl Validator for NoValidation {
    fn validate(&self, _segments: &[&str], _params: &QueryParams) -> Result<(), Error> {
        Ok(())
    }
}

/// Requires the segment at `position` to be one of `allowed`.
///
/// Built with [`OneOf::file`], the segment is the final `{value}.json` file
/// name and the `.json` suffix is removed before the check. Built with
/// [`OneOf::new`], the segment is compared as is.
#[derive(Clone, Copy, Debug)]
pub struct OneOf {
    name: &'static str,
    position: usize,
    allowed: &'static [&'static str],
    file: bool,
}

impl OneOf {
    pub const fn new(
        name: &'static str,
        position: usize,
        allowed: &'static [&'static str],
    ) -> Self {
        Self {
            name,
            position,
            allowed,
            file: false,
        }
    }

    pub const fn file(
        name: &'static str,
        position: usize,
        allowed: &'static [&'static str],
    ) -> Self {
        Self {
            name,
            position,
            allowed,
            file: true,
        }
    }
}

impl Validator for OneOf {
    fn validate(&self, segments: &[&str], _params: &QueryParams) -> Result<(), Error> {
        let segment = segments.get(self.position).copied().unwrap_or_default();
        let value = if self.file {
            segment.strip_suffix(".json").unwrap_or(segment)
        } else {
            segment
        };
        if self.allowed.contains(&value) {
            Ok(())
        } else {
            tracing::debug!("Rejected {} {:?}", self.name, value);
            Err(Error::InvalidArgument {
                name: self.name,
                value: value.to_string(),
                allowed: self.allowed,
            })
        }
    }
}

impl<A: Validator, B: Validator> Validator for (A, B) {
    fn validate(&self, segments: &[&str], params: &QueryParams) -> Result<(), Error> {
        self.0.validate(segments, params)?;
        self.1.validate(segments, params)
    }
}
