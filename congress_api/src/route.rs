//! Request URL construction from a versioned base and ordered path segments.

use url::Url;

use crate::Error;

/// Builds a request URL from a base template, an API version, and path segments.
///
/// `{version}` in the template is replaced first. Each segment is then
/// resolved relative to the URL built so far, treated as a directory: a
/// trailing `/` is appended before every join, so `"members.json"` lands
/// under the current path rather than replacing its last element. Segments
/// are inserted in order and are not escaped beyond what the join does.
///
/// With no segments, the version-instantiated base is returned as is. The
/// result is a string so that a base without a path keeps its exact form.
pub fn build_url<P: AsRef<str>>(
    template: &str,
    version: &str,
    segments: &[P],
) -> Result<String, Error> {
    let base = template.replace("{version}", version);
    if let Err(e) = Url::parse(&base) {
        tracing::error!("Invalid base URL {}: {}", base, e);
        return Err(Error::InvalidUrl(e));
    }
    let mut current = base;
    for segment in segments {
        current = Url::parse(&format!("{}/", current))?
            .join(segment.as_ref())?
            .to_string();
    }
    Ok(current)
}
