//! Site URL handling shared by the sitemap generator and the verifier.
//!
//! Sitemap `<loc>` values, canonical links, and the expected canonical for a
//! route are all compared in normalized form: ASCII origin without the default
//! port, trailing slash stripped from the path except at the root.

use reqwest::Url;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::errors::CoreError;

/// Validated absolute `http(s)` base URL of the site.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct SiteUrl(Url);

impl SiteUrl {
    /// Parse a base URL such as `https://example.com` or `https://example.com/`.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::InvalidUrl`] if the value is not an absolute
    /// `http(s)` URL with a host, or carries a query string or fragment.
    pub fn parse(raw: &str) -> Result<Self, CoreError> {
        let invalid = |reason: &str| CoreError::InvalidUrl {
            url: raw.to_string(),
            reason: reason.to_string(),
        };

        let trimmed = raw.trim();
        if trimmed.chars().any(char::is_whitespace) {
            return Err(invalid("contains whitespace"));
        }
        let url = Url::parse(trimmed).map_err(|e| invalid(&e.to_string()))?;
        if !is_http_scheme(&url) {
            return Err(invalid("expected an http(s) URL"));
        }
        if url.host_str().is_none_or(str::is_empty) {
            return Err(invalid("missing host"));
        }
        if url.query().is_some() || url.fragment().is_some() {
            return Err(invalid("query strings and fragments are not allowed"));
        }
        Ok(Self(url))
    }

    /// The base URL without a trailing slash.
    #[must_use]
    pub fn as_str(&self) -> &str {
        self.0.as_str().trim_end_matches('/')
    }

    /// Absolute URL for a site route. `/` keeps its slash, other routes are appended as-is.
    #[must_use]
    pub fn join(&self, route: &str) -> String {
        let base = self.as_str();
        let route = route.trim();
        if route.is_empty() || route == "/" {
            format!("{base}/")
        } else if route.starts_with('/') {
            format!("{base}{route}")
        } else {
            format!("{base}/{route}")
        }
    }

    /// ASCII `scheme://host[:port]` of the site.
    #[must_use]
    pub fn origin(&self) -> String {
        self.0.origin().ascii_serialization()
    }

    /// Whether `url` belongs to this site's origin.
    #[must_use]
    pub fn is_same_origin(&self, url: &str) -> bool {
        parse_http(url).is_some_and(|other| other.origin() == self.0.origin())
    }
}

impl fmt::Display for SiteUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<String> for SiteUrl {
    type Error = CoreError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<SiteUrl> for String {
    fn from(value: SiteUrl) -> Self {
        value.as_str().to_string()
    }
}

fn is_http_scheme(url: &Url) -> bool {
    matches!(url.scheme(), "http" | "https")
}

/// Parse an absolute `http(s)` URL that has a host.
fn parse_http(url: &str) -> Option<Url> {
    Url::parse(url.trim())
        .ok()
        .filter(|parsed| is_http_scheme(parsed) && parsed.host_str().is_some_and(|h| !h.is_empty()))
}

/// Whether `url` is an absolute `http://` or `https://` URL with a host.
#[must_use]
pub fn is_absolute_http(url: &str) -> bool {
    parse_http(url).is_some()
}

/// ASCII origin of an absolute URL; the default port is omitted.
#[must_use]
pub fn origin_of(url: &str) -> Option<String> {
    parse_http(url).map(|parsed| parsed.origin().ascii_serialization())
}

/// Path component of an absolute URL, without query or fragment. Empty paths become `/`.
#[must_use]
pub fn url_path(url: &str) -> Option<String> {
    parse_http(url).map(|parsed| parsed.path().to_string())
}

/// Strip trailing slashes from a route, keeping `/` for the root.
#[must_use]
pub fn normalize_route(path: &str) -> String {
    let trimmed = path.trim_end_matches('/');
    if trimmed.is_empty() {
        String::from("/")
    } else {
        trimmed.to_string()
    }
}

/// Normalized form of an absolute URL: origin plus normalized path.
///
/// Returns `None` for relative or non-http(s) URLs.
#[must_use]
pub fn normalize_url(url: &str) -> Option<String> {
    let parsed = parse_http(url)?;
    Some(format!(
        "{}{}",
        parsed.origin().ascii_serialization(),
        normalize_route(parsed.path())
    ))
}
