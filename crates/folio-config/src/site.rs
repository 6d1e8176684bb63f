//! Public site configuration.

use folio_core::SiteUrl;
use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// Production domain used when neither `SITE_URL` nor `site.url` is set.
pub const DEFAULT_SITE_URL: &str = "https://example.com";

fn default_url() -> String {
    String::from(DEFAULT_SITE_URL)
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SiteConfig {
    /// Absolute base URL every sitemap `<loc>` and canonical link is built from.
    #[serde(default = "default_url")]
    pub url: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self { url: default_url() }
    }
}

impl SiteConfig {
    /// Parse `url` into a validated [`SiteUrl`].
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] if `url` is not an absolute http(s) URL.
    pub fn site_url(&self) -> Result<SiteUrl, ConfigError> {
        SiteUrl::parse(&self.url).map_err(|error| ConfigError::InvalidValue {
            field: String::from("site.url"),
            reason: error.to_string(),
        })
    }
}
