//! Route kinds and sitemap hint enums.
//!
//! All enums use lowercase serialization, matching the values stored in the
//! remote `seo_meta` table and the sitemap protocol.

use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// PathType
// ---------------------------------------------------------------------------

/// Kind of page a `seo_meta` row describes. Decides the route prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PathType {
    Page,
    Project,
    Post,
}

impl PathType {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Page => "page",
            Self::Project => "project",
            Self::Post => "post",
        }
    }

    /// Site route for `slug` under this path type.
    ///
    /// ```text
    /// page    home  -> /
    /// page    about -> /about
    /// project foo   -> /project/foo
    /// post    bar   -> /blog/bar
    /// ```
    #[must_use]
    pub fn route_for(self, slug: &str) -> String {
        match self {
            Self::Page if slug == crate::routes::HOME_SLUG => String::from("/"),
            Self::Page => format!("/{slug}"),
            Self::Project => format!("/project/{slug}"),
            Self::Post => format!("/blog/{slug}"),
        }
    }
}

impl fmt::Display for PathType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// ChangeFreq
// ---------------------------------------------------------------------------

/// Sitemap `<changefreq>` hint. The site only ever emits these two.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeFreq {
    Weekly,
    Monthly,
}

impl ChangeFreq {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Weekly => "weekly",
            Self::Monthly => "monthly",
        }
    }
}

impl fmt::Display for ChangeFreq {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
