//! Settings for the post-build DB/HTML consistency check.

use serde::{Deserialize, Serialize};

/// A slug whose `seo_meta` row is diffed against a built HTML file.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct SlugCheck {
    pub slug: String,
    /// HTML file relative to the dist directory.
    pub file: String,
}

impl SlugCheck {
    pub fn new(slug: impl Into<String>, file: impl Into<String>) -> Self {
        Self {
            slug: slug.into(),
            file: file.into(),
        }
    }
}

fn default_checks() -> Vec<SlugCheck> {
    vec![
        SlugCheck::new("home", "index.html"),
        SlugCheck::new("projects", "projects/index.html"),
        SlugCheck::new("herbalink", "project/herbalink/index.html"),
        SlugCheck::new("splittime", "project/splittime/index.html"),
        SlugCheck::new("case-study-writing", "blog/case-study-writing/index.html"),
    ]
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct VerifyConfig {
    /// Slugs checked against the database, with the file each one renders to.
    #[serde(default = "default_checks")]
    pub checks: Vec<SlugCheck>,
}

impl Default for VerifyConfig {
    fn default() -> Self {
        Self {
            checks: default_checks(),
        }
    }
}

impl VerifyConfig {
    /// Slugs to request from the remote table.
    #[must_use]
    pub fn slugs(&self) -> Vec<String> {
        self.checks.iter().map(|check| check.slug.clone()).collect()
    }
}
