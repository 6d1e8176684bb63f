//! Build output and content catalog locations.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

fn default_dist() -> PathBuf {
    PathBuf::from("dist")
}

fn default_case_studies() -> PathBuf {
    PathBuf::from("content/case-studies.json")
}

fn default_blog_posts() -> PathBuf {
    PathBuf::from("content/blog-posts.json")
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PathsConfig {
    /// Static build output directory. Sitemaps are written here and the verifier scans it.
    #[serde(default = "default_dist")]
    pub dist: PathBuf,

    /// Case-study catalog (JSON or TOML).
    #[serde(default = "default_case_studies")]
    pub case_studies: PathBuf,

    /// Blog post catalog (JSON or TOML).
    #[serde(default = "default_blog_posts")]
    pub blog_posts: PathBuf,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            dist: default_dist(),
            case_studies: default_case_studies(),
            blog_posts: default_blog_posts(),
        }
    }
}
