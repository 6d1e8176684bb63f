//! Checks on the generated `sitemap.xml` and `robots.txt`.

use std::path::Path;
use std::sync::OnceLock;

use folio_core::urls::{is_absolute_http, url_path};
use regex::Regex;
use serde::Serialize;

use crate::discover::page_file_for_route;
use crate::error::VerifyError;

fn loc_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?s)<loc>\s*(.*?)\s*</loc>").expect("loc regex must compile"))
}

fn sitemap_directive_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(?im)^\s*sitemap:\s*(\S+)").expect("sitemap directive regex must compile")
    })
}

/// Result of the robots.txt check.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct RobotsCheck {
    pub exists: bool,
    /// At least one `Sitemap:` line pointing at an absolute http(s) URL.
    pub sitemap_directive_ok: bool,
}

impl RobotsCheck {
    #[must_use]
    pub const fn ok(&self) -> bool {
        self.exists && self.sitemap_directive_ok
    }
}

/// Every `<loc>` in `dist/sitemap.xml`, or `None` when the file is absent.
///
/// # Errors
/// Returns `VerifyError::Io` if the file exists but cannot be read.
pub fn read_sitemap_urls(dist: &Path) -> Result<Option<Vec<String>>, VerifyError> {
    let path = dist.join("sitemap.xml");
    if !path.is_file() {
        return Ok(None);
    }
    let xml = std::fs::read_to_string(&path).map_err(|source| VerifyError::Io {
        path: path.clone(),
        source,
    })?;
    let urls = loc_re()
        .captures_iter(&xml)
        .map(|c| unescape_xml(&c[1]))
        .collect();
    Ok(Some(urls))
}

/// Sitemap URLs whose route has no `index.html` in `dist`.
#[must_use]
pub fn sitemap_urls_missing_in_dist(dist: &Path, urls: &[String]) -> Vec<String> {
    urls.iter()
        .filter(|url| {
            url_path(url).is_none_or(|route| !page_file_for_route(dist, &route).is_file())
        })
        .cloned()
        .collect()
}

/// Check `dist/robots.txt` for existence and a usable `Sitemap:` directive.
#[must_use]
pub fn check_robots(dist: &Path) -> RobotsCheck {
    let Ok(content) = std::fs::read_to_string(dist.join("robots.txt")) else {
        return RobotsCheck::default();
    };
    RobotsCheck {
        exists: true,
        sitemap_directive_ok: sitemap_directive_re()
            .captures_iter(&content)
            .any(|c| is_absolute_http(&c[1])),
    }
}

fn unescape_xml(raw: &str) -> String {
    raw.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&apos;", "'")
        .replace("&amp;", "&")
}
