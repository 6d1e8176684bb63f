//! Records read from the remote store and the content catalogs, plus the
//! values the sitemap generator and verifier derive from them.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use crate::enums::{ChangeFreq, PathType};

/// A row of the remote `seo_meta` table. Read-only.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SeoMetaRecord {
    pub slug: String,
    pub path_type: PathType,
    #[serde(default, deserialize_with = "deserialize_timestamp")]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub canonical_url: Option<String>,
    #[serde(default)]
    pub og_image_url: Option<String>,
}

impl SeoMetaRecord {
    /// Minimal row with only the columns the sitemap query selects.
    #[must_use]
    pub fn new(slug: impl Into<String>, path_type: PathType) -> Self {
        Self {
            slug: slug.into(),
            path_type,
            updated_at: None,
            title: None,
            description: None,
            canonical_url: None,
            og_image_url: None,
        }
    }

    /// Site route this row describes.
    #[must_use]
    pub fn route(&self) -> String {
        self.path_type.route_for(&self.slug)
    }
}

/// Accepts RFC 3339 timestamps as well as Postgres `timestamp` values without an offset.
/// Unparseable values become `None` rather than failing the whole row.
fn deserialize_timestamp<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    Ok(raw.as_deref().and_then(parse_timestamp))
}

fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return Some(parsed.with_timezone(&Utc));
    }
    ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
        .map(|naive| naive.and_utc())
}

/// One `<url>` block of a sitemap.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SitemapEntry {
    /// Absolute URL.
    pub url: String,
    /// Serialized as `YYYY-MM-DD`.
    pub lastmod: NaiveDate,
    pub changefreq: ChangeFreq,
    /// Decimal numeral between `0.0` and `1.0`.
    pub priority: String,
}

/// A blog post as listed in the blog content catalog.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BlogPostSummary {
    pub id: String,
    pub title: String,
    pub date: String,
    pub slug: String,
}

impl BlogPostSummary {
    /// Publication date, if `date` starts with `YYYY-MM-DD`.
    #[must_use]
    pub fn published_on(&self) -> Option<NaiveDate> {
        let day = self.date.get(..10)?;
        NaiveDate::parse_from_str(day, "%Y-%m-%d").ok()
    }
}

/// A case study as listed in the case-study content catalog.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CaseStudySummary {
    pub title: String,
}

/// SEO-relevant metadata pulled out of one built HTML page.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct PageMetaSnapshot {
    pub title: Option<String>,
    pub description: Option<String>,
    pub canonical: Option<String>,
    /// Number of `<link rel="canonical">` tags on the page.
    pub canon_count: usize,
    pub og_title: Option<String>,
    pub og_description: Option<String>,
    pub og_url: Option<String>,
    pub og_image: Option<String>,
    pub twitter_title: Option<String>,
    pub twitter_description: Option<String>,
    pub robots_noindex: bool,
}

/// Outcome of validating one route's metadata.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ValidationResult {
    pub route: String,
    pub seo_tags_verified: bool,
    pub canonical_ok: bool,
    pub issues: Vec<String>,
}

/// A field where built HTML disagrees with its `seo_meta` row.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Mismatch {
    pub slug: String,
    pub file: String,
    pub field: String,
    pub expected: String,
    pub actual: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_route_uses_path_type() {
        let record = SeoMetaRecord::new("home", PathType::Page);
        assert_eq!(record.route(), "/");
        let record = SeoMetaRecord::new("splittime", PathType::Project);
        assert_eq!(record.route(), "/project/splittime");
    }

    #[test]
    fn timestamp_parses_with_and_without_offset() {
        let with_offset = parse_timestamp("2024-05-01T12:30:00.123456+00:00").unwrap();
        assert_eq!(with_offset.date_naive().to_string(), "2024-05-01");

        let naive = parse_timestamp("2024-05-02T08:00:00").unwrap();
        assert_eq!(naive.date_naive().to_string(), "2024-05-02");

        assert!(parse_timestamp("yesterday").is_none());
    }

    #[test]
    fn blog_post_published_on() {
        let post = BlogPostSummary {
            id: "1".into(),
            title: "Hello".into(),
            date: "2024-03-09T10:00:00Z".into(),
            slug: "hello".into(),
        };
        assert_eq!(post.published_on().unwrap().to_string(), "2024-03-09");

        let undated = BlogPostSummary {
            date: "March 2024".into(),
            ..post
        };
        assert!(undated.published_on().is_none());
    }
}
