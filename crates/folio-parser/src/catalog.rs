//! Content catalog readers.
//!
//! The site keeps its blog posts and case studies in data files that the
//! frontend build also consumes. A catalog may be JSON or TOML; the format is
//! picked from the file extension.
//!
//! Accepted blog shapes:
//!
//! ```text
//! [ {id, title, date, slug}, ... ]              (JSON only)
//! { "blogPosts": [ ... ] }  /  { "posts": [ ... ] }
//! ```
//!
//! Accepted case-study shapes:
//!
//! ```text
//! { "caseStudies": { "<id>": { "title": ... }, ... } }
//! { "caseStudies": [ { "id": ..., "title": ... }, ... ] }
//! { "<id>": { "title": ... }, ... }
//! ```
//!
//! Entries missing a required field are skipped, never an error. A catalog that
//! contains no list at all yields no entries.

use std::collections::BTreeMap;
use std::path::Path;

use folio_core::{BlogPostSummary, CaseStudySummary};
use serde_json::{Map, Value};

use crate::error::ParserError;

const BLOG_KEYS: &[&str] = &["blogPosts", "posts"];
const CASE_STUDY_KEYS: &[&str] = &["caseStudies", "case_studies"];

/// On-disk catalog format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogFormat {
    Json,
    Toml,
}

impl CatalogFormat {
    /// `.toml` files are TOML, everything else is read as JSON.
    #[must_use]
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("toml") => Self::Toml,
            _ => Self::Json,
        }
    }

    const fn name(self) -> &'static str {
        match self {
            Self::Json => "JSON",
            Self::Toml => "TOML",
        }
    }

    fn parse(self, content: &str) -> Result<Value, ParserError> {
        let format = self.name();
        match self {
            Self::Json => serde_json::from_str(content).map_err(|e| ParserError::Format {
                format,
                message: e.to_string(),
            }),
            Self::Toml => toml::from_str(content).map_err(|e| ParserError::Format {
                format,
                message: e.to_string(),
            }),
        }
    }
}

// ── Blog posts ─────────────────────────────────────────────────────

/// Read blog post summaries from a JSON catalog, in source order.
///
/// # Errors
/// Returns `ParserError::Format` for invalid JSON and `ParserError::Catalog`
/// if the post list is present but is not an array.
pub fn extract_blog_data(content: &str) -> Result<Vec<BlogPostSummary>, ParserError> {
    blog_posts_from(&CatalogFormat::Json.parse(content)?)
}

/// Read blog post summaries from a catalog file.
///
/// A missing file yields no posts.
///
/// # Errors
/// Returns `ParserError` if the file cannot be read or parsed.
pub fn load_blog_posts(path: &Path) -> Result<Vec<BlogPostSummary>, ParserError> {
    let Some(value) = read_catalog(path)? else {
        return Ok(Vec::new());
    };
    blog_posts_from(&value)
}

fn blog_posts_from(value: &Value) -> Result<Vec<BlogPostSummary>, ParserError> {
    let list = match value {
        Value::Array(items) => items.as_slice(),
        Value::Object(map) => match find_key(map, BLOG_KEYS) {
            Some(Value::Array(items)) => items.as_slice(),
            Some(other) => {
                return Err(ParserError::Catalog(format!(
                    "blog post list must be an array, found {}",
                    kind_of(other)
                )));
            }
            None => {
                tracing::debug!("blog catalog has no post list");
                return Ok(Vec::new());
            }
        },
        other => {
            return Err(ParserError::Catalog(format!(
                "blog catalog must be an array or table, found {}",
                kind_of(other)
            )));
        }
    };

    let posts = list
        .iter()
        .enumerate()
        .filter_map(|(index, item)| {
            let post = blog_post(item);
            if post.is_none() {
                tracing::debug!(index, "skipping blog post without id/title/date/slug");
            }
            post
        })
        .collect();
    Ok(posts)
}

fn blog_post(item: &Value) -> Option<BlogPostSummary> {
    let obj = item.as_object()?;
    Some(BlogPostSummary {
        id: field_str(obj, "id")?,
        title: field_str(obj, "title")?,
        date: field_str(obj, "date")?,
        slug: field_str(obj, "slug")?,
    })
}

// ── Case studies ───────────────────────────────────────────────────

/// Read titles for the given case-study ids from a JSON catalog.
///
/// Ids outside `known_ids` are never returned, whatever the catalog holds.
///
/// # Errors
/// Returns `ParserError::Format` for invalid JSON and `ParserError::Catalog`
/// for a catalog that is neither a list nor a table.
pub fn extract_case_study_data(
    content: &str,
    known_ids: &[&str],
) -> Result<BTreeMap<String, CaseStudySummary>, ParserError> {
    case_studies_from(&CatalogFormat::Json.parse(content)?, known_ids)
}

/// Read titles for the given case-study ids from a catalog file.
///
/// A missing file yields no case studies.
///
/// # Errors
/// Returns `ParserError` if the file cannot be read or parsed.
pub fn load_case_studies(
    path: &Path,
    known_ids: &[&str],
) -> Result<BTreeMap<String, CaseStudySummary>, ParserError> {
    let Some(value) = read_catalog(path)? else {
        return Ok(BTreeMap::new());
    };
    case_studies_from(&value, known_ids)
}

fn case_studies_from(
    value: &Value,
    known_ids: &[&str],
) -> Result<BTreeMap<String, CaseStudySummary>, ParserError> {
    let container = match value {
        Value::Object(map) => find_key(map, CASE_STUDY_KEYS).unwrap_or(value),
        _ => value,
    };

    let mut found = BTreeMap::new();
    match container {
        Value::Object(by_id) => {
            for id in known_ids {
                if let Some(title) = by_id
                    .get(*id)
                    .and_then(Value::as_object)
                    .and_then(|study| field_str(study, "title"))
                {
                    found.insert((*id).to_string(), CaseStudySummary { title });
                }
            }
        }
        Value::Array(items) => {
            for study in items.iter().filter_map(Value::as_object) {
                let Some(id) = field_str(study, "id") else {
                    continue;
                };
                if !known_ids.contains(&id.as_str()) || found.contains_key(&id) {
                    continue;
                }
                if let Some(title) = field_str(study, "title") {
                    found.insert(id, CaseStudySummary { title });
                }
            }
        }
        other => {
            return Err(ParserError::Catalog(format!(
                "case-study catalog must be an array or table, found {}",
                kind_of(other)
            )));
        }
    }

    for id in known_ids {
        if !found.contains_key(*id) {
            tracing::debug!(id, "known case study missing from catalog");
        }
    }
    Ok(found)
}

// ── Helpers ────────────────────────────────────────────────────────

fn read_catalog(path: &Path) -> Result<Option<Value>, ParserError> {
    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(error) if error.kind() == std::io::ErrorKind::NotFound => {
            tracing::warn!(path = %path.display(), "content catalog not found; no entries read");
            return Ok(None);
        }
        Err(error) => return Err(error.into()),
    };
    CatalogFormat::from_path(path).parse(&content).map(Some)
}

fn find_key<'a>(map: &'a Map<String, Value>, keys: &[&str]) -> Option<&'a Value> {
    keys.iter().find_map(|key| map.get(*key))
}

/// Non-empty string field. Numeric ids are accepted and rendered as strings.
fn field_str(obj: &Map<String, Value>, key: &str) -> Option<String> {
    match obj.get(key)? {
        Value::String(s) if !s.trim().is_empty() => Some(s.trim().to_string()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

const fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "table",
    }
}
