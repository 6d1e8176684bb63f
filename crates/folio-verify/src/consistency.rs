//! Field-by-field diff between `seo_meta` rows and the pages they render to.

use std::collections::HashMap;
use std::path::Path;

use folio_config::SlugCheck;
use folio_core::urls::normalize_url;
use folio_core::{Mismatch, PageMetaSnapshot, SeoMetaRecord, SiteUrl};
use folio_parser::parse_meta;

use crate::discover::extract_route_from_path;
use crate::validate::expected_canonical;

const MISSING: &str = "(missing)";

struct MismatchSink<'a> {
    check: &'a SlugCheck,
    found: Vec<Mismatch>,
}

impl MismatchSink<'_> {
    fn push(&mut self, field: &str, expected: &str, actual: &str) {
        self.found.push(Mismatch {
            slug: self.check.slug.clone(),
            file: self.check.file.clone(),
            field: field.to_string(),
            expected: expected.to_string(),
            actual: actual.to_string(),
        });
    }

    /// Record a mismatch when the row sets `expected` and the page disagrees.
    fn compare(&mut self, field: &str, expected: Option<&String>, actual: Option<&String>) {
        let Some(expected) = expected.map(|e| e.trim()).filter(|e| !e.is_empty()) else {
            return;
        };
        let actual = actual.map_or("", |a| a.trim());
        if expected != actual {
            self.push(field, expected, actual);
        }
    }
}

/// Diff each configured slug's row against its built HTML file.
///
/// A slug with no row yields a `db_record` mismatch; a row whose file is
/// missing yields an `html_file` mismatch. Otherwise `title`, `description`
/// and `og_image` are compared when the row sets them. `canonical` is
/// compared against the row's `canonical_url`, or against the URL computed
/// from the file's route when the row has none and the page declares one.
#[must_use]
pub fn verify_db_html_consistency(
    dist: &Path,
    checks: &[SlugCheck],
    records: &[SeoMetaRecord],
    site: &SiteUrl,
) -> Vec<Mismatch> {
    let by_slug: HashMap<&str, &SeoMetaRecord> =
        records.iter().map(|r| (r.slug.as_str(), r)).collect();
    let mut mismatches = Vec::new();

    for check in checks {
        let mut sink = MismatchSink {
            check,
            found: Vec::new(),
        };
        let path = dist.join(&check.file);

        let Some(record) = by_slug.get(check.slug.as_str()) else {
            sink.push("db_record", "row in seo_meta", MISSING);
            mismatches.append(&mut sink.found);
            continue;
        };
        let html = match std::fs::read_to_string(&path) {
            Ok(html) => html,
            Err(error) => {
                tracing::debug!(path = %path.display(), %error, "page for slug not readable");
                sink.push("html_file", &check.file, MISSING);
                mismatches.append(&mut sink.found);
                continue;
            }
        };

        let snapshot = parse_meta(&html);
        sink.compare("title", record.title.as_ref(), snapshot.title.as_ref());
        sink.compare(
            "description",
            record.description.as_ref(),
            snapshot.description.as_ref(),
        );
        sink.compare(
            "og_image",
            record.og_image_url.as_ref(),
            snapshot.og_image.as_ref(),
        );
        compare_canonical(&mut sink, record, &snapshot, dist, &path, site);

        mismatches.append(&mut sink.found);
    }
    mismatches
}

fn compare_canonical(
    sink: &mut MismatchSink<'_>,
    record: &SeoMetaRecord,
    snapshot: &PageMetaSnapshot,
    dist: &Path,
    path: &Path,
    site: &SiteUrl,
) {
    let actual = snapshot
        .canonical
        .as_deref()
        .map(str::trim)
        .filter(|c| !c.is_empty());
    let explicit = record
        .canonical_url
        .as_deref()
        .map(str::trim)
        .filter(|c| !c.is_empty());

    let expected = match (explicit, actual) {
        (Some(explicit), _) => explicit.to_string(),
        // Nothing to compare; a missing canonical is reported per route.
        (None, None) => return,
        (None, Some(_)) => expected_canonical(site, &extract_route_from_path(dist, path)),
    };
    let actual = actual.unwrap_or_default();

    let same = match (normalize_url(&expected), normalize_url(actual)) {
        (Some(e), Some(a)) => e == a,
        _ => expected == actual,
    };
    if !same {
        sink.push("canonical", &expected, actual);
    }
}
