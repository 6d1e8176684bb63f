//! Aggregated verification report.
//!
//! Every check runs to completion and records into a [`ReportBuilder`];
//! `failed` is derived once at the end.

use std::path::Path;

use folio_core::{Mismatch, SiteUrl, ValidationResult};
use serde::Serialize;

use crate::sitemap_check::RobotsCheck;

/// JSON summary printed after a verification run.
#[derive(Debug, Clone, Serialize)]
pub struct VerifyReport {
    pub site_url: String,
    pub dist: String,
    pub routes_scanned: usize,
    pub results: Vec<ValidationResult>,
    pub all_seo_tags_verified: bool,
    pub all_canonical_ok: bool,
    pub robots_txt: RobotsCheck,
    pub sitemap_present: bool,
    pub sitemap_url_count: usize,
    pub sitemap_urls_missing_in_dist: Vec<String>,
    pub db_records_fetched: usize,
    pub db_html_mismatches: Vec<Mismatch>,
    pub db_html_consistent: bool,
    pub failed: bool,
}

/// Printed instead of a report when verification cannot start.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorReport {
    pub error: &'static str,
}

#[derive(Debug)]
pub struct ReportBuilder {
    site_url: String,
    dist: String,
    results: Vec<ValidationResult>,
    robots: RobotsCheck,
    sitemap_urls: Option<Vec<String>>,
    missing_in_dist: Vec<String>,
    db_records_fetched: usize,
    mismatches: Vec<Mismatch>,
}

impl ReportBuilder {
    #[must_use]
    pub fn new(site: &SiteUrl, dist: &Path) -> Self {
        Self {
            site_url: site.to_string(),
            dist: dist.display().to_string(),
            results: Vec::new(),
            robots: RobotsCheck::default(),
            sitemap_urls: None,
            missing_in_dist: Vec::new(),
            db_records_fetched: 0,
            mismatches: Vec::new(),
        }
    }

    pub fn record_route(&mut self, result: ValidationResult) {
        self.results.push(result);
    }

    pub const fn record_robots(&mut self, robots: RobotsCheck) {
        self.robots = robots;
    }

    /// `urls` is `None` when `sitemap.xml` is absent.
    pub fn record_sitemap(&mut self, urls: Option<Vec<String>>, missing_in_dist: Vec<String>) {
        self.sitemap_urls = urls;
        self.missing_in_dist = missing_in_dist;
    }

    pub fn record_db(&mut self, records_fetched: usize, mismatches: Vec<Mismatch>) {
        self.db_records_fetched = records_fetched;
        self.mismatches = mismatches;
    }

    #[must_use]
    pub fn finish(self) -> VerifyReport {
        let scanned = !self.results.is_empty();
        let all_seo_tags_verified = scanned && self.results.iter().all(|r| r.seo_tags_verified);
        let all_canonical_ok = scanned && self.results.iter().all(|r| r.canonical_ok);
        let sitemap_present = self.sitemap_urls.is_some();
        let db_html_consistent = self.mismatches.is_empty();

        let failed = !all_seo_tags_verified
            || !all_canonical_ok
            || !self.robots.ok()
            || !sitemap_present
            || !db_html_consistent
            || !self.missing_in_dist.is_empty();

        VerifyReport {
            site_url: self.site_url,
            dist: self.dist,
            routes_scanned: self.results.len(),
            results: self.results,
            all_seo_tags_verified,
            all_canonical_ok,
            robots_txt: self.robots,
            sitemap_present,
            sitemap_url_count: self.sitemap_urls.as_ref().map_or(0, Vec::len),
            sitemap_urls_missing_in_dist: self.missing_in_dist,
            db_records_fetched: self.db_records_fetched,
            db_html_mismatches: self.mismatches,
            db_html_consistent,
            failed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn passing_builder() -> ReportBuilder {
        let site = SiteUrl::parse("https://example.com").unwrap();
        let mut builder = ReportBuilder::new(&site, Path::new("dist"));
        builder.record_route(ValidationResult {
            route: "/".into(),
            seo_tags_verified: true,
            canonical_ok: true,
            issues: Vec::new(),
        });
        builder.record_robots(RobotsCheck {
            exists: true,
            sitemap_directive_ok: true,
        });
        builder.record_sitemap(Some(vec!["https://example.com/".into()]), Vec::new());
        builder.record_db(5, Vec::new());
        builder
    }

    #[test]
    fn all_checks_passing() {
        let report = passing_builder().finish();
        assert!(!report.failed);
        assert_eq!(report.routes_scanned, 1);
        assert_eq!(report.sitemap_url_count, 1);
        assert!(report.db_html_consistent);
    }

    #[test]
    fn zero_routes_fail() {
        let site = SiteUrl::parse("https://example.com").unwrap();
        let mut builder = ReportBuilder::new(&site, Path::new("dist"));
        builder.record_robots(RobotsCheck {
            exists: true,
            sitemap_directive_ok: true,
        });
        builder.record_sitemap(Some(Vec::new()), Vec::new());

        let report = builder.finish();
        assert!(!report.all_seo_tags_verified);
        assert!(report.failed);
    }

    #[test]
    fn each_condition_fails_the_run() {
        let mut builder = passing_builder();
        builder.record_sitemap(None, Vec::new());
        assert!(builder.finish().failed);

        let mut builder = passing_builder();
        builder.record_robots(RobotsCheck {
            exists: true,
            sitemap_directive_ok: false,
        });
        assert!(builder.finish().failed);

        let mut builder = passing_builder();
        builder.record_sitemap(
            Some(vec!["https://example.com/gone".into()]),
            vec!["https://example.com/gone".into()],
        );
        assert!(builder.finish().failed);

        let mut builder = passing_builder();
        builder.record_db(
            0,
            vec![Mismatch {
                slug: "home".into(),
                file: "index.html".into(),
                field: "db_record".into(),
                expected: "row in seo_meta".into(),
                actual: "(missing)".into(),
            }],
        );
        let report = builder.finish();
        assert!(!report.db_html_consistent);
        assert!(report.failed);
    }

    #[test]
    fn report_serializes_with_stable_keys() {
        let value = serde_json::to_value(passing_builder().finish()).unwrap();
        assert_eq!(value["site_url"], "https://example.com");
        assert_eq!(value["robots_txt"]["sitemap_directive_ok"], true);
        assert_eq!(value["failed"], false);

        let error = serde_json::to_string(&ErrorReport {
            error: "dist_not_found",
        })
        .unwrap();
        assert_eq!(error, r#"{"error":"dist_not_found"}"#);
    }
}
