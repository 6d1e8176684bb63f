//! End-to-end verification of a build output directory.

use std::path::PathBuf;

use folio_config::VerifyConfig;
use folio_core::{SiteUrl, ValidationResult};
use folio_parser::parse_meta;
use folio_store::{SeoSource, fetch_by_slugs_or_empty};

use crate::consistency::verify_db_html_consistency;
use crate::discover::{extract_route_from_path, list_dist_html_files};
use crate::error::VerifyError;
use crate::report::{ReportBuilder, VerifyReport};
use crate::sitemap_check::{check_robots, read_sitemap_urls, sitemap_urls_missing_in_dist};
use crate::validate::validate;

#[derive(Debug, Clone)]
pub struct VerifyOptions {
    pub site: SiteUrl,
    pub dist: PathBuf,
    /// Slugs diffed against the remote table, with their page files.
    pub verify: VerifyConfig,
}

/// Run every check against `options.dist` and collect the results.
///
/// Failed checks never short-circuit; they are folded into the report and
/// surface through [`VerifyReport::failed`].
///
/// # Errors
/// Returns [`VerifyError::DistNotFound`] before doing anything else if the
/// directory is missing. Walk and sitemap read failures are also errors.
pub async fn run_verification<S: SeoSource + Sync>(
    source: &S,
    options: &VerifyOptions,
) -> Result<VerifyReport, VerifyError> {
    let dist = &options.dist;
    if !dist.is_dir() {
        return Err(VerifyError::DistNotFound(dist.clone()));
    }

    let mut report = ReportBuilder::new(&options.site, dist);

    let files = list_dist_html_files(dist)?;
    tracing::info!(pages = files.len(), dist = %dist.display(), "scanning build output");
    for file in &files {
        let route = extract_route_from_path(dist, file);
        let result = match std::fs::read_to_string(file) {
            Ok(html) => validate(&route, &parse_meta(&html), &options.site),
            Err(error) => ValidationResult {
                route: route.clone(),
                seo_tags_verified: false,
                canonical_ok: false,
                issues: vec![format!("failed to read {}: {error}", file.display())],
            },
        };
        if !result.issues.is_empty() {
            tracing::debug!(route = %route, issues = result.issues.len(), "route has issues");
        }
        report.record_route(result);
    }

    report.record_robots(check_robots(dist));

    let sitemap_urls = read_sitemap_urls(dist)?;
    let missing = sitemap_urls
        .as_deref()
        .map(|urls| sitemap_urls_missing_in_dist(dist, urls))
        .unwrap_or_default();
    if sitemap_urls.is_none() {
        tracing::warn!("sitemap.xml not found in build output");
    }
    report.record_sitemap(sitemap_urls, missing);

    let records = fetch_by_slugs_or_empty(source, &options.verify.slugs()).await;
    let mismatches =
        verify_db_html_consistency(dist, &options.verify.checks, &records, &options.site);
    report.record_db(records.len(), mismatches);

    let report = report.finish();
    tracing::info!(failed = report.failed, "verification finished");
    Ok(report)
}
