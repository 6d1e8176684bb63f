//! Entry planning and file emission.
//!
//! Main sitemap precedence, first claim on a URL wins:
//!
//! ```text
//! 1. seo_meta rows              (remote)
//! 2. /  /about                  (fallback pages)
//! 3. /services /contact /blog   (site pages + design-service sub-pages)
//! 4. case-study project pages   (catalog ids -> route table)
//! 5. /project/business-management
//! ```

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use folio_core::routes::{
    self, BLOG_INDEX_ROUTE, BUSINESS_MANAGEMENT_ROUTE, FALLBACK_ROUTES, SITE_ROUTES, StaticRoute,
};
use folio_core::{BlogPostSummary, CaseStudySummary, SeoMetaRecord, SiteUrl, SitemapEntry};
use folio_store::SeoSource;
use serde::Serialize;

use crate::error::SitemapError;
use crate::plan::SitemapPlan;
use crate::xml::{
    BLOG_SITEMAP_FILE, MAIN_SITEMAP_FILE, ROBOTS_FILE, render_robots, render_sitemap,
};

/// Inputs for [`generate_sitemaps`] that do not come from the remote table.
#[derive(Debug, Clone)]
pub struct GenerateOptions {
    pub site: SiteUrl,
    /// Output directory; created if absent.
    pub dist: PathBuf,
    pub case_studies: PathBuf,
    pub blog_posts: PathBuf,
    /// `lastmod` for entries without a date of their own.
    pub today: NaiveDate,
    /// Plan and report without writing files.
    pub dry_run: bool,
}

/// What a generation run produced.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct GenerationSummary {
    pub site_url: String,
    pub dist: String,
    pub remote_entries: usize,
    pub main_entries: usize,
    pub blog_entries: usize,
    pub files: Vec<String>,
    pub dry_run: bool,
}

fn static_entry(site: &SiteUrl, route: &StaticRoute, lastmod: NaiveDate) -> SitemapEntry {
    SitemapEntry {
        url: site.join(route.path),
        lastmod,
        changefreq: route.changefreq,
        priority: route.priority.to_string(),
    }
}

/// Plan the main sitemap from remote rows and case-study summaries.
#[must_use]
pub fn plan_main_sitemap(
    site: &SiteUrl,
    remote: &[SeoMetaRecord],
    case_studies: &BTreeMap<String, CaseStudySummary>,
    today: NaiveDate,
) -> SitemapPlan {
    let mut plan = SitemapPlan::new();

    for record in remote {
        let (changefreq, priority) = routes::remote_hints(record.path_type, &record.slug);
        plan.push(SitemapEntry {
            url: site.join(&record.route()),
            lastmod: record.updated_at.map_or(today, |at| at.date_naive()),
            changefreq,
            priority: priority.to_string(),
        });
    }

    for route in FALLBACK_ROUTES.iter().chain(SITE_ROUTES) {
        plan.push(static_entry(site, route, today));
    }

    for (id, route) in routes::CASE_STUDY_ROUTES {
        if !case_studies.contains_key(*id) {
            continue;
        }
        plan.push(SitemapEntry {
            url: site.join(route),
            lastmod: today,
            changefreq: routes::CASE_STUDY_CHANGEFREQ,
            priority: routes::CASE_STUDY_PRIORITY.to_string(),
        });
    }

    plan.push(static_entry(site, &BUSINESS_MANAGEMENT_ROUTE, today));
    plan
}

/// Plan the blog sitemap: the blog index, then one entry per post.
#[must_use]
pub fn plan_blog_sitemap(site: &SiteUrl, posts: &[BlogPostSummary], today: NaiveDate) -> SitemapPlan {
    let mut plan = SitemapPlan::new();
    if let Some(index) = SITE_ROUTES.iter().find(|r| r.path == BLOG_INDEX_ROUTE) {
        plan.push(static_entry(site, index, today));
    }
    for post in posts {
        plan.push(SitemapEntry {
            url: site.join(&format!("{BLOG_INDEX_ROUTE}/{}", post.slug)),
            lastmod: post.published_on().unwrap_or(today),
            changefreq: routes::BLOG_POST_CHANGEFREQ,
            priority: routes::BLOG_POST_PRIORITY.to_string(),
        });
    }
    plan
}

/// Main sitemap XML.
#[must_use]
pub fn generate_main_sitemap(
    site: &SiteUrl,
    remote: &[SeoMetaRecord],
    case_studies: &BTreeMap<String, CaseStudySummary>,
    today: NaiveDate,
) -> String {
    render_sitemap(plan_main_sitemap(site, remote, case_studies, today).entries())
}

/// Blog sitemap XML.
#[must_use]
pub fn generate_blog_sitemap(site: &SiteUrl, posts: &[BlogPostSummary], today: NaiveDate) -> String {
    render_sitemap(plan_blog_sitemap(site, posts, today).entries())
}

/// Fetch remote rows, read the catalogs, and write `sitemap.xml`,
/// `blog-sitemap.xml`, and `robots.txt` into the output directory.
///
/// The remote fetch and the catalogs never fail the run; a broken source
/// only means fewer entries.
///
/// # Errors
///
/// Returns [`SitemapError::Io`] if the output directory or a file cannot be written.
pub async fn generate_sitemaps<S: SeoSource + Sync>(
    source: &S,
    options: &GenerateOptions,
) -> Result<GenerationSummary, SitemapError> {
    let remote = folio_store::fetch_slugs_or_empty(source).await;

    let known = routes::known_case_studies();
    let case_studies = folio_parser::load_case_studies(&options.case_studies, &known)
        .unwrap_or_else(|error| {
            tracing::warn!(%error, path = %options.case_studies.display(), "case-study catalog unreadable; skipping project pages");
            BTreeMap::new()
        });
    let posts = folio_parser::load_blog_posts(&options.blog_posts).unwrap_or_else(|error| {
        tracing::warn!(%error, path = %options.blog_posts.display(), "blog catalog unreadable; skipping posts");
        Vec::new()
    });

    let main = plan_main_sitemap(&options.site, &remote, &case_studies, options.today);
    let blog = plan_blog_sitemap(&options.site, &posts, options.today);

    let outputs = [
        (MAIN_SITEMAP_FILE, render_sitemap(main.entries())),
        (BLOG_SITEMAP_FILE, render_sitemap(blog.entries())),
        (ROBOTS_FILE, render_robots(&options.site)),
    ];

    let mut files = Vec::with_capacity(outputs.len());
    if !options.dry_run {
        std::fs::create_dir_all(&options.dist).map_err(|source| SitemapError::Io {
            path: options.dist.clone(),
            source,
        })?;
    }
    for (name, contents) in &outputs {
        let path = options.dist.join(name);
        if !options.dry_run {
            write_file(&path, contents)?;
            tracing::info!(path = %path.display(), "wrote file");
        }
        files.push(path.display().to_string());
    }

    Ok(GenerationSummary {
        site_url: options.site.to_string(),
        dist: options.dist.display().to_string(),
        remote_entries: remote.len(),
        main_entries: main.len(),
        blog_entries: blog.len(),
        files,
        dry_run: options.dry_run,
    })
}

fn write_file(path: &Path, contents: &str) -> Result<(), SitemapError> {
    std::fs::write(path, contents).map_err(|source| SitemapError::Io {
        path: path.to_path_buf(),
        source,
    })
}
