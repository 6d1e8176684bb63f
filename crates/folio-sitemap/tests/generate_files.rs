//! End-to-end sitemap generation into a temporary output directory.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use chrono::NaiveDate;
use folio_core::{PathType, SeoMetaRecord, SiteUrl};
use folio_sitemap::{GenerateOptions, generate_sitemaps};
use folio_store::{SeoSource, StoreError};
use pretty_assertions::assert_eq;
use regex::Regex;

struct StubSource(Result<Vec<SeoMetaRecord>, String>);

impl SeoSource for StubSource {
    async fn fetch_slugs(&self) -> Result<Vec<SeoMetaRecord>, StoreError> {
        self.0.clone().map_err(StoreError::Parse)
    }

    async fn fetch_by_slugs(&self, _slugs: &[String]) -> Result<Vec<SeoMetaRecord>, StoreError> {
        unreachable!("sitemap generation only needs the slug projection")
    }
}

fn options(root: &Path) -> GenerateOptions {
    GenerateOptions {
        site: SiteUrl::parse("https://example.com").unwrap(),
        dist: root.join("dist"),
        case_studies: root.join("content/case-studies.json"),
        blog_posts: root.join("content/blog-posts.json"),
        today: NaiveDate::from_ymd_opt(2024, 10, 1).unwrap(),
        dry_run: false,
    }
}

fn write_catalogs(root: &Path) {
    fs::create_dir_all(root.join("content")).unwrap();
    fs::write(
        root.join("content/case-studies.json"),
        r#"{"caseStudies": {"herbalink": {"title": "HerbaLink"}, "splittime": {"title": "SplitTime"}}}"#,
    )
    .unwrap();
    fs::write(
        root.join("content/blog-posts.json"),
        r#"{"blogPosts": [
            {"id": "1", "title": "Designing for trust", "date": "2024-01-10", "slug": "designing-for-trust"},
            {"id": "2", "title": "Case study writing", "date": "2024-02-11", "slug": "case-study-writing"}
        ]}"#,
    )
    .unwrap();
}

fn locs(xml: &str) -> Vec<String> {
    let re = Regex::new(r"<loc>(.*?)</loc>").unwrap();
    re.captures_iter(xml).map(|c| c[1].to_string()).collect()
}

#[tokio::test]
async fn remote_failure_still_writes_static_sitemap() {
    let dir = tempfile::tempdir().unwrap();
    let opts = options(dir.path());

    let source = StubSource(Err(String::from("network unreachable")));
    let summary = generate_sitemaps(&source, &opts).await.expect("generation succeeds");

    assert_eq!(summary.remote_entries, 0);
    let xml = fs::read_to_string(opts.dist.join("sitemap.xml")).unwrap();
    let urls = locs(&xml);
    assert_eq!(urls.len(), summary.main_entries);
    assert!(urls.contains(&"https://example.com/".to_string()));
    assert!(urls.contains(&"https://example.com/project/business-management".to_string()));
    assert!(opts.dist.join("blog-sitemap.xml").is_file());
    assert!(opts.dist.join("robots.txt").is_file());
}

#[tokio::test]
async fn all_sources_merge_into_unique_site_urls() {
    let dir = tempfile::tempdir().unwrap();
    write_catalogs(dir.path());
    let opts = options(dir.path());

    let source = StubSource(Ok(vec![
        SeoMetaRecord::new("home", PathType::Page),
        SeoMetaRecord::new("about", PathType::Page),
        SeoMetaRecord::new("herbalink", PathType::Project),
        SeoMetaRecord::new("case-study-writing", PathType::Post),
    ]));
    let summary = generate_sitemaps(&source, &opts).await.unwrap();
    assert_eq!(summary.remote_entries, 4);

    for file in ["sitemap.xml", "blog-sitemap.xml"] {
        let xml = fs::read_to_string(opts.dist.join(file)).unwrap();
        let urls = locs(&xml);
        let unique: HashSet<&String> = urls.iter().collect();
        assert_eq!(unique.len(), urls.len(), "duplicate url in {file}");
        assert!(urls.iter().all(|u| u.starts_with("https://example.com")));
    }

    let main = locs(&fs::read_to_string(opts.dist.join("sitemap.xml")).unwrap());
    assert_eq!(main[0], "https://example.com/");
    assert!(main.contains(&"https://example.com/project/splittime".to_string()));

    let blog = locs(&fs::read_to_string(opts.dist.join("blog-sitemap.xml")).unwrap());
    assert_eq!(
        blog,
        vec![
            "https://example.com/blog",
            "https://example.com/blog/designing-for-trust",
            "https://example.com/blog/case-study-writing",
        ]
    );

    let robots = fs::read_to_string(opts.dist.join("robots.txt")).unwrap();
    assert!(robots.contains("Sitemap: https://example.com/sitemap.xml"));
    assert!(robots.contains("Sitemap: https://example.com/blog-sitemap.xml"));
}

#[tokio::test]
async fn dry_run_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let mut opts = options(dir.path());
    opts.dry_run = true;

    let summary = generate_sitemaps(&StubSource(Ok(Vec::new())), &opts)
        .await
        .unwrap();
    assert!(summary.dry_run);
    assert_eq!(summary.files.len(), 3);
    assert!(!opts.dist.exists());
}

#[tokio::test]
async fn broken_catalog_degrades_to_static_routes() {
    let dir = tempfile::tempdir().unwrap();
    fs::create_dir_all(dir.path().join("content")).unwrap();
    fs::write(dir.path().join("content/case-studies.json"), "{ not json").unwrap();
    let opts = options(dir.path());

    let summary = generate_sitemaps(&StubSource(Ok(Vec::new())), &opts)
        .await
        .unwrap();
    assert_eq!(summary.main_entries, 9);
    assert_eq!(summary.blog_entries, 1);
}
