//! Static route definitions for the portfolio site.
//!
//! These are the routes the sitemap falls back to when the remote `seo_meta`
//! table is unreachable or incomplete, plus the case-study `id -> route` table.

use crate::enums::{ChangeFreq, PathType};

/// Slug of the `page` row that maps to `/`.
pub const HOME_SLUG: &str = "home";

/// Route of the blog index page.
pub const BLOG_INDEX_ROUTE: &str = "/blog";

/// A route the site always has, with its sitemap hints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StaticRoute {
    pub path: &'static str,
    pub changefreq: ChangeFreq,
    pub priority: &'static str,
}

impl StaticRoute {
    const fn new(path: &'static str, changefreq: ChangeFreq, priority: &'static str) -> Self {
        Self {
            path,
            changefreq,
            priority,
        }
    }
}

/// Pages normally covered by the remote table.
pub const FALLBACK_ROUTES: &[StaticRoute] = &[
    StaticRoute::new("/", ChangeFreq::Weekly, "1.0"),
    StaticRoute::new("/about", ChangeFreq::Monthly, "0.8"),
];

/// Service, contact, and blog pages plus the design-service sub-pages.
pub const SITE_ROUTES: &[StaticRoute] = &[
    StaticRoute::new("/services", ChangeFreq::Monthly, "0.8"),
    StaticRoute::new("/contact", ChangeFreq::Monthly, "0.7"),
    StaticRoute::new(BLOG_INDEX_ROUTE, ChangeFreq::Weekly, "0.8"),
    StaticRoute::new("/services/ux-ui-design", ChangeFreq::Monthly, "0.7"),
    StaticRoute::new("/services/mobile-app-design", ChangeFreq::Monthly, "0.7"),
    StaticRoute::new("/services/website-design", ChangeFreq::Monthly, "0.7"),
];

/// Project page that has no case-study record but is always published.
pub const BUSINESS_MANAGEMENT_ROUTE: StaticRoute = StaticRoute::new(
    "/project/business-management",
    ChangeFreq::Monthly,
    "0.9",
);

/// Hints for a case-study project page.
pub const CASE_STUDY_CHANGEFREQ: ChangeFreq = ChangeFreq::Monthly;
pub const CASE_STUDY_PRIORITY: &str = "0.9";

/// Hints for a blog post page.
pub const BLOG_POST_CHANGEFREQ: ChangeFreq = ChangeFreq::Monthly;
pub const BLOG_POST_PRIORITY: &str = "0.7";

/// Case-study ids the site publishes, with the route each one lives at.
pub const CASE_STUDY_ROUTES: &[(&str, &str)] = &[
    ("herbalink", "/project/herbalink"),
    ("splittime", "/project/splittime"),
    ("investor-loan-app", "/project/investor-loan-app"),
    ("medical-research", "/project/medical-research"),
    ("ai-fitness-coach", "/project/ai-fitness-coach"),
];

/// Case-study ids known to the generator. Anything else in the catalog is ignored.
#[must_use]
pub fn known_case_studies() -> Vec<&'static str> {
    CASE_STUDY_ROUTES.iter().map(|(id, _)| *id).collect()
}

/// Sitemap hints for a remote row: home 1.0, pages 0.8, projects 0.9, posts 0.7.
#[must_use]
pub fn remote_hints(path_type: PathType, slug: &str) -> (ChangeFreq, &'static str) {
    match path_type {
        PathType::Page if slug == HOME_SLUG => (ChangeFreq::Weekly, "1.0"),
        PathType::Page => (ChangeFreq::Monthly, "0.8"),
        PathType::Project => (ChangeFreq::Monthly, "0.9"),
        PathType::Post => (ChangeFreq::Weekly, "0.7"),
    }
}
