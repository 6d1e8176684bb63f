//! # folio-sitemap
//!
//! Build-time sitemap generation for the portfolio site.
//!
//! Produces `sitemap.xml`, `blog-sitemap.xml`, and `robots.txt` in the build
//! output directory from three sources: the remote `seo_meta` table, the
//! static route definitions in [`folio_core::routes`], and the content
//! catalogs read by [`folio_parser`].

mod error;
mod generate;
mod plan;
mod xml;

pub use error::SitemapError;
pub use generate::{
    GenerateOptions, GenerationSummary, generate_blog_sitemap, generate_main_sitemap,
    generate_sitemaps, plan_blog_sitemap, plan_main_sitemap,
};
pub use plan::SitemapPlan;
pub use xml::{
    BLOG_SITEMAP_FILE, MAIN_SITEMAP_FILE, ROBOTS_FILE, render_robots, render_sitemap,
};
