//! Sitemap protocol XML and robots.txt rendering.

use std::fmt::Write;

use folio_core::{SiteUrl, SitemapEntry};

/// File name of the main sitemap inside the output directory.
pub const MAIN_SITEMAP_FILE: &str = "sitemap.xml";
/// File name of the blog sitemap inside the output directory.
pub const BLOG_SITEMAP_FILE: &str = "blog-sitemap.xml";
/// File name of the robots file inside the output directory.
pub const ROBOTS_FILE: &str = "robots.txt";

/// Render entries as a sitemaps.org `<urlset>`, one `<url>` per entry in order.
#[must_use]
pub fn render_sitemap(entries: &[SitemapEntry]) -> String {
    let mut xml = String::from(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n\
         <urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\">\n",
    );
    for entry in entries {
        let _ = write!(
            xml,
            "  <url>\n    <loc>{}</loc>\n    <lastmod>{}</lastmod>\n    <changefreq>{}</changefreq>\n    <priority>{}</priority>\n  </url>\n",
            escape_xml(&entry.url),
            entry.lastmod.format("%Y-%m-%d"),
            entry.changefreq,
            entry.priority,
        );
    }
    xml.push_str("</urlset>\n");
    xml
}

/// robots.txt allowing everything and pointing at both sitemaps.
#[must_use]
pub fn render_robots(site: &SiteUrl) -> String {
    format!(
        "User-agent: *\nAllow: /\n\nSitemap: {}\nSitemap: {}\n",
        site.join(MAIN_SITEMAP_FILE),
        site.join(BLOG_SITEMAP_FILE),
    )
}

fn escape_xml(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            other => out.push(other),
        }
    }
    out
}
