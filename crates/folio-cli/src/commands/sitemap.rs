use chrono::Utc;
use folio_sitemap::{GenerateOptions, generate_sitemaps};

use crate::bootstrap;
use crate::cli::{GlobalFlags, SitemapArgs};
use crate::output::output;

/// Handle `folio sitemap`. Remote failures degrade; only write errors fail.
pub async fn handle(args: &SitemapArgs, flags: &GlobalFlags) -> anyhow::Result<i32> {
    let resolved = bootstrap::load_config(flags, &args.site)?;
    let client = bootstrap::seo_client(&resolved.config)?;
    let paths = &resolved.config.paths;

    let options = GenerateOptions {
        site: resolved.site.clone(),
        dist: paths.dist.clone(),
        case_studies: paths.case_studies.clone(),
        blog_posts: paths.blog_posts.clone(),
        today: Utc::now().date_naive(),
        dry_run: args.dry_run,
    };

    let summary = generate_sitemaps(&client, &options).await?;
    output(&summary, flags.format)?;
    Ok(0)
}
