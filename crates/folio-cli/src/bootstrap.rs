use anyhow::Context;
use folio_config::FolioConfig;
use folio_core::SiteUrl;
use folio_store::SupabaseClient;

use crate::cli::{GlobalFlags, SiteArgs};

/// Configuration with command-line overrides applied.
pub struct Resolved {
    pub config: FolioConfig,
    pub site: SiteUrl,
}

/// Load layered config (with `.env`) and apply `--dist` / `--site-url`.
pub fn load_config(flags: &GlobalFlags, overrides: &SiteArgs) -> anyhow::Result<Resolved> {
    let mut config = FolioConfig::load_with_dotenv(flags.config.as_deref())
        .context("failed to load folio configuration")?;

    if let Some(dist) = &overrides.dist {
        config.paths.dist.clone_from(dist);
    }
    if let Some(url) = &overrides.site_url {
        config.site.url.clone_from(url);
    }
    let site = config.site.site_url().context("invalid site URL")?;

    tracing::debug!(site = %site, dist = %config.paths.dist.display(), "configuration resolved");
    Ok(Resolved { config, site })
}

/// Client for the `seo_meta` table. An unconfigured client fails every
/// fetch, which the commands degrade to "no rows".
pub fn seo_client(config: &FolioConfig) -> anyhow::Result<SupabaseClient> {
    if !config.supabase.is_configured() {
        tracing::warn!(
            "supabase endpoint or api key not set (FOLIO_SUPABASE__ENDPOINT / FOLIO_SUPABASE__API_KEY)"
        );
    }
    SupabaseClient::new(&config.supabase).context("failed to build supabase client")
}
