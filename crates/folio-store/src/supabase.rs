//! Supabase (PostgREST) client for the `seo_meta` table.

use folio_config::SupabaseConfig;
use folio_core::SeoMetaRecord;
use serde_json::Value;

use crate::{SeoSource, error::StoreError, http::check_response};

/// Columns the sitemap generator needs.
pub const SLUG_COLUMNS: &str = "slug,path_type,updated_at";

/// Every column the verifier compares against built HTML.
pub const FULL_COLUMNS: &str =
    "slug,path_type,updated_at,title,description,canonical_url,og_image_url";

/// HTTP client for the `seo_meta` REST endpoint.
pub struct SupabaseClient {
    http: reqwest::Client,
    table_url: String,
    api_key: String,
    configured: bool,
}

impl SupabaseClient {
    /// Create a client from the `[supabase]` config section.
    ///
    /// An unconfigured section still yields a client; its fetches fail with
    /// [`StoreError::NotConfigured`] so callers degrade the same way as on a
    /// network error.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Http`] if the underlying `reqwest::Client` fails to build.
    pub fn new(config: &SupabaseConfig) -> Result<Self, StoreError> {
        let http = reqwest::Client::builder()
            .user_agent(concat!("folio/", env!("CARGO_PKG_VERSION")))
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            table_url: config.table_url(),
            api_key: config.api_key.clone(),
            configured: config.is_configured(),
        })
    }

    fn slugs_url(&self) -> String {
        format!("{}?select={SLUG_COLUMNS}", self.table_url)
    }

    fn by_slugs_url(&self, slugs: &[String]) -> String {
        let list = slugs
            .iter()
            .map(|slug| urlencoding::encode(slug).into_owned())
            .collect::<Vec<_>>()
            .join(",");
        format!("{}?select={FULL_COLUMNS}&slug=in.({list})", self.table_url)
    }

    async fn get_rows(&self, url: &str) -> Result<Vec<SeoMetaRecord>, StoreError> {
        if !self.configured {
            return Err(StoreError::NotConfigured);
        }

        tracing::debug!(url, "querying seo_meta");
        let resp = self
            .http
            .get(url)
            .header("apikey", &self.api_key)
            .header(reqwest::header::AUTHORIZATION, format!("Bearer {}", self.api_key))
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await?;
        let resp = check_response(resp).await?;

        let body = resp.text().await?;
        parse_rows(&body)
    }
}

impl SeoSource for SupabaseClient {
    async fn fetch_slugs(&self) -> Result<Vec<SeoMetaRecord>, StoreError> {
        self.get_rows(&self.slugs_url()).await
    }

    async fn fetch_by_slugs(&self, slugs: &[String]) -> Result<Vec<SeoMetaRecord>, StoreError> {
        if slugs.is_empty() {
            return Ok(Vec::new());
        }
        self.get_rows(&self.by_slugs_url(slugs)).await
    }
}

/// Decode a PostgREST array body row by row.
///
/// A body that is not a JSON array is an error. Rows that fail to decode
/// (null slug, unknown `path_type`) are logged and skipped.
fn parse_rows(body: &str) -> Result<Vec<SeoMetaRecord>, StoreError> {
    let rows: Vec<Value> =
        serde_json::from_str(body).map_err(|e| StoreError::Parse(e.to_string()))?;

    let mut records = Vec::with_capacity(rows.len());
    for (index, row) in rows.into_iter().enumerate() {
        let slug = row.get("slug").map(ToString::to_string);
        match serde_json::from_value::<SeoMetaRecord>(row) {
            Ok(record) => records.push(record),
            Err(error) => {
                tracing::warn!(index, slug = ?slug, %error, "skipping malformed seo_meta row");
            }
        }
    }
    Ok(records)
}
