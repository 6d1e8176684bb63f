//! # folio-store
//!
//! Read-only access to the remote `seo_meta` table.
//!
//! The sitemap generator needs `(slug, path_type, updated_at)` for every row;
//! the verifier needs full rows for a handful of slugs. Both go through the
//! [`SeoSource`] trait so callers can swap the Supabase client for a fixture.
//!
//! Fetch failures never stop a run: [`fetch_slugs_or_empty`] and
//! [`fetch_by_slugs_or_empty`] log a warning and hand back no rows.

mod error;
mod http;
mod supabase;

pub use error::StoreError;
pub use supabase::{FULL_COLUMNS, SLUG_COLUMNS, SupabaseClient};

use folio_core::SeoMetaRecord;
use std::future::Future;

/// Source of `seo_meta` rows.
pub trait SeoSource {
    /// Every row, projected to `slug, path_type, updated_at`.
    fn fetch_slugs(&self) -> impl Future<Output = Result<Vec<SeoMetaRecord>, StoreError>> + Send;

    /// Full rows for the given slugs. Slugs without a row are simply absent.
    fn fetch_by_slugs(
        &self,
        slugs: &[String],
    ) -> impl Future<Output = Result<Vec<SeoMetaRecord>, StoreError>> + Send;
}

/// Fetch the sitemap projection, degrading to no rows on any error.
pub async fn fetch_slugs_or_empty<S: SeoSource + Sync>(source: &S) -> Vec<SeoMetaRecord> {
    match source.fetch_slugs().await {
        Ok(rows) => {
            tracing::debug!(rows = rows.len(), "fetched seo_meta slugs");
            rows
        }
        Err(error) => {
            tracing::warn!(%error, "seo_meta fetch failed; continuing with static routes only");
            Vec::new()
        }
    }
}

/// Fetch full rows for `slugs`, degrading to no rows on any error.
///
/// Callers treat every requested slug as missing in that case, so the
/// consistency check fails loudly instead of being skipped.
pub async fn fetch_by_slugs_or_empty<S: SeoSource + Sync>(
    source: &S,
    slugs: &[String],
) -> Vec<SeoMetaRecord> {
    match source.fetch_by_slugs(slugs).await {
        Ok(rows) => {
            tracing::debug!(requested = slugs.len(), rows = rows.len(), "fetched seo_meta rows");
            rows
        }
        Err(error) => {
            tracing::error!(%error, "seo_meta fetch failed; treating all slugs as missing");
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_core::PathType;

    struct FixedSource(Vec<SeoMetaRecord>);

    impl SeoSource for FixedSource {
        async fn fetch_slugs(&self) -> Result<Vec<SeoMetaRecord>, StoreError> {
            Ok(self.0.clone())
        }

        async fn fetch_by_slugs(&self, slugs: &[String]) -> Result<Vec<SeoMetaRecord>, StoreError> {
            Ok(self
                .0
                .iter()
                .filter(|row| slugs.contains(&row.slug))
                .cloned()
                .collect())
        }
    }

    struct FailingSource;

    impl SeoSource for FailingSource {
        async fn fetch_slugs(&self) -> Result<Vec<SeoMetaRecord>, StoreError> {
            Err(StoreError::Parse(String::from("connection reset")))
        }

        async fn fetch_by_slugs(&self, _slugs: &[String]) -> Result<Vec<SeoMetaRecord>, StoreError> {
            Err(StoreError::Api {
                status: 503,
                message: String::from("unavailable"),
            })
        }
    }

    #[tokio::test]
    async fn or_empty_passes_rows_through() {
        let source = FixedSource(vec![
            SeoMetaRecord::new("home", PathType::Page),
            SeoMetaRecord::new("herbalink", PathType::Project),
        ]);
        assert_eq!(fetch_slugs_or_empty(&source).await.len(), 2);

        let rows = fetch_by_slugs_or_empty(&source, &[String::from("herbalink")]).await;
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].slug, "herbalink");
    }

    #[tokio::test]
    async fn or_empty_swallows_errors() {
        assert!(fetch_slugs_or_empty(&FailingSource).await.is_empty());
        assert!(
            fetch_by_slugs_or_empty(&FailingSource, &[String::from("home")])
                .await
                .is_empty()
        );
    }
}
