//! Ordered, duplicate-free list of sitemap entries.

use std::collections::HashSet;

use folio_core::SitemapEntry;
use folio_core::urls::normalize_url;

/// Sitemap entries in emission order. A URL can only be added once; the first
/// source to claim it wins.
#[derive(Debug, Clone, Default)]
pub struct SitemapPlan {
    entries: Vec<SitemapEntry>,
    seen: HashSet<String>,
}

impl SitemapPlan {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `entry` unless its URL is already planned. Returns whether it was added.
    pub fn push(&mut self, entry: SitemapEntry) -> bool {
        if !self.seen.insert(dedup_key(&entry.url)) {
            tracing::debug!(url = %entry.url, "sitemap url already planned; keeping earlier entry");
            return false;
        }
        self.entries.push(entry);
        true
    }

    #[must_use]
    pub fn entries(&self) -> &[SitemapEntry] {
        &self.entries
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn dedup_key(url: &str) -> String {
    normalize_url(url).unwrap_or_else(|| url.to_string())
}
