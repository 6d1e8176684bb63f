//! Supabase REST configuration for the `seo_meta` table.

use serde::{Deserialize, Serialize};

fn default_table() -> String {
    String::from("seo_meta")
}

const fn default_timeout_secs() -> u64 {
    10
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SupabaseConfig {
    /// Project URL, e.g. `https://abcd.supabase.co`.
    #[serde(default)]
    pub endpoint: String,

    /// Anonymous (publishable) API key.
    #[serde(default)]
    pub api_key: String,

    /// Table holding per-page SEO rows.
    #[serde(default = "default_table")]
    pub table: String,

    /// Request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for SupabaseConfig {
    fn default() -> Self {
        Self {
            endpoint: String::new(),
            api_key: String::new(),
            table: default_table(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl SupabaseConfig {
    /// Check if the endpoint and key are both set.
    pub fn is_configured(&self) -> bool {
        !self.endpoint.is_empty() && !self.api_key.is_empty()
    }

    /// PostgREST URL of the configured table, without query string.
    pub fn table_url(&self) -> String {
        format!(
            "{}/rest/v1/{}",
            self.endpoint.trim_end_matches('/'),
            self.table
        )
    }
}
