//! # folio-config
//!
//! Layered configuration loading for Folio using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. `SITE_URL` (the variable the site build already exports)
//! 2. Environment variables (`FOLIO_*` prefix, `__` as separator)
//! 3. Project-level `folio.toml` (or the file passed with `--config`)
//! 4. User-level `~/.config/folio/config.toml`
//! 5. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `FOLIO_SUPABASE__API_KEY` -> `supabase.api_key`,
//! `FOLIO_PATHS__DIST` -> `paths.dist`, etc.
//!
//! # Usage
//!
//! ```no_run
//! use folio_config::FolioConfig;
//!
//! let config = FolioConfig::load_with_dotenv(None).expect("config");
//! let site = config.site.site_url().expect("valid site url");
//! println!("sitemaps for {site} go to {}", config.paths.dist.display());
//! ```

mod error;
mod paths;
mod site;
mod supabase;
mod verify;

pub use error::ConfigError;
pub use paths::PathsConfig;
pub use site::{DEFAULT_SITE_URL, SiteConfig};
pub use supabase::SupabaseConfig;
pub use verify::{SlugCheck, VerifyConfig};

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Project-local config file name.
pub const LOCAL_CONFIG_FILE: &str = "folio.toml";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct FolioConfig {
    #[serde(default)]
    pub site: SiteConfig,
    #[serde(default)]
    pub supabase: SupabaseConfig,
    #[serde(default)]
    pub paths: PathsConfig,
    #[serde(default)]
    pub verify: VerifyConfig,
}

impl FolioConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// `local` replaces the project-level `folio.toml` when given; it must exist.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if extraction fails, the explicit config file is
    /// missing, or `site.url` is not a valid absolute URL.
    pub fn load(local: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = local {
            if !path.is_file() {
                return Err(ConfigError::FileNotFound(path.to_path_buf()));
            }
        }
        let config: Self = Self::figment(local).extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration with `.env` file support.
    ///
    /// Calls `dotenvy` on the current directory's `.env` before building the figment.
    ///
    /// # Errors
    ///
    /// See [`FolioConfig::load`].
    pub fn load_with_dotenv(local: Option<&Path>) -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::load(local)
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can inspect the figment directly or add providers on top.
    pub fn figment(local: Option<&Path>) -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Layer 1: User-global config
        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        // Layer 2: Project-local config
        let local_path = local.map_or_else(|| PathBuf::from(LOCAL_CONFIG_FILE), Path::to_path_buf);
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        // Layer 3: Environment variables
        figment = figment.merge(Env::prefixed("FOLIO_").split("__"));

        // Layer 4: SITE_URL, shared with the site build
        figment.merge(Env::raw().only(&["SITE_URL"]).map(|_| "site.url".into()))
    }

    /// Check cross-field constraints that serde cannot express.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] for an unusable `site.url` or an empty table name.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.site.site_url()?;
        if self.supabase.table.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: String::from("supabase.table"),
                reason: String::from("must not be empty"),
            });
        }
        Ok(())
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("folio").join("config.toml"))
    }
}
