//! # folio-core
//!
//! Core types and error types shared by the Folio SEO toolkit.
//!
//! This crate provides the foundational types used across all Folio crates:
//! - Remote `seo_meta` rows and the content catalog summaries
//! - Sitemap entries with their `changefreq` / `priority` hints
//! - Page metadata snapshots, validation results, and DB/HTML mismatches
//! - Route mapping per `path_type` and site URL helpers
//! - Cross-cutting error types

pub mod entities;
pub mod enums;
pub mod errors;
pub mod routes;
pub mod urls;

pub use entities::{
    BlogPostSummary, CaseStudySummary, Mismatch, PageMetaSnapshot, SeoMetaRecord, SitemapEntry,
    ValidationResult,
};
pub use enums::{ChangeFreq, PathType};
pub use errors::CoreError;
pub use urls::SiteUrl;
