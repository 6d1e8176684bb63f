//! # folio-parser
//!
//! Readers for the two inputs the SEO pipeline does not fetch over the network:
//!
//! - **Content catalogs** ([`catalog`]): the blog post and case-study lists the
//!   site is built from, stored as JSON or TOML data files.
//! - **Built HTML** ([`meta`]): pages under `dist/`, parsed with ast-grep's
//!   tree-sitter HTML grammar into a [`folio_core::PageMetaSnapshot`].

pub mod catalog;
pub mod error;
pub mod meta;

pub use catalog::{
    CatalogFormat, extract_blog_data, extract_case_study_data, load_blog_posts,
    load_case_studies,
};
pub use error::ParserError;
pub use meta::parse_meta;
