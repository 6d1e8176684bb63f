//! # folio-verify
//!
//! Post-build audit of the static site output.
//!
//! Scans every `index.html` under the build directory, validates its SEO
//! head tags, checks `robots.txt` and `sitemap.xml` against the pages that
//! actually exist, and diffs a configured set of pages against their
//! `seo_meta` rows. Results are aggregated into a [`VerifyReport`]; only a
//! missing build directory or an unreadable tree stops the run early.

mod consistency;
mod discover;
mod error;
mod report;
mod run;
mod sitemap_check;
mod validate;

pub use consistency::verify_db_html_consistency;
pub use discover::{extract_route_from_path, list_dist_html_files, page_file_for_route};
pub use error::VerifyError;
pub use report::{ErrorReport, ReportBuilder, VerifyReport};
pub use run::{VerifyOptions, run_verification};
pub use sitemap_check::{RobotsCheck, check_robots, read_sitemap_urls, sitemap_urls_missing_in_dist};
pub use validate::{expected_canonical, validate};
