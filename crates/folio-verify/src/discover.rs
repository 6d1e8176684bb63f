//! Route discovery in the build output.

use std::path::{Path, PathBuf};

use ignore::WalkBuilder;

use crate::error::VerifyError;

const PAGE_FILE: &str = "index.html";

/// Every `index.html` under `dir`, sorted.
///
/// Walks everything, hidden directories included; `.gitignore` rules do not
/// apply to build output.
///
/// # Errors
/// Returns `VerifyError::Walk` if a directory cannot be read.
pub fn list_dist_html_files(dir: &Path) -> Result<Vec<PathBuf>, VerifyError> {
    let mut builder = WalkBuilder::new(dir);
    builder.standard_filters(false);
    builder.hidden(false);

    let mut files = Vec::new();
    for entry in builder.build() {
        let entry = entry?;
        let is_file = entry.file_type().is_some_and(|ft| ft.is_file());
        if is_file && entry.file_name() == PAGE_FILE {
            files.push(entry.into_path());
        }
    }
    files.sort();
    Ok(files)
}

/// Route a page file is served at: its directory relative to `dist`, `/` for the root.
#[must_use]
pub fn extract_route_from_path(dist: &Path, file: &Path) -> String {
    let dir = file.parent().unwrap_or(file);
    let relative = dir.strip_prefix(dist).unwrap_or(dir);
    let segments: Vec<String> = relative
        .components()
        .filter_map(|c| match c {
            std::path::Component::Normal(part) => Some(part.to_string_lossy().into_owned()),
            _ => None,
        })
        .collect();

    if segments.is_empty() {
        String::from("/")
    } else {
        format!("/{}", segments.join("/"))
    }
}

/// Page file a route is expected at.
#[must_use]
pub fn page_file_for_route(dist: &Path, route: &str) -> PathBuf {
    let trimmed = route.trim_matches('/');
    if trimmed.is_empty() {
        dist.join(PAGE_FILE)
    } else {
        trimmed
            .split('/')
            .filter(|segment| !segment.is_empty())
            .fold(dist.to_path_buf(), |path, segment| path.join(segment))
            .join(PAGE_FILE)
    }
}
