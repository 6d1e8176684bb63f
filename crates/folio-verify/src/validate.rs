//! Per-route metadata rules.

use folio_core::urls::{is_absolute_http, normalize_url};
use folio_core::{PageMetaSnapshot, SiteUrl, ValidationResult};

/// Canonical URL a route should declare, in normalized form.
#[must_use]
pub fn expected_canonical(site: &SiteUrl, route: &str) -> String {
    let joined = site.join(route);
    normalize_url(&joined).unwrap_or(joined)
}

fn present(value: Option<&String>) -> Option<&str> {
    value.map(|v| v.trim()).filter(|v| !v.is_empty())
}

/// Check a page's metadata against the fixed rule set.
///
/// `canonical_ok` only reflects the canonical rules; `seo_tags_verified`
/// requires an empty issue list, so recommended Twitter tags affect it too.
#[must_use]
pub fn validate(route: &str, snapshot: &PageMetaSnapshot, site: &SiteUrl) -> ValidationResult {
    let mut issues = Vec::new();
    let mut canonical_ok = true;

    if snapshot.canon_count != 1 {
        issues.push(format!(
            "canonical count != 1 (found {})",
            snapshot.canon_count
        ));
        canonical_ok = false;
    }

    match present(snapshot.canonical.as_ref()) {
        None => {
            if snapshot.canon_count > 0 {
                issues.push(String::from("canonical href is empty"));
            }
            canonical_ok = false;
        }
        Some(canonical) if !is_absolute_http(canonical) => {
            issues.push(format!("canonical is not an absolute URL: {canonical}"));
            canonical_ok = false;
        }
        Some(canonical) if !site.is_same_origin(canonical) => {
            issues.push(format!(
                "canonical origin differs from {}: {canonical}",
                site.origin()
            ));
            canonical_ok = false;
        }
        Some(canonical) => {
            let expected = expected_canonical(site, route);
            if normalize_url(canonical).as_deref() != Some(expected.as_str()) {
                issues.push(format!(
                    "canonical mismatch: expected {expected}, found {canonical}"
                ));
                canonical_ok = false;
            }
        }
    }

    let required = [
        ("<title>", &snapshot.title),
        ("meta description", &snapshot.description),
        ("og:title", &snapshot.og_title),
        ("og:description", &snapshot.og_description),
        ("og:url", &snapshot.og_url),
    ];
    for (label, value) in required {
        if present(value.as_ref()).is_none() {
            issues.push(format!("missing {label}"));
        }
    }

    match present(snapshot.og_image.as_ref()) {
        None => issues.push(String::from("missing og:image")),
        Some(image) if !is_absolute_http(image) => {
            issues.push(format!("og:image is not an absolute http(s) URL: {image}"));
        }
        Some(_) => {}
    }

    let recommended = [
        ("twitter:title", &snapshot.twitter_title),
        ("twitter:description", &snapshot.twitter_description),
    ];
    for (label, value) in recommended {
        if present(value.as_ref()).is_none() {
            issues.push(format!("missing {label} (recommended)"));
        }
    }

    if snapshot.robots_noindex {
        issues.push(String::from("robots meta contains noindex"));
    }

    ValidationResult {
        route: route.to_string(),
        seo_tags_verified: issues.is_empty(),
        canonical_ok,
        issues,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn site() -> SiteUrl {
        SiteUrl::parse("https://example.com").unwrap()
    }

    fn complete(canonical: &str) -> PageMetaSnapshot {
        PageMetaSnapshot {
            title: Some("About | Portfolio".into()),
            description: Some("Designer bio.".into()),
            canonical: Some(canonical.into()),
            canon_count: 1,
            og_title: Some("About".into()),
            og_description: Some("Designer bio.".into()),
            og_url: Some(canonical.into()),
            og_image: Some("https://example.com/og/about.png".into()),
            twitter_title: Some("About".into()),
            twitter_description: Some("Designer bio.".into()),
            robots_noindex: false,
        }
    }

    #[test]
    fn complete_page_verifies() {
        let result = validate("/about", &complete("https://example.com/about"), &site());
        assert_eq!(result.issues, Vec::<String>::new());
        assert!(result.seo_tags_verified);
        assert!(result.canonical_ok);
    }

    #[rstest]
    #[case("/about", "https://example.com/about/")]
    #[case("/", "https://example.com/")]
    #[case("/", "https://example.com")]
    #[case("/about", "https://example.com:443/about")]
    #[case("/about", "https://EXAMPLE.com/about")]
    fn equivalent_canonical_is_accepted(#[case] route: &str, #[case] canonical: &str) {
        let result = validate(route, &complete(canonical), &site());
        assert!(result.canonical_ok, "issues: {:?}", result.issues);
    }

    #[test]
    fn two_canonicals_fail() {
        let mut snapshot = complete("https://example.com/about");
        snapshot.canon_count = 2;

        let result = validate("/about", &snapshot, &site());
        assert!(!result.canonical_ok);
        assert!(!result.seo_tags_verified);
        assert!(
            result
                .issues
                .iter()
                .any(|i| i.starts_with("canonical count != 1")),
            "issues: {:?}",
            result.issues
        );
    }

    #[rstest]
    #[case("/about", "canonical is not an absolute URL")]
    #[case("https://staging.example.com/about", "canonical origin differs")]
    #[case("https://example.com/contact", "canonical mismatch")]
    #[case("https://example.com:8443/about", "canonical origin differs")]
    #[case("https://exa mple.com/about", "canonical is not an absolute URL")]
    fn wrong_canonical_is_reported(#[case] canonical: &str, #[case] expected_issue: &str) {
        let result = validate("/about", &complete(canonical), &site());
        assert!(!result.canonical_ok);
        assert!(
            result.issues.iter().any(|i| i.starts_with(expected_issue)),
            "issues: {:?}",
            result.issues
        );
    }

    #[test]
    fn missing_canonical_reports_count_only() {
        let mut snapshot = complete("https://example.com/about");
        snapshot.canonical = None;
        snapshot.canon_count = 0;

        let result = validate("/about", &snapshot, &site());
        assert_eq!(result.issues, vec!["canonical count != 1 (found 0)"]);
        assert!(!result.canonical_ok);
    }

    #[test]
    fn missing_twitter_tags_keep_canonical_ok() {
        let mut snapshot = complete("https://example.com/about");
        snapshot.twitter_title = None;
        snapshot.twitter_description = Some("   ".into());

        let result = validate("/about", &snapshot, &site());
        assert!(result.canonical_ok);
        assert!(!result.seo_tags_verified);
        assert_eq!(
            result.issues,
            vec![
                "missing twitter:title (recommended)",
                "missing twitter:description (recommended)",
            ]
        );
    }

    #[test]
    fn og_image_with_invalid_host_is_an_issue() {
        let mut snapshot = complete("https://example.com/about");
        snapshot.og_image = Some("https://exa mple.com/x.png".into());

        let result = validate("/about", &snapshot, &site());
        assert_eq!(
            result.issues,
            vec!["og:image is not an absolute http(s) URL: https://exa mple.com/x.png"]
        );
        assert!(result.canonical_ok);
    }

    #[test]
    fn relative_og_image_and_noindex_are_issues() {
        let mut snapshot = complete("https://example.com/about");
        snapshot.og_image = Some("/og/about.png".into());
        snapshot.robots_noindex = true;
        snapshot.title = Some(String::new());

        let result = validate("/about", &snapshot, &site());
        assert!(result.canonical_ok);
        assert_eq!(
            result.issues,
            vec![
                "missing <title>",
                "og:image is not an absolute http(s) URL: /og/about.png",
                "robots meta contains noindex",
            ]
        );
    }
}
