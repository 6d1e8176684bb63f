//! SEO metadata extraction from built HTML pages.
//!
//! Walks the tree-sitter HTML tree and picks out:
//! - `<title>` text (whitespace collapsed)
//! - `<meta name="description">`
//! - every `<link rel="canonical">` (counted; the first `href` is kept)
//! - `og:*` and `twitter:*` meta tags, by `property` or `name`
//! - `<meta name="robots">` containing `noindex`
//!
//! Single-valued fields keep their first occurrence.

use ast_grep_core::Node;
use ast_grep_language::{LanguageExt, SupportLang};
use folio_core::PageMetaSnapshot;

/// An HTML attribute: `(lowercased_name, optional_value)`.
type HtmlAttr = (String, Option<String>);

/// Parse an HTML document into a [`PageMetaSnapshot`].
#[must_use]
pub fn parse_meta(html: &str) -> PageMetaSnapshot {
    let root = SupportLang::Html.ast_grep(html);
    let mut snapshot = PageMetaSnapshot::default();
    collect_meta(&root.root(), &mut snapshot);
    snapshot
}

fn collect_meta<D: ast_grep_core::Doc>(node: &Node<D>, snapshot: &mut PageMetaSnapshot) {
    if node.kind().as_ref() == "element" {
        if let Some((tag_name, attrs)) = extract_tag_info(node) {
            match tag_name.as_str() {
                "title" if snapshot.title.is_none() => {
                    snapshot.title = Some(element_text(node));
                }
                "meta" => apply_meta(&attrs, snapshot),
                "link" => apply_link(&attrs, snapshot),
                _ => {}
            }
        }
    }

    let children: Vec<_> = node.children().collect();
    for child in &children {
        collect_meta(child, snapshot);
    }
}

fn apply_meta(attrs: &[HtmlAttr], snapshot: &mut PageMetaSnapshot) {
    let key = attr_value(attrs, "property")
        .or_else(|| attr_value(attrs, "name"))
        .map(|k| k.trim().to_ascii_lowercase());
    let Some(key) = key else {
        return;
    };
    let content = attr_value(attrs, "content").unwrap_or_default();

    let slot = match key.as_str() {
        "description" => &mut snapshot.description,
        "og:title" => &mut snapshot.og_title,
        "og:description" => &mut snapshot.og_description,
        "og:url" => &mut snapshot.og_url,
        "og:image" => &mut snapshot.og_image,
        "twitter:title" => &mut snapshot.twitter_title,
        "twitter:description" => &mut snapshot.twitter_description,
        "robots" => {
            if content.to_ascii_lowercase().contains("noindex") {
                snapshot.robots_noindex = true;
            }
            return;
        }
        _ => return,
    };
    if slot.is_none() {
        *slot = Some(content.trim().to_string());
    }
}

fn apply_link(attrs: &[HtmlAttr], snapshot: &mut PageMetaSnapshot) {
    let is_canonical = attr_value(attrs, "rel").is_some_and(|rel| {
        rel.split_whitespace()
            .any(|token| token.eq_ignore_ascii_case("canonical"))
    });
    if !is_canonical {
        return;
    }
    snapshot.canon_count += 1;
    if snapshot.canonical.is_none() {
        snapshot.canonical = Some(attr_value(attrs, "href").unwrap_or_default().trim().to_string());
    }
}

// ── Helper functions ───────────────────────────────────────────────

/// Extract tag name and attributes from an element's `start_tag`.
fn extract_tag_info<D: ast_grep_core::Doc>(node: &Node<D>) -> Option<(String, Vec<HtmlAttr>)> {
    node.children().find_map(|child| {
        let kind = child.kind();
        // Void elements like <meta> and <link> may also be written self-closing.
        if kind.as_ref() != "start_tag" && kind.as_ref() != "self_closing_tag" {
            return None;
        }
        let tag_name = child
            .children()
            .find(|c| c.kind().as_ref() == "tag_name")?
            .text()
            .to_ascii_lowercase();
        Some((tag_name, extract_attrs_from_tag(&child)))
    })
}

/// Extract all attributes from a tag node. Names are lowercased, values entity-decoded.
fn extract_attrs_from_tag<D: ast_grep_core::Doc>(tag_node: &Node<D>) -> Vec<HtmlAttr> {
    tag_node
        .children()
        .filter(|c| c.kind().as_ref() == "attribute")
        .filter_map(|attr| {
            let name = attr
                .children()
                .find(|c| c.kind().as_ref() == "attribute_name")?
                .text()
                .to_ascii_lowercase();
            let value = attr.children().find_map(|c| match c.kind().as_ref() {
                "attribute_value" => Some(decode_entities(&c.text())),
                "quoted_attribute_value" => Some(
                    c.children()
                        .find(|v| v.kind().as_ref() == "attribute_value")
                        .map(|v| decode_entities(&v.text()))
                        .unwrap_or_default(),
                ),
                _ => None,
            });
            Some((name, value))
        })
        .collect()
}

fn attr_value(attrs: &[HtmlAttr], name: &str) -> Option<String> {
    attrs
        .iter()
        .find(|(n, _)| n == name)
        .map(|(_, v)| v.clone().unwrap_or_default())
}

/// Text content of an element, excluding its tags, with whitespace collapsed.
fn element_text<D: ast_grep_core::Doc>(node: &Node<D>) -> String {
    let tag_len = |kind: &str| {
        node.children()
            .find(|c| c.kind().as_ref() == kind)
            .map_or(0, |tag| tag.text().len())
    };
    let full = node.text();
    let inner = full
        .get(tag_len("start_tag")..full.len().saturating_sub(tag_len("end_tag")))
        .unwrap_or_default();
    decode_entities(inner)
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Decode the character references that show up in generated head tags.
fn decode_entities(raw: &str) -> String {
    if !raw.contains('&') {
        return raw.to_string();
    }

    let mut out = String::with_capacity(raw.len());
    let mut rest = raw;
    while let Some(amp) = rest.find('&') {
        out.push_str(&rest[..amp]);
        let tail = &rest[amp..];
        let decoded = tail
            .find(';')
            .filter(|end| *end <= 10)
            .and_then(|end| decode_reference(&tail[1..end]).map(|c| (c, end)));
        match decoded {
            Some((ch, end)) => {
                out.push(ch);
                rest = &tail[end + 1..];
            }
            None => {
                out.push('&');
                rest = &tail[1..];
            }
        }
    }
    out.push_str(rest);
    out
}

fn decode_reference(name: &str) -> Option<char> {
    match name {
        "amp" => Some('&'),
        "lt" => Some('<'),
        "gt" => Some('>'),
        "quot" => Some('"'),
        "apos" => Some('\''),
        "nbsp" => Some('\u{a0}'),
        "mdash" => Some('\u{2014}'),
        "ndash" => Some('\u{2013}'),
        _ => {
            let code = name.strip_prefix('#')?;
            let value = match code.strip_prefix(['x', 'X']) {
                Some(hex) => u32::from_str_radix(hex, 16).ok()?,
                None => code.parse::<u32>().ok()?,
            };
            char::from_u32(value)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn full_head_is_extracted() {
        let snapshot = parse_meta(include_str!("../tests/fixtures/project_page.html"));
        assert_eq!(snapshot.title.as_deref(), Some("HerbaLink | Case Study"));
        assert_eq!(
            snapshot.description.as_deref(),
            Some("Connecting herbalists & patients through a telehealth marketplace.")
        );
        assert_eq!(
            snapshot.canonical.as_deref(),
            Some("https://example.com/project/herbalink")
        );
        assert_eq!(snapshot.canon_count, 1);
        assert_eq!(snapshot.og_title.as_deref(), Some("HerbaLink | Case Study"));
        assert_eq!(
            snapshot.og_image.as_deref(),
            Some("https://example.com/og/herbalink.png")
        );
        assert_eq!(
            snapshot.twitter_description.as_deref(),
            Some("Telehealth marketplace case study.")
        );
        assert!(!snapshot.robots_noindex);
    }

    #[test]
    fn canonical_tags_are_counted() {
        let html = r#"<!doctype html><html><head>
            <link rel="canonical" href="https://example.com/a">
            <link rel="canonical" href="https://example.com/b" />
            <link rel="stylesheet" href="/main.css">
        </head><body></body></html>"#;

        let snapshot = parse_meta(html);
        assert_eq!(snapshot.canon_count, 2);
        assert_eq!(snapshot.canonical.as_deref(), Some("https://example.com/a"));
    }

    #[test]
    fn robots_noindex_is_case_insensitive() {
        let html = r#"<html><head><meta name="robots" content="NoIndex, follow"></head></html>"#;
        assert!(parse_meta(html).robots_noindex);

        let html = r#"<html><head><meta name="robots" content="index, follow"></head></html>"#;
        assert!(!parse_meta(html).robots_noindex);
    }

    #[test]
    fn og_tags_by_name_and_uppercase_tags() {
        let html = r#"<HTML><HEAD>
            <META NAME="og:title" CONTENT="By name">
            <meta property='og:url' content='https://example.com/'>
        </HEAD></HTML>"#;

        let snapshot = parse_meta(html);
        assert_eq!(snapshot.og_title.as_deref(), Some("By name"));
        assert_eq!(snapshot.og_url.as_deref(), Some("https://example.com/"));
    }

    #[test]
    fn first_occurrence_wins() {
        let html = r#"<html><head>
            <title>First</title>
            <meta name="description" content="one">
            <meta name="description" content="two">
        </head><body><svg><title>Icon</title></svg></body></html>"#;

        let snapshot = parse_meta(html);
        assert_eq!(snapshot.title.as_deref(), Some("First"));
        assert_eq!(snapshot.description.as_deref(), Some("one"));
    }

    #[test]
    fn empty_document_yields_empty_snapshot() {
        assert_eq!(parse_meta(""), PageMetaSnapshot::default());
    }

    #[test]
    fn entities_are_decoded() {
        assert_eq!(decode_entities("A &amp; B &#8212; C&#x27;s"), "A & B \u{2014} C's");
        assert_eq!(decode_entities("AT&T"), "AT&T");
        assert_eq!(decode_entities("&unknown;"), "&unknown;");
    }
}
