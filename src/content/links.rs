use once_cell::sync::Lazy;
use regex::Regex;
use url::Url;

use super::text::remove_comments;

// Quoted attribute values may contain `>`.
static ANCHOR_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"(?i)<a((?:\s(?:[^>"']|"[^"]*"|'[^']*')*)?)>"#).unwrap());

// One attribute: name, then an optional double-quoted, single-quoted or bare value.
static ATTR_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"([^\s"'>/=]+)(?:\s*=\s*(?:"([^"]*)"|'([^']*)'|([^\s"'>]+)))?"#).unwrap()
});

/// Prefixes of links that point nowhere worth counting.
const IGNORED_PREFIXES: [&str; 5] = ["#", "javascript:", "mailto:", "tel:", "sms:"];

/// A hyperlink found in content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link {
    /// Attribute value as written (entities decoded).
    pub href: String,
    /// Absolute form of `href`, or `href` itself when it cannot be resolved.
    pub resolved_url: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkKind {
    External,
    Internal,
    /// Anchors and pseudo-protocol links, counted in neither bucket.
    Ignored,
}

/// Link totals for one piece of content.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LinkCounts {
    pub external: usize,
    pub internal: usize,
    pub ignored: usize,
}

/// Extract every `<a>` carrying an `href` attribute, resolved against `page`.
///
/// Links inside HTML comments are not part of the document and are skipped.
pub fn extract_links(html: &str, page: &Url) -> Vec<Link> {
    let html = remove_comments(html);
    ANCHOR_RE
        .captures_iter(&html)
        .filter_map(|tag| {
            let raw = href_attribute(tag.get(1).map_or("", |m| m.as_str()))?;
            let href = html_escape::decode_html_entities(raw).into_owned();
            let resolved_url = resolve_url(&href, page);
            Some(Link { href, resolved_url })
        })
        .collect()
}

/// Value of the first attribute named exactly `href`. A bare `href` reads as empty.
fn href_attribute(attributes: &str) -> Option<&str> {
    ATTR_RE.captures_iter(attributes).find_map(|attr| {
        let name = attr.get(1)?.as_str();
        if !name.eq_ignore_ascii_case("href") {
            return None;
        }
        let value = attr
            .get(2)
            .or_else(|| attr.get(3))
            .or_else(|| attr.get(4))
            .map_or("", |m| m.as_str());
        Some(value)
    })
}

/// Resolve `href` against the origin of `page`, falling back to the raw string.
pub fn resolve_url(href: &str, page: &Url) -> String {
    let origin = page.join("/").unwrap_or_else(|_| page.clone());
    match origin.join(href) {
        Ok(url) => url.to_string(),
        Err(_) => href.to_string(),
    }
}

/// Decide whether a link leaves the site hosting `page`.
///
/// Hostnames are compared with any leading `www.` removed. A resolved URL
/// that still does not parse is assumed to be a relative, internal link.
pub fn classify(link: &Link, page: &Url) -> LinkKind {
    let href = link.href.as_str();
    if href.is_empty() || IGNORED_PREFIXES.iter().any(|p| href.starts_with(p)) {
        return LinkKind::Ignored;
    }

    let Ok(url) = Url::parse(&link.resolved_url) else {
        return LinkKind::Internal;
    };

    let link_host = strip_www(url.host_str().unwrap_or(""));
    let page_host = strip_www(page.host_str().unwrap_or(""));

    if link_host == page_host {
        LinkKind::Internal
    } else {
        LinkKind::External
    }
}

/// Extract and classify all links in one pass.
pub fn count_links(html: &str, page: &Url) -> LinkCounts {
    let mut counts = LinkCounts::default();
    for link in extract_links(html, page) {
        match classify(&link, page) {
            LinkKind::External => counts.external += 1,
            LinkKind::Internal => counts.internal += 1,
            LinkKind::Ignored => counts.ignored += 1,
        }
    }
    counts
}

fn strip_www(host: &str) -> &str {
    host.strip_prefix("www.").unwrap_or(host)
}
