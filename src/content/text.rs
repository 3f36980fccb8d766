use once_cell::sync::Lazy;
use regex::{Regex, RegexBuilder};
use std::borrow::Cow;

static COMMENT_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?s)<!--.*?-->").unwrap());

// Only `<` followed by a tag name, `/`, `!` or `?` opens markup; a bare `<` is text.
static TAG_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"</?[A-Za-z][^>]*>|<![^>]*>|<\?[^>]*>").unwrap());

/// Reduce an HTML fragment to its text content.
///
/// Mirrors what a browser reports as `textContent`: comments and tags are
/// dropped without inserting whitespace and character entities are decoded.
/// Malformed markup never fails, it just leaves more text behind.
pub fn strip_html(html: &str) -> String {
    let without_comments = remove_comments(html);
    let without_tags = TAG_RE.replace_all(&without_comments, "");
    html_escape::decode_html_entities(&without_tags).into_owned()
}

/// Drop `<!-- ... -->` comments, leaving the rest of the markup untouched.
pub fn remove_comments(html: &str) -> Cow<'_, str> {
    COMMENT_RE.replace_all(html, "")
}

/// Number of whitespace-separated tokens.
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Count case-insensitive, non-overlapping occurrences of a literal phrase.
pub fn count_occurrences(text: &str, phrase: &str) -> usize {
    if phrase.is_empty() {
        return 0;
    }

    match RegexBuilder::new(&regex::escape(phrase))
        .case_insensitive(true)
        .build()
    {
        Ok(re) => re.find_iter(text).count(),
        // Only reachable for phrases that blow the regex size limit.
        Err(_) => text.to_lowercase().matches(&phrase.to_lowercase()).count(),
    }
}
