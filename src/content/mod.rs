pub mod links;
pub mod text;

pub use links::{classify, count_links, extract_links, resolve_url, Link, LinkCounts, LinkKind};
pub use text::{count_occurrences, remove_comments, strip_html, word_count};

/// Body content reduced to what the text checks need.
///
/// Built once per analysis so the HTML is only stripped a single time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlainContent {
    pub text: String,
    pub word_count: usize,
}

impl PlainContent {
    pub fn from_html(html: &str) -> Self {
        let text = strip_html(html);
        let word_count = word_count(&text);
        Self { text, word_count }
    }
}
