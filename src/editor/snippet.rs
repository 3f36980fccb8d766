use serde::{Deserialize, Serialize};

use super::fields::EditorFields;

/// Placeholder in the URL template that the slug replaces.
pub const SLUG_PLACEHOLDER: &str = "REPLACE";

/// Values the preview falls back to when the form leaves a field empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct SnippetDefaults {
    pub title: String,
    /// e.g. `https://example.com/blog/REPLACE`
    pub url: String,
    pub description: String,
    pub slug: String,
}

/// What a search result for this page would show.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SnippetPreview {
    pub title: String,
    pub url: String,
    pub description: String,
}

impl SnippetPreview {
    pub fn resolve(defaults: &SnippetDefaults, fields: &EditorFields) -> Self {
        let slug = if fields.slug.is_empty() {
            &defaults.slug
        } else {
            &fields.slug
        };

        Self {
            title: preview_text(&fields.entry_title, &fields.seo_title, &defaults.title),
            url: defaults.url.replace(SLUG_PLACEHOLDER, slug),
            description: preview_text(
                &fields.entry_description,
                &fields.seo_description,
                &defaults.description,
            ),
        }
    }
}

/// The entry value shows while no SEO override is typed, then the override,
/// then the default.
fn preview_text(entry: &str, seo_override: &str, default: &str) -> String {
    if !entry.is_empty() && seo_override.is_empty() {
        entry.to_string()
    } else if !seo_override.is_empty() {
        seo_override.to_string()
    } else {
        default.to_string()
    }
}
