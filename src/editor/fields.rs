use serde::{Deserialize, Serialize};

use crate::scoring::AnalysisInput;

/// Raw values of the editor form an analysis is built from.
///
/// Entries carry both their own title/description and optional SEO
/// overrides; content can be spread over several rich-text fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct EditorFields {
    pub seo_title: String,
    pub entry_title: String,
    pub seo_description: String,
    pub entry_description: String,
    pub keyphrase: String,
    pub slug: String,
    pub keywords: Option<String>,
    pub content_fields: Vec<String>,
}

impl EditorFields {
    /// Build the engine input: SEO overrides win over entry values, and
    /// content fields are joined with a leading space each.
    pub fn to_input(&self) -> AnalysisInput {
        AnalysisInput {
            title: first_non_empty(&self.seo_title, &self.entry_title).to_string(),
            description: first_non_empty(&self.seo_description, &self.entry_description)
                .to_string(),
            keyphrase: self.keyphrase.clone(),
            slug: self.slug.clone(),
            content: self.joined_content(),
            keywords: self.keywords.clone(),
        }
    }

    pub fn joined_content(&self) -> String {
        self.content_fields
            .iter()
            .fold(String::new(), |mut content, field| {
                content.push(' ');
                content.push_str(field);
                content
            })
    }
}

fn first_non_empty<'a>(preferred: &'a str, fallback: &'a str) -> &'a str {
    if preferred.is_empty() {
        fallback
    } else {
        preferred
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_seo_override_wins() {
        let fields = EditorFields {
            seo_title: "SEO title".to_string(),
            entry_title: "Entry title".to_string(),
            seo_description: String::new(),
            entry_description: "Entry description".to_string(),
            ..Default::default()
        };
        let input = fields.to_input();
        assert_eq!(input.title, "SEO title");
        assert_eq!(input.description, "Entry description");
    }

    #[test]
    fn test_content_fields_joined_with_spaces() {
        let fields = EditorFields {
            content_fields: vec!["<p>one</p>".to_string(), "<p>two</p>".to_string()],
            ..Default::default()
        };
        assert_eq!(fields.joined_content(), " <p>one</p> <p>two</p>");
    }

    #[test]
    fn test_empty_fields_give_empty_input() {
        assert_eq!(EditorFields::default().to_input(), AnalysisInput::default());
    }

    #[test]
    fn test_passthrough_fields() {
        let fields = EditorFields {
            keyphrase: "pizza".to_string(),
            slug: "best-pizza".to_string(),
            keywords: Some("a, b".to_string()),
            ..Default::default()
        };
        let input = fields.to_input();
        assert_eq!(input.keyphrase, "pizza");
        assert_eq!(input.slug, "best-pizza");
        assert_eq!(input.keywords.as_deref(), Some("a, b"));
    }

    #[test]
    fn test_parse_from_yaml() {
        let yaml = r#"
entry_title: "Best Pizza in Town"
keyphrase: pizza
content_fields:
  - "<p>Intro</p>"
"#;
        let fields: EditorFields = serde_saphyr::from_str(yaml).unwrap();
        assert_eq!(fields.to_input().title, "Best Pizza in Town");
        assert_eq!(fields.content_fields.len(), 1);
    }
}
