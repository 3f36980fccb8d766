use anyhow::{Context, Result};
use serde::Deserialize;
use std::io::Read;
use std::path::Path;

use crate::editor::{EditorFields, SnippetDefaults};
use crate::scoring::AnalysisInput;

/// An editor form dump: raw fields plus optional snippet defaults.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EditorDocument {
    pub fields: EditorFields,
    #[serde(default)]
    pub snippet: Option<SnippetDefaults>,
}

/// What the CLI accepts as input.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum Document {
    /// Has a `fields:` key.
    Editor(EditorDocument),
    /// A flat analysis input (`title`, `description`, `keyphrase`, ...).
    Input(AnalysisInput),
}

impl Document {
    pub fn to_input(&self) -> AnalysisInput {
        match self {
            Document::Editor(doc) => doc.fields.to_input(),
            Document::Input(input) => input.clone(),
        }
    }

    pub fn editor(&self) -> Option<&EditorDocument> {
        match self {
            Document::Editor(doc) => Some(doc),
            Document::Input(_) => None,
        }
    }
}

/// Parse a document. JSON when `json` is set, YAML otherwise.
pub fn parse_document(text: &str, json: bool) -> Result<Document> {
    if json {
        serde_json::from_str(text).context("Failed to parse JSON document")
    } else {
        serde_saphyr::from_str(text).context("Failed to parse YAML document")
    }
}

/// Read a document from a file, or from stdin when `path` is `-`.
///
/// Files ending in `.json` are parsed as JSON, everything else as YAML.
/// Stdin is sniffed: input starting with `{` is treated as JSON.
pub fn load_document(path: &Path) -> Result<Document> {
    if path.as_os_str() == "-" {
        let mut text = String::new();
        std::io::stdin()
            .read_to_string(&mut text)
            .context("Failed to read document from stdin")?;
        let json = text.trim_start().starts_with('{');
        log::debug!("Read {} bytes from stdin", text.len());
        return parse_document(&text, json);
    }

    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read document at {}", path.display()))?;
    let json = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
    log::debug!("Read {} bytes from {}", text.len(), path.display());

    parse_document(&text, json).with_context(|| format!("Invalid document {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_parse_flat_yaml_input() {
        let yaml = r#"
title: "Best Pizza in Town"
keyphrase: pizza
content: "<p>pizza</p>"
"#;
        let doc = parse_document(yaml, false).unwrap();
        assert!(doc.editor().is_none());
        let input = doc.to_input();
        assert_eq!(input.title, "Best Pizza in Town");
        assert_eq!(input.content, "<p>pizza</p>");
    }

    #[test]
    fn test_parse_editor_yaml_document() {
        let yaml = r#"
fields:
  entry_title: "Entry"
  seo_title: "Override"
  content_fields:
    - "<p>a</p>"
    - "<p>b</p>"
snippet:
  title: "Default"
  url: "https://example.com/REPLACE"
"#;
        let doc = parse_document(yaml, false).unwrap();
        let editor = doc.editor().unwrap();
        assert_eq!(editor.snippet.as_ref().unwrap().url, "https://example.com/REPLACE");
        let input = doc.to_input();
        assert_eq!(input.title, "Override");
        assert_eq!(input.content, " <p>a</p> <p>b</p>");
    }

    #[test]
    fn test_parse_json_input() {
        let doc = parse_document(r#"{"title": "T", "keywords": "a, b"}"#, true).unwrap();
        let input = doc.to_input();
        assert_eq!(input.title, "T");
        assert_eq!(input.keywords.as_deref(), Some("a, b"));
    }

    #[test]
    fn test_load_document_by_extension() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("page.json");
        std::fs::write(&path, r#"{"fields": {"entry_title": "From JSON"}}"#).unwrap();
        let doc = load_document(&path).unwrap();
        assert_eq!(doc.to_input().title, "From JSON");
    }

    #[test]
    fn test_load_document_missing_file() {
        let dir = TempDir::new().unwrap();
        let err = load_document(&dir.path().join("missing.yaml")).unwrap_err();
        assert!(err.to_string().contains("Failed to read document"));
    }
}
