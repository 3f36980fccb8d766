use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifies one SEO check.
///
/// Serialized in camelCase (`titleLength`, `keyphraseInSlug`, ...) so that
/// JSON output keys match what editor front ends expect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum CheckKey {
    TitleLength,
    DescriptionLength,
    KeyphraseInTitle,
    KeyphraseInDescription,
    KeyphraseInSlug,
    Keywords,
    KeyphraseInContent,
    KeyphraseDensity,
    ContentLength,
    ExternalLinks,
    InternalLinks,
}

impl CheckKey {
    /// The camelCase key used in serialized results.
    pub fn as_str(&self) -> &'static str {
        match self {
            CheckKey::TitleLength => "titleLength",
            CheckKey::DescriptionLength => "descriptionLength",
            CheckKey::KeyphraseInTitle => "keyphraseInTitle",
            CheckKey::KeyphraseInDescription => "keyphraseInDescription",
            CheckKey::KeyphraseInSlug => "keyphraseInSlug",
            CheckKey::Keywords => "keywords",
            CheckKey::KeyphraseInContent => "keyphraseInContent",
            CheckKey::KeyphraseDensity => "keyphraseDensity",
            CheckKey::ContentLength => "contentLength",
            CheckKey::ExternalLinks => "externalLinks",
            CheckKey::InternalLinks => "internalLinks",
        }
    }
}

impl fmt::Display for CheckKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Static description of a check: how much it weighs and how it is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CheckSpec {
    pub key: CheckKey,
    pub weight: u32,
    pub display_name: &'static str,
    /// Conditional checks only run when the matching editor field is enabled.
    pub conditional: bool,
}

impl CheckSpec {
    const fn new(key: CheckKey, weight: u32, display_name: &'static str) -> Self {
        Self {
            key,
            weight,
            display_name,
            conditional: false,
        }
    }

    const fn conditional(key: CheckKey, weight: u32, display_name: &'static str) -> Self {
        Self {
            key,
            weight,
            display_name,
            conditional: true,
        }
    }

    /// Whether this check takes part in an analysis.
    pub fn is_active(&self, keywords_enabled: bool) -> bool {
        !self.conditional || keywords_enabled
    }
}

/// All checks in evaluation order. Feedback keeps this order within a severity.
pub const CHECK_SPECS: [CheckSpec; 11] = [
    CheckSpec::new(CheckKey::TitleLength, 15, "SEO Title Length"),
    CheckSpec::new(CheckKey::DescriptionLength, 15, "Meta Description Length"),
    CheckSpec::new(CheckKey::KeyphraseInTitle, 15, "Keyphrase in Title"),
    CheckSpec::new(CheckKey::KeyphraseInDescription, 10, "Keyphrase in Description"),
    CheckSpec::new(CheckKey::KeyphraseInSlug, 10, "Keyphrase in URL"),
    CheckSpec::conditional(CheckKey::Keywords, 5, "Keywords"),
    CheckSpec::new(CheckKey::KeyphraseInContent, 8, "Keyphrase in Content"),
    CheckSpec::new(CheckKey::KeyphraseDensity, 8, "Keyphrase Density"),
    CheckSpec::new(CheckKey::ContentLength, 10, "Content Length"),
    CheckSpec::new(CheckKey::ExternalLinks, 5, "External Links"),
    CheckSpec::new(CheckKey::InternalLinks, 4, "Internal Links"),
];

/// Look up the spec for a key.
pub fn spec_for(key: CheckKey) -> &'static CheckSpec {
    CHECK_SPECS
        .iter()
        .find(|spec| spec.key == key)
        .unwrap_or_else(|| unreachable!("every CheckKey has a spec"))
}

/// Iterate the specs that take part in an analysis.
pub fn active_specs(keywords_enabled: bool) -> impl Iterator<Item = &'static CheckSpec> {
    CHECK_SPECS
        .iter()
        .filter(move |spec| spec.is_active(keywords_enabled))
}

/// Status attached to every check result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Good,
    Warning,
    Bad,
    /// Nothing to judge yet (e.g. no keyphrase set). Never produces feedback.
    Neutral,
}

impl Status {
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Good => "good",
            Status::Warning => "warning",
            Status::Bad => "bad",
            Status::Neutral => "neutral",
        }
    }
}

/// The raw quantity a check measured.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum CheckValue {
    Found(bool),
    Count(usize),
    Percent(f64),
}

impl CheckValue {
    /// True for a positive flag or a non-zero quantity.
    pub fn is_truthy(&self) -> bool {
        match self {
            CheckValue::Found(found) => *found,
            CheckValue::Count(n) => *n > 0,
            CheckValue::Percent(p) => *p > 0.0,
        }
    }
}

impl fmt::Display for CheckValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CheckValue::Found(found) => write!(f, "{}", found),
            CheckValue::Count(n) => write!(f, "{}", n),
            CheckValue::Percent(p) => write!(f, "{:.1}%", p),
        }
    }
}

/// Outcome of a single check, before weighting.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct CheckResult {
    /// Always within 0..=100.
    pub score: u8,
    pub status: Status,
    pub message: String,
    pub value: CheckValue,
}

impl CheckResult {
    pub fn new(score: u8, status: Status, message: impl Into<String>, value: CheckValue) -> Self {
        Self {
            score: score.min(100),
            status,
            message: message.into(),
            value,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_active_weight_totals() {
        let total: u32 = active_specs(true).map(|s| s.weight).sum();
        assert_eq!(total, 105);
        let without: u32 = active_specs(false).map(|s| s.weight).sum();
        assert_eq!(without, 100);
    }

    #[test]
    fn test_only_keywords_is_conditional() {
        let conditional: Vec<_> = CHECK_SPECS.iter().filter(|s| s.conditional).collect();
        assert_eq!(conditional.len(), 1);
        assert_eq!(conditional[0].key, CheckKey::Keywords);
    }

    #[test]
    fn test_all_weights_positive() {
        assert!(CHECK_SPECS.iter().all(|s| s.weight > 0));
    }

    #[test]
    fn test_spec_for_returns_matching_key() {
        for spec in &CHECK_SPECS {
            assert_eq!(spec_for(spec.key), spec);
        }
        assert_eq!(spec_for(CheckKey::KeyphraseInSlug).display_name, "Keyphrase in URL");
    }

    #[test]
    fn test_key_serializes_camel_case() {
        let json = serde_json::to_string(&CheckKey::KeyphraseInDescription).unwrap();
        assert_eq!(json, "\"keyphraseInDescription\"");
        for spec in &CHECK_SPECS {
            let json = serde_json::to_string(&spec.key).unwrap();
            assert_eq!(json, format!("\"{}\"", spec.key.as_str()));
        }
    }

    #[test]
    fn test_value_serializes_untagged() {
        assert_eq!(serde_json::to_string(&CheckValue::Found(true)).unwrap(), "true");
        assert_eq!(serde_json::to_string(&CheckValue::Count(3)).unwrap(), "3");
        assert_eq!(serde_json::to_string(&CheckValue::Percent(1.5)).unwrap(), "1.5");
    }

    #[test]
    fn test_check_result_clamps_score() {
        let result = CheckResult::new(250, Status::Good, "x", CheckValue::Count(1));
        assert_eq!(result.score, 100);
    }
}
