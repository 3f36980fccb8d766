use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};
use url::Url;

use super::checks::{active_specs, spec_for, CheckKey, CheckResult, CheckSpec, Status};
use super::rules;
use super::thresholds::Thresholds;
use crate::content::{count_links, PlainContent};

/// Page the content is assumed to live on when no page URL is configured.
pub const DEFAULT_PAGE_URL: &str = "http://localhost/";

/// Editorial field values the engine scores.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct AnalysisInput {
    pub title: String,
    pub description: String,
    pub keyphrase: String,
    pub slug: String,
    /// Raw HTML from the rich-text editor.
    pub content: String,
    /// Comma-separated keyword list.
    pub keywords: Option<String>,
}

/// Check results in evaluation order, serialized as a map keyed by check.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Checks(Vec<(CheckKey, CheckResult)>);

impl Checks {
    pub fn get(&self, key: CheckKey) -> Option<&CheckResult> {
        self.0.iter().find(|(k, _)| *k == key).map(|(_, r)| r)
    }

    pub fn contains(&self, key: CheckKey) -> bool {
        self.get(key).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = (CheckKey, &CheckResult)> {
        self.0.iter().map(|(k, r)| (*k, r))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    fn push(&mut self, key: CheckKey, result: CheckResult) {
        self.0.push((key, result));
    }
}

impl Serialize for Checks {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (key, result) in &self.0 {
            map.serialize_entry(key, result)?;
        }
        map.end()
    }
}

/// Severity of a feedback entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FeedbackKind {
    Bad,
    Warning,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Feedback {
    #[serde(rename = "type")]
    pub kind: FeedbackKind,
    /// Display name of the check.
    pub check: String,
    pub message: String,
}

/// Output of one analysis.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisResult {
    /// Weighted score, 0..=100.
    pub score: u8,
    pub checks: Checks,
    /// Bad entries first, then warnings, each in check order.
    pub feedback: Vec<Feedback>,
}

/// The scoring engine.
///
/// Holds only configuration; [`Analyzer::analyze`] is a pure function of its
/// input, so one analyzer can be shared freely between callers.
#[derive(Debug, Clone)]
pub struct Analyzer {
    keywords_enabled: bool,
    page_url: Url,
    thresholds: Thresholds,
}

impl Analyzer {
    pub fn new(keywords_enabled: bool) -> Self {
        Self {
            keywords_enabled,
            page_url: default_page_url(),
            thresholds: Thresholds::default(),
        }
    }

    /// Page used to resolve relative links and tell internal from external.
    pub fn with_page_url(mut self, page_url: Url) -> Self {
        self.page_url = page_url;
        self
    }

    pub fn with_thresholds(mut self, thresholds: Thresholds) -> Self {
        self.thresholds = thresholds;
        self
    }

    pub fn keywords_enabled(&self) -> bool {
        self.keywords_enabled
    }

    pub fn page_url(&self) -> &Url {
        &self.page_url
    }

    pub fn thresholds(&self) -> &Thresholds {
        &self.thresholds
    }

    /// Specs that take part in this analyzer's analyses.
    pub fn active_specs(&self) -> impl Iterator<Item = &'static CheckSpec> {
        active_specs(self.keywords_enabled)
    }

    pub fn analyze(&self, input: &AnalysisInput) -> AnalysisResult {
        let content = PlainContent::from_html(&input.content);
        let links = count_links(&input.content, &self.page_url);
        let t = &self.thresholds;

        let mut checks = Checks::default();
        for spec in self.active_specs() {
            let result = match spec.key {
                CheckKey::TitleLength => rules::check_title_length(&input.title, &t.title),
                CheckKey::DescriptionLength => {
                    rules::check_description_length(&input.description, &t.description)
                }
                CheckKey::KeyphraseInTitle => {
                    rules::check_keyphrase_in_title(&input.title, &input.keyphrase)
                }
                CheckKey::KeyphraseInDescription => {
                    rules::check_keyphrase_in_description(&input.description, &input.keyphrase)
                }
                CheckKey::KeyphraseInSlug => {
                    rules::check_keyphrase_in_slug(&input.slug, &input.keyphrase)
                }
                CheckKey::Keywords => rules::check_keywords(input.keywords.as_deref(), &t.keywords),
                CheckKey::KeyphraseInContent => {
                    rules::check_keyphrase_in_content(&content, &input.keyphrase)
                }
                CheckKey::KeyphraseDensity => {
                    rules::check_keyphrase_density(&content, &input.keyphrase, &t.keyphrase_density)
                }
                CheckKey::ContentLength => rules::check_content_length(&content, &t.content_length),
                CheckKey::ExternalLinks => {
                    rules::check_external_links(links.external, &t.external_links)
                }
                CheckKey::InternalLinks => {
                    rules::check_internal_links(links.internal, &t.internal_links)
                }
            };
            log::trace!(
                "{}: {} ({}) {}",
                spec.key,
                result.score,
                result.status.as_str(),
                result.message
            );
            checks.push(spec.key, result);
        }

        let score = weighted_score(&checks);
        let feedback = collect_feedback(&checks);
        log::debug!(
            "analysis scored {} across {} checks, {} feedback entries",
            score,
            checks.len(),
            feedback.len()
        );

        AnalysisResult {
            score,
            checks,
            feedback,
        }
    }
}

impl Default for Analyzer {
    fn default() -> Self {
        Self::new(false)
    }
}

/// Analyze `input` with default thresholds against [`DEFAULT_PAGE_URL`].
pub fn analyze(input: &AnalysisInput, keywords_enabled: bool) -> AnalysisResult {
    Analyzer::new(keywords_enabled).analyze(input)
}

pub fn default_page_url() -> Url {
    Url::parse(DEFAULT_PAGE_URL).unwrap_or_else(|_| unreachable!("constant URL parses"))
}

/// Weighted average of the present checks, normalized by their own weights.
///
/// Only checks that actually ran contribute to numerator and denominator, so
/// a disabled check never caps the reachable maximum below 100.
pub fn weighted_score(checks: &Checks) -> u8 {
    let (earned, total) = checks.iter().fold((0.0_f64, 0_u32), |(earned, total), (key, result)| {
        let weight = spec_for(key).weight;
        (
            earned + f64::from(result.score) / 100.0 * f64::from(weight),
            total + weight,
        )
    });

    if total == 0 {
        return 0;
    }
    (earned / f64::from(total) * 100.0).round().clamp(0.0, 100.0) as u8
}

/// Feedback for every bad or warning check, bad entries first.
pub fn collect_feedback(checks: &Checks) -> Vec<Feedback> {
    let (bad, warnings): (Vec<Feedback>, Vec<Feedback>) = checks
        .iter()
        .filter_map(|(key, result)| {
            let kind = match result.status {
                Status::Bad => FeedbackKind::Bad,
                Status::Warning => FeedbackKind::Warning,
                Status::Good | Status::Neutral => return None,
            };
            Some(Feedback {
                kind,
                check: spec_for(key).display_name.to_string(),
                message: result.message.clone(),
            })
        })
        .partition(|f| f.kind == FeedbackKind::Bad);

    bad.into_iter().chain(warnings).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::checks::CheckValue;
    use pretty_assertions::assert_eq;

    fn words(n: usize) -> String {
        vec!["lorem"; n].join(" ")
    }

    /// Input that satisfies every check at the default thresholds.
    fn perfect_input() -> AnalysisInput {
        let keyphrase = "pizza";
        let title = format!("{} {}", keyphrase, "x".repeat(44)); // 50 chars
        let description = format!("{} {}", keyphrase, "y".repeat(134)); // 140 chars
        // 10 occurrences in 1000 words = 1%
        let body: Vec<String> = (0..10)
            .map(|_| format!("{} {}", keyphrase, words(99)))
            .collect();
        let content = format!(
            "<p>{}</p><p><a href=\"https://rust-lang.org\">ext</a> <a href=\"/menu\">menu</a> <a href=\"/about\">about</a></p>",
            body.join(" ")
        );
        AnalysisInput {
            title,
            description,
            keyphrase: keyphrase.to_string(),
            slug: "pizza-guide".to_string(),
            content,
            keywords: Some("a, b, c, d, e, f, g".to_string()),
        }
    }

    fn result_with(statuses: &[(CheckKey, Status)]) -> Checks {
        let mut checks = Checks::default();
        for (key, status) in statuses {
            checks.push(
                *key,
                CheckResult::new(0, *status, format!("{} msg", key), CheckValue::Count(0)),
            );
        }
        checks
    }

    #[test]
    fn test_perfect_input_scores_hundred() {
        let input = perfect_input();
        let with_keywords = analyze(&input, true);
        let without_keywords = analyze(&input, false);
        assert_eq!(with_keywords.score, 100);
        assert_eq!(without_keywords.score, 100);
        assert!(with_keywords.feedback.is_empty());
    }

    #[test]
    fn test_keywords_check_only_when_enabled() {
        let input = perfect_input();
        assert!(analyze(&input, true).checks.contains(CheckKey::Keywords));
        assert!(!analyze(&input, false).checks.contains(CheckKey::Keywords));
        assert_eq!(analyze(&input, true).checks.len(), 11);
        assert_eq!(analyze(&input, false).checks.len(), 10);
    }

    #[test]
    fn test_empty_input_scores_low_without_failing() {
        let result = analyze(&AnalysisInput::default(), false);
        // External links (60% of 5) and internal links (40% of 4) are all that score.
        assert_eq!(result.score, 5);
        assert_eq!(
            result.checks.get(CheckKey::TitleLength).map(|r| r.status),
            Some(Status::Bad)
        );
        assert_eq!(
            result.checks.get(CheckKey::KeyphraseInTitle).map(|r| r.status),
            Some(Status::Neutral)
        );
    }

    #[test]
    fn test_disabled_keywords_do_not_shrink_denominator() {
        let mut checks = Checks::default();
        checks.push(
            CheckKey::TitleLength,
            CheckResult::new(100, Status::Good, "ok", CheckValue::Count(50)),
        );
        assert_eq!(weighted_score(&checks), 100);
    }

    #[test]
    fn test_weighted_score_normalizes() {
        let mut checks = Checks::default();
        checks.push(
            CheckKey::TitleLength, // weight 15
            CheckResult::new(100, Status::Good, "ok", CheckValue::Count(50)),
        );
        checks.push(
            CheckKey::InternalLinks, // weight 4
            CheckResult::new(0, Status::Warning, "none", CheckValue::Count(0)),
        );
        // 15 / 19 = 78.9%
        assert_eq!(weighted_score(&checks), 79);
        assert_eq!(weighted_score(&Checks::default()), 0);
    }

    #[test]
    fn test_feedback_bad_before_warning_stable() {
        let checks = result_with(&[
            (CheckKey::TitleLength, Status::Warning),
            (CheckKey::DescriptionLength, Status::Bad),
            (CheckKey::KeyphraseInSlug, Status::Warning),
            (CheckKey::KeyphraseInContent, Status::Bad),
            (CheckKey::ContentLength, Status::Good),
            (CheckKey::KeyphraseDensity, Status::Neutral),
        ]);
        let feedback = collect_feedback(&checks);
        let summary: Vec<_> = feedback
            .iter()
            .map(|f| (f.kind, f.check.as_str()))
            .collect();
        assert_eq!(
            summary,
            vec![
                (FeedbackKind::Bad, "Meta Description Length"),
                (FeedbackKind::Bad, "Keyphrase in Content"),
                (FeedbackKind::Warning, "SEO Title Length"),
                (FeedbackKind::Warning, "Keyphrase in URL"),
            ]
        );
        assert_eq!(feedback[0].message, "descriptionLength msg");
    }

    #[test]
    fn test_analyze_is_idempotent() {
        let input = AnalysisInput {
            title: "Best Pizza in Town".to_string(),
            description: "Short".to_string(),
            keyphrase: "pizza".to_string(),
            slug: "best-pizza".to_string(),
            content: "<p>pizza <a href=\"#x\">x</a></p>".to_string(),
            keywords: None,
        };
        let analyzer = Analyzer::new(true);
        assert_eq!(analyzer.analyze(&input), analyzer.analyze(&input));
    }

    #[test]
    fn test_page_url_drives_link_classification() {
        let input = AnalysisInput {
            content: r##"<a href="https://example.com/x">x</a><a href="#top">top</a>"##.to_string(),
            ..Default::default()
        };
        let page = Url::parse("https://www.example.com/post").unwrap();
        let result = Analyzer::new(false).with_page_url(page).analyze(&input);
        assert_eq!(
            result.checks.get(CheckKey::InternalLinks).map(|r| r.value),
            Some(CheckValue::Count(1))
        );
        assert_eq!(
            result.checks.get(CheckKey::ExternalLinks).map(|r| r.value),
            Some(CheckValue::Count(0))
        );

        // Against the default page the same link is external.
        let result = analyze(&input, false);
        assert_eq!(
            result.checks.get(CheckKey::ExternalLinks).map(|r| r.value),
            Some(CheckValue::Count(1))
        );
    }

    #[test]
    fn test_custom_thresholds_apply() {
        let mut thresholds = Thresholds::default();
        thresholds.content_length.min = 1;
        thresholds.content_length.optimal = 2;
        let input = AnalysisInput {
            content: "<p>two words</p>".to_string(),
            ..Default::default()
        };
        let result = Analyzer::new(false)
            .with_thresholds(thresholds)
            .analyze(&input);
        assert_eq!(
            result.checks.get(CheckKey::ContentLength).map(|r| r.score),
            Some(100)
        );
    }

    #[test]
    fn test_result_serializes_checks_as_ordered_map() {
        let result = analyze(&AnalysisInput::default(), false);
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["checks"]["titleLength"]["status"], "bad");
        assert_eq!(json["checks"]["titleLength"]["value"], 0);
        assert_eq!(json["feedback"][0]["type"], "bad");
        assert_eq!(json["feedback"][0]["check"], "SEO Title Length");
        assert!(json["checks"].get("keywords").is_none());

        let text = serde_json::to_string(&result.checks).unwrap();
        let title_at = text.find("titleLength").unwrap();
        let links_at = text.find("internalLinks").unwrap();
        assert!(title_at < links_at);
    }

    #[test]
    fn test_input_deserializes_with_missing_fields() {
        let input: AnalysisInput = serde_json::from_str(r#"{"title": "Hello"}"#).unwrap();
        assert_eq!(input.title, "Hello");
        assert!(input.keywords.is_none());
        assert!(input.content.is_empty());
    }
}
