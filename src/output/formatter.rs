use owo_colors::OwoColorize;
use serde::Serialize;
use std::io::IsTerminal;
use terminal_size::{terminal_size, Width};

use crate::editor::{KeyphraseUsage, SnippetPreview};
use crate::scoring::{AnalysisResult, CheckKey, CheckSpec, FeedbackKind, Grade, Status};

const BAR_WIDTH: usize = 30;

/// Everything the CLI reports about one analysis.
#[derive(Debug, Serialize)]
pub struct Report<'a> {
    #[serde(flatten)]
    pub result: &'a AnalysisResult,
    pub grade: Grade,
    pub keyphrase_usage: KeyphraseUsage,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub snippet: Option<&'a SnippetPreview>,
}

impl<'a> Report<'a> {
    pub fn new(result: &'a AnalysisResult, snippet: Option<&'a SnippetPreview>) -> Self {
        Self {
            result,
            grade: Grade::from_score(result.score),
            keyphrase_usage: KeyphraseUsage::from_result(result),
            snippet,
        }
    }
}

/// Check if stdout is a TTY (for auto-detecting color support)
pub fn should_use_colors() -> bool {
    std::io::stdout().is_terminal()
}

/// Get terminal width, defaulting to None for pipes (unlimited)
fn get_terminal_width() -> Option<usize> {
    terminal_size().map(|(Width(w), _)| w as usize)
}

/// Width of the score bar: fixed for pipes, shrunk for narrow terminals.
fn bar_width() -> usize {
    match get_terminal_width() {
        Some(width) if width < BAR_WIDTH + 20 => width.saturating_sub(20).max(10),
        _ => BAR_WIDTH,
    }
}

/// Render a filled/empty bar proportional to `score`.
pub fn format_score_bar(score: u8, width: usize) -> String {
    let filled = (usize::from(score.min(100)) * width + 50) / 100;
    format!("[{}{}]", "█".repeat(filled), "░".repeat(width - filled))
}

fn status_symbol(status: Status) -> &'static str {
    match status {
        Status::Good => "✓",
        Status::Warning => "⚠",
        Status::Bad => "✗",
        Status::Neutral => "·",
    }
}

fn paint_status(text: &str, status: Status, use_colors: bool) -> String {
    if !use_colors {
        return text.to_string();
    }
    match status {
        Status::Good => text.green().to_string(),
        Status::Warning => text.yellow().to_string(),
        Status::Bad => text.red().to_string(),
        Status::Neutral => text.dimmed().to_string(),
    }
}

fn paint_grade(text: &str, grade: Grade, use_colors: bool) -> String {
    let status = match grade {
        Grade::Excellent => Status::Good,
        Grade::Good | Grade::Fair => Status::Warning,
        Grade::Poor => Status::Bad,
    };
    paint_status(text, status, use_colors)
}

/// Score header: "SEO Score  87/100  [████░░]" plus the grade's status line.
pub fn format_score_header(score: u8, use_colors: bool) -> String {
    let grade = Grade::from_score(score);
    let score_text = format!("{}/100", score);
    let bar = format_score_bar(score, bar_width());
    let verdict = format!("{} {}", grade.symbol(), grade.status_line());

    if use_colors {
        format!(
            "{}  {}  {}\n{}",
            "SEO Score".bold(),
            paint_grade(&score_text, grade, true).bold(),
            paint_grade(&bar, grade, true),
            paint_grade(&verdict, grade, true)
        )
    } else {
        format!("SEO Score  {}  {}\n{}", score_text, bar, verdict)
    }
}

/// "Used in: ✓ Title ✗ Description ⚠ URL ✓ Content"
///
/// A missing slug match only warns, mirroring the check's own severity.
pub fn format_keyphrase_usage(usage: &KeyphraseUsage, use_colors: bool) -> String {
    let badge = |found: bool, label: &str, miss: Status| {
        let status = if found { Status::Good } else { miss };
        paint_status(
            &format!("{} {}", status_symbol(status), label),
            status,
            use_colors,
        )
    };

    format!(
        "Used in: {} {} {} {}",
        badge(usage.in_title, "Title", Status::Bad),
        badge(usage.in_description, "Description", Status::Bad),
        badge(usage.in_url, "URL", Status::Warning),
        badge(usage.in_content, "Content", Status::Bad),
    )
}

/// Inline badges for a text field: its length plus whether the keyphrase is in it.
/// The keyphrase badge is left out while no keyphrase is set.
pub fn format_field_badges(
    result: &AnalysisResult,
    length_key: CheckKey,
    keyphrase_key: CheckKey,
    use_colors: bool,
) -> String {
    let mut badges = Vec::new();

    if let Some(length) = result.checks.get(length_key) {
        badges.push(paint_status(
            &format!("{} chars", length.value),
            length.status,
            use_colors,
        ));
    }

    if let Some(keyphrase) = result.checks.get(keyphrase_key) {
        if keyphrase.value.is_truthy() {
            badges.push(paint_status("✓ Keyphrase", Status::Good, use_colors));
        } else if keyphrase.status != Status::Neutral {
            badges.push(paint_status("✗ Keyphrase", Status::Bad, use_colors));
        }
    }

    badges.join("  ")
}

/// One line per check: symbol, display name, message.
pub fn format_checks(result: &AnalysisResult, use_colors: bool) -> String {
    let name_width = result
        .checks
        .iter()
        .map(|(key, _)| crate::scoring::spec_for(key).display_name.len())
        .max()
        .unwrap_or(0);

    result
        .checks
        .iter()
        .map(|(key, check)| {
            let name = crate::scoring::spec_for(key).display_name;
            let line = format!(
                "  {} {:<width$}  {}",
                status_symbol(check.status),
                name,
                check.message,
                width = name_width
            );
            paint_status(&line, check.status, use_colors)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Feedback list, bad entries first as delivered by the engine.
pub fn format_feedback(result: &AnalysisResult, use_colors: bool) -> String {
    if result.feedback.is_empty() {
        return "Nothing to improve.".to_string();
    }

    result
        .feedback
        .iter()
        .map(|entry| {
            let status = match entry.kind {
                FeedbackKind::Bad => Status::Bad,
                FeedbackKind::Warning => Status::Warning,
            };
            let line = format!(
                "  {} {}: {}",
                status_symbol(status),
                entry.check,
                entry.message
            );
            paint_status(&line, status, use_colors)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Search-result style preview: title, URL, description.
pub fn format_snippet(preview: &SnippetPreview, use_colors: bool) -> String {
    if use_colors {
        format!(
            "  {}\n  {}\n  {}",
            preview.title.blue().bold(),
            preview.url.green(),
            preview.description
        )
    } else {
        format!(
            "  {}\n  {}\n  {}",
            preview.title, preview.url, preview.description
        )
    }
}

fn section(title: &str, use_colors: bool) -> String {
    if use_colors {
        title.bold().underline().to_string()
    } else {
        title.to_string()
    }
}

/// Full human-readable report.
pub fn format_report(report: &Report, use_colors: bool) -> String {
    let result = report.result;
    let mut parts = vec![format_score_header(result.score, use_colors)];

    if let Some(preview) = report.snippet {
        parts.push(format!(
            "{}\n{}",
            section("Snippet preview", use_colors),
            format_snippet(preview, use_colors)
        ));
    }

    parts.push(format!(
        "{}\n  Title:       {}\n  Description: {}\n  {}",
        section("Fields", use_colors),
        format_field_badges(
            result,
            CheckKey::TitleLength,
            CheckKey::KeyphraseInTitle,
            use_colors
        ),
        format_field_badges(
            result,
            CheckKey::DescriptionLength,
            CheckKey::KeyphraseInDescription,
            use_colors
        ),
        format_keyphrase_usage(&report.keyphrase_usage, use_colors)
    ));

    parts.push(format!(
        "{}\n{}",
        section("Checks", use_colors),
        format_checks(result, use_colors)
    ));

    parts.push(format!(
        "{}\n{}",
        section("Feedback", use_colors),
        format_feedback(result, use_colors)
    ));

    parts.join("\n\n")
}

/// Pretty JSON for `--json` and `--output`.
pub fn format_json(report: &Report) -> anyhow::Result<String> {
    Ok(serde_json::to_string_pretty(report)?)
}

/// Table of check specs: weight, name, key, and whether it runs.
pub fn format_checks_table<'a>(
    specs: impl IntoIterator<Item = &'a CheckSpec>,
    keywords_enabled: bool,
    use_colors: bool,
) -> String {
    specs
        .into_iter()
        .map(|spec| {
            let active = spec.is_active(keywords_enabled);
            let state = if active { "active" } else { "inactive" };
            let line = format!(
                "{:>3}  {:<26} {:<24} {}",
                spec.weight,
                spec.display_name,
                spec.key.as_str(),
                state
            );
            if use_colors && !active {
                line.dimmed().to_string()
            } else {
                line
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::{analyze, AnalysisInput, CHECK_SPECS};

    fn sample_result() -> AnalysisResult {
        analyze(
            &AnalysisInput {
                title: "Best Pizza in Town".to_string(),
                description: String::new(),
                keyphrase: "pizza".to_string(),
                slug: "best-pizza".to_string(),
                content: "<p>pizza dough</p>".to_string(),
                keywords: None,
            },
            false,
        )
    }

    #[test]
    fn test_score_bar_bounds() {
        assert_eq!(format_score_bar(0, 10), "[░░░░░░░░░░]");
        assert_eq!(format_score_bar(100, 10), "[██████████]");
        assert_eq!(format_score_bar(50, 10), "[█████░░░░░]");
    }

    #[test]
    fn test_score_header_plain() {
        let header = format_score_header(85, false);
        assert!(header.starts_with("SEO Score  85/100"));
        assert!(header.contains("✓ Excellent SEO optimization!"));
    }

    #[test]
    fn test_keyphrase_usage_plain() {
        let usage = KeyphraseUsage {
            in_title: true,
            in_description: false,
            in_url: false,
            in_content: true,
        };
        assert_eq!(
            format_keyphrase_usage(&usage, false),
            "Used in: ✓ Title ✗ Description ⚠ URL ✓ Content"
        );
    }

    #[test]
    fn test_field_badges() {
        let result = sample_result();
        assert_eq!(
            format_field_badges(&result, CheckKey::TitleLength, CheckKey::KeyphraseInTitle, false),
            "18 chars  ✓ Keyphrase"
        );
        assert_eq!(
            format_field_badges(
                &result,
                CheckKey::DescriptionLength,
                CheckKey::KeyphraseInDescription,
                false
            ),
            "0 chars  ✗ Keyphrase"
        );
    }

    #[test]
    fn test_field_badges_hide_keyphrase_when_unset() {
        let result = analyze(&AnalysisInput::default(), false);
        assert_eq!(
            format_field_badges(&result, CheckKey::TitleLength, CheckKey::KeyphraseInTitle, false),
            "0 chars"
        );
    }

    #[test]
    fn test_feedback_lists_bad_first() {
        let text = format_feedback(&sample_result(), false);
        let first_warning = text.find('⚠').unwrap();
        let last_bad = text.rfind('✗').unwrap();
        assert!(last_bad < first_warning);
        assert!(text.contains("Meta Description Length: No meta description set."));
    }

    #[test]
    fn test_feedback_empty() {
        let result = AnalysisResult {
            score: 100,
            checks: Default::default(),
            feedback: vec![],
        };
        assert_eq!(format_feedback(&result, false), "Nothing to improve.");
    }

    #[test]
    fn test_report_sections() {
        let result = sample_result();
        let preview = SnippetPreview {
            title: "Best Pizza in Town".to_string(),
            url: "https://example.com/best-pizza".to_string(),
            description: "Default".to_string(),
        };
        let report = Report::new(&result, Some(&preview));
        let text = format_report(&report, false);
        for heading in ["Snippet preview", "Fields", "Checks", "Feedback"] {
            assert!(text.contains(heading), "missing {}", heading);
        }
        assert!(text.contains("https://example.com/best-pizza"));
        assert!(text.contains("Keyphrase in Title"));
    }

    #[test]
    fn test_json_report_flattens_result() {
        let result = sample_result();
        let report = Report::new(&result, None);
        let json: serde_json::Value = serde_json::from_str(&format_json(&report).unwrap()).unwrap();
        assert_eq!(json["score"], result.score);
        assert!(json["checks"]["titleLength"].is_object());
        assert_eq!(json["keyphrase_usage"]["in_title"], true);
        assert!(json.get("snippet").is_none());
        assert!(json["grade"].is_string());
    }

    #[test]
    fn test_checks_table_marks_inactive() {
        let table = format_checks_table(CHECK_SPECS.iter(), false, false);
        let keywords_line = table.lines().find(|l| l.contains("keywords")).unwrap();
        assert!(keywords_line.ends_with("inactive"));
        assert_eq!(table.lines().count(), CHECK_SPECS.len());

        let table = format_checks_table(CHECK_SPECS.iter(), true, false);
        assert!(!table.contains("inactive"));
    }
}
