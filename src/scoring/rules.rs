use super::checks::{CheckResult, CheckValue, Status};
use super::thresholds::{
    ContentThresholds, DensityThresholds, ExternalLinkThresholds, InternalLinkThresholds,
    KeywordThresholds, LengthThresholds,
};
use crate::content::{count_occurrences, PlainContent};

const NO_KEYPHRASE: &str = "Set a focus keyphrase";

/// Share of the score a too-short field can earn at most.
const SHORT_FIELD_CEILING: f64 = 60.0;

/// Share of the score too-short content can earn at most.
const SHORT_CONTENT_CEILING: f64 = 50.0;

/// Parameters of a bounded character-length check.
///
/// Title and description only differ in these values, so both go through
/// [`check_bounded_length`].
#[derive(Debug, Clone, Copy)]
pub struct LengthRule {
    /// Capitalized field label used in messages ("Title", "Description").
    pub label: &'static str,
    pub missing_message: &'static str,
    pub thresholds: LengthThresholds,
    /// Flat score for anything longer than `thresholds.max`.
    pub overlong_score: u8,
    /// Points lost per character away from `thresholds.optimal`.
    pub penalty_per_char: usize,
}

impl LengthRule {
    pub fn title(thresholds: LengthThresholds) -> Self {
        Self {
            label: "Title",
            missing_message: "No SEO title set.",
            thresholds,
            overlong_score: 70,
            penalty_per_char: 2,
        }
    }

    pub fn description(thresholds: LengthThresholds) -> Self {
        Self {
            label: "Description",
            missing_message: "No meta description set.",
            thresholds,
            overlong_score: 60,
            penalty_per_char: 1,
        }
    }
}

pub fn check_bounded_length(text: &str, rule: &LengthRule) -> CheckResult {
    let length = text.trim().chars().count();
    let LengthThresholds { min, max, optimal } = rule.thresholds;
    let value = CheckValue::Count(length);

    if length == 0 {
        CheckResult::new(0, Status::Bad, rule.missing_message, value)
    } else if length < min {
        CheckResult::new(
            ratio_score(length, min, SHORT_FIELD_CEILING),
            Status::Warning,
            format!("{} too short ({}/{}-{} chars)", rule.label, length, min, max),
            value,
        )
    } else if length > max {
        CheckResult::new(
            rule.overlong_score,
            Status::Warning,
            format!("{} too long ({}/{} chars max)", rule.label, length, max),
            value,
        )
    } else {
        let penalty = length.abs_diff(optimal).saturating_mul(rule.penalty_per_char);
        CheckResult::new(
            100usize.saturating_sub(penalty) as u8,
            Status::Good,
            format!("{} length perfect ({} chars)", rule.label, length),
            value,
        )
    }
}

pub fn check_title_length(title: &str, thresholds: &LengthThresholds) -> CheckResult {
    check_bounded_length(title, &LengthRule::title(*thresholds))
}

pub fn check_description_length(description: &str, thresholds: &LengthThresholds) -> CheckResult {
    check_bounded_length(description, &LengthRule::description(*thresholds))
}

pub fn check_keyphrase_in_title(title: &str, keyphrase: &str) -> CheckResult {
    if is_blank(keyphrase) {
        return neutral_flag();
    }

    let title_lower = title.to_lowercase();
    let keyphrase_lower = keyphrase.to_lowercase();

    match title_lower.find(&keyphrase_lower) {
        Some(byte_index) => {
            let position = title_lower[..byte_index].chars().count();
            let (score, message) = match position {
                0 => (100, "Keyphrase at start of title!"),
                p if p < 10 => (90, "Keyphrase in title"),
                _ => (75, "Keyphrase in title"),
            };
            CheckResult::new(score, Status::Good, message, CheckValue::Found(true))
        }
        None => CheckResult::new(
            0,
            Status::Bad,
            "Keyphrase not in title",
            CheckValue::Found(false),
        ),
    }
}

pub fn check_keyphrase_in_description(description: &str, keyphrase: &str) -> CheckResult {
    if is_blank(keyphrase) {
        return neutral_flag();
    }

    if description
        .to_lowercase()
        .contains(&keyphrase.to_lowercase())
    {
        CheckResult::new(
            100,
            Status::Good,
            "Keyphrase in description",
            CheckValue::Found(true),
        )
    } else {
        CheckResult::new(
            0,
            Status::Bad,
            "Keyphrase not in description",
            CheckValue::Found(false),
        )
    }
}

/// Compares against the hyphenated keyphrase. A miss only warns.
pub fn check_keyphrase_in_slug(slug: &str, keyphrase: &str) -> CheckResult {
    if is_blank(keyphrase) {
        return neutral_flag();
    }

    if slug.to_lowercase().contains(&slugify(keyphrase)) {
        CheckResult::new(100, Status::Good, "Keyphrase in URL", CheckValue::Found(true))
    } else {
        CheckResult::new(
            0,
            Status::Warning,
            "Keyphrase not in URL",
            CheckValue::Found(false),
        )
    }
}

pub fn check_keyphrase_in_content(content: &PlainContent, keyphrase: &str) -> CheckResult {
    if is_blank(keyphrase) {
        return neutral_count();
    }

    let count = count_occurrences(&content.text, keyphrase);
    let value = CheckValue::Count(count);

    match count {
        0 => CheckResult::new(0, Status::Bad, "Keyphrase not in content", value),
        1 | 2 => CheckResult::new(
            60,
            Status::Warning,
            format!("Keyphrase appears {} time(s)", count),
            value,
        ),
        _ => CheckResult::new(
            100,
            Status::Good,
            format!("Keyphrase appears {} times", count),
            value,
        ),
    }
}

pub fn check_keyphrase_density(
    content: &PlainContent,
    keyphrase: &str,
    thresholds: &DensityThresholds,
) -> CheckResult {
    if is_blank(keyphrase) {
        return neutral_count();
    }

    if content.word_count == 0 {
        return CheckResult::new(0, Status::Neutral, "No content yet", CheckValue::Count(0));
    }

    let count = count_occurrences(&content.text, keyphrase);
    if count == 0 {
        return CheckResult::new(
            0,
            Status::Bad,
            "No keyphrase in content",
            CheckValue::Percent(0.0),
        );
    }

    let density = count as f64 / content.word_count as f64 * 100.0;
    let value = CheckValue::Percent(density);

    if density < thresholds.min {
        CheckResult::new(
            50,
            Status::Warning,
            format!("Density low ({:.1}%)", density),
            value,
        )
    } else if density > thresholds.max {
        CheckResult::new(
            40,
            Status::Warning,
            format!("Density high ({:.1}%)", density),
            value,
        )
    } else {
        CheckResult::new(
            100,
            Status::Good,
            format!("Density good ({:.1}%)", density),
            value,
        )
    }
}

pub fn check_content_length(content: &PlainContent, thresholds: &ContentThresholds) -> CheckResult {
    let words = content.word_count;
    let ContentThresholds { min, optimal } = *thresholds;
    let value = CheckValue::Count(words);

    if words == 0 {
        CheckResult::new(0, Status::Bad, "No content", value)
    } else if words < min {
        CheckResult::new(
            ratio_score(words, min, SHORT_CONTENT_CEILING),
            Status::Warning,
            format!("{}/{} words minimum", words, min),
            value,
        )
    } else if words >= optimal {
        CheckResult::new(
            100,
            Status::Good,
            format!("{} words (excellent!)", words),
            value,
        )
    } else {
        let progress = ratio_score(words - min, optimal - min, 50.0);
        CheckResult::new(
            50 + progress,
            Status::Good,
            format!("{} words", words),
            value,
        )
    }
}

/// Score the comma-separated keyword list. Only run when the keywords field is enabled.
pub fn check_keywords(keywords: Option<&str>, thresholds: &KeywordThresholds) -> CheckResult {
    let Some(raw) = keywords.filter(|k| !is_blank(k)) else {
        return CheckResult::new(
            40,
            Status::Warning,
            "No keywords specified",
            CheckValue::Count(0),
        );
    };

    let count = raw.split(',').map(str::trim).filter(|k| !k.is_empty()).count();
    let value = CheckValue::Count(count);

    if count == 0 {
        CheckResult::new(40, Status::Warning, "No keywords added", value)
    } else if count < thresholds.min {
        CheckResult::new(
            60,
            Status::Warning,
            format!("Only {} keyword(s) - add more", count),
            value,
        )
    } else if count >= thresholds.optimal && count <= thresholds.max {
        CheckResult::new(
            100,
            Status::Good,
            format!("{} keyword(s) (optimal)", count),
            value,
        )
    } else if count > thresholds.max {
        CheckResult::new(
            70,
            Status::Warning,
            format!("{} keywords - may be too many", count),
            value,
        )
    } else {
        CheckResult::new(85, Status::Good, format!("{} keyword(s)", count), value)
    }
}

pub fn check_external_links(count: usize, thresholds: &ExternalLinkThresholds) -> CheckResult {
    let value = CheckValue::Count(count);
    if count == 0 {
        CheckResult::new(60, Status::Warning, "No external links", value)
    } else if count <= thresholds.max_good {
        CheckResult::new(
            100,
            Status::Good,
            format!("{} external link(s)", count),
            value,
        )
    } else {
        CheckResult::new(80, Status::Good, format!("{} external links", count), value)
    }
}

pub fn check_internal_links(count: usize, thresholds: &InternalLinkThresholds) -> CheckResult {
    let value = CheckValue::Count(count);
    if count == 0 {
        CheckResult::new(40, Status::Warning, "No internal links", value)
    } else if count >= thresholds.min {
        CheckResult::new(
            100,
            Status::Good,
            format!("{} internal link(s)", count),
            value,
        )
    } else {
        CheckResult::new(
            70,
            Status::Warning,
            format!("Only {} internal link", count),
            value,
        )
    }
}

/// Lowercase and hyphenate a phrase the way slugs are written.
pub fn slugify(phrase: &str) -> String {
    let lower = phrase.to_lowercase();
    let mut slug = String::with_capacity(lower.len());
    let mut in_space = false;
    for c in lower.chars() {
        if c.is_whitespace() {
            if !in_space {
                slug.push('-');
            }
            in_space = true;
        } else {
            slug.push(c);
            in_space = false;
        }
    }
    slug
}

fn is_blank(s: &str) -> bool {
    s.trim().is_empty()
}

fn neutral_flag() -> CheckResult {
    CheckResult::new(0, Status::Neutral, NO_KEYPHRASE, CheckValue::Found(false))
}

fn neutral_count() -> CheckResult {
    CheckResult::new(0, Status::Neutral, NO_KEYPHRASE, CheckValue::Count(0))
}

/// `round(part / whole * ceiling)`, with an empty `whole` scoring zero.
fn ratio_score(part: usize, whole: usize, ceiling: f64) -> u8 {
    if whole == 0 {
        return 0;
    }
    (part as f64 / whole as f64 * ceiling).round().clamp(0.0, 100.0) as u8
}
