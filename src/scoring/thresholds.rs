use serde::{Deserialize, Serialize};

/// Threshold configuration for the checks.
///
/// Every section is optional in YAML; missing sections keep their defaults.
///
/// Example YAML:
/// ```yaml
/// thresholds:
///   title: { min: 30, max: 60, optimal: 50 }
///   keyphrase_density: { min: 0.5, max: 2.5 }
///   content_length: { min: 300, optimal: 800 }
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields, default)]
pub struct Thresholds {
    pub title: LengthThresholds,
    pub description: LengthThresholds,
    pub keywords: KeywordThresholds,
    pub keyphrase_density: DensityThresholds,
    pub content_length: ContentThresholds,
    pub external_links: ExternalLinkThresholds,
    pub internal_links: InternalLinkThresholds,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            title: LengthThresholds {
                min: 30,
                max: 60,
                optimal: 50,
            },
            description: LengthThresholds {
                min: 120,
                max: 160,
                optimal: 140,
            },
            keywords: KeywordThresholds::default(),
            keyphrase_density: DensityThresholds::default(),
            content_length: ContentThresholds::default(),
            external_links: ExternalLinkThresholds::default(),
            internal_links: InternalLinkThresholds::default(),
        }
    }
}

/// Character-count window for a text field (title, description).
#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct LengthThresholds {
    pub min: usize,
    pub max: usize,
    pub optimal: usize,
}

/// Keyword count thresholds. Counts in `optimal..=max` score best.
#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq)]
#[serde(deny_unknown_fields, default)]
pub struct KeywordThresholds {
    pub min: usize,
    pub optimal: usize,
    pub max: usize,
}

impl Default for KeywordThresholds {
    fn default() -> Self {
        Self {
            min: 3,
            optimal: 7,
            max: 15,
        }
    }
}

/// Keyphrase density window, in percent of total words.
#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields, default)]
pub struct DensityThresholds {
    pub min: f64,
    pub max: f64,
}

impl Default for DensityThresholds {
    fn default() -> Self {
        Self { min: 0.5, max: 2.5 }
    }
}

/// Word count thresholds for body content.
#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq)]
#[serde(deny_unknown_fields, default)]
pub struct ContentThresholds {
    pub min: usize,
    pub optimal: usize,
}

impl Default for ContentThresholds {
    fn default() -> Self {
        Self {
            min: 300,
            optimal: 800,
        }
    }
}

/// Above `max_good` external links the score drops slightly.
#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq)]
#[serde(deny_unknown_fields, default)]
pub struct ExternalLinkThresholds {
    pub max_good: usize,
}

impl Default for ExternalLinkThresholds {
    fn default() -> Self {
        Self { max_good: 3 }
    }
}

#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq)]
#[serde(deny_unknown_fields, default)]
pub struct InternalLinkThresholds {
    pub min: usize,
}

impl Default for InternalLinkThresholds {
    fn default() -> Self {
        Self { min: 2 }
    }
}
