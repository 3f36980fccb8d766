use serde::Serialize;
use std::fmt;

/// Band an overall score falls into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Grade {
    Excellent,
    Good,
    Fair,
    Poor,
}

impl Grade {
    pub fn from_score(score: u8) -> Self {
        match score {
            80..=u8::MAX => Grade::Excellent,
            60..=79 => Grade::Good,
            40..=59 => Grade::Fair,
            _ => Grade::Poor,
        }
    }

    /// One-line verdict shown under the score.
    pub fn status_line(&self) -> &'static str {
        match self {
            Grade::Excellent => "Excellent SEO optimization!",
            Grade::Good => "Good, but can be improved",
            Grade::Fair => "Needs improvement",
            Grade::Poor => "Significant improvements needed",
        }
    }

    /// Glyph prefixed to the status line.
    pub fn symbol(&self) -> &'static str {
        match self {
            Grade::Excellent => "✓",
            Grade::Good | Grade::Fair => "⚠",
            Grade::Poor => "✗",
        }
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Grade::Excellent => "excellent",
            Grade::Good => "good",
            Grade::Fair => "fair",
            Grade::Poor => "poor",
        };
        f.write_str(label)
    }
}
