use serde::Serialize;

use crate::scoring::{AnalysisResult, CheckKey};

/// Where the focus keyphrase was found.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct KeyphraseUsage {
    pub in_title: bool,
    pub in_description: bool,
    pub in_url: bool,
    pub in_content: bool,
}

impl KeyphraseUsage {
    pub fn from_result(result: &AnalysisResult) -> Self {
        let found = |key| {
            result
                .checks
                .get(key)
                .is_some_and(|check| check.value.is_truthy())
        };

        Self {
            in_title: found(CheckKey::KeyphraseInTitle),
            in_description: found(CheckKey::KeyphraseInDescription),
            in_url: found(CheckKey::KeyphraseInSlug),
            in_content: found(CheckKey::KeyphraseInContent),
        }
    }
}
