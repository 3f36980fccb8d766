use serde::{Deserialize, Serialize};

use crate::scoring::Thresholds;

/// Contents of `config.yaml`. Every key is optional.
///
/// Example YAML:
/// ```yaml
/// page_url: "https://www.example.com/"
/// keywords_enabled: true
/// thresholds:
///   title: { min: 30, max: 60, optimal: 50 }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Page the analyzed content is published on; decides which links are internal.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page_url: Option<String>,

    /// Whether the editor exposes a keywords field (enables the keywords check).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub keywords_enabled: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thresholds: Option<Thresholds>,
}
