use serde::{Deserialize, Serialize};

/// The six dimensions the QA workflow scores by default.
pub const DEFAULT_DIMENSIONS: [&str; 6] = [
    "IssueIdentification",
    "ResolutionCompliance",
    "Clarity",
    "Retention",
    "Sentiment",
    "CustomerCentricity",
];

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Dimension display and template order. The scoring core accepts any
    /// dimension set; this list only drives presentation.
    #[serde(default = "default_dimensions")]
    pub dimensions: Vec<String>,
}

fn default_dimensions() -> Vec<String> {
    DEFAULT_DIMENSIONS.iter().map(|d| d.to_string()).collect()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            dimensions: default_dimensions(),
        }
    }
}
