//! Ordered substring rules mapping free-form type labels to `ObservationType`

use crate::types::ObservationType;
use serde::{Deserialize, Serialize};

/// Classify as `class` when the label contains `contains` (case-insensitive)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassificationRule {
    pub contains: String,
    pub class: ObservationType,
}

impl ClassificationRule {
    pub fn new(contains: impl Into<String>, class: ObservationType) -> Self {
        Self {
            contains: contains.into(),
            class,
        }
    }

    fn matches(&self, folded_kind: &str) -> bool {
        folded_kind.contains(&self.contains.to_lowercase())
    }
}

/// Rules are tried in order; first match wins
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassificationRules {
    pub rules: Vec<ClassificationRule>,
    #[serde(default = "default_fallback")]
    pub fallback: ObservationType,
}

fn default_fallback() -> ObservationType {
    ObservationType::Span
}

impl ClassificationRules {
    pub fn new() -> Self {
        Self {
            rules: vec![
                ClassificationRule::new("generation", ObservationType::Generation),
                ClassificationRule::new("llm", ObservationType::Generation),
                ClassificationRule::new("event", ObservationType::Event),
            ],
            fallback: default_fallback(),
        }
    }

    pub fn classify(&self, kind: &str) -> ObservationType {
        let folded = kind.to_lowercase();
        self.rules
            .iter()
            .find(|rule| rule.matches(&folded))
            .map(|rule| rule.class)
            .unwrap_or(self.fallback)
    }
}

impl Default for ClassificationRules {
    fn default() -> Self {
        Self::new()
    }
}
