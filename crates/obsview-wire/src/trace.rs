//! Trace header returned by `/traces` and `/traces/{id}`

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TraceSummary {
    pub id: String,
    pub timestamp: String,
    pub name: String,
    #[serde(default)]
    pub user_id: String,
    #[serde(default)]
    pub metadata: BTreeMap<String, String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub input: String,
    #[serde(default)]
    pub output: String,
    #[serde(default)]
    pub total_token_count: u64,
    #[serde(default)]
    pub input_cost: f64,
    #[serde(default)]
    pub output_cost: f64,
    #[serde(default)]
    pub total_cost: f64,
    /// Seconds
    #[serde(default)]
    pub latency: f64,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub release: String,
}

impl TraceSummary {
    /// Deployment environment from metadata, `prod` when unset
    pub fn environment(&self) -> &str {
        self.metadata
            .get("env")
            .or_else(|| self.metadata.get("environment"))
            .map(String::as_str)
            .unwrap_or("prod")
    }

    pub fn latency_display(&self) -> String {
        format!("{:.2}s", self.latency)
    }

    pub fn cost_display(&self) -> String {
        format!("${:.5}", self.total_cost)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary(metadata: &[(&str, &str)]) -> TraceSummary {
        let json = serde_json::json!({
            "id": "tr-1",
            "timestamp": "2024-05-01T10:00:00",
            "name": "checkout-agent",
            "metadata": metadata.iter().cloned().collect::<BTreeMap<_, _>>(),
            "latency": 1.234,
            "total_cost": 0.0123
        });
        serde_json::from_value(json).unwrap()
    }

    #[test]
    fn test_environment_fallbacks() {
        assert_eq!(summary(&[("env", "staging")]).environment(), "staging");
        assert_eq!(summary(&[("environment", "dev")]).environment(), "dev");
        assert_eq!(
            summary(&[("env", "qa"), ("environment", "dev")]).environment(),
            "qa"
        );
        assert_eq!(summary(&[]).environment(), "prod");
    }

    #[test]
    fn test_display_formats() {
        let trace = summary(&[]);
        assert_eq!(trace.latency_display(), "1.23s");
        assert_eq!(trace.cost_display(), "$0.01230");
    }
}
