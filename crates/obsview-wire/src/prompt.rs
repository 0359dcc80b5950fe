//! Discovered prompts from `/promptops/prompts`

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Prompt {
    pub id: String,
    pub name: String,
    pub version: String,
    #[serde(default)]
    pub system_message: String,
    #[serde(default)]
    pub trace_id: String,
    #[serde(default)]
    pub observation_id: String,
    #[serde(default)]
    pub model: String,
    #[serde(default)]
    pub executions: u64,
    #[serde(default)]
    pub avg_latency: f64,
    #[serde(default)]
    pub avg_cost: f64,
    #[serde(default)]
    pub effectiveness_score: f64,
    #[serde(default)]
    pub last_evaluated_at: Option<String>,
    #[serde(default)]
    pub discovered_at: String,
    #[serde(default)]
    pub created_at: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PromptPage {
    pub prompts: Vec<Prompt>,
    pub total: usize,
    pub limit: usize,
    pub offset: usize,
}

/// Response of `POST /promptops/prompts/{id}/evaluate`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PromptEvaluation {
    pub id: String,
    pub status: String,
    pub message: String,
}
