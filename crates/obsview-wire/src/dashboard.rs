//! Aggregates served by `/dashboard/*` and the prompt analytics under `/promptops/*`
//!
//! Field names follow the API's camelCase JSON. Aggregates over empty tables
//! come back as zero or are missing, so numeric fields default to zero.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TracesAt {
    pub timestamp: String,
    #[serde(default)]
    pub count: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LatencyAt {
    pub timestamp: String,
    #[serde(default)]
    pub latency: f64,
}

/// Response of `GET /dashboard/metrics`
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DashboardMetrics {
    pub total_traces: u64,
    pub total_observations: u64,
    /// Seconds
    pub avg_latency: f64,
    pub total_cost: f64,
    /// Percent of traces with status `success`
    pub success_rate: f64,
    pub total_tokens: u64,
    pub traces_over_time: Vec<TracesAt>,
    pub latency_over_time: Vec<LatencyAt>,
    pub status_distribution: BTreeMap<String, u64>,
    pub total_evaluations: u64,
    pub avg_evaluation_score: f64,
    pub passed_evaluations: u64,
    pub failed_evaluations: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UsageTrend {
    pub date: String,
    #[serde(default)]
    pub traces: u64,
    #[serde(default)]
    pub tokens: u64,
    #[serde(default)]
    pub cost: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelPerformance {
    pub model: String,
    #[serde(default)]
    pub count: u64,
    #[serde(default)]
    pub avg_latency: f64,
    #[serde(default)]
    pub total_tokens: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CostByModel {
    pub model: String,
    #[serde(default)]
    pub cost: f64,
    #[serde(default)]
    pub traces: u64,
}

/// One latency histogram bar, e.g. `"1-2s"`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LatencyBucket {
    pub bucket: String,
    #[serde(default)]
    pub count: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SlowestTrace {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub latency: f64,
    #[serde(default)]
    pub timestamp: String,
}

/// Response of `GET /promptops/stats`
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PromptStats {
    pub total_prompts: u64,
    pub high_performers: u64,
    pub avg_effectiveness: f64,
    pub total_executions: u64,
    pub total_cost: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TopPrompt {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub effectiveness: f64,
    #[serde(default)]
    pub executions: u64,
    #[serde(default)]
    pub avg_latency: f64,
    #[serde(default)]
    pub cost: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PromptTrend {
    pub date: String,
    #[serde(default)]
    pub avg_tokens: f64,
    #[serde(default)]
    pub avg_latency: f64,
    #[serde(default)]
    pub high_performing: u64,
    #[serde(default)]
    pub low_performing: u64,
}

/// Response of `GET /promptops/evaluations/stats`
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EvaluationStats {
    pub total_evaluations: u64,
    pub avg_score: f64,
    pub passed: u64,
    pub failed: u64,
}
