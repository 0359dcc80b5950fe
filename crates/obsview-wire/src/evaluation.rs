//! Evaluation payloads for `/evaluations`

use serde::{Deserialize, Serialize};

/// Body of `POST /evaluations`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateEvaluation {
    pub name: String,
    pub evaluation_types: Vec<String>,
    pub trace_ids: Vec<String>,
}

/// Response of `POST /evaluations`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvaluationCreated {
    pub id: String,
    pub name: String,
    pub status: String,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvaluationSummary {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub status: String,
    #[serde(default)]
    pub score: Option<f64>,
    #[serde(default)]
    pub created_at: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvaluationPage {
    pub evaluations: Vec<EvaluationSummary>,
    pub total: usize,
    pub limit: usize,
    pub offset: usize,
}
