//! Output node types

use obsview_wire::ObservationRecord;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Closed display classification of an observation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ObservationType {
    /// Model call
    #[serde(rename = "GENERATION")]
    Generation,
    /// Point-in-time log entry
    #[serde(rename = "EVENT")]
    Event,
    /// Anything else with a duration
    #[serde(rename = "SPAN")]
    Span,
}

impl ObservationType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ObservationType::Generation => "GENERATION",
            ObservationType::Event => "EVENT",
            ObservationType::Span => "SPAN",
        }
    }
}

impl std::fmt::Display for ObservationType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An observation placed in the tree, with derived display metrics.
///
/// Carries every record field except the parent reference, which is
/// expressed by position in the tree instead.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ObservationNode {
    pub id: String,
    pub trace_id: String,
    pub kind: String,
    pub name: String,
    pub start_time: String,
    pub end_time: String,
    pub prompt_tokens: Option<u64>,
    pub completion_tokens: Option<u64>,
    pub input: String,
    pub output: String,
    pub model: Option<String>,
    pub model_parameters: BTreeMap<String, String>,
    pub level: Option<String>,
    pub classified_type: ObservationType,
    pub latency_display: String,
    /// `None` means unknown, which is not the same as free
    pub estimated_cost: Option<f64>,
    pub children: Vec<ObservationNode>,
}

impl ObservationNode {
    pub(crate) fn from_record(
        record: &ObservationRecord,
        classified_type: ObservationType,
        latency_display: String,
        estimated_cost: Option<f64>,
    ) -> Self {
        Self {
            id: record.id.clone(),
            trace_id: record.trace_id.clone(),
            kind: record.kind.clone(),
            name: record.name.clone(),
            start_time: record.start_time.clone(),
            end_time: record.end_time.clone(),
            prompt_tokens: record.prompt_tokens,
            completion_tokens: record.completion_tokens,
            input: record.input.clone(),
            output: record.output.clone(),
            model: record.model.clone(),
            model_parameters: record.model_parameters.clone(),
            level: record.level.clone(),
            classified_type,
            latency_display,
            estimated_cost,
            children: Vec::new(),
        }
    }

    /// Cost formatted as dollars with five decimals
    pub fn cost_display(&self) -> Option<String> {
        self.estimated_cost.map(|cost| format!("${:.5}", cost))
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }
}

// Deep parent chains must not recurse on teardown
impl Drop for ObservationNode {
    fn drop(&mut self) {
        let mut pending = std::mem::take(&mut self.children);
        while let Some(mut node) = pending.pop() {
            pending.append(&mut node.children);
        }
    }
}
