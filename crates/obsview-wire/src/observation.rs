//! Observation records as returned by `/traces/{id}/observations`

use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;

/// One unit of work inside a trace, exactly as the API reports it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObservationRecord {
    pub id: String,
    pub trace_id: String,
    /// `null`, absent and `""` all mean "no parent".
    #[serde(default, deserialize_with = "blank_as_none")]
    pub parent_observation_id: Option<String>,
    /// Free-form type label, e.g. `generation`, `llm-call`, `tool-event`
    #[serde(rename = "type")]
    pub kind: String,
    pub name: String,
    pub start_time: String,
    pub end_time: String,
    #[serde(rename = "tokens_prompt", default)]
    pub prompt_tokens: Option<u64>,
    #[serde(rename = "tokens_completion", default)]
    pub completion_tokens: Option<u64>,
    #[serde(default)]
    pub input: String,
    #[serde(default)]
    pub output: String,
    #[serde(default)]
    pub model: Option<String>,
    #[serde(default)]
    pub model_parameters: BTreeMap<String, String>,
    #[serde(default)]
    pub level: Option<String>,
}

impl ObservationRecord {
    /// Minimal record with no parent, tokens or payloads
    pub fn new(
        id: impl Into<String>,
        trace_id: impl Into<String>,
        kind: impl Into<String>,
        name: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            trace_id: trace_id.into(),
            parent_observation_id: None,
            kind: kind.into(),
            name: name.into(),
            start_time: String::new(),
            end_time: String::new(),
            prompt_tokens: None,
            completion_tokens: None,
            input: String::new(),
            output: String::new(),
            model: None,
            model_parameters: BTreeMap::new(),
            level: None,
        }
    }

    pub fn with_parent(mut self, parent: impl Into<String>) -> Self {
        self.parent_observation_id = Some(parent.into());
        self
    }

    pub fn with_times(mut self, start: impl Into<String>, end: impl Into<String>) -> Self {
        self.start_time = start.into();
        self.end_time = end.into();
        self
    }

    pub fn with_tokens(mut self, prompt: Option<u64>, completion: Option<u64>) -> Self {
        self.prompt_tokens = prompt;
        self.completion_tokens = completion;
        self
    }
}

fn blank_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value: Option<String> = Option::deserialize(deserializer)?;
    Ok(value.filter(|s| !s.is_empty()))
}
