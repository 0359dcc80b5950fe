//! Evaluation types the backend accepts

use crate::wizard::WizardError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EvaluationType {
    Agent,
    Workflow,
    Explainability,
    Rag,
}

impl EvaluationType {
    pub const ALL: [EvaluationType; 4] = [
        EvaluationType::Agent,
        EvaluationType::Workflow,
        EvaluationType::Explainability,
        EvaluationType::Rag,
    ];

    /// Identifier sent on the wire
    pub fn id(&self) -> &'static str {
        match self {
            EvaluationType::Agent => "agent",
            EvaluationType::Workflow => "workflow",
            EvaluationType::Explainability => "explainability",
            EvaluationType::Rag => "rag",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            EvaluationType::Agent => "Agent Evaluation",
            EvaluationType::Workflow => "Workflow Evaluation",
            EvaluationType::Explainability => "Explainability",
            EvaluationType::Rag => "RAG Evaluation",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            EvaluationType::Agent => {
                "Evaluate agent tool selection, input structure, and error recovery"
            }
            EvaluationType::Workflow => {
                "Assess workflow completion, routing accuracy, and step efficiency"
            }
            EvaluationType::Explainability => {
                "Evaluate reasoning clarity, decision transparency, and output justification"
            }
            EvaluationType::Rag => {
                "Measure faithfulness, answer relevance, context precision, and recall"
            }
        }
    }
}

impl FromStr for EvaluationType {
    type Err = WizardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        EvaluationType::ALL
            .into_iter()
            .find(|t| t.id() == wanted)
            .ok_or_else(|| WizardError::UnknownType(s.to_string()))
    }
}

impl std::fmt::Display for EvaluationType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.id())
    }
}
