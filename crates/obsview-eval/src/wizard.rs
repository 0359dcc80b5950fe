//! Three-step evaluation wizard: types -> traces -> confirm

use crate::catalog::EvaluationType;
use obsview_wire::CreateEvaluation;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    ChoosingTypes,
    ChoosingTraces,
    Confirming,
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum WizardError {
    #[error("select at least one evaluation type")]
    NoTypesSelected,
    #[error("select at least one trace")]
    NoTracesSelected,
    #[error("evaluation name is required")]
    BlankName,
    #[error("submission is only possible from the confirm step (currently {0:?})")]
    NotConfirming(Step),
    #[error("unknown evaluation type '{0}' (expected agent, workflow, explainability or rag)")]
    UnknownType(String),
}

/// Wizard state. Forward moves are gated; backward moves never are.
#[derive(Debug, Clone)]
pub struct EvaluationWizard {
    step: Step,
    types: Vec<EvaluationType>,
    trace_ids: Vec<String>,
    name: String,
    search: String,
}

impl EvaluationWizard {
    pub fn new() -> Self {
        Self {
            step: Step::ChoosingTypes,
            types: Vec::new(),
            trace_ids: Vec::new(),
            name: String::new(),
            search: String::new(),
        }
    }

    pub fn step(&self) -> Step {
        self.step
    }

    pub fn types(&self) -> &[EvaluationType] {
        &self.types
    }

    pub fn trace_ids(&self) -> &[String] {
        &self.trace_ids
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn toggle_type(&mut self, evaluation_type: EvaluationType) {
        if let Some(pos) = self.types.iter().position(|t| *t == evaluation_type) {
            self.types.remove(pos);
        } else {
            self.types.push(evaluation_type);
        }
    }

    pub fn toggle_trace(&mut self, trace_id: &str) {
        if let Some(pos) = self.trace_ids.iter().position(|t| t == trace_id) {
            self.trace_ids.remove(pos);
        } else {
            self.trace_ids.push(trace_id.to_string());
        }
    }

    /// Clear when every visible trace is already selected, else select exactly the visible ones
    pub fn select_all<S: AsRef<str>>(&mut self, visible: &[S]) {
        let all_selected = self.trace_ids.len() == visible.len()
            && visible
                .iter()
                .all(|id| self.trace_ids.iter().any(|t| t == id.as_ref()));
        if all_selected {
            self.trace_ids.clear();
        } else {
            self.trace_ids = visible.iter().map(|id| id.as_ref().to_string()).collect();
        }
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn set_search(&mut self, query: impl Into<String>) {
        self.search = query.into();
    }

    fn gate(&self) -> Result<(), WizardError> {
        match self.step {
            Step::ChoosingTypes if self.types.is_empty() => Err(WizardError::NoTypesSelected),
            Step::ChoosingTraces if self.trace_ids.is_empty() => Err(WizardError::NoTracesSelected),
            // Selections stay editable at the confirm step
            Step::Confirming if self.types.is_empty() => Err(WizardError::NoTypesSelected),
            Step::Confirming if self.trace_ids.is_empty() => Err(WizardError::NoTracesSelected),
            Step::Confirming if self.name.trim().is_empty() => Err(WizardError::BlankName),
            _ => Ok(()),
        }
    }

    pub fn can_proceed(&self) -> bool {
        self.gate().is_ok()
    }

    /// Advance one step; stays at `Confirming` once there
    pub fn next(&mut self) -> Result<Step, WizardError> {
        self.gate()?;
        self.step = match self.step {
            Step::ChoosingTypes => Step::ChoosingTraces,
            Step::ChoosingTraces | Step::Confirming => Step::Confirming,
        };
        debug!(step = ?self.step, "wizard advanced");
        Ok(self.step)
    }

    pub fn back(&mut self) -> Step {
        self.step = match self.step {
            Step::ChoosingTypes | Step::ChoosingTraces => Step::ChoosingTypes,
            Step::Confirming => Step::ChoosingTraces,
        };
        self.step
    }

    /// Payload for the evaluation service
    pub fn submission(&self) -> Result<CreateEvaluation, WizardError> {
        if self.step != Step::Confirming {
            return Err(WizardError::NotConfirming(self.step));
        }
        self.gate()?;
        Ok(CreateEvaluation {
            name: self.name.trim().to_string(),
            evaluation_types: self.types.iter().map(|t| t.id().to_string()).collect(),
            trace_ids: self.trace_ids.clone(),
        })
    }

    /// Submission accepted upstream
    pub fn complete(&mut self) {
        self.reset();
    }

    pub fn cancel(&mut self) {
        self.reset();
    }

    fn reset(&mut self) {
        *self = Self::new();
    }
}

impl Default for EvaluationWizard {
    fn default() -> Self {
        Self::new()
    }
}
