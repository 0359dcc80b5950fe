//! Evaluation creation workflow

pub mod catalog;
pub mod filter;
pub mod wizard;

pub use catalog::EvaluationType;
pub use filter::filter_traces;
pub use wizard::{EvaluationWizard, Step, WizardError};
