//! Wire types for the observability API and snapshot file I/O

mod dashboard;
mod evaluation;
mod io;
mod observation;
mod prompt;
mod trace;

pub use dashboard::{
    CostByModel, DashboardMetrics, EvaluationStats, LatencyAt, LatencyBucket, ModelPerformance,
    PromptStats, PromptTrend, SlowestTrace, TopPrompt, TracesAt, UsageTrend,
};
pub use evaluation::{CreateEvaluation, EvaluationCreated, EvaluationPage, EvaluationSummary};
pub use io::{read_records, write_json_atomic, LoadError};
pub use observation::ObservationRecord;
pub use prompt::{Prompt, PromptEvaluation, PromptPage};
pub use trace::TraceSummary;
