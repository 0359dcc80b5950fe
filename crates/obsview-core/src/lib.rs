//! Observation tree reconstruction, derived metrics and selection tracking

mod classify;
mod config;
mod metrics;
mod selection;
mod tree;
mod types;
mod view;

pub use classify::{ClassificationRule, ClassificationRules};
pub use config::{BuilderConfig, ConfigError, DEFAULT_UNIT_RATE};
pub use metrics::{estimate_cost, latency_display, parse_timestamp};
pub use selection::{select, Selection};
pub use tree::{build, count, find, partition_by_trace, walk, Walk};
pub use types::{ObservationNode, ObservationType};
pub use view::TraceView;
