//! The single call handed to presentation: forest plus selection

use crate::config::BuilderConfig;
use crate::selection::select;
use crate::tree::build;
use crate::types::ObservationNode;
use obsview_wire::ObservationRecord;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TraceView {
    pub forest: Vec<ObservationNode>,
    pub selected_id: Option<String>,
}

impl TraceView {
    /// Rebuild from a complete snapshot of one trace's observations
    pub fn build(
        records: &[ObservationRecord],
        previous: Option<&str>,
        config: &BuilderConfig,
    ) -> Self {
        let forest = build(records, config);
        let selected_id = select(&forest, previous);
        Self {
            forest,
            selected_id,
        }
    }

    pub fn selected(&self) -> Option<&ObservationNode> {
        self.selected_id
            .as_deref()
            .and_then(|id| crate::tree::find(&self.forest, id))
    }
}
