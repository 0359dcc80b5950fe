//! Keeps the focused node stable across rebuilds

use crate::tree::find;
use crate::types::ObservationNode;

/// Keep `previous` if it still exists anywhere in `forest`, else the first root
pub fn select(forest: &[ObservationNode], previous: Option<&str>) -> Option<String> {
    if let Some(id) = previous {
        if find(forest, id).is_some() {
            return Some(id.to_string());
        }
    }
    forest.first().map(|root| root.id.clone())
}

/// Selected node id owned by a view, reconciled on every new forest
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    current: Option<String>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> Option<&str> {
        self.current.as_deref()
    }

    /// Re-validate against a freshly built forest
    pub fn reconcile(&mut self, forest: &[ObservationNode]) -> Option<&str> {
        self.current = select(forest, self.current.as_deref());
        self.current.as_deref()
    }

    /// Focus `id` if present; otherwise leave the selection unchanged
    pub fn choose(&mut self, forest: &[ObservationNode], id: &str) -> bool {
        if find(forest, id).is_none() {
            return false;
        }
        self.current = Some(id.to_string());
        true
    }
}
