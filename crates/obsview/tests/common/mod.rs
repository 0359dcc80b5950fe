use obsview_wire::ObservationRecord;

pub fn record(id: &str, parent: Option<&str>, kind: &str) -> ObservationRecord {
    let record = ObservationRecord::new(id, "trace-1", kind, format!("{} step", id));
    match parent {
        Some(parent) => record.with_parent(parent),
        None => record,
    }
}

/// A retrieval-augmented agent run with one orphaned span
pub fn agent_run() -> Vec<ObservationRecord> {
    vec![
        record("agent", None, "span")
            .with_times("2024-05-01T10:00:00", "2024-05-01T10:00:04.2"),
        record("retrieve", Some("agent"), "retriever")
            .with_times("2024-05-01T10:00:00.1", "2024-05-01T10:00:00.9"),
        record("plan", Some("agent"), "llm-call")
            .with_times("2024-05-01T10:00:01", "2024-05-01T10:00:02.5")
            .with_tokens(Some(820), Some(140)),
        record("tool", Some("plan"), "tool-event")
            .with_times("2024-05-01T10:00:02.5", "2024-05-01T10:00:02.5"),
        record("answer", Some("agent"), "generation")
            .with_times("2024-05-01T10:00:03", "2024-05-01T10:00:04.1")
            .with_tokens(Some(1200), None),
        record("late-span", Some("evicted-parent"), "span")
            .with_times("2024-05-01T10:00:05", "2024-05-01T10:00:04"),
    ]
}
