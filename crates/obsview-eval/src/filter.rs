use obsview_wire::TraceSummary;

/// Case-insensitive match on trace name or id; a blank query keeps everything
pub fn filter_traces<'a>(traces: &'a [TraceSummary], query: &str) -> Vec<&'a TraceSummary> {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return traces.iter().collect();
    }
    traces
        .iter()
        .filter(|t| t.name.to_lowercase().contains(&query) || t.id.to_lowercase().contains(&query))
        .collect()
}
