//! Plain-text rendering of trace headers and observation trees

use obsview_core::{ObservationNode, TraceView};
use obsview_wire::TraceSummary;

pub fn trace_header(trace: &TraceSummary) -> String {
    format!(
        "Trace {} | {} | env: {} | {} | {} | {} tokens",
        trace.id,
        trace.name,
        trace.environment(),
        trace.latency_display(),
        trace.cost_display(),
        trace.total_token_count
    )
}

/// One line per node, indented by depth; the selected node is marked with `>`
pub fn tree(view: &TraceView) -> String {
    if view.forest.is_empty() {
        return "(no observations)".to_string();
    }

    let selected = view.selected_id.as_deref();
    let mut lines = Vec::new();
    let mut stack: Vec<(&ObservationNode, usize)> = view.forest.iter().rev().map(|n| (n, 0)).collect();

    while let Some((node, depth)) = stack.pop() {
        let marker = if Some(node.id.as_str()) == selected { ">" } else { " " };
        lines.push(format!(
            "{} {}[{}] {} ({})  {}  {}",
            marker,
            "  ".repeat(depth),
            node.classified_type,
            node.name,
            node.id,
            node.latency_display,
            node.cost_display().unwrap_or_else(|| "-".to_string()),
        ));
        stack.extend(node.children.iter().rev().map(|child| (child, depth + 1)));
    }

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use obsview_core::BuilderConfig;
    use obsview_wire::ObservationRecord;

    #[test]
    fn test_tree_rendering() {
        let records = vec![
            ObservationRecord::new("a", "t", "span", "agent")
                .with_times("2024-05-01T10:00:00Z", "2024-05-01T10:00:02Z"),
            ObservationRecord::new("b", "t", "generation", "chat")
                .with_parent("a")
                .with_times("2024-05-01T10:00:00Z", "2024-05-01T10:00:01Z")
                .with_tokens(Some(100), Some(50)),
            ObservationRecord::new("c", "t", "event", "done"),
        ];
        let view = TraceView::build(&records, Some("b"), &BuilderConfig::new());

        let rendered = tree(&view);
        let lines: Vec<_> = rendered.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "  [SPAN] agent (a)  2.00s  -");
        assert_eq!(lines[1], ">   [GENERATION] chat (b)  1.00s  $0.00030");
        assert_eq!(lines[2], "  [EVENT] done (c)  n/a  -");
    }

    #[test]
    fn test_empty_tree() {
        let view = TraceView::build(&[], None, &BuilderConfig::new());
        assert_eq!(tree(&view), "(no observations)");
    }
}
