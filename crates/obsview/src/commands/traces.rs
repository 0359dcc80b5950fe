use obsview_client::{ApiClient, ClientConfig, TraceQuery};
use obsview_wire::TraceSummary;

pub async fn run(
    client_config: ClientConfig,
    search: Option<String>,
    limit: usize,
) -> anyhow::Result<()> {
    let client = ApiClient::new(client_config)?;
    let query = TraceQuery {
        limit,
        search,
        ..Default::default()
    };
    let traces = client.list_traces(&query).await?;

    if traces.is_empty() {
        println!("No traces");
        return Ok(());
    }

    println!("{}", format_table(&traces));
    Ok(())
}

fn format_table(traces: &[TraceSummary]) -> String {
    let mut lines = vec![format!(
        "{:<24} {:<28} {:<10} {:>9} {:>10} {:>8}",
        "ID", "NAME", "STATUS", "LATENCY", "COST", "TOKENS"
    )];
    for trace in traces {
        lines.push(format!(
            "{:<24} {:<28} {:<10} {:>9} {:>10} {:>8}",
            trace.id,
            truncate(&trace.name, 28),
            trace.status,
            trace.latency_display(),
            trace.cost_display(),
            trace.total_token_count
        ));
    }
    lines.join("\n")
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        return s.to_string();
    }
    let kept: String = s.chars().take(max.saturating_sub(3)).collect();
    format!("{}...", kept)
}
