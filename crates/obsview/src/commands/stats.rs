use obsview_client::{ApiClient, ClientConfig, DashboardOverview, PromptAnalytics};

pub async fn run(client_config: ClientConfig, slowest: usize, prompts: bool) -> anyhow::Result<()> {
    let client = ApiClient::new(client_config)?;

    if prompts {
        let analytics = client.prompt_analytics().await?;
        println!("{}", format_prompts(&analytics));
    } else {
        let overview = client.dashboard_overview(slowest).await?;
        println!("{}", format_overview(&overview));
    }
    Ok(())
}

fn format_overview(overview: &DashboardOverview) -> String {
    let m = &overview.metrics;
    let mut lines = vec![
        "Dashboard".to_string(),
        "=========".to_string(),
        format!("  Traces:        {} ({} observations)", m.total_traces, m.total_observations),
        format!("  Success rate:  {:.1}%", m.success_rate),
        format!("  Avg latency:   {:.2}s", m.avg_latency),
        format!("  Total cost:    ${:.4}", m.total_cost),
        format!("  Total tokens:  {}", m.total_tokens),
    ];
    if m.total_evaluations > 0 {
        lines.push(format!(
            "  Evaluations:   {} (avg {:.2}, {} passed, {} failed)",
            m.total_evaluations, m.avg_evaluation_score, m.passed_evaluations, m.failed_evaluations
        ));
    }

    if !m.status_distribution.is_empty() {
        let statuses: Vec<String> = m
            .status_distribution
            .iter()
            .map(|(status, count)| format!("{}={}", status, count))
            .collect();
        lines.push(format!("  Statuses:      {}", statuses.join(" ")));
    }

    if !overview.latency_distribution.is_empty() {
        lines.push(String::new());
        lines.push("Latency".to_string());
        for bucket in &overview.latency_distribution {
            lines.push(format!("  {:<6} {}", bucket.bucket, bucket.count));
        }
    }

    if !overview.cost_by_model.is_empty() {
        lines.push(String::new());
        lines.push("Cost by model".to_string());
        for row in &overview.cost_by_model {
            lines.push(format!("  {:<24} ${:.4} over {} traces", row.model, row.cost, row.traces));
        }
    }

    if !overview.slowest_traces.is_empty() {
        lines.push(String::new());
        lines.push("Slowest traces".to_string());
        for trace in &overview.slowest_traces {
            lines.push(format!("  {:>8.2}s  {} ({})", trace.latency, trace.name, trace.id));
        }
    }
    lines.join("\n")
}

fn format_prompts(analytics: &PromptAnalytics) -> String {
    let s = &analytics.stats;
    let e = &analytics.evaluations;
    let mut lines = vec![
        "Prompts".to_string(),
        "=======".to_string(),
        format!("  Discovered:     {} ({} high performers)", s.total_prompts, s.high_performers),
        format!("  Effectiveness:  {:.0}%", s.avg_effectiveness * 100.0),
        format!("  Executions:     {}", s.total_executions),
        format!("  Total cost:     ${:.2}", s.total_cost),
        format!(
            "  Evaluations:    {} (avg {:.2}, {} passed, {} failed)",
            e.total_evaluations, e.avg_score, e.passed, e.failed
        ),
    ];
    if !analytics.top_prompts.is_empty() {
        lines.push(String::new());
        lines.push("Top prompts".to_string());
        for prompt in &analytics.top_prompts {
            lines.push(format!(
                "  {:<24} score:{:.0}% runs:{} latency:{:.2}s cost:${:.4}",
                prompt.name,
                prompt.effectiveness * 100.0,
                prompt.executions,
                prompt.avg_latency,
                prompt.cost
            ));
        }
    }
    lines.join("\n")
}
