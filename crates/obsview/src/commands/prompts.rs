use obsview_client::{ApiClient, ClientConfig, Page};

pub async fn run(
    client_config: ClientConfig,
    limit: usize,
    evaluate: Option<&str>,
) -> anyhow::Result<()> {
    let client = ApiClient::new(client_config)?;

    if let Some(prompt_id) = evaluate {
        let queued = client.evaluate_prompt(prompt_id).await?;
        println!("Prompt {}: evaluation {} {}", prompt_id, queued.id, queued.status);
        return Ok(());
    }

    let page = client.list_prompts(Page { limit, offset: 0 }).await?;
    if page.prompts.is_empty() {
        println!("No prompts discovered yet");
        return Ok(());
    }

    println!("Prompts ({} of {})", page.prompts.len(), page.total);
    println!("======================");
    for prompt in &page.prompts {
        println!(
            "  {} | {} {} | runs:{} latency:{:.2}s cost:${:.5} score:{:.0}%",
            prompt.id,
            prompt.name,
            prompt.version,
            prompt.executions,
            prompt.avg_latency,
            prompt.avg_cost,
            prompt.effectiveness_score * 100.0,
        );
    }
    Ok(())
}
