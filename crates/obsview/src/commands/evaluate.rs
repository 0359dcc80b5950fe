use anyhow::Context;
use obsview_client::{ApiClient, ClientConfig, TraceQuery};
use obsview_eval::{filter_traces, EvaluationType, EvaluationWizard};
use obsview_wire::EvaluationCreated;
use tracing::{info, warn};

pub struct EvaluateArgs {
    pub name: String,
    pub types: Vec<String>,
    pub traces: Vec<String>,
    pub search: Option<String>,
}

pub async fn run(args: EvaluateArgs, client_config: ClientConfig) -> anyhow::Result<()> {
    let client = ApiClient::new(client_config)?;
    let created = submit(&client, args).await?;
    println!("Created evaluation {} ({})", created.id, created.status);
    if !created.message.is_empty() {
        println!("{}", created.message);
    }
    Ok(())
}

/// Walk the wizard with the given choices and submit from the confirm step
async fn submit(client: &ApiClient, args: EvaluateArgs) -> anyhow::Result<EvaluationCreated> {
    let mut wizard = EvaluationWizard::new();

    for raw in &args.types {
        let evaluation_type: EvaluationType = raw.parse()?;
        if !wizard.types().contains(&evaluation_type) {
            wizard.toggle_type(evaluation_type);
        }
    }
    wizard.next()?;

    if args.traces.is_empty() {
        let Some(query) = args.search else {
            anyhow::bail!("pass --trace or --search to choose traces");
        };
        let traces = client
            .list_traces(&TraceQuery::default())
            .await
            .context("failed to list traces")?;
        wizard.set_search(query);
        let visible: Vec<&str> = filter_traces(&traces, wizard.search())
            .into_iter()
            .map(|t| t.id.as_str())
            .collect();
        info!(
            matched = visible.len(),
            listed = traces.len(),
            query = wizard.search(),
            "selecting traces by search"
        );
        wizard.select_all(&visible);
    } else {
        for trace_id in &args.traces {
            if !wizard.trace_ids().contains(trace_id) {
                wizard.toggle_trace(trace_id);
            }
        }
    }
    wizard.next()?;

    wizard.set_name(args.name);
    let request = wizard.submission()?;

    match client.create_evaluation(&request).await {
        Ok(created) => {
            wizard.complete();
            Ok(created)
        }
        Err(err) => {
            if err.is_retryable() {
                warn!(error = %err, "evaluation service unavailable; safe to retry");
            }
            Err(err).context("failed to create evaluation")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::Matcher;

    fn args(types: &[&str], traces: &[&str], search: Option<&str>) -> EvaluateArgs {
        EvaluateArgs {
            name: "nightly".to_string(),
            types: types.iter().map(|s| s.to_string()).collect(),
            traces: traces.iter().map(|s| s.to_string()).collect(),
            search: search.map(String::from),
        }
    }

    fn client(server: &mockito::Server) -> ApiClient {
        ApiClient::new(ClientConfig::new(format!("{}/api", server.url()))).unwrap()
    }

    #[tokio::test]
    async fn test_submit_explicit_traces() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/api/evaluations")
            .match_body(Matcher::Json(serde_json::json!({
                "name": "nightly",
                "evaluation_types": ["rag", "agent"],
                "trace_ids": ["tr-1", "tr-2"]
            })))
            .with_status(200)
            .with_body(r#"{"id":"eval_1","name":"nightly","status":"pending","message":""}"#)
            .create_async()
            .await;

        let created = submit(
            &client(&server),
            args(&["rag", "agent", "rag"], &["tr-1", "tr-2", "tr-1"], None),
        )
        .await
        .unwrap();

        mock.assert_async().await;
        assert_eq!(created.id, "eval_1");
    }

    #[tokio::test]
    async fn test_submit_by_search() {
        let mut server = mockito::Server::new_async().await;
        let _list = server
            .mock("GET", "/api/traces")
            .match_query(Matcher::Any)
            .with_status(200)
            .with_body(
                r#"[{"id":"tr-1","timestamp":"t","name":"Checkout flow"},
                    {"id":"tr-2","timestamp":"t","name":"search"},
                    {"id":"chk-3","timestamp":"t","name":"billing"}]"#,
            )
            .create_async()
            .await;
        let create = server
            .mock("POST", "/api/evaluations")
            .match_body(Matcher::PartialJson(serde_json::json!({
                "trace_ids": ["tr-1"]
            })))
            .with_status(200)
            .with_body(r#"{"id":"eval_2","name":"nightly","status":"pending","message":""}"#)
            .create_async()
            .await;

        let created = submit(&client(&server), args(&["workflow"], &[], Some("checkout")))
            .await
            .unwrap();

        create.assert_async().await;
        assert_eq!(created.id, "eval_2");
    }

    #[tokio::test]
    async fn test_unknown_type_rejected_before_network() {
        let server = mockito::Server::new_async().await;
        let err = submit(&client(&server), args(&["toxicity"], &["tr-1"], None))
            .await
            .unwrap_err();
        assert!(err.to_string().contains("unknown evaluation type"));
    }

    #[tokio::test]
    async fn test_trace_source_required() {
        let server = mockito::Server::new_async().await;
        let err = submit(&client(&server), args(&["rag"], &[], None))
            .await
            .unwrap_err();
        assert!(err.to_string().contains("--trace or --search"));
    }

    #[tokio::test]
    async fn test_no_matching_traces_blocks_submission() {
        let mut server = mockito::Server::new_async().await;
        let _list = server
            .mock("GET", "/api/traces")
            .match_query(Matcher::Any)
            .with_status(200)
            .with_body("[]")
            .create_async()
            .await;

        let err = submit(&client(&server), args(&["rag"], &[], Some("nothing")))
            .await
            .unwrap_err();
        assert!(err.to_string().contains("select at least one trace"));
    }
}
