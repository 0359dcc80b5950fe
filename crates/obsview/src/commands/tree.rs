use crate::render;
use anyhow::Context;
use obsview_client::{ApiClient, ClientConfig};
use obsview_core::{partition_by_trace, BuilderConfig, TraceView};
use obsview_wire::{read_records, write_json_atomic, ObservationRecord};
use serde::Serialize;
use std::path::PathBuf;

pub struct TreeArgs {
    pub trace_id: Option<String>,
    pub file: Option<PathBuf>,
    pub select: Option<String>,
    pub json: bool,
    pub config: Option<PathBuf>,
    pub out: Option<PathBuf>,
}

#[derive(Debug, Serialize)]
struct TraceTree {
    trace_id: String,
    #[serde(flatten)]
    view: TraceView,
}

pub async fn run(args: TreeArgs, client_config: ClientConfig) -> anyhow::Result<()> {
    let builder = match &args.config {
        Some(path) => BuilderConfig::from_json_file(path)?,
        None => BuilderConfig::default(),
    };

    let trees = if let Some(path) = &args.file {
        let records: Vec<ObservationRecord> = read_records(path)?;
        trees_from_records(&records, args.select.as_deref(), &builder)
    } else if let Some(trace_id) = &args.trace_id {
        let client = ApiClient::new(client_config)?;
        let snapshot = client
            .trace_snapshot(trace_id)
            .await
            .with_context(|| format!("failed to load trace {}", trace_id))?;
        if !args.json {
            println!("{}", render::trace_header(&snapshot.trace));
        }
        let view = TraceView::build(&snapshot.observations, args.select.as_deref(), &builder);
        vec![TraceTree {
            trace_id: trace_id.clone(),
            view,
        }]
    } else {
        anyhow::bail!("either a trace id or --file is required");
    };

    if let Some(out) = &args.out {
        write_json_atomic(out, &trees)
            .with_context(|| format!("failed to write {}", out.display()))?;
        tracing::info!(path = %out.display(), traces = trees.len(), "wrote trace trees");
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&trees)?);
    } else {
        for tree in &trees {
            if trees.len() > 1 {
                println!("== {}", tree.trace_id);
            }
            println!("{}", render::tree(&tree.view));
        }
    }
    Ok(())
}

/// Snapshot files may hold several traces; each gets its own tree
fn trees_from_records(
    records: &[ObservationRecord],
    select: Option<&str>,
    builder: &BuilderConfig,
) -> Vec<TraceTree> {
    partition_by_trace(records)
        .into_iter()
        .map(|(trace_id, group)| TraceTree {
            view: TraceView::build(&group, select, builder),
            trace_id,
        })
        .collect()
}
