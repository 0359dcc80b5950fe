use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "obsview")]
#[command(version)]
#[command(about = "Inspect LLM application traces and run evaluations")]
pub struct Cli {
    /// API root (defaults to http://localhost:8000/api)
    #[arg(long, global = true, env = "OBSVIEW_API_URL")]
    pub api_url: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show the observation tree of a trace
    Tree {
        /// Trace to fetch from the API
        #[arg(required_unless_present = "file")]
        trace_id: Option<String>,

        /// Read observations from a JSON or JSONL snapshot instead
        #[arg(short, long, conflicts_with = "trace_id")]
        file: Option<PathBuf>,

        /// Observation to keep focused if it still exists
        #[arg(long)]
        select: Option<String>,

        /// Print JSON instead of the indented tree
        #[arg(long)]
        json: bool,

        /// Builder config (unit rate, classification rules)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Also write the JSON view to this path
        #[arg(short, long)]
        out: Option<PathBuf>,
    },

    /// List recent traces
    Traces {
        #[arg(short, long)]
        search: Option<String>,

        #[arg(short, long, default_value_t = 20)]
        limit: usize,
    },

    /// Create an evaluation run
    Evaluate {
        /// Evaluation name
        #[arg(long)]
        name: String,

        /// Evaluation type: agent, workflow, explainability, rag
        #[arg(long = "type", required = true)]
        types: Vec<String>,

        /// Trace to evaluate (repeatable)
        #[arg(long = "trace", required_unless_present = "search")]
        traces: Vec<String>,

        /// Instead of --trace, select every listed trace whose name or id matches
        #[arg(long, conflicts_with = "traces")]
        search: Option<String>,
    },

    /// List discovered prompts
    Prompts {
        #[arg(short, long, default_value_t = 50)]
        limit: usize,

        /// Queue an evaluation for this prompt id
        #[arg(long)]
        evaluate: Option<String>,
    },

    /// Show dashboard aggregates, or prompt analytics with --prompts
    Stats {
        /// How many of the slowest traces to list
        #[arg(long, default_value_t = 5)]
        slowest: usize,

        #[arg(long)]
        prompts: bool,
    },

    /// Print version information
    Version,
}
