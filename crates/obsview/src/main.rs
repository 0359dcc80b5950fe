mod cli;
mod commands;
mod render;

use clap::Parser;
use cli::{Cli, Commands};
use obsview_client::ClientConfig;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing; stdout is reserved for command output
    tracing_subscriber::fmt()
        .with_env_filter(log_filter())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let mut client_config = ClientConfig::from_env();
    if let Some(url) = cli.api_url {
        client_config.base_url = url;
    }

    match cli.command {
        Commands::Tree {
            trace_id,
            file,
            select,
            json,
            config,
            out,
        } => {
            let args = commands::tree::TreeArgs {
                trace_id,
                file,
                select,
                json,
                config,
                out,
            };
            commands::tree::run(args, client_config).await
        }
        Commands::Traces { search, limit } => {
            commands::traces::run(client_config, search, limit).await
        }
        Commands::Evaluate {
            name,
            types,
            traces,
            search,
        } => {
            let args = commands::evaluate::EvaluateArgs {
                name,
                types,
                traces,
                search,
            };
            commands::evaluate::run(args, client_config).await
        }
        Commands::Prompts { limit, evaluate } => {
            commands::prompts::run(client_config, limit, evaluate.as_deref()).await
        }
        Commands::Stats { slowest, prompts } => {
            commands::stats::run(client_config, slowest, prompts).await
        }
        Commands::Version => commands::version::run(),
    }
}

/// `RUST_LOG` when set, otherwise `info`
fn log_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
}
