//! CLI entry point for tmux-mcp.

mod cli;

use clap::Parser;
use serde_json::Value;
use tmux_mcp::config::{load_config_with_source, Config};
use tmux_mcp::error::{ServerError, ToolError};
use tmux_mcp::server::McpServer;
use tmux_mcp::tools::execution::TmuxContext;
use tmux_mcp::tools::ToolRegistry;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use cli::Command;

#[tokio::main]
async fn main() {
    let args = cli::Args::parse();
    if let Err(e) = run(args).await {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

async fn run(args: cli::Args) -> Result<(), ServerError> {
    // Load config.
    let (mut config, source) = load_config_with_source(args.config.as_deref())?;

    // Apply CLI overrides.
    if let Some(binary) = &args.tmux_bin {
        config.tmux.binary = binary.clone();
    }
    if let Some(socket) = &args.socket {
        config.tmux.socket = Some(socket.clone());
    }
    config.validate()?;

    init_logging(&config);
    tracing::debug!(?source, "loaded config source");

    let tmux = TmuxContext::local(config.tmux.binary.clone(), config.tmux.socket.clone());
    tracing::debug!(backend = %tmux.summary(), "tmux backend");
    let registry = ToolRegistry::tmux(tmux)?;

    match args.command() {
        Command::Serve => {
            McpServer::new(registry, config.server.clone())
                .serve_stdio()
                .await
        }
        Command::Tools => {
            let text = serde_json::to_string_pretty(&registry.definitions())
                .map_err(|e| ServerError::Io(std::io::Error::other(e)))?;
            println!("{text}");
            Ok(())
        }
        Command::Call { tool, args } => {
            let arguments = args
                .as_deref()
                .map(serde_json::from_str::<Value>)
                .transpose()
                .map_err(|e| ToolError::InvalidArguments(format!("ARGS_JSON: {e}")))?;
            let text = registry.execute(tool, arguments).await?;
            println!("{text}");
            Ok(())
        }
    }
}

/// Logs go to stderr; stdout carries protocol traffic. `RUST_LOG` wins over
/// the configured filter.
fn init_logging(config: &Config) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.logging.filter))
        .unwrap_or_else(|e| {
            eprintln!(
                "warning: invalid log filter `{}`: {e}",
                config.logging.filter
            );
            EnvFilter::new("info")
        });
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}
