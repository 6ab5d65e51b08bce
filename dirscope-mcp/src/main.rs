//! dirscope-mcp: MCP server binary for dirscope.
//!
//! Serves the `list_structure` and `read_files` tools over stdio.
//!
//! ```bash
//! # Configure in an MCP client's .mcp.json:
//! # {
//! #   "mcpServers": {
//! #     "dirscope": {
//! #       "command": "dirscope-mcp"
//! #     }
//! #   }
//! # }
//! ```

use anyhow::{Context, Result};
use clap::Parser;
use rmcp::service::ServiceExt;
use rmcp::transport::io::stdio;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

use dirscope_core::{ignore, IgnoreList};

mod server;

use crate::server::DirscopeHandler;

#[derive(Parser, Debug)]
#[command(name = "dirscope-mcp")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "MCP server for bulk directory and file inspection")]
struct Args {
    /// Working directory for relative paths and the default listing root
    #[arg(long, value_name = "DIR")]
    root: Option<PathBuf>,

    /// Ignore-pattern file (defaults to dirscope.ignore beside the executable)
    #[arg(long, value_name = "FILE")]
    ignore_file: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    setup_tracing()?;

    let args = Args::parse();

    if let Some(root) = &args.root {
        std::env::set_current_dir(root)
            .with_context(|| format!("Failed to change working directory to {}", root.display()))?;
    }

    // Loaded once; the list is fixed for the process lifetime.
    let ignore_path = args.ignore_file.or_else(ignore::default_ignore_path);
    let ignore = match &ignore_path {
        Some(path) => IgnoreList::load(path),
        None => IgnoreList::defaults(),
    };
    info!(patterns = ignore.len(), "Loaded ignore patterns");

    let handler = DirscopeHandler::new(ignore);

    info!("Serving on stdio");
    let service = handler
        .serve(stdio())
        .await
        .context("Failed to start MCP service")?;

    service.waiting().await?;
    info!("Server shutdown complete");

    Ok(())
}

fn setup_tracing() -> Result<()> {
    use tracing_subscriber::fmt;

    // stdout belongs to the MCP transport; all diagnostics go to stderr.
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr).with_ansi(false))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    Ok(())
}
