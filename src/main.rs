//! apiforge CLI entrypoint
//! Parses command-line arguments and dispatches to the MCP server or the
//! live mock server.
#![deny(unsafe_code)]

// Internal imports (std, crate)
use std::path::PathBuf;

use apiforge::generation::types::MockServerConfig;
use apiforge::{mcp, mock};

// External imports (alphabetized)
use anyhow::Context;
use clap::Parser;
use tracing::{Level, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "apiforge")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(clap::Subcommand, Debug)]
pub enum Commands {
    /// Run the MCP tool server over stdio
    Serve,
    /// Serve mock responses for an OpenAPI document over HTTP
    Mock {
        /// Path to the OpenAPI document (YAML or JSON)
        #[arg(long)]
        spec: PathBuf,
        /// Port to listen on
        #[arg(long, default_value_t = 3000)]
        port: u16,
        /// Disable the permissive CORS layer
        #[arg(long)]
        no_cors: bool,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Log to stderr so stdio stays clean for the MCP transport
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(Level::INFO.into()))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Serve => {
            info!("Starting apiforge MCP server");
            mcp::serve_stdio().await?;
        }
        Commands::Mock { spec, port, no_cors } => {
            let document = mock::load_spec_document(&spec)
                .with_context(|| format!("Failed to load spec from {}", spec.display()))?;
            let config = MockServerConfig {
                port,
                enable_cors: !no_cors,
                ..MockServerConfig::default()
            };
            info!(path = %spec.display(), port, "Starting mock server");
            mock::serve(&document, &config).await?;
        }
    }
    Ok(())
}
