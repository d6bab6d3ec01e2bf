//! Clínica MCP Server
//!
//! Exposes the Clínica REST API as MCP tools over stdio:
//! - Health of the API and its database
//! - Patient listing, lookup and deletion
//! - Copayment, final amount and the costly-attention report
//! - The generic procedure call

mod client;
mod server;

use anyhow::Result;
use rmcp::ServiceExt;
use server::ClinicaServer;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging to stderr (stdout is used for MCP protocol)
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let server = ClinicaServer::from_env()?;
    tracing::info!("Starting Clínica MCP server");

    // Serve over stdio - pass as tuple (stdin, stdout)
    let transport = (tokio::io::stdin(), tokio::io::stdout());
    let service = server.serve(transport).await?;

    // Wait for shutdown
    service.waiting().await?;

    Ok(())
}
