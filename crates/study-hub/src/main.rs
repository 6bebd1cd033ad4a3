mod app;
mod config;
mod error;
mod query;
mod render;
mod server;
mod telemetry;
mod web;

use rmcp::{ServiceExt, transport::stdio};
use tracing::info;
use tracing_subscriber::EnvFilter;

use config::Config;
use server::StudyHubServer;
use study_catalog::Catalog;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // stdout is reserved for MCP JSON-RPC when serving on stdio
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();

    info!("starting study-hub");

    let config = Config::from_env()?;
    info!(
        listen_addr = %config.listen_addr,
        mount_id = %config.mount_id,
        analytics = config.analytics.is_some(),
        mcp_stdio = config.mcp_stdio,
        "configuration loaded"
    );

    let catalog = Catalog::builtin();
    catalog.validate()?;
    info!(
        guides = catalog.guides().len(),
        links = catalog.links().len(),
        "catalog loaded"
    );

    if config.mcp_stdio {
        info!("MCP server ready, serving on stdio");
        let service = StudyHubServer::new(catalog)
            .serve(stdio())
            .await
            .inspect_err(|e| {
                tracing::error!(error = %e, "MCP server error");
            })?;
        service.waiting().await?;
        info!("MCP server shut down");
        return Ok(());
    }

    let handle = app::mount(&config, catalog).await?;
    info!(
        url = %format!("http://{}/", handle.local_addr()),
        mount_id = handle.mount_id(),
        "study hub ready"
    );

    tokio::signal::ctrl_c().await?;
    info!("shutdown requested");
    handle.unmount().await?;
    Ok(())
}
