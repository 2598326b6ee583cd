use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use items_server::{logging, InMemItemsRepository, ServerConfig, SharedRepository};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = ServerConfig::parse();
    logging::init_logging(config.log_level.as_deref())?;

    let addr = config.addr();
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    tracing::info!(%addr, "listening");

    let repository: SharedRepository = Arc::new(InMemItemsRepository::new());
    items_server::run(listener, repository).await?;
    Ok(())
}
