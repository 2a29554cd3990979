//! Minimal upload example server: acknowledges and forgets.

use anyhow::Result;
use tracing_subscriber::EnvFilter;

const DEFAULT_PORT: u16 = 5000;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let app = blobread_host::ack_router();

    let addr = format!("127.0.0.1:{DEFAULT_PORT}");
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(%addr, "ack upload example listening");
    axum::serve(listener, app).await?;
    Ok(())
}
