//! Storing upload example server.
//!
//! Serves the demo pages and writes each uploaded field to the uploads
//! directory, answering with the stored name.

use std::path::PathBuf;

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

    let upload_dir = std::env::var("BLOBREAD_UPLOAD_DIR")
        .map_or_else(|_| PathBuf::from("uploads"), PathBuf::from);
    let app = blobread_host::storing_router(upload_dir.clone());

    let addr = format!("127.0.0.1:{DEFAULT_PORT}");
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(%addr, dir = %upload_dir.display(), "storing upload example listening");
    axum::serve(listener, app).await?;
    Ok(())
}
