mod config;
mod routes;

use config::{HostConfig, HostError};

#[tokio::main]
async fn main() -> Result<(), HostError> {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    let config = HostConfig::from_env()?;
    let app = routes::app()?;

    let addr = config.socket_addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!(%addr, "stockroom listening");
    axum::serve(listener, app).await?;
    Ok(())
}
