mod config;
mod error;
mod routes;

use crate::config::HostConfig;
use crate::error::HostError;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    if let Err(e) = run().await {
        tracing::error!(error = %e, "liftgrid host failed");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), HostError> {
    if let Err(e) = dotenvy::dotenv() {
        tracing::debug!(error = %e, "no .env file loaded");
    }

    let config = HostConfig::from_env()?;
    let app = routes::app()?;
    let listener = tokio::net::TcpListener::bind(config.bind_addr()).await?;

    tracing::info!(addr = %config.bind_addr(), "liftgrid listening");
    axum::serve(listener, app).await?;
    Ok(())
}
