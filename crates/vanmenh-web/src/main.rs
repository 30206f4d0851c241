//! Vanmenh Web Server
//!
//! Run with: cargo run -p vanmenh-web

use std::net::SocketAddr;
use std::sync::Arc;

use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    info!("Starting Vanmenh Web Server...");

    let config = vanmenh_config::Config::load()?;
    let api_key = vanmenh_config::groq_api_key()?;

    let state = Arc::new(vanmenh_web::state::AppState::from_config(&config, api_key)?);
    let app = vanmenh_web::router::build_router(state);

    let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port).parse()?;
    info!("Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
