use std::net::SocketAddr;

use neurodesk::server::Server;
use tracing_subscriber::EnvFilter;

const DEFAULT_ADDR: &str = "127.0.0.1:5050";

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let addr: SocketAddr = match std::env::var("NEURODESK_ADDR")
        .unwrap_or_else(|_| DEFAULT_ADDR.to_string())
        .parse()
    {
        Ok(addr) => addr,
        Err(error) => {
            tracing::error!("invalid NEURODESK_ADDR: {error}");
            std::process::exit(2);
        }
    };

    let mut server = match Server::bind(addr).await {
        Ok(server) => server,
        Err(error) => {
            tracing::error!("failed to start server: {error}");
            std::process::exit(1);
        }
    };
    tracing::info!("neurodesk backend listening on {}", server.addr());

    if let Err(error) = tokio::signal::ctrl_c().await {
        tracing::warn!("failed to listen for ctrl-c: {error}");
    }
    tracing::info!("shutting down");
    let _ = server.shutdown();
}
