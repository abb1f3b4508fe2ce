use axum::http::HeaderValue;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Serialize;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::sync::oneshot;
use tower_http::cors::{AllowHeaders, AllowMethods, CorsLayer};
use utoipa::ToSchema;

use crate::command::CommandPlanner;

pub mod commands;
pub mod error;
pub mod openapi;

/// Origins the desktop client's dev servers run on. Electron itself loads
/// `file://` and proxies through its main process, but web dev still hits us
/// directly from these.
const ALLOWED_ORIGINS: [&str; 4] = [
    "http://localhost:5173",
    "http://localhost:3000",
    "http://localhost:5123",
    "http://127.0.0.1:5173",
];

pub struct Server {
    addr: SocketAddr,
    shutdown: Option<oneshot::Sender<()>>,
}

impl Server {
    /// Bind `addr` and start serving on a background task. Port 0 picks a
    /// free port; the bound address is available via [`Server::addr`].
    pub async fn bind(addr: SocketAddr) -> Result<Self, String> {
        let state = Arc::new(ServerState {
            planner: CommandPlanner::new(),
        });
        let app = router(state);
        let listener = TcpListener::bind(addr)
            .await
            .map_err(|error| error.to_string())?;
        let addr = listener
            .local_addr()
            .map_err(|error| error.to_string())?;
        let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();

        tokio::spawn(async move {
            let _ = axum::serve(listener, app)
                .with_graceful_shutdown(async move {
                    let _ = shutdown_rx.await;
                })
                .await;
        });

        Ok(Server {
            addr,
            shutdown: Some(shutdown_tx),
        })
    }

    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    pub fn shutdown(&mut self) -> Result<(), String> {
        if let Some(sender) = self.shutdown.take() {
            sender
                .send(())
                .map_err(|_| "failed to send server shutdown signal".to_string())
        } else {
            Ok(())
        }
    }
}

impl Drop for Server {
    fn drop(&mut self) {
        let _ = self.shutdown();
    }
}

fn router(state: Arc<ServerState>) -> Router {
    let origins: Vec<HeaderValue> = ALLOWED_ORIGINS
        .into_iter()
        .map(HeaderValue::from_static)
        .collect();
    // Credentials rule out the wildcard, so methods and headers mirror the
    // preflight request instead.
    let cors = CorsLayer::new()
        .allow_origin(origins)
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true);
    Router::new()
        .route("/health", get(health))
        .route("/api/hello", get(hello))
        .route("/commands/run", post(commands::run_command))
        .with_state(state)
        .layer(cors)
}

#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    pub ok: bool,
}

#[utoipa::path(
    get,
    path = "/health",
    tag = "system",
    responses((status = 200, body = HealthResponse))
)]
pub(crate) async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { ok: true })
}

#[derive(Debug, Serialize, ToSchema)]
pub struct HelloResponse {
    pub message: String,
}

#[utoipa::path(
    get,
    path = "/api/hello",
    tag = "system",
    responses((status = 200, body = HelloResponse))
)]
pub(crate) async fn hello() -> Json<HelloResponse> {
    Json(HelloResponse {
        message: "Hello from backend!".to_string(),
    })
}

pub(crate) struct ServerState {
    pub(crate) planner: CommandPlanner,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    async fn start() -> Server {
        Server::bind("127.0.0.1:0".parse().expect("addr"))
            .await
            .expect("start")
    }

    #[tokio::test]
    async fn binds_a_random_port() {
        let mut server = start().await;
        assert_ne!(server.addr().port(), 0);
        server.shutdown().expect("shutdown");
    }

    #[tokio::test]
    async fn shutdown_twice_is_ok() {
        let mut server = start().await;
        server.shutdown().expect("first shutdown");
        server.shutdown().expect("second shutdown");
    }

    #[tokio::test]
    async fn health_reports_ok() {
        let server = start().await;
        let body: Value = reqwest::get(format!("http://{}/health", server.addr()))
            .await
            .expect("request")
            .json()
            .await
            .expect("body");
        assert_eq!(body, json!({ "ok": true }));
    }

    #[tokio::test]
    async fn hello_greets() {
        let server = start().await;
        let body: Value = reqwest::get(format!("http://{}/api/hello", server.addr()))
            .await
            .expect("request")
            .json()
            .await
            .expect("body");
        assert_eq!(body, json!({ "message": "Hello from backend!" }));
    }

    #[tokio::test]
    async fn cors_allows_listed_origin_with_credentials() {
        let server = start().await;
        let response = reqwest::Client::new()
            .get(format!("http://{}/health", server.addr()))
            .header("Origin", "http://localhost:5173")
            .send()
            .await
            .expect("request");
        let headers = response.headers();
        assert_eq!(
            headers
                .get("access-control-allow-origin")
                .and_then(|v| v.to_str().ok()),
            Some("http://localhost:5173")
        );
        assert_eq!(
            headers
                .get("access-control-allow-credentials")
                .and_then(|v| v.to_str().ok()),
            Some("true")
        );
    }
}
