//! # HTTP Server
//!
//! Assembles the router and owns the serve lifecycle. `start` returns once
//! the socket is bound so callers learn the actual address even when the
//! configured port is 0 (the test harness relies on this), and the returned
//! handle supports graceful shutdown via `stop`.

use std::io;
use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use tokio::net::TcpListener;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::config::ServerConfig;
use crate::store::PostStore;

use super::routes::{health_routes, post_routes, AppState};

pub struct HttpServer {
    config: ServerConfig,
    router: Router,
}

impl HttpServer {
    pub fn new(config: ServerConfig, store: Arc<dyn PostStore>) -> Self {
        let router = Self::build_router(&config, store);
        Self { config, router }
    }

    fn build_router(config: &ServerConfig, store: Arc<dyn PostStore>) -> Router {
        let state = AppState { store };

        let cors = if config.cors_origins.is_empty() {
            // No origins configured: permissive, for development
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any)
        } else {
            let origins: Vec<_> = config
                .cors_origins
                .iter()
                .filter_map(|s| s.parse().ok())
                .collect();
            CorsLayer::new()
                .allow_origin(AllowOrigin::list(origins))
                .allow_methods(Any)
                .allow_headers(Any)
        };

        Router::new()
            .merge(health_routes())
            .merge(post_routes(state))
            .layer(cors)
            .layer(TraceLayer::new_for_http())
    }

    /// Get the configured socket address
    pub fn socket_addr(&self) -> String {
        self.config.socket_addr()
    }

    /// Get the router (for testing)
    pub fn router(self) -> Router {
        self.router
    }

    /// Bind the listener and start serving.
    pub async fn start(self) -> io::Result<ServerHandle> {
        let addr: SocketAddr = self.config.socket_addr().parse().map_err(|e| {
            io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("invalid listen address: {e}"),
            )
        })?;

        let listener = TcpListener::bind(addr).await?;
        let local_addr = listener.local_addr()?;
        let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();

        tracing::info!(%local_addr, "serving blog post api");

        let task = tokio::spawn(async move {
            axum::serve(listener, self.router)
                .with_graceful_shutdown(async move {
                    let _ = shutdown_rx.await;
                })
                .await
        });

        Ok(ServerHandle {
            local_addr,
            shutdown_tx,
            task,
        })
    }
}

/// Handle to a running server. Dropping the handle also shuts the server
/// down, since closing the shutdown channel resolves the graceful-shutdown
/// future.
pub struct ServerHandle {
    local_addr: SocketAddr,
    shutdown_tx: oneshot::Sender<()>,
    task: JoinHandle<io::Result<()>>,
}

impl ServerHandle {
    /// The address actually bound
    pub fn local_addr(&self) -> SocketAddr {
        self.local_addr
    }

    pub fn base_url(&self) -> String {
        format!("http://{}", self.local_addr)
    }

    /// Signal graceful shutdown and wait for in-flight requests to drain.
    pub async fn stop(self) -> io::Result<()> {
        let _ = self.shutdown_tx.send(());
        Self::join_task(self.task).await
    }

    /// Wait for the server without requesting shutdown.
    pub async fn join(self) -> io::Result<()> {
        Self::join_task(self.task).await
    }

    async fn join_task(task: JoinHandle<io::Result<()>>) -> io::Result<()> {
        match task.await {
            Ok(result) => result,
            Err(join_err) => Err(io::Error::new(io::ErrorKind::Other, join_err)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;

    fn create_test_server() -> HttpServer {
        HttpServer::new(ServerConfig::default(), Arc::new(MemoryStore::new()))
    }

    #[test]
    fn test_server_creation() {
        let server = create_test_server();
        assert_eq!(server.socket_addr(), "127.0.0.1:7070");
    }

    #[test]
    fn test_router_builds() {
        let server = create_test_server();
        let _router = server.router();
    }

    #[tokio::test]
    async fn test_start_and_stop_on_ephemeral_port() {
        let config = ServerConfig::with_port(0);
        let server = HttpServer::new(config, Arc::new(MemoryStore::new()));

        let handle = server.start().await.unwrap();
        assert_ne!(handle.local_addr().port(), 0);
        handle.stop().await.unwrap();
    }
}
