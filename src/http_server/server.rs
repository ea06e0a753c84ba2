//! # HTTP Server
//!
//! Main HTTP server combining the liveness and test case routers.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::http::HeaderValue;
use axum::Router;
use tokio::net::TcpListener;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

use super::observability_routes::health_routes;
use super::testcase_routes::{testcase_routes, TestCaseState};

/// HTTP server for the test case API
pub struct HttpServer {
    addr: SocketAddr,
    cors_origins: Vec<HeaderValue>,
    state: Arc<TestCaseState>,
}

impl HttpServer {
    /// Create a server for `addr` around the given handler state.
    ///
    /// Any origin is allowed until `with_cors_origins` narrows it.
    pub fn new(addr: SocketAddr, state: TestCaseState) -> Self {
        Self {
            addr,
            cors_origins: Vec::new(),
            state: Arc::new(state),
        }
    }

    /// Restrict CORS to these origins; an empty list allows any origin
    pub fn with_cors_origins(mut self, origins: Vec<HeaderValue>) -> Self {
        self.cors_origins = origins;
        self
    }

    fn cors_layer(&self) -> CorsLayer {
        let cors = CorsLayer::new().allow_methods(Any).allow_headers(Any);
        if self.cors_origins.is_empty() {
            cors.allow_origin(Any)
        } else {
            cors.allow_origin(AllowOrigin::list(self.cors_origins.iter().cloned()))
        }
    }

    /// Address the server binds to
    pub fn socket_addr(&self) -> SocketAddr {
        self.addr
    }

    /// Combined router with all endpoints, CORS and request tracing
    pub fn router(&self) -> Router {
        Router::new()
            .merge(health_routes())
            .merge(testcase_routes(Arc::clone(&self.state)))
            .layer(TraceLayer::new_for_http())
            .layer(self.cors_layer())
    }

    /// Start the HTTP server and serve until Ctrl-C
    pub async fn start(self) -> Result<(), std::io::Error> {
        let listener = TcpListener::bind(self.addr).await?;
        info!(addr = %self.addr, "TMS HTTP server listening");

        axum::serve(listener, self.router())
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        info!("TMS HTTP server stopped");
        Ok(())
    }
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_err() {
        // No signal handler available; serve until the process is killed
        std::future::pending::<()>().await;
    }
}
