//! HTTP server
//!
//! Assembles the customer router with its middleware layers and runs the
//! accept loop. The store handle is constructed once by the caller and
//! injected here; nothing else is shared between requests.

use std::net::SocketAddr;

use axum::http::{header, StatusCode};
use axum::Router;
use bytes::Bytes;
use http_body_util::Full;
use tokio::net::TcpListener;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use super::config::HttpServerConfig;
use super::customer_routes::customer_routes;
use crate::store::CustomerStore;

/// HTTP server for the customer record service
pub struct HttpServer {
    config: HttpServerConfig,
    router: Router,
}

impl HttpServer {
    /// Create a server over an already-opened store
    pub fn new(config: HttpServerConfig, store: CustomerStore) -> Self {
        let router = Self::build_router(store);
        Self { config, router }
    }

    /// Build the router with CORS, request tracing, and the catch-all layer
    fn build_router(store: CustomerStore) -> Router {
        let cors = CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);

        customer_routes(store)
            .layer(cors)
            .layer(TraceLayer::new_for_http())
            .layer(CatchPanicLayer::custom(handle_panic))
    }

    /// Get the socket address
    pub fn socket_addr(&self) -> String {
        self.config.socket_addr()
    }

    /// Get the router (for testing)
    pub fn router(self) -> Router {
        self.router
    }

    /// Bind and serve until the process exits
    pub async fn start(self) -> Result<(), std::io::Error> {
        let addr: SocketAddr = self
            .config
            .socket_addr()
            .parse()
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidInput, e))?;

        tracing::info!(%addr, "customer record service listening");

        let listener = TcpListener::bind(addr).await?;
        axum::serve(listener, self.router).await?;

        Ok(())
    }
}

/// Convert any handler panic into a generic 500 body, leaking no stack detail
fn handle_panic(_err: Box<dyn std::any::Any + Send + 'static>) -> axum::http::Response<Full<Bytes>> {
    tracing::error!("handler panicked");

    let body = serde_json::json!({ "error": "Something went wrong!" }).to_string();
    axum::http::Response::builder()
        .status(StatusCode::INTERNAL_SERVER_ERROR)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Full::from(body))
        .expect("static response must build")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_server_uses_configured_addr() {
        let store = CustomerStore::open_in_memory().await.unwrap();
        let server = HttpServer::new(HttpServerConfig::with_port(8080), store);
        assert_eq!(server.socket_addr(), "0.0.0.0:8080");
    }

    #[tokio::test]
    async fn test_router_builds() {
        let store = CustomerStore::open_in_memory().await.unwrap();
        let server = HttpServer::new(HttpServerConfig::default(), store);
        let _router = server.router();
    }
}
