//! Chat HTTP server.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    extract::DefaultBodyLimit,
    http::{header, HeaderValue},
    routing::{any, get},
    Router,
};
use tokio::net::TcpListener;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::TraceLayer;

use super::handlers::{chat, health_check, panic_fallback};
use crate::domain::models::ServerConfig;
use crate::services::ReplyPipeline;

/// Headers browsers may send on the chat endpoint.
pub const CORS_ALLOW_HEADERS: &str = "authorization, x-client-info, apikey, content-type";

/// Largest accepted request body.
pub const MAX_BODY_BYTES: usize = 64 * 1024;

/// Shared state for the chat HTTP server.
#[derive(Clone)]
pub struct AppState {
    pub pipeline: Arc<ReplyPipeline>,
}

/// Build the router: `/chat` and `/health`.
pub fn build_router(pipeline: Arc<ReplyPipeline>) -> Router {
    let state = AppState { pipeline };

    let chat_routes = Router::new()
        .route("/chat", any(chat))
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        // Panic responses get the CORS headers too
        .layer(CatchPanicLayer::custom(panic_fallback))
        .layer(SetResponseHeaderLayer::overriding(
            header::ACCESS_CONTROL_ALLOW_ORIGIN,
            HeaderValue::from_static("*"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            header::ACCESS_CONTROL_ALLOW_HEADERS,
            HeaderValue::from_static(CORS_ALLOW_HEADERS),
        ));

    Router::new()
        .route("/health", get(health_check))
        .merge(chat_routes)
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}

/// Chat HTTP Server.
pub struct ChatHttpServer {
    config: ServerConfig,
    pipeline: Arc<ReplyPipeline>,
}

impl ChatHttpServer {
    pub const fn new(pipeline: Arc<ReplyPipeline>, config: ServerConfig) -> Self {
        Self { config, pipeline }
    }

    fn addr(&self) -> Result<SocketAddr, std::net::AddrParseError> {
        format!("{}:{}", self.config.host, self.config.port).parse()
    }

    /// Start the server.
    pub async fn serve(self) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        self.serve_with_shutdown(std::future::pending()).await
    }

    /// Start the server with a shutdown signal.
    pub async fn serve_with_shutdown<F>(
        self,
        shutdown: F,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>>
    where
        F: std::future::Future<Output = ()> + Send + 'static,
    {
        let addr = self.addr()?;
        let router = build_router(self.pipeline);

        tracing::info!("Chat HTTP server listening on {}", addr);

        let listener = TcpListener::bind(addr).await?;
        axum::serve(listener, router)
            .with_graceful_shutdown(shutdown)
            .await?;
        Ok(())
    }
}
