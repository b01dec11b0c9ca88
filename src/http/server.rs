//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Wire the redirect handler behind the status multiplexer
//! - Create the Axum Router with a single fallback dispatching to it
//! - Wire up middleware (tracing, timeout, request ID)
//! - Serve on a listener until shutdown is signalled

use std::sync::Arc;
use std::time::Duration;

use axum::{
    body::Body,
    extract::State,
    http::{Request, Response},
    Router,
};
use thiserror::Error;
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower_http::{
    request_id::SetRequestIdLayer,
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::config::RedirectorConfig;
use crate::http::handler::Handler;
use crate::http::request::{request_id, UuidRequestId, X_REQUEST_ID};
use crate::redirect::RedirectHandler;
use crate::routing::StatusMux;
use crate::status::Checker;

/// Errors raised while running the server.
#[derive(Debug, Error)]
pub enum ServerError {
    /// Failed to bind the listen address.
    #[error("failed to bind {address}: {source}")]
    Bind {
        address: String,
        #[source]
        source: std::io::Error,
    },

    /// The server stopped with an I/O error.
    #[error("http server failed: {0}")]
    Serve(#[from] std::io::Error),
}

/// Application state injected into the dispatch handler.
#[derive(Clone)]
pub struct AppState {
    pub handler: Arc<dyn Handler>,
}

/// Build the request handler chain described by `config`.
pub fn build_handler(
    config: &RedirectorConfig,
    checker: Option<Arc<dyn Checker>>,
) -> Arc<dyn Handler> {
    let redirector = RedirectHandler::new(config.redirect.upgrade_ssl, config.redirect.upgrade_www);
    Arc::new(StatusMux::new(
        Arc::new(redirector),
        checker,
        &config.status.version,
        &config.status.path,
    ))
}

/// HTTP server for the redirector.
pub struct HttpServer {
    router: Router,
    config: RedirectorConfig,
}

impl HttpServer {
    /// Create a server with no status checker (always online).
    pub fn new(config: RedirectorConfig) -> Self {
        Self::with_checker(config, None)
    }

    /// Create a server whose status endpoint consults `checker`.
    pub fn with_checker(config: RedirectorConfig, checker: Option<Arc<dyn Checker>>) -> Self {
        let handler = build_handler(&config, checker);
        Self::with_handler(config, handler)
    }

    /// Create a server dispatching every request to `handler`.
    pub fn with_handler(config: RedirectorConfig, handler: Arc<dyn Handler>) -> Self {
        let router = Self::build_router(&config, AppState { handler });
        Self { router, config }
    }

    /// Build the Axum router with all middleware layers.
    #[allow(deprecated)]
    fn build_router(config: &RedirectorConfig, state: AppState) -> Router {
        Router::new()
            .fallback(dispatch)
            .with_state(state)
            .layer(TimeoutLayer::new(Duration::from_secs(config.timeouts.request_secs)))
            .layer(TraceLayer::new_for_http().make_span_with(|request: &Request<Body>| {
                tracing::info_span!(
                    "request",
                    request_id = %request_id(request),
                    method = %request.method(),
                    uri = %request.uri(),
                )
            }))
            .layer(SetRequestIdLayer::new(X_REQUEST_ID, UuidRequestId))
    }

    /// The configured router, for driving the server without a socket.
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    /// Bind the configured listen address.
    pub async fn bind(&self) -> Result<TcpListener, ServerError> {
        let address = &self.config.listener.bind_address;
        TcpListener::bind(address)
            .await
            .map_err(|source| ServerError::Bind {
                address: address.clone(),
                source,
            })
    }

    /// Run the server, accepting connections on the given listener until
    /// `shutdown` fires.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), ServerError> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            upgrade_ssl = self.config.redirect.upgrade_ssl,
            upgrade_www = self.config.redirect.upgrade_www,
            status_path = %self.config.status.path,
            "HTTP server starting"
        );

        axum::serve(listener, self.router.into_make_service())
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
                tracing::info!("Shutdown signal received");
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}

/// Hand every request to the handler chain.
async fn dispatch(State(state): State<AppState>, request: Request<Body>) -> Response<Body> {
    state.handler.handle(&request)
}
