//! HTTP redirector.
//!
//! # Architecture Overview
//!
//! ```text
//!                    ┌──────────────────────────────────────────────────┐
//!                    │                    REDIRECTOR                    │
//!   Client Request   │  ┌────────┐    ┌───────────┐    ┌─────────────┐  │
//!   ─────────────────┼─▶│  axum  │───▶│ StatusMux │─┬─▶│StatusHandler│  │
//!                    │  │ server │    │ (prefix)  │ │  └─────────────┘  │
//!                    │  └────────┘    └───────────┘ │  ┌─────────────┐  │
//!                    │                              └─▶│  Redirect   │  │
//!   307 / 404 / JSON │                                 │  Handler    │  │
//!   ◀────────────────┼─────────────────────────────────┴─────────────┘  │
//!                    └──────────────────────────────────────────────────┘
//! ```
//!
//! Configured from the environment: `SSL`, `WWW`, `LISTEN`, `STATUS`,
//! `VERSION`, `METRICS_LISTEN`, `REDIRECTOR_CONFIG`, `RUST_LOG`.

use std::net::SocketAddr;
use std::process::ExitCode;

use redirector::config;
use redirector::http::HttpServer;
use redirector::lifecycle::{signals, Shutdown};
use redirector::observability;

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("redirector: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config = config::from_env()
        .map_err(|e| format!("failed to load configuration: {}", e))?;

    observability::init_logging(&config.observability)?;

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        bind_address = %config.listener.bind_address,
        upgrade_ssl = config.redirect.upgrade_ssl,
        upgrade_www = config.redirect.upgrade_www,
        status_path = %config.status.path,
        "redirector starting"
    );

    if let Some(address) = &config.observability.metrics_address {
        let addr: SocketAddr = address.parse()?;
        observability::init_metrics(addr)?;
    }

    let server = HttpServer::new(config);
    let listener = server.bind().await?;

    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();
    signals::spawn_signal_listener(shutdown);

    server.run(listener, server_shutdown).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
