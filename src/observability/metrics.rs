//! Metrics collection and exposition.
//!
//! # Metrics
//! - `redirector_decisions_total` (counter): redirect decisions by outcome
//!   (`redirect` or `no_action`)
//!
//! # Design Decisions
//! - Recording is a no-op until an exporter is installed
//! - The Prometheus exporter is opt-in (`METRICS_LISTEN`)

use std::net::SocketAddr;

use metrics_exporter_prometheus::{BuildError, PrometheusBuilder};

pub const DECISIONS_TOTAL: &str = "redirector_decisions_total";

/// Install the Prometheus exporter listening on `addr`.
pub fn init_metrics(addr: SocketAddr) -> Result<(), BuildError> {
    PrometheusBuilder::new().with_http_listener(addr).install()?;
    tracing::info!(address = %addr, "Metrics exporter listening");
    Ok(())
}

/// Count one redirect decision.
pub fn record_decision(redirected: bool) {
    let outcome = if redirected { "redirect" } else { "no_action" };
    metrics::counter!(DECISIONS_TOTAL, "outcome" => outcome).increment(1);
}
