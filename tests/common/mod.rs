//! Shared utilities for integration testing.

use std::net::SocketAddr;
use std::sync::Arc;

use redirector::config::RedirectorConfig;
use redirector::http::HttpServer;
use redirector::lifecycle::Shutdown;
use redirector::status::Checker;
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

/// A server running on an ephemeral local port.
pub struct TestServer {
    pub addr: SocketAddr,
    pub shutdown: Shutdown,
    pub handle: JoinHandle<Result<(), redirector::http::ServerError>>,
}

impl TestServer {
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }
}

/// Start a server with `config`, ignoring its bind address.
#[allow(dead_code)]
pub async fn start_server(config: RedirectorConfig) -> TestServer {
    start_server_with_checker(config, None).await
}

/// Start a server whose status endpoint consults `checker`.
pub async fn start_server_with_checker(
    config: RedirectorConfig,
    checker: Option<Arc<dyn Checker>>,
) -> TestServer {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let shutdown = Shutdown::new();
    let server = HttpServer::with_checker(config, checker);
    let server_shutdown = shutdown.subscribe();
    let handle = tokio::spawn(async move { server.run(listener, server_shutdown).await });

    TestServer {
        addr,
        shutdown,
        handle,
    }
}

/// A client that never follows redirects.
pub fn client() -> reqwest::Client {
    reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .pool_max_idle_per_host(0)
        .no_proxy()
        .build()
        .unwrap()
}

/// Config with the given upgrade flags.
pub fn config(upgrade_ssl: bool, upgrade_www: bool) -> RedirectorConfig {
    let mut config = RedirectorConfig::default();
    config.listener.bind_address = "127.0.0.1:0".to_string();
    config.redirect.upgrade_ssl = upgrade_ssl;
    config.redirect.upgrade_www = upgrade_www;
    config
}
