//! Shared helpers for the integration tests.

#![allow(dead_code)]

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::{
    atomic::{AtomicBool, AtomicUsize, Ordering},
    Arc,
};
use std::time::Duration;

use axum::{extract::State, http::StatusCode, routing::get, Router};
use tokio::net::TcpListener;

use tokenizer_sidecar::{TokenizerServer, TokenizerServiceConfig};

/// Vocabulary of `tests/fixtures/word_level.json`, in id order starting at 3.
pub const WORDS: [&str; 6] = ["hello", "world", "the", "quick", "brown", "fox"];

pub fn fixture_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/word_level.json")
}

pub fn http_client() -> reqwest::Client {
    reqwest::Client::builder()
        .no_proxy()
        .build()
        .expect("build reqwest client")
}

pub fn fixture_config() -> TokenizerServiceConfig {
    TokenizerServiceConfig::new(fixture_path().display().to_string())
        .with_log_requests(false)
        .without_liveness()
}

/// Start the tokenizer server on an ephemeral loopback port.
pub async fn spawn_tokenizer_server() -> SocketAddr {
    spawn_tokenizer_server_with(fixture_config()).await
}

pub async fn spawn_tokenizer_server_with(config: TokenizerServiceConfig) -> SocketAddr {
    let server = TokenizerServer::new(config).expect("fixture tokenizer loads");

    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(server.serve_with_listener(listener));

    addr
}

/// Stub supervisor whose `/ping` answers 200 while `healthy` is set and 503
/// otherwise. Counts the probes it receives.
#[derive(Clone, Default)]
pub struct StubSupervisor {
    pub healthy: Arc<AtomicBool>,
    pub probes: Arc<AtomicUsize>,
    pub delay: Option<Duration>,
}

impl StubSupervisor {
    pub fn healthy() -> Self {
        let stub = Self::default();
        stub.healthy.store(true, Ordering::SeqCst);
        stub
    }

    pub fn failing() -> Self {
        Self::default()
    }

    pub fn hanging(delay: Duration) -> Self {
        Self {
            delay: Some(delay),
            ..Self::healthy()
        }
    }

    pub fn probe_count(&self) -> usize {
        self.probes.load(Ordering::SeqCst)
    }

    /// Serve `/ping` on an ephemeral port and return its URL.
    pub async fn spawn(&self) -> String {
        let router = Router::new()
            .route("/ping", get(ping_handler))
            .with_state(self.clone());

        let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
        let addr = listener.local_addr().expect("local addr");
        tokio::spawn(async move {
            let _ = axum::serve(listener, router).await;
        });

        format!("http://{addr}/ping")
    }
}

async fn ping_handler(State(stub): State<StubSupervisor>) -> StatusCode {
    stub.probes.fetch_add(1, Ordering::SeqCst);
    if let Some(delay) = stub.delay {
        tokio::time::sleep(delay).await;
    }
    if stub.healthy.load(Ordering::SeqCst) {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    }
}

/// A loopback URL nothing listens on.
pub async fn unreachable_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("local addr");
    drop(listener);
    format!("http://{addr}/ping")
}
