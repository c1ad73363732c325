//! Tokenizer Service module
//!
//! This module provides the standalone tokenizer sidecar that:
//! 1. Loads one tokenizer model at startup and shares it read-only
//! 2. Serves `POST /encode` and `POST /decode` over HTTP
//! 3. Probes its supervisor and exits the process once the supervisor is gone
//!
//! # Architecture
//!
//! ```text
//! Supervisor ──POST /encode, /decode──▶ TokenizerServer ──▶ ModelHandle
//!     ▲                                                    (Arc, read-only)
//!     └──────── GET /ping every 2s ──── LivenessMonitor ──▶ exit(1) on failure
//! ```
//!
//! # Testing
//!
//! ## Unit Tests
//!
//! ```bash
//! cargo test -p tokenizer-sidecar --lib
//! ```
//!
//! ## Integration Tests
//!
//! `tests/service.rs` drives the HTTP surface with `reqwest` against a
//! word-level fixture tokenizer; `tests/liveness.rs` runs the monitor
//! against stub supervisors; `tests/process.rs` checks the binary's exit
//! codes on startup and liveness failures.
//!
//! ## Manual Testing
//!
//! 1. Start the sidecar without a supervisor:
//!    ```bash
//!    cargo run -p tokenizer-sidecar -- --path tokenizer.json --no-liveness
//!    ```
//! 2. Send a request:
//!    ```bash
//!    curl -X POST http://localhost:8150/encode -d '{"text": "Hello world"}'
//!    curl -X POST http://localhost:8150/decode -d '{"tokens": [9906, 1917]}'
//!    ```

pub mod client;
pub mod config;
pub mod handlers;
pub mod liveness;
pub mod server;

pub use client::SupervisorClient;
pub use config::{LivenessConfig, TokenizerServiceConfig};
pub use liveness::LivenessMonitor;
pub use server::TokenizerServer;
