//! Tokenizer Service Server
//!
//! HTTP server that exposes the encode and decode endpoints.

use std::sync::Arc;
use std::time::Duration;

use axum::{
    routing::{get, post},
    Router,
};
use hyper::server::conn::http1;
use hyper_util::{
    rt::{TokioIo, TokioTimer},
    service::TowerToHyperService,
};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::{debug, error, info, warn};

use super::{
    config::TokenizerServiceConfig,
    handlers::{self, HandlerState},
};
use crate::{
    error::LoadError,
    tokenizer::{ModelHandle, TokenModel},
};

/// Tokenizer Service Server
pub struct TokenizerServer {
    config: TokenizerServiceConfig,
    model: Arc<dyn TokenModel>,
}

impl TokenizerServer {
    /// Create a new TokenizerServer, loading the model named in `config`.
    ///
    /// The model is fully loaded before this returns; nothing is bound yet.
    pub fn new(config: TokenizerServiceConfig) -> Result<Self, LoadError> {
        info!("Loading tokenizer from: {}", config.model_path);

        let model = ModelHandle::load(&config.model_path).map_err(|e| {
            error!(
                model_path = %config.model_path,
                error = %e,
                "Failed to load tokenizer"
            );
            e
        })?;

        Ok(Self {
            config,
            model: Arc::new(model),
        })
    }

    /// Create with a pre-loaded model (for testing or custom setup)
    pub fn with_components(config: TokenizerServiceConfig, model: Arc<dyn TokenModel>) -> Self {
        Self { config, model }
    }

    /// Build the Axum router
    pub fn build_router(&self) -> Router {
        let state = Arc::new(HandlerState::new(self.model.clone()));

        let router = Router::new()
            .route("/encode", post(handlers::encode_handler))
            .route("/decode", post(handlers::decode_handler))
            .route("/health", get(handlers::health_handler))
            .with_state(state);

        if self.config.log_requests {
            router.layer(TraceLayer::new_for_http())
        } else {
            router
        }
    }

    /// Bind the configured address and serve until the process stops
    pub async fn serve(self) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let addr = self.config.http_bind_addr();
        info!("Starting TokenizerServer on {}", addr);

        let listener = TcpListener::bind(&addr).await.map_err(|e| {
            error!(addr = %addr, error = %e, "Failed to bind listener");
            format!("Failed to bind {}: {}", addr, e)
        })?;

        self.serve_with_listener(listener).await
    }

    /// Serve on an already bound listener.
    ///
    /// Connections are driven by hyper directly so that idle keep-alive
    /// connections are closed after `keep_alive_secs`. Only HTTP/1 is
    /// spoken; an HTTP/2 preface is rejected as a malformed request.
    pub async fn serve_with_listener(
        self,
        listener: TcpListener,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let router = self.build_router();
        let keep_alive = self.config.keep_alive();
        info!(
            addr = %listener.local_addr()?,
            keep_alive_secs = keep_alive.as_secs(),
            "TokenizerServer listening"
        );

        loop {
            let (stream, remote_addr) = match listener.accept().await {
                Ok(conn) => conn,
                Err(e) => {
                    warn!(error = %e, "Failed to accept connection");
                    tokio::time::sleep(Duration::from_millis(100)).await;
                    continue;
                }
            };

            let service = TowerToHyperService::new(router.clone());
            tokio::spawn(async move {
                let mut builder = http1::Builder::new();
                builder
                    .timer(TokioTimer::new())
                    .keep_alive(true)
                    .header_read_timeout(keep_alive);

                if let Err(e) = builder
                    .serve_connection(TokioIo::new(stream), service)
                    .await
                {
                    debug!(remote = %remote_addr, error = %e, "Connection closed with error");
                }
            });
        }
    }
}
