//! Tokenizer sidecar binary
//!
//! ```text
//! tokenizer-sidecar --path /path/to/tokenizer.json
//! ```

use clap::Parser;
use tracing::warn;
use tracing_subscriber::EnvFilter;

use tokenizer_sidecar::tokenizer_service::{
    config::DEFAULT_SUPERVISOR_URL, LivenessMonitor, TokenizerServer, TokenizerServiceConfig,
};

/// Serve encode/decode for one tokenizer until the supervisor goes away
#[derive(Parser, Debug)]
#[command(name = "tokenizer-sidecar")]
struct Args {
    /// Path to the serialized tokenizer (tokenizer.json)
    #[arg(long)]
    path: String,

    /// Interface to bind
    #[arg(long, default_value = "0.0.0.0")]
    host: String,

    /// Port to listen on
    #[arg(long, default_value_t = 8150)]
    port: u16,

    /// Supervisor health endpoint
    #[arg(long, default_value = DEFAULT_SUPERVISOR_URL)]
    supervisor_url: String,

    /// Delay between supervisor probes in milliseconds
    #[arg(long, default_value_t = 2000)]
    probe_interval_ms: u64,

    /// Timeout for a single supervisor probe in milliseconds
    #[arg(long, default_value_t = 2000)]
    probe_timeout_ms: u64,

    /// Do not monitor the supervisor (local development only)
    #[arg(long)]
    no_liveness: bool,
}

impl Args {
    fn into_config(self) -> TokenizerServiceConfig {
        let config = TokenizerServiceConfig::new(self.path)
            .with_host(self.host)
            .with_http_port(self.port)
            .with_supervisor_url(self.supervisor_url)
            .with_probe_interval_ms(self.probe_interval_ms)
            .with_probe_timeout_ms(self.probe_timeout_ms);

        if self.no_liveness {
            config.without_liveness()
        } else {
            config
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Args::parse().into_config();

    // The model must be loaded before anything is served.
    let server = TokenizerServer::new(config.clone())?;

    if config.liveness.enabled {
        LivenessMonitor::from_config(&config.liveness)?.spawn();
    } else {
        warn!("Supervisor liveness monitoring disabled");
    }

    server.serve().await
}
