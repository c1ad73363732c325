//! Configuration for the Tokenizer Service

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Supervisor endpoint probed by the liveness monitor.
pub const DEFAULT_SUPERVISOR_URL: &str = "http://localhost:5059/ping";

/// Configuration for the Tokenizer Service
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenizerServiceConfig {
    /// Host to bind the tokenizer service
    #[serde(default = "default_host")]
    pub host: String,

    /// HTTP port for the tokenizer service
    #[serde(default = "default_http_port")]
    pub http_port: u16,

    /// Path to the serialized tokenizer (`tokenizer.json`)
    pub model_path: String,

    /// How long an idle keep-alive connection is held open, in seconds
    #[serde(default = "default_keep_alive_secs")]
    pub keep_alive_secs: u64,

    /// Enable request logging
    #[serde(default = "default_true")]
    pub log_requests: bool,

    /// Supervisor liveness monitoring
    #[serde(default)]
    pub liveness: LivenessConfig,
}

/// Configuration for the supervisor liveness monitor
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LivenessConfig {
    /// Run the monitor at all. Disabling it is only meant for local development.
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// Supervisor health endpoint
    #[serde(default = "default_supervisor_url")]
    pub supervisor_url: String,

    /// Delay between two probes in milliseconds
    #[serde(default = "default_interval_ms")]
    pub interval_ms: u64,

    /// Upper bound for a single probe in milliseconds
    #[serde(default = "default_probe_timeout_ms")]
    pub probe_timeout_ms: u64,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_http_port() -> u16 {
    8150
}

fn default_keep_alive_secs() -> u64 {
    5
}

fn default_true() -> bool {
    true
}

fn default_supervisor_url() -> String {
    DEFAULT_SUPERVISOR_URL.to_string()
}

fn default_interval_ms() -> u64 {
    2000
}

fn default_probe_timeout_ms() -> u64 {
    2000
}

impl Default for LivenessConfig {
    fn default() -> Self {
        Self {
            enabled: default_true(),
            supervisor_url: default_supervisor_url(),
            interval_ms: default_interval_ms(),
            probe_timeout_ms: default_probe_timeout_ms(),
        }
    }
}

impl LivenessConfig {
    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms)
    }

    pub fn probe_timeout(&self) -> Duration {
        Duration::from_millis(self.probe_timeout_ms)
    }
}

impl Default for TokenizerServiceConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            http_port: default_http_port(),
            model_path: String::new(),
            keep_alive_secs: default_keep_alive_secs(),
            log_requests: default_true(),
            liveness: LivenessConfig::default(),
        }
    }
}

impl TokenizerServiceConfig {
    /// Create a new config with required fields
    pub fn new(model_path: String) -> Self {
        Self {
            model_path,
            ..Default::default()
        }
    }

    /// Builder pattern: set host
    pub fn with_host(mut self, host: String) -> Self {
        self.host = host;
        self
    }

    /// Builder pattern: set HTTP port
    pub fn with_http_port(mut self, port: u16) -> Self {
        self.http_port = port;
        self
    }

    /// Builder pattern: set idle keep-alive
    pub fn with_keep_alive_secs(mut self, secs: u64) -> Self {
        self.keep_alive_secs = secs;
        self
    }

    /// Builder pattern: toggle request logging
    pub fn with_log_requests(mut self, enabled: bool) -> Self {
        self.log_requests = enabled;
        self
    }

    /// Builder pattern: set supervisor URL
    pub fn with_supervisor_url(mut self, url: String) -> Self {
        self.liveness.supervisor_url = url;
        self
    }

    /// Builder pattern: set probe interval
    pub fn with_probe_interval_ms(mut self, interval_ms: u64) -> Self {
        self.liveness.interval_ms = interval_ms;
        self
    }

    /// Builder pattern: set probe timeout
    pub fn with_probe_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.liveness.probe_timeout_ms = timeout_ms;
        self
    }

    /// Builder pattern: disable the liveness monitor
    pub fn without_liveness(mut self) -> Self {
        self.liveness.enabled = false;
        self
    }

    /// Get the HTTP bind address
    pub fn http_bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.http_port)
    }

    pub fn keep_alive(&self) -> Duration {
        Duration::from_secs(self.keep_alive_secs)
    }
}
