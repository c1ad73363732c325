//! Supervisor client used by the liveness monitor

use std::time::{Duration, Instant};

use tokio::time::timeout;
use tracing::{debug, error, info};

use crate::error::LivenessFailure;

/// Client for probing the supervisor's health endpoint
#[derive(Clone)]
pub struct SupervisorClient {
    client: reqwest::Client,
    url: String,
    timeout: Duration,
}

impl SupervisorClient {
    /// Build a client for `endpoint`. A missing scheme defaults to `http://`.
    pub fn new(endpoint: &str, timeout_ms: u64) -> Result<Self, reqwest::Error> {
        let url = normalize_endpoint(endpoint);
        let timeout = Duration::from_millis(timeout_ms);
        info!(url = %url, timeout_ms, "Configured supervisor probe");

        // The supervisor is local; never route the probe through a proxy.
        let client = reqwest::Client::builder()
            .no_proxy()
            .connect_timeout(timeout)
            .timeout(timeout)
            .build()?;

        Ok(Self {
            client,
            url,
            timeout,
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Issue one `GET` against the supervisor.
    ///
    /// Any outcome other than a success status within the timeout is a
    /// [`LivenessFailure`].
    pub async fn ping(&self) -> Result<(), LivenessFailure> {
        debug!(url = %self.url, "Probing supervisor");

        let start = Instant::now();
        let response = timeout(self.timeout, self.client.get(&self.url).send())
            .await
            .map_err(|_| {
                let elapsed = start.elapsed();
                error!(
                    url = %self.url,
                    timeout_ms = %self.timeout.as_millis(),
                    elapsed_ms = %elapsed.as_millis(),
                    "Supervisor probe timeout"
                );
                LivenessFailure::Timeout {
                    elapsed_ms: elapsed.as_millis(),
                }
            })?
            .map_err(|e| {
                error!(url = %self.url, error = %e, "Supervisor probe error");
                classify(e, start.elapsed())
            })?;

        let status = response.status();
        if !status.is_success() {
            error!(url = %self.url, status = %status, "Supervisor reported failure");
            return Err(LivenessFailure::Status(status.as_u16()));
        }

        Ok(())
    }
}

fn classify(error: reqwest::Error, elapsed: Duration) -> LivenessFailure {
    if error.is_timeout() {
        LivenessFailure::Timeout {
            elapsed_ms: elapsed.as_millis(),
        }
    } else if error.is_connect() {
        LivenessFailure::Connect(error.to_string())
    } else {
        LivenessFailure::Transport(error.to_string())
    }
}

fn normalize_endpoint(endpoint: &str) -> String {
    if endpoint.starts_with("http://") || endpoint.starts_with("https://") {
        endpoint.to_string()
    } else {
        format!("http://{}", endpoint)
    }
}
