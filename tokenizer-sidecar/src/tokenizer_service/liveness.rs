//! Supervisor liveness monitor
//!
//! The sidecar is useless once the process that started it is gone. The
//! monitor probes the supervisor every interval and kills the whole process
//! on the first failed probe: no retry, no graceful drain.

use std::time::Duration;

use tokio::{task::JoinHandle, time::sleep};
use tracing::{error, info};

use super::{client::SupervisorClient, config::LivenessConfig};
use crate::error::LivenessFailure;

pub struct LivenessMonitor {
    client: SupervisorClient,
    interval: Duration,
}

impl LivenessMonitor {
    pub fn new(client: SupervisorClient, interval: Duration) -> Self {
        Self { client, interval }
    }

    pub fn from_config(config: &LivenessConfig) -> Result<Self, reqwest::Error> {
        let client = SupervisorClient::new(&config.supervisor_url, config.probe_timeout_ms)?;
        Ok(Self::new(client, config.interval()))
    }

    /// Probe until the first failure and return its cause. Never returns
    /// while the supervisor stays healthy.
    pub async fn run(self) -> LivenessFailure {
        info!(
            supervisor = %self.client.url(),
            interval_ms = %self.interval.as_millis(),
            "Tokenizer ready"
        );

        loop {
            if let Err(failure) = self.client.ping().await {
                return failure;
            }
            sleep(self.interval).await;
        }
    }

    /// Start the monitor on its own task. The first failure, or a panic
    /// inside the monitor, exits the process with code 1.
    pub fn spawn(self) -> JoinHandle<()> {
        self.spawn_with(terminate)
    }

    /// Like [`LivenessMonitor::spawn`], handing the failure to `on_failure`
    /// instead of exiting.
    pub fn spawn_with<F>(self, on_failure: F) -> JoinHandle<()>
    where
        F: FnOnce(LivenessFailure) + Send + 'static,
    {
        tokio::spawn(async move {
            let failure = match tokio::spawn(self.run()).await {
                Ok(failure) => failure,
                Err(join_error) => LivenessFailure::Panicked(join_error.to_string()),
            };
            on_failure(failure);
        })
    }
}

fn terminate(failure: LivenessFailure) {
    error!(
        kind = failure.kind(),
        error = %failure,
        "Supervisor liveness check failed, terminating process"
    );
    std::process::exit(1);
}
