/// Fire-and-forget startup analytics.
///
/// A single event is posted to the configured collector when the page is mounted. The
/// response body is ignored and failures are only logged; nothing waits on the result.
use std::time::{SystemTime, UNIX_EPOCH};

use serde::Serialize;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

use crate::config::AnalyticsConfig;
use crate::error::AppError;

#[derive(Debug, Clone, Serialize)]
pub struct TelemetryEvent {
    pub event: &'static str,
    pub app: &'static str,
    pub version: &'static str,
    pub mount_id: String,
    pub timestamp_ms: u64,
}

impl TelemetryEvent {
    pub fn startup(mount_id: &str) -> Self {
        let timestamp_ms = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or(0);
        Self {
            event: "pageview",
            app: env!("CARGO_PKG_NAME"),
            version: env!("CARGO_PKG_VERSION"),
            mount_id: mount_id.to_string(),
            timestamp_ms,
        }
    }
}

#[derive(Clone)]
pub struct Telemetry {
    config: AnalyticsConfig,
    http: reqwest::Client,
}

impl Telemetry {
    pub fn new(config: AnalyticsConfig) -> Result<Self, AppError> {
        let http = reqwest::Client::builder()
            .user_agent(concat!("study-hub/", env!("CARGO_PKG_VERSION")))
            .timeout(config.timeout)
            .build()?;
        Ok(Self { config, http })
    }

    pub async fn send(&self, event: &TelemetryEvent) -> Result<(), AppError> {
        self.http
            .post(&self.config.url)
            .json(event)
            .send()
            .await?
            .error_for_status()?;
        Ok(())
    }

    /// Post the startup event on a detached task.
    pub fn report_startup(&self, mount_id: &str) -> JoinHandle<()> {
        let telemetry = self.clone();
        let event = TelemetryEvent::startup(mount_id);
        tokio::spawn(async move {
            match telemetry.send(&event).await {
                Ok(()) => debug!(url = %telemetry.config.url, "startup analytics sent"),
                Err(e) => warn!(error = %e, url = %telemetry.config.url, "startup analytics failed"),
            }
        })
    }
}
