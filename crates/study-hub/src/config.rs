use std::net::SocketAddr;
use std::time::Duration;

use regex::Regex;

use crate::error::AppError;

const DEFAULT_LISTEN_ADDR: &str = "127.0.0.1:8080";
const DEFAULT_MOUNT_ID: &str = "app";
const DEFAULT_TITLE: &str = "Study Hub";
const DEFAULT_ANALYTICS_TIMEOUT_SECS: u64 = 5;

/// Application configuration loaded explicitly from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Address the page is served on.
    pub listen_addr: SocketAddr,
    /// Id of the element in the page shell that hosts the catalog root.
    pub mount_id: String,
    /// Page title.
    pub title: String,
    /// Startup analytics settings. `None` disables reporting.
    pub analytics: Option<AnalyticsConfig>,
    /// Serve the MCP tools on stdio instead of HTTP.
    pub mcp_stdio: bool,
}

#[derive(Debug, Clone)]
pub struct AnalyticsConfig {
    pub url: String,
    pub timeout: Duration,
}

impl Config {
    /// Optional:
    /// - `STUDY_HUB_LISTEN_ADDR` (default: "127.0.0.1:8080")
    /// - `STUDY_HUB_MOUNT_ID` (default: "app")
    /// - `STUDY_HUB_TITLE` (default: "Study Hub")
    /// - `ANALYTICS_URL`: collector endpoint; reporting is off when unset
    /// - `ANALYTICS_ENABLED` (default: true)
    /// - `ANALYTICS_TIMEOUT_SECS` (default: 5)
    /// - `MCP_STDIO` (default: false)
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, AppError> {
        let listen_raw =
            lookup("STUDY_HUB_LISTEN_ADDR").unwrap_or_else(|| DEFAULT_LISTEN_ADDR.to_string());
        let listen_addr = listen_raw.parse::<SocketAddr>().map_err(|e| {
            AppError::Config(format!("STUDY_HUB_LISTEN_ADDR '{listen_raw}' is invalid: {e}"))
        })?;

        let mount_id = lookup("STUDY_HUB_MOUNT_ID").unwrap_or_else(|| DEFAULT_MOUNT_ID.to_string());
        validate_mount_id(&mount_id)?;

        let title = lookup("STUDY_HUB_TITLE")
            .filter(|t| !t.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_TITLE.to_string());

        let analytics_enabled = lookup("ANALYTICS_ENABLED")
            .map(|v| parse_flag("ANALYTICS_ENABLED", &v))
            .transpose()?
            .unwrap_or(true);

        let timeout = lookup("ANALYTICS_TIMEOUT_SECS")
            .and_then(|s| s.parse::<u64>().ok())
            .map(Duration::from_secs)
            .unwrap_or_else(|| Duration::from_secs(DEFAULT_ANALYTICS_TIMEOUT_SECS));

        let analytics = lookup("ANALYTICS_URL")
            .filter(|_| analytics_enabled)
            .filter(|u| !u.trim().is_empty())
            .map(|url| AnalyticsConfig {
                url: url.trim().to_string(),
                timeout,
            });

        let mcp_stdio = lookup("MCP_STDIO")
            .map(|v| parse_flag("MCP_STDIO", &v))
            .transpose()?
            .unwrap_or(false);

        Ok(Self {
            listen_addr,
            mount_id,
            title,
            analytics,
            mcp_stdio,
        })
    }
}

/// The mount id lands in an HTML `id` attribute and a CSS selector, so keep it to a
/// plain identifier.
pub fn validate_mount_id(mount_id: &str) -> Result<(), AppError> {
    let id_re = Regex::new(r"^[A-Za-z][A-Za-z0-9_-]*$").expect("valid regex");
    if id_re.is_match(mount_id) {
        Ok(())
    } else {
        Err(AppError::Mount(format!(
            "mount point id '{mount_id}' is not a valid element id"
        )))
    }
}

fn parse_flag(name: &str, value: &str) -> Result<bool, AppError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => Err(AppError::Config(format!("{name} must be a boolean, got '{other}'"))),
    }
}
