/// Application bootstrap: mount the catalog page and start the analytics reporter.
///
/// `mount` returns an [`AppHandle`]; the page stays served until the handle is unmounted
/// or dropped.
use std::net::SocketAddr;
use std::sync::Arc;

use tokio::net::TcpListener;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};

use study_catalog::Catalog;

use crate::config::{self, Config};
use crate::error::AppError;
use crate::render::Shell;
use crate::telemetry::Telemetry;
use crate::web::{self, WebState};

pub struct AppHandle {
    local_addr: SocketAddr,
    mount_id: String,
    shutdown: CancellationToken,
    task: Option<JoinHandle<std::io::Result<()>>>,
}

impl AppHandle {
    pub fn local_addr(&self) -> SocketAddr {
        self.local_addr
    }

    pub fn mount_id(&self) -> &str {
        &self.mount_id
    }

    /// Detach the page: stop accepting connections, close MCP sessions, and wait for
    /// in-flight requests.
    pub async fn unmount(mut self) -> Result<(), AppError> {
        self.shutdown.cancel();
        if let Some(task) = self.task.take() {
            match task.await {
                Ok(result) => result.map_err(|e| AppError::Mount(format!("server error: {e}")))?,
                Err(e) => return Err(AppError::Mount(format!("server task failed: {e}"))),
            }
        }
        info!(mount_id = %self.mount_id, "catalog unmounted");
        Ok(())
    }
}

impl Drop for AppHandle {
    fn drop(&mut self) {
        self.shutdown.cancel();
    }
}

/// Mount the catalog at the configured mount point.
///
/// An invalid mount id or an address that cannot be bound is fatal. Analytics failures
/// never are.
pub async fn mount(config: &Config, catalog: Catalog) -> Result<AppHandle, AppError> {
    config::validate_mount_id(&config.mount_id)?;
    catalog.validate()?;

    let listener = TcpListener::bind(config.listen_addr).await.map_err(|e| {
        AppError::Mount(format!("cannot bind {}: {e}", config.listen_addr))
    })?;
    let local_addr = listener
        .local_addr()
        .map_err(|e| AppError::Mount(format!("cannot read bound address: {e}")))?;

    let state = WebState {
        catalog,
        shell: Arc::new(Shell {
            title: config.title.clone(),
            mount_id: config.mount_id.clone(),
        }),
    };
    let shutdown = CancellationToken::new();
    let app = web::router(state, &shutdown);

    let stopped = shutdown.clone().cancelled_owned();
    let task = tokio::spawn(async move {
        axum::serve(listener, app)
            .with_graceful_shutdown(stopped)
            .await
    });
    info!(
        %local_addr,
        mount_id = %config.mount_id,
        guides = catalog.guides().len(),
        links = catalog.links().len(),
        "catalog mounted"
    );

    match &config.analytics {
        Some(analytics) => match Telemetry::new(analytics.clone()) {
            Ok(telemetry) => {
                telemetry.report_startup(&config.mount_id);
            }
            Err(e) => warn!(error = %e, "analytics client unavailable"),
        },
        None => info!("analytics disabled"),
    }

    Ok(AppHandle {
        local_addr,
        mount_id: config.mount_id.clone(),
        shutdown,
        task: Some(task),
    })
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;

    fn test_config() -> Config {
        Config {
            listen_addr: "127.0.0.1:0".parse().unwrap(),
            mount_id: "app".to_string(),
            title: "Study Hub".to_string(),
            analytics: None,
            mcp_stdio: false,
        }
    }

    async fn http_get(addr: SocketAddr, path: &str) -> reqwest::Response {
        reqwest::get(format!("http://{addr}{path}")).await.unwrap()
    }

    #[tokio::test]
    async fn mount_serves_page_until_unmounted() {
        let handle = mount(&test_config(), Catalog::builtin()).await.unwrap();
        let addr = handle.local_addr();
        assert_eq!(handle.mount_id(), "app");

        let response = http_get(addr, "/healthz").await;
        assert!(response.status().is_success());

        let page = http_get(addr, "/?grade=9").await.text().await.unwrap();
        assert!(page.contains(r#"<div id="app" data-mount-root>"#));
        assert!(page.contains("Cell Structure Notes"));

        handle.unmount().await.unwrap();
        assert!(reqwest::get(format!("http://{addr}/healthz")).await.is_err());
    }

    #[tokio::test]
    async fn unmount_closes_open_mcp_streams() {
        let handle = mount(&test_config(), Catalog::builtin()).await.unwrap();
        let url = format!("http://{}/mcp", handle.local_addr());
        let client = reqwest::Client::new();

        let init = client
            .post(&url)
            .header("accept", "application/json, text/event-stream")
            .json(&serde_json::json!({
                "jsonrpc": "2.0",
                "id": 1,
                "method": "initialize",
                "params": {
                    "protocolVersion": "2025-06-18",
                    "capabilities": {},
                    "clientInfo": { "name": "study-hub-tests", "version": "0.1.0" }
                }
            }))
            .send()
            .await
            .unwrap();
        assert!(init.status().is_success());
        let session = init
            .headers()
            .get("mcp-session-id")
            .expect("session id header")
            .to_str()
            .unwrap()
            .to_string();
        drop(init);

        let initialized = client
            .post(&url)
            .header("accept", "application/json, text/event-stream")
            .header("mcp-session-id", &session)
            .json(&serde_json::json!({
                "jsonrpc": "2.0",
                "method": "notifications/initialized"
            }))
            .send()
            .await
            .unwrap();
        assert!(initialized.status().is_success());

        // Held open for the duration of the unmount.
        let stream = client
            .get(&url)
            .header("accept", "text/event-stream")
            .header("mcp-session-id", &session)
            .send()
            .await
            .unwrap();
        assert!(stream.status().is_success());

        tokio::time::timeout(Duration::from_secs(10), handle.unmount())
            .await
            .expect("unmount should not wait on open event streams")
            .unwrap();
        drop(stream);
    }

    #[tokio::test]
    async fn invalid_mount_point_is_fatal() {
        let mut config = test_config();
        config.mount_id = "1 bad id".to_string();
        let Err(err) = mount(&config, Catalog::builtin()).await else {
            panic!("mount should fail");
        };
        assert!(matches!(err, AppError::Mount(_)));
    }

    #[tokio::test]
    async fn occupied_address_is_fatal() {
        let first = mount(&test_config(), Catalog::builtin()).await.unwrap();
        let mut config = test_config();
        config.listen_addr = first.local_addr();
        let Err(err) = mount(&config, Catalog::builtin()).await else {
            panic!("second bind should fail");
        };
        assert!(err.to_string().contains("cannot bind"));
        first.unmount().await.unwrap();
    }
}
