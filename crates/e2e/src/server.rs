//! Server management - starting and health checking the mock backend

use std::time::Duration;

use tokio::task::JoinHandle;
use tokio::time::sleep;
use tracing::{info, warn};

use schooltour_server::ApiServer;

use crate::error::{E2eError, E2eResult};

/// Handle to a running backend instance.
///
/// The server runs on an in-process task bound to an ephemeral port, so
/// the suite never depends on a prebuilt binary or a fixed port.
pub struct ServerHandle {
    task: JoinHandle<()>,
    pub base_url: String,
    pub port: u16,
}

impl ServerHandle {
    /// Start a freshly seeded backend and wait until it is healthy.
    pub async fn start() -> E2eResult<Self> {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .map_err(|e| E2eError::ServerStartup(format!("failed to bind: {}", e)))?;
        let port = listener
            .local_addr()
            .map_err(|e| E2eError::ServerStartup(format!("no local addr: {}", e)))?
            .port();
        let base_url = format!("http://127.0.0.1:{}", port);

        info!("Starting mock backend on port {}", port);

        let router = ApiServer::new().router();
        let task = tokio::spawn(async move {
            if let Err(e) = axum::serve(listener, router).await {
                warn!("mock backend exited: {}", e);
            }
        });

        let handle = ServerHandle {
            task,
            base_url: base_url.clone(),
            port,
        };

        handle.wait_for_healthy(Duration::from_secs(10)).await?;

        info!("Server is healthy at {}", base_url);
        Ok(handle)
    }

    /// Wait for the server to respond to health checks
    async fn wait_for_healthy(&self, timeout_duration: Duration) -> E2eResult<()> {
        let health_url = format!("{}/health", self.base_url);
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(2))
            .build()?;

        let start = std::time::Instant::now();
        let mut attempts = 0;

        while start.elapsed() < timeout_duration {
            attempts += 1;

            match client.get(&health_url).send().await {
                Ok(resp) if resp.status().is_success() => {
                    return Ok(());
                }
                Ok(resp) => {
                    warn!("Health check returned {}", resp.status());
                }
                Err(e) => {
                    // Connection refused is expected while the task starts up
                    if !e.is_connect() {
                        warn!("Health check error: {}", e);
                    }
                }
            }

            sleep(Duration::from_millis(50)).await;
        }

        Err(E2eError::ServerHealthCheck(attempts))
    }

    /// Get the base URL for this server
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Stop the server
    pub fn stop(&self) {
        self.task.abort();
    }
}

impl Drop for ServerHandle {
    fn drop(&mut self) {
        self.task.abort();
    }
}
