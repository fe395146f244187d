use std::time::Duration;

use anyhow::Context as _;

/// Gateway configuration loaded from environment variables.
#[derive(Debug)]
pub struct GatewayConfig {
    /// Base URL of the users service (e.g. "http://users:8081"). Env var: `USERS_SERVICE_URL`.
    pub users_service_url: String,
    /// TCP port for the HTTP server (default 8080). Env var: `GATEWAY_PORT`.
    pub gateway_port: u16,
    /// Per-request timeout for calls to the users service (default 5000 ms).
    /// Env var: `USERS_SERVICE_TIMEOUT_MS`.
    pub users_service_timeout: Duration,
}

impl GatewayConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Ok(Self {
            users_service_url: std::env::var("USERS_SERVICE_URL")
                .context("USERS_SERVICE_URL is not set")?,
            gateway_port: match std::env::var("GATEWAY_PORT") {
                Ok(v) => v.parse().context("GATEWAY_PORT is not a valid port")?,
                Err(_) => 8080,
            },
            users_service_timeout: match std::env::var("USERS_SERVICE_TIMEOUT_MS") {
                Ok(v) => Duration::from_millis(
                    v.parse()
                        .context("USERS_SERVICE_TIMEOUT_MS is not a number of milliseconds")?,
                ),
                Err(_) => Duration::from_millis(5000),
            },
        })
    }
}
