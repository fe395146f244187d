use anyhow::Context as _;

/// Users service configuration loaded from environment variables.
#[derive(Debug)]
pub struct UsersConfig {
    /// PostgreSQL connection URL. Env var: `DATABASE_URL`.
    pub database_url: String,
    /// TCP port for the HTTP server (default 8081). Env var: `USERS_PORT`.
    pub users_port: u16,
}

impl UsersConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Ok(Self {
            database_url: std::env::var("DATABASE_URL").context("DATABASE_URL is not set")?,
            users_port: match std::env::var("USERS_PORT") {
                Ok(v) => v.parse().context("USERS_PORT is not a valid port")?,
                Err(_) => 8081,
            },
        })
    }
}
