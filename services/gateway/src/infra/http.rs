use std::time::Duration;

use anyhow::Context as _;
use reqwest::{Client, StatusCode, Url};
use serde::Deserialize;

use fitness_domain::user::{RegisterRequest, UserResponse};

use crate::domain::port::UserPort;
use crate::error::GatewayError;

/// HTTP client implementing `UserPort` against the users service REST API.
///
/// Each call is a single request with no retry. Dropping the returned future
/// aborts the in-flight request.
#[derive(Clone)]
pub struct HttpUserClient {
    http: Client,
    base_url: Url,
}

impl HttpUserClient {
    /// Wrap an already configured `reqwest::Client`.
    pub fn new(http: Client, base_url: &str) -> anyhow::Result<Self> {
        let base_url = Url::parse(base_url)
            .with_context(|| format!("invalid users service URL: {base_url}"))?;
        if base_url.cannot_be_a_base() {
            anyhow::bail!("users service URL cannot carry a path: {base_url}");
        }
        Ok(Self { http, base_url })
    }

    /// Build a client whose requests fail after `timeout`.
    pub fn with_timeout(base_url: &str, timeout: Duration) -> anyhow::Result<Self> {
        let http = Client::builder()
            .timeout(timeout)
            .build()
            .context("build users service HTTP client")?;
        Self::new(http, base_url)
    }

    /// Append `segments` to the base URL, percent-encoding each one.
    fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        // `new` rejects cannot-be-a-base URLs, so this always succeeds.
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }
}

impl UserPort for HttpUserClient {
    async fn validate_user(&self, user_id: &str) -> Result<bool, GatewayError> {
        // URL normalization drops these segments, which would hit another route.
        if matches!(user_id, "" | "." | "..") {
            return Err(GatewayError::InvalidRequest(user_id.to_owned()));
        }
        let url = self.endpoint(&["api", "users", user_id, "validate"]);
        let response = self.http.get(url).send().await.map_err(|e| {
            tracing::warn!(error = %e, user_id, "validate user request failed");
            GatewayError::Unexpected(user_id.to_owned())
        })?;

        let status = response.status();
        if status.is_success() {
            return response.json::<bool>().await.map_err(|e| {
                tracing::warn!(error = %e, user_id, "undecodable validate user response");
                GatewayError::Unexpected(user_id.to_owned())
            });
        }
        match status {
            StatusCode::NOT_FOUND => Err(GatewayError::UserNotFound(user_id.to_owned())),
            StatusCode::BAD_REQUEST => Err(GatewayError::InvalidRequest(user_id.to_owned())),
            _ => Err(GatewayError::Unexpected(user_id.to_owned())),
        }
    }

    async fn register_user(
        &self,
        request: &RegisterRequest,
    ) -> Result<UserResponse, GatewayError> {
        tracing::info!(email = %request.email, "calling user registration");

        let url = self.endpoint(&["api", "users", "register"]);
        let response = self
            .http
            .post(url)
            .json(request)
            .send()
            .await
            .map_err(|e| GatewayError::Unexpected(e.to_string()))?;

        let status = response.status();
        if status.is_success() {
            return response
                .json::<UserResponse>()
                .await
                .map_err(|e| GatewayError::Unexpected(e.to_string()));
        }
        let body = match response.text().await {
            Ok(body) => body,
            Err(e) => {
                tracing::warn!(error = %e, %status, "unreadable register user error body");
                String::new()
            }
        };
        let message = downstream_message(status, &body);
        match status {
            StatusCode::BAD_REQUEST => Err(GatewayError::BadRequest(message)),
            _ => Err(GatewayError::Unexpected(message)),
        }
    }
}

/// Error envelope produced by the users service (`{"kind", "message"}`).
#[derive(Deserialize)]
struct ErrorEnvelope {
    message: String,
}

/// Human-readable text of a failed downstream response: the envelope
/// message, else the raw body, else the status line.
fn downstream_message(status: StatusCode, body: &str) -> String {
    if let Ok(ErrorEnvelope { message }) = serde_json::from_str(body) {
        return message;
    }
    let body = body.trim();
    if body.is_empty() {
        status.to_string()
    } else {
        body.to_owned()
    }
}
