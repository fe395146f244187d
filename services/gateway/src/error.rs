use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

/// Failures of calls to the users service, normalized from HTTP status codes
/// and transport faults.
#[derive(Debug, thiserror::Error)]
pub enum GatewayError {
    /// The users service answered 404 for this identifier.
    #[error("user not found: {0}")]
    UserNotFound(String),
    /// The users service rejected this identifier with 400.
    #[error("invalid request: {0}")]
    InvalidRequest(String),
    /// The users service rejected the payload with 400; carries its message.
    #[error("bad request: {0}")]
    BadRequest(String),
    /// Any other status, transport fault, timeout or undecodable body.
    #[error("unexpected error: {0}")]
    Unexpected(String),
}

impl GatewayError {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::UserNotFound(_) => "USER_NOT_FOUND",
            Self::InvalidRequest(_) => "INVALID_REQUEST",
            Self::BadRequest(_) => "BAD_REQUEST",
            Self::Unexpected(_) => "UNEXPECTED",
        }
    }
}

impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        let status = match &self {
            Self::UserNotFound(_) => StatusCode::NOT_FOUND,
            Self::InvalidRequest(_) | Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::Unexpected(_) => StatusCode::BAD_GATEWAY,
        };
        if let Self::Unexpected(ref detail) = self {
            tracing::warn!(detail = %detail, kind = "UNEXPECTED", "users service call failed");
        }
        let body = serde_json::json!({
            "kind": self.kind(),
            "message": self.to_string(),
        });
        (status, axum::Json(body)).into_response()
    }
}
