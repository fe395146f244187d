use axum::http::StatusCode;

/// Handler for `GET /healthz` — the process is up and serving.
pub async fn healthz() -> StatusCode {
    StatusCode::OK
}

/// Handler for `GET /readyz` for services without backing dependencies.
pub async fn readyz() -> StatusCode {
    readiness(true)
}

/// Map a readiness probe outcome to a status code.
pub fn readiness(ready: bool) -> StatusCode {
    if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    }
}
