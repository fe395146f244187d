use axum::{extract::State, http::StatusCode};

use fitness_core::health::readiness;

use crate::domain::repository::UserRepository;
use crate::state::AppState;

/// Handler for `GET /readyz`. Ready once the database answers a ping.
pub async fn readyz<R: UserRepository>(State(state): State<AppState<R>>) -> StatusCode {
    match state.user_repo.ping().await {
        Ok(()) => readiness(true),
        Err(e) => {
            tracing::warn!(error = %e, "database ping failed");
            readiness(false)
        }
    }
}
