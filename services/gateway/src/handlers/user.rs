use axum::{
    Json,
    extract::{Path, State},
};

use fitness_domain::user::{RegisterRequest, UserResponse};

use crate::domain::port::UserPort;
use crate::error::GatewayError;
use crate::state::AppState;

// ── GET /api/users/{user_id}/validate ────────────────────────────────────────

pub async fn validate_user(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<Json<bool>, GatewayError> {
    let exists = state.user_port.validate_user(&user_id).await?;
    Ok(Json(exists))
}

// ── POST /api/users/register ─────────────────────────────────────────────────

pub async fn register_user(
    State(state): State<AppState>,
    Json(body): Json<RegisterRequest>,
) -> Result<Json<UserResponse>, GatewayError> {
    let user = state.user_port.register_user(&body).await?;
    Ok(Json(user))
}
