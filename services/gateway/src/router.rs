use axum::{
    Router,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;

use fitness_core::health::{healthz, readyz};
use fitness_core::middleware::{propagate_request_id_layer, request_id_layer};

use crate::handlers::user::{register_user, validate_user};
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Health
        .route("/healthz", get(healthz))
        .route("/readyz", get(readyz))
        // Users (pass-through to the users service)
        .route("/api/users/register", post(register_user))
        .route("/api/users/{user_id}/validate", get(validate_user))
        .with_state(state)
        .layer(propagate_request_id_layer())
        .layer(TraceLayer::new_for_http())
        .layer(request_id_layer())
}
