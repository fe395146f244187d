use axum::{
    Router,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;

use fitness_core::health::healthz;
use fitness_core::middleware::{propagate_request_id_layer, request_id_layer};

use crate::domain::repository::UserRepository;
use crate::handlers::{
    health::readyz,
    user::{get_user_profile, register, validate_user},
};
use crate::state::AppState;

pub fn build_router<R>(state: AppState<R>) -> Router
where
    R: UserRepository + Clone + 'static,
{
    Router::new()
        // Health
        .route("/healthz", get(healthz))
        .route("/readyz", get(readyz::<R>))
        // Users
        .route("/api/users/register", post(register::<R>))
        .route("/api/users/{user_id}", get(get_user_profile::<R>))
        .route("/api/users/{user_id}/validate", get(validate_user::<R>))
        .with_state(state)
        .layer(propagate_request_id_layer())
        .layer(TraceLayer::new_for_http())
        .layer(request_id_layer())
}
