//! Ready-made wire DTOs.

use chrono::{TimeZone, Utc};
use uuid::Uuid;

use fitness_domain::user::{RegisterRequest, UserResponse};

/// Registration payload for `email` with a keycloak id derived from it.
pub fn register_request(email: &str) -> RegisterRequest {
    RegisterRequest {
        email: email.to_owned(),
        keycloak_id: format!("kc-{email}"),
        first_name: "Test".to_owned(),
        last_name: "User".to_owned(),
    }
}

/// Response the users service would send back for `request`.
///
/// Timestamps are fixed at millisecond precision so the value survives a
/// serialize/deserialize cycle unchanged.
pub fn user_response(request: &RegisterRequest) -> UserResponse {
    let at = Utc.with_ymd_and_hms(2025, 3, 1, 6, 30, 0).unwrap();
    UserResponse {
        id: Uuid::now_v7().to_string(),
        keycloak_id: request.keycloak_id.clone(),
        email: request.email.clone(),
        first_name: request.first_name.clone(),
        last_name: request.last_name.clone(),
        created_at: at,
        updated_at: at,
    }
}
