//! Wire types of the `/api/users` contract.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Body of `POST /api/users/register`.
///
/// Only `email` is mandatory on the wire; the remaining fields default to
/// empty strings. An empty `keycloak_id` means the account is not yet linked
/// to the identity provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub email: String,
    #[serde(default)]
    pub keycloak_id: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
}

/// Representation of a persisted user, returned by register and profile fetch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserResponse {
    pub id: String,
    pub keycloak_id: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    #[serde(serialize_with = "crate::time::to_rfc3339_ms")]
    pub created_at: DateTime<Utc>,
    #[serde(serialize_with = "crate::time::to_rfc3339_ms")]
    pub updated_at: DateTime<Utc>,
}
