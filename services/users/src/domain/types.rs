use chrono::{DateTime, Utc};
use uuid::Uuid;

use fitness_domain::user::UserResponse;

/// User record owned by the users service.
///
/// An empty `keycloak_id` means the account is not linked to the identity
/// provider yet.
#[derive(Debug, Clone)]
pub struct User {
    pub id: Uuid,
    pub keycloak_id: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id.to_string(),
            keycloak_id: user.keycloak_id,
            email: user.email,
            first_name: user.first_name,
            last_name: user.last_name,
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }
}

/// Validate an email address: one `@`, non-empty local part and domain,
/// no whitespace. Deliverability is not checked.
pub fn validate_email(email: &str) -> bool {
    if email.is_empty() || email.chars().any(char::is_whitespace) {
        return false;
    }
    match email.split_once('@') {
        Some((local, domain)) => !local.is_empty() && !domain.is_empty() && !domain.contains('@'),
        None => false,
    }
}
