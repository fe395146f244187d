use chrono::Utc;
use uuid::Uuid;

use crate::domain::repository::UserRepository;
use crate::domain::types::{User, validate_email};
use crate::error::UsersServiceError;

// ── RegisterUser ─────────────────────────────────────────────────────────────

pub struct RegisterInput {
    pub email: String,
    pub keycloak_id: String,
    pub first_name: String,
    pub last_name: String,
}

pub struct RegisterUserUseCase<R: UserRepository> {
    pub repo: R,
}

impl<R: UserRepository> RegisterUserUseCase<R> {
    pub async fn execute(&self, input: RegisterInput) -> Result<User, UsersServiceError> {
        let email = input.email.trim().to_owned();
        if !validate_email(&email) {
            return Err(UsersServiceError::InvalidEmail);
        }
        if self.repo.find_by_email(&email).await?.is_some() {
            return Err(UsersServiceError::UserAlreadyExists);
        }
        let keycloak_id = input.keycloak_id.trim().to_owned();
        if !keycloak_id.is_empty() && self.repo.find_by_keycloak_id(&keycloak_id).await?.is_some()
        {
            return Err(UsersServiceError::UserAlreadyExists);
        }

        let now = Utc::now();
        let user = User {
            id: Uuid::now_v7(),
            keycloak_id,
            email,
            first_name: input.first_name,
            last_name: input.last_name,
            created_at: now,
            updated_at: now,
        };
        self.repo.create(&user).await?;
        tracing::info!(user_id = %user.id, "user registered");
        Ok(user)
    }
}

// ── GetUser ──────────────────────────────────────────────────────────────────

pub struct GetUserUseCase<R: UserRepository> {
    pub repo: R,
}

impl<R: UserRepository> GetUserUseCase<R> {
    pub async fn execute(&self, user_id: Uuid) -> Result<User, UsersServiceError> {
        self.repo
            .find_by_id(user_id)
            .await?
            .ok_or(UsersServiceError::UserNotFound)
    }
}

// ── ValidateUser ─────────────────────────────────────────────────────────────

pub struct ValidateUserUseCase<R: UserRepository> {
    pub repo: R,
}

impl<R: UserRepository> ValidateUserUseCase<R> {
    /// Whether a user is linked to `keycloak_id`. Absence is `false`, not an error.
    ///
    /// The id is trimmed the same way registration trims it before storing.
    pub async fn execute(&self, keycloak_id: &str) -> Result<bool, UsersServiceError> {
        let keycloak_id = keycloak_id.trim();
        if keycloak_id.is_empty() {
            return Ok(false);
        }
        Ok(self.repo.find_by_keycloak_id(keycloak_id).await?.is_some())
    }
}
