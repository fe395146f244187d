use std::future::Future;

use uuid::Uuid;

use crate::domain::types::User;
use crate::error::UsersServiceError;

/// Storage for user records. Each lookup key is unique on its own.
///
/// Methods return `Send` futures so axum handlers stay generic over the store.
/// Implementations may still be written with `async fn`.
pub trait UserRepository: Send + Sync {
    fn find_by_id(
        &self,
        id: Uuid,
    ) -> impl Future<Output = Result<Option<User>, UsersServiceError>> + Send;

    fn find_by_email(
        &self,
        email: &str,
    ) -> impl Future<Output = Result<Option<User>, UsersServiceError>> + Send;

    fn find_by_keycloak_id(
        &self,
        keycloak_id: &str,
    ) -> impl Future<Output = Result<Option<User>, UsersServiceError>> + Send;

    /// Insert a new user. Fails with `UserAlreadyExists` when the email or the
    /// keycloak id is already taken, even if a concurrent insert won the race.
    fn create(&self, user: &User) -> impl Future<Output = Result<(), UsersServiceError>> + Send;

    /// Cheap connectivity probe used by `/readyz`.
    fn ping(&self) -> impl Future<Output = Result<(), UsersServiceError>> + Send;
}
