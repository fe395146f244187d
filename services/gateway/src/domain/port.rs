#![allow(async_fn_in_trait)]

use fitness_domain::user::{RegisterRequest, UserResponse};

use crate::error::GatewayError;

/// Port for the users service as seen from the gateway.
///
/// Implementations never retry and never swallow a failure: every outcome
/// other than success is reported as exactly one `GatewayError`.
pub trait UserPort: Send + Sync {
    /// Whether a user is linked to the identity-provider key `user_id`.
    async fn validate_user(&self, user_id: &str) -> Result<bool, GatewayError>;

    async fn register_user(
        &self,
        request: &RegisterRequest,
    ) -> Result<UserResponse, GatewayError>;
}
