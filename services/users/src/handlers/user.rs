use axum::{
    Json,
    extract::{Path, State},
};

use fitness_domain::id::UserId;
use fitness_domain::user::{RegisterRequest, UserResponse};

use crate::domain::repository::UserRepository;
use crate::error::UsersServiceError;
use crate::state::AppState;
use crate::usecase::user::{
    GetUserUseCase, RegisterInput, RegisterUserUseCase, ValidateUserUseCase,
};

// ── GET /api/users/{user_id} ─────────────────────────────────────────────────

pub async fn get_user_profile<R: UserRepository + Clone>(
    State(state): State<AppState<R>>,
    Path(user_id): Path<String>,
) -> Result<Json<UserResponse>, UsersServiceError> {
    // No user can live under a malformed id.
    let UserId(id) = user_id
        .parse::<UserId>()
        .map_err(|_| UsersServiceError::UserNotFound)?;
    let usecase = GetUserUseCase {
        repo: state.user_repo,
    };
    let user = usecase.execute(id).await?;
    Ok(Json(user.into()))
}

// ── POST /api/users/register ─────────────────────────────────────────────────

pub async fn register<R: UserRepository + Clone>(
    State(state): State<AppState<R>>,
    Json(body): Json<RegisterRequest>,
) -> Result<Json<UserResponse>, UsersServiceError> {
    let usecase = RegisterUserUseCase {
        repo: state.user_repo,
    };
    let user = usecase
        .execute(RegisterInput {
            email: body.email,
            keycloak_id: body.keycloak_id,
            first_name: body.first_name,
            last_name: body.last_name,
        })
        .await?;
    Ok(Json(user.into()))
}

// ── GET /api/users/{user_id}/validate ────────────────────────────────────────

pub async fn validate_user<R: UserRepository + Clone>(
    State(state): State<AppState<R>>,
    Path(keycloak_id): Path<String>,
) -> Result<Json<bool>, UsersServiceError> {
    let usecase = ValidateUserUseCase {
        repo: state.user_repo,
    };
    Ok(Json(usecase.execute(&keycloak_id).await?))
}
