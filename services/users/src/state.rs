use sea_orm::DatabaseConnection;

use crate::infra::db::DbUserRepository;

/// Shared application state passed to every handler via axum `State`.
#[derive(Clone)]
pub struct AppState<R = DbUserRepository> {
    pub user_repo: R,
}

impl AppState {
    pub fn from_db(db: DatabaseConnection) -> Self {
        Self {
            user_repo: DbUserRepository { db },
        }
    }
}
