use crate::infra::http::HttpUserClient;

/// Shared application state passed to every handler via axum `State`.
#[derive(Clone)]
pub struct AppState {
    pub user_port: HttpUserClient,
}
