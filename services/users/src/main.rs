use sea_orm::Database;
use tracing::info;

use fitness_core::tracing::init_tracing;
use fitness_users::config::UsersConfig;
use fitness_users::router::build_router;
use fitness_users::state::AppState;

#[tokio::main]
async fn main() {
    init_tracing();

    let config = UsersConfig::from_env().expect("invalid users configuration");

    let db = Database::connect(&config.database_url)
        .await
        .expect("failed to connect to database");

    let router = build_router(AppState::from_db(db));
    let addr = format!("0.0.0.0:{}", config.users_port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("failed to bind");

    info!("users service listening on {addr}");
    axum::serve(listener, router).await.expect("server error");
}
