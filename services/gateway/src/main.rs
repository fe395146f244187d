use tracing::info;

use fitness_core::tracing::init_tracing;
use fitness_gateway::config::GatewayConfig;
use fitness_gateway::infra::http::HttpUserClient;
use fitness_gateway::router::build_router;
use fitness_gateway::state::AppState;

#[tokio::main]
async fn main() {
    init_tracing();

    let config = GatewayConfig::from_env().expect("invalid gateway configuration");

    let user_port =
        HttpUserClient::with_timeout(&config.users_service_url, config.users_service_timeout)
            .expect("failed to build users service client");

    let router = build_router(AppState { user_port });
    let addr = format!("0.0.0.0:{}", config.gateway_port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("failed to bind");

    info!(
        users_service_url = %config.users_service_url,
        "gateway listening on {addr}"
    );
    axum::serve(listener, router).await.expect("server error");
}
