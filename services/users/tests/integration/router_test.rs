use axum::http::StatusCode;
use axum_test::TestServer;
use serde_json::{Value, json};
use uuid::Uuid;

use fitness_domain::user::UserResponse;
use fitness_testing::fixture::register_request;
use fitness_users::router::build_router;
use fitness_users::state::AppState;

use crate::helpers::InMemoryUserRepo;

fn users_service(repo: InMemoryUserRepo) -> TestServer {
    TestServer::new(build_router(AppState { user_repo: repo })).unwrap()
}

fn assert_envelope(body: &Value, kind: &str, message: &str) {
    assert_eq!(body["kind"], kind);
    assert_eq!(body["message"], message);
}

#[tokio::test]
async fn should_answer_health_checks() {
    let server = users_service(InMemoryUserRepo::empty());

    server.get("/healthz").await.assert_status(StatusCode::OK);
    server.get("/readyz").await.assert_status(StatusCode::OK);
}

#[tokio::test]
async fn should_register_then_conflict_on_same_email() {
    let repo = InMemoryUserRepo::empty();
    let server = users_service(repo.clone());
    let request = register_request("a@x.com");

    let first = server.post("/api/users/register").json(&request).await;
    first.assert_status(StatusCode::OK);
    let user = first.json::<UserResponse>();
    assert_eq!(user.email, "a@x.com");
    assert_eq!(user.keycloak_id, "kc-a@x.com");
    assert!(user.id.parse::<Uuid>().is_ok());

    let second = server.post("/api/users/register").json(&request).await;
    second.assert_status(StatusCode::CONFLICT);
    assert_envelope(
        &second.json::<Value>(),
        "USER_ALREADY_EXISTS",
        "user already exists",
    );
    assert_eq!(repo.len(), 1);
}

#[tokio::test]
async fn should_reject_invalid_email_with_400_envelope() {
    let repo = InMemoryUserRepo::empty();
    let server = users_service(repo.clone());

    let resp = server
        .post("/api/users/register")
        .json(&json!({ "email": "not-an-email" }))
        .await;
    resp.assert_status(StatusCode::BAD_REQUEST);
    assert_envelope(&resp.json::<Value>(), "INVALID_EMAIL", "invalid email");
    assert_eq!(repo.len(), 0);
}

#[tokio::test]
async fn should_fetch_profile_of_registered_user() {
    let server = users_service(InMemoryUserRepo::empty());
    let registered = server
        .post("/api/users/register")
        .json(&register_request("b@x.com"))
        .await
        .json::<UserResponse>();

    let resp = server.get(&format!("/api/users/{}", registered.id)).await;
    resp.assert_status(StatusCode::OK);
    assert_eq!(resp.json::<UserResponse>(), registered);
}

#[tokio::test]
async fn should_return_404_envelope_for_unknown_user() {
    let server = users_service(InMemoryUserRepo::empty());

    let resp = server.get(&format!("/api/users/{}", Uuid::now_v7())).await;
    resp.assert_status(StatusCode::NOT_FOUND);
    assert_envelope(&resp.json::<Value>(), "USER_NOT_FOUND", "user not found");
}

#[tokio::test]
async fn should_return_404_envelope_for_malformed_user_id() {
    let server = users_service(InMemoryUserRepo::empty());

    let resp = server.get("/api/users/not-a-uuid").await;
    resp.assert_status(StatusCode::NOT_FOUND);
    assert_envelope(&resp.json::<Value>(), "USER_NOT_FOUND", "user not found");
}

#[tokio::test]
async fn should_answer_validate_with_plain_boolean() {
    let server = users_service(InMemoryUserRepo::empty());
    server
        .post("/api/users/register")
        .json(&register_request("c@x.com"))
        .await
        .assert_status(StatusCode::OK);

    let known = server.get("/api/users/kc-c@x.com/validate").await;
    known.assert_status(StatusCode::OK);
    assert!(known.json::<bool>());

    let unknown = server.get("/api/users/kc-nobody/validate").await;
    unknown.assert_status(StatusCode::OK);
    assert!(!unknown.json::<bool>());
}
