//! In-process stand-in for the users service REST API.
//!
//! Tests that exercise the gateway client start a `MockUsersService`, stub
//! the responses they need, and point the client at `url()`.

use std::net::TcpListener;

use serde_json::json;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use fitness_domain::user::{RegisterRequest, UserResponse};

pub struct MockUsersService {
    server: MockServer,
}

impl MockUsersService {
    pub async fn start() -> Self {
        Self {
            server: MockServer::start().await,
        }
    }

    /// Base URL to hand to the client under test.
    pub fn url(&self) -> String {
        self.server.uri()
    }

    /// Answer `GET /api/users/{user_id}/validate` exactly once with `response`.
    pub async fn on_validate(&self, user_id: &str, response: ResponseTemplate) {
        Mock::given(method("GET"))
            .and(path(format!("/api/users/{user_id}/validate")))
            .respond_with(response)
            .expect(1)
            .mount(&self.server)
            .await;
    }

    /// Answer `POST /api/users/register` carrying exactly `request` with `response`.
    pub async fn on_register(&self, request: &RegisterRequest, response: ResponseTemplate) {
        Mock::given(method("POST"))
            .and(path("/api/users/register"))
            .and(body_json(request))
            .respond_with(response)
            .mount(&self.server)
            .await;
    }

    /// Like `on_register`, but only for the first matching request. Later
    /// requests fall through to stubs mounted afterwards.
    pub async fn on_register_once(&self, request: &RegisterRequest, response: ResponseTemplate) {
        Mock::given(method("POST"))
            .and(path("/api/users/register"))
            .and(body_json(request))
            .respond_with(response)
            .up_to_n_times(1)
            .mount(&self.server)
            .await;
    }

    /// Number of requests the mock has seen so far.
    pub async fn received(&self) -> usize {
        self.server
            .received_requests()
            .await
            .map_or(0, |requests| requests.len())
    }
}

/// `200 OK` with a JSON boolean body.
pub fn exists(value: bool) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(value)
}

/// `200 OK` with a serialized `UserResponse`.
pub fn registered(user: &UserResponse) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(user)
}

/// Error response in the users service's `{"kind", "message"}` envelope.
pub fn error_envelope(status: u16, kind: &str, message: &str) -> ResponseTemplate {
    ResponseTemplate::new(status).set_body_json(json!({ "kind": kind, "message": message }))
}

/// Base URL of a local port nothing listens on, for connection-refused cases.
pub fn unreachable_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind ephemeral port");
    let port = listener.local_addr().expect("local addr").port();
    drop(listener);
    format!("http://127.0.0.1:{port}")
}
