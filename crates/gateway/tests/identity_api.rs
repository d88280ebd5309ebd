//! Integration tests for login and user lookup.

mod common;

use assert_matches::assert_matches;
use axum::http::{Method, StatusCode};
use axum::routing::post;
use axum::{Json, Router};
use serde_json::json;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use common::StubBackend;
use ramadan_core::models::UserType;
use ramadan_core::operation::Operation;
use ramadan_gateway::GatewayError;

fn user_json() -> serde_json::Value {
    json!({"id": 7, "email": "a@b.com", "name": "Amina", "user_type": "user"})
}

// ---------------------------------------------------------------------------
// Test: login posts email, name and user_type
// ---------------------------------------------------------------------------

#[tokio::test]
async fn login_posts_credentials_and_returns_user() {
    let stub = StubBackend::ok(user_json()).await;

    let user = stub
        .client
        .login("a@b.com", Some("Amina"), Some(UserType::Imam))
        .await
        .unwrap();

    assert_eq!(serde_json::to_value(&user).unwrap(), user_json());

    let req = stub.single_request();
    assert_eq!(req.method, Method::POST);
    assert_eq!(req.path, "/api/users/login");
    assert_eq!(
        req.body.unwrap(),
        json!({"email": "a@b.com", "name": "Amina", "user_type": "imam"})
    );
}

/// Without a user type the request defaults to a regular user, and an
/// absent name is left out of the body.
#[tokio::test]
async fn login_defaults_user_type() {
    let stub = StubBackend::ok(user_json()).await;

    stub.client.login("a@b.com", None, None).await.unwrap();

    let body = stub.single_request().body.unwrap();
    assert_eq!(body, json!({"email": "a@b.com", "user_type": "user"}));
}

// ---------------------------------------------------------------------------
// Test: get_user percent-encodes the email path segment
// ---------------------------------------------------------------------------

#[tokio::test]
async fn get_user_encodes_email_segment() {
    let stub = StubBackend::ok(user_json()).await;

    let user = stub.client.get_user("a+ramadan@b.com").await.unwrap();

    assert_eq!(user.id, 7);
    let req = stub.single_request();
    assert_eq!(req.method, Method::GET);
    assert_eq!(req.path, "/api/users/a%2Bramadan%40b.com");
}

#[tokio::test]
async fn get_user_not_found_is_request_failed() {
    let stub = StubBackend::start(StatusCode::NOT_FOUND, r#"{"detail":"User not found"}"#).await;

    let err = stub.client.get_user("ghost@b.com").await.unwrap_err();

    assert_matches!(
        err,
        GatewayError::RequestFailed {
            operation: Operation::GetUser,
            status: 404,
            ..
        }
    );
}

// ---------------------------------------------------------------------------
// Test: ensure_user is a single idempotent call
// ---------------------------------------------------------------------------

/// The stub implements the backend's get-or-create login: calling
/// `ensure_user` twice yields the same id and creates one record.
#[tokio::test]
async fn ensure_user_is_idempotent() {
    let users: Arc<Mutex<HashMap<String, i64>>> = Arc::default();
    let routes = Router::new().route(
        "/users/login",
        post({
            let users = Arc::clone(&users);
            move |Json(body): Json<serde_json::Value>| {
                let users = Arc::clone(&users);
                async move {
                    let email = body["email"].as_str().unwrap_or_default().to_string();
                    let mut users = users.lock().unwrap();
                    let next_id = users.len() as i64 + 1;
                    let id = *users.entry(email.clone()).or_insert(next_id);
                    Json(json!({
                        "id": id,
                        "email": email,
                        "name": body["name"],
                        "user_type": body["user_type"],
                    }))
                }
            }
        }),
    );
    let client = common::spawn_routes(routes).await;

    let first = client.ensure_user("a@b.com", "Amina").await.unwrap();
    let second = client.ensure_user("a@b.com", "Amina").await.unwrap();

    assert_eq!(first.id, second.id);
    assert_eq!(first.user_type, UserType::User);
    assert_eq!(users.lock().unwrap().len(), 1);
}

#[tokio::test]
async fn ensure_user_failure_names_its_operation() {
    let stub = StubBackend::start(StatusCode::BAD_GATEWAY, "upstream down").await;

    let err = stub.client.ensure_user("a@b.com", "Amina").await.unwrap_err();

    assert_eq!(err.operation(), Some(Operation::EnsureUser));
    assert_eq!(err.status(), Some(502));
}
