//! Integration tests for conversations and messages.

mod common;

use axum::http::Method;
use serde_json::json;

use common::StubBackend;
use ramadan_core::models::SenderType;

fn conversation_json() -> serde_json::Value {
    json!({
        "id": 12,
        "user_email": "a@b.com",
        "imam_id": 2,
        "topic": "Zakat on savings",
        "created_at": "2025-03-05T18:00:00"
    })
}

#[tokio::test]
async fn create_conversation_posts_participants_and_topic() {
    let stub = StubBackend::ok(conversation_json()).await;

    let conversation = stub
        .client
        .create_conversation("a@b.com", 2, "Zakat on savings")
        .await
        .unwrap();

    assert_eq!(serde_json::to_value(&conversation).unwrap(), conversation_json());
    let req = stub.single_request();
    assert_eq!(req.method, Method::POST);
    assert_eq!(req.path, "/api/chat/conversations");
    assert_eq!(
        req.body.unwrap(),
        json!({"user_email": "a@b.com", "imam_id": 2, "topic": "Zakat on savings"})
    );
}

#[tokio::test]
async fn list_conversations_by_user() {
    let stub = StubBackend::ok(json!([conversation_json()])).await;

    let conversations = stub.client.list_conversations("a@b.com").await.unwrap();

    assert_eq!(conversations.len(), 1);
    assert_eq!(
        stub.single_request().path,
        "/api/chat/conversations/user/a%40b.com"
    );
}

#[tokio::test]
async fn list_imam_conversations_by_imam_email() {
    let mut row = conversation_json();
    row["unread_count"] = json!(3);
    let stub = StubBackend::ok(json!([row])).await;

    let conversations = stub
        .client
        .list_imam_conversations("imam2@masjid.org")
        .await
        .unwrap();

    assert_eq!(conversations[0].unread_count.value(), Some(&3));
    assert_eq!(
        stub.single_request().path,
        "/api/chat/imam/conversations/imam2%40masjid.org"
    );
}

#[tokio::test]
async fn get_conversation_includes_messages() {
    let mut body = conversation_json();
    body["messages"] = json!([{
        "id": 1,
        "conversation_id": 12,
        "sender_type": "imam",
        "sender_email": "imam2@masjid.org",
        "message_text": "Wa alaikum assalam",
        "is_read": false,
        "created_at": "2025-03-05T18:01:00"
    }]);
    let stub = StubBackend::ok(body.clone()).await;

    let conversation = stub.client.get_conversation(12).await.unwrap();

    let messages = conversation.messages.value().unwrap();
    assert_eq!(messages.len(), 1);
    assert_eq!(messages[0].sender_type, SenderType::Imam);
    assert_eq!(serde_json::to_value(&conversation).unwrap(), body);
    assert_eq!(stub.single_request().path, "/api/chat/conversations/12");
}

// ---------------------------------------------------------------------------
// Test: send_message posts exactly the four documented keys
// ---------------------------------------------------------------------------

#[tokio::test]
async fn send_message_posts_four_keys() {
    let echo = json!({
        "id": 77,
        "conversation_id": 42,
        "sender_type": "user",
        "message_text": "hello",
        "created_at": "2025-03-05T18:02:00"
    });
    let stub = StubBackend::ok(echo.clone()).await;

    let message = stub
        .client
        .send_message(42, "a@b.com", SenderType::User, "hello")
        .await
        .unwrap();

    assert_eq!(serde_json::to_value(&message).unwrap(), echo);

    let req = stub.single_request();
    assert_eq!(req.method, Method::POST);
    assert_eq!(req.path, "/api/chat/messages");
    assert_eq!(
        req.body.unwrap(),
        json!({
            "conversation_id": 42,
            "sender_email": "a@b.com",
            "sender_type": "user",
            "message_text": "hello"
        })
    );
}

#[tokio::test]
async fn list_messages_for_conversation() {
    let stub = StubBackend::ok(json!([])).await;

    let messages = stub.client.list_messages(42).await.unwrap();

    assert!(messages.is_empty());
    assert_eq!(stub.single_request().path, "/api/chat/messages/42");
}

#[tokio::test]
async fn mark_read_puts_message_ids() {
    let stub = StubBackend::ok(json!({"status": "success"})).await;

    stub.client.mark_read(&[3, 4, 9]).await.unwrap();

    let req = stub.single_request();
    assert_eq!(req.method, Method::PUT);
    assert_eq!(req.path, "/api/chat/messages/read");
    assert_eq!(req.body.unwrap(), json!({"message_ids": [3, 4, 9]}));
}
