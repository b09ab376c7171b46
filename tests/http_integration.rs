//! Integration tests for the HTTP API.
//!
//! Every request goes through the full router over in-memory repositories
//! and a scripted language model.

use std::sync::Arc;

use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;

use helix_outreach::adapters::ai::{MockAIProvider, MockError};
use helix_outreach::adapters::http::{build_router, AppState};
use helix_outreach::adapters::memory::InMemoryStore;
use helix_outreach::domain::conversation::WELCOME_MESSAGE;
use helix_outreach::domain::outreach::SEQUENCE_CONFIRMATION;

// =============================================================================
// Test Infrastructure
// =============================================================================

fn app_with(provider: MockAIProvider) -> Router {
    let store = InMemoryStore::new();
    let state = AppState::new(
        Arc::new(store.clone()),
        Arc::new(store.clone()),
        Arc::new(store.clone()),
        Arc::new(store),
        Arc::new(provider),
    );
    build_router(state, &[])
}

fn app() -> Router {
    app_with(MockAIProvider::new())
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, body)
}

async fn get(app: &Router, uri: &str) -> (StatusCode, Value) {
    send(
        app,
        Request::builder().uri(uri).body(Body::empty()).unwrap(),
    )
    .await
}

async fn post_raw(app: &Router, uri: &str, body: &str) -> (StatusCode, Value) {
    send(
        app,
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
    )
    .await
}

async fn post(app: &Router, uri: &str, body: Value) -> (StatusCode, Value) {
    post_raw(app, uri, &body.to_string()).await
}

async fn create_user(app: &Router, email: &str) -> i64 {
    let (status, body) = post(app, "/api/users", json!({"name": "Recruiter", "email": email})).await;
    assert_eq!(status, StatusCode::CREATED);
    body["id"].as_i64().unwrap()
}

async fn create_session(app: &Router, user_id: i64, title: Option<&str>) -> Value {
    let mut payload = json!({"user_id": user_id});
    if let Some(title) = title {
        payload["title"] = json!(title);
    }
    let (status, body) = post(app, "/api/sessions", payload).await;
    assert_eq!(status, StatusCode::OK);
    body
}

// =============================================================================
// Health
// =============================================================================

#[tokio::test]
async fn root_reports_running() {
    let (status, body) = get(&app(), "/").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"message": "Helix Backend is running!"}));
}

// =============================================================================
// Generate
// =============================================================================

#[tokio::test]
async fn generate_extracts_embedded_sequence() {
    let reply = r#"Here is your plan: {"title":"Intro","steps":[{"Step 1":{"Content":"Hi","Strategy":"Open"}}]} Let me know!"#;
    let app = app_with(MockAIProvider::new().with_response(reply));

    let (status, body) = post(&app, "/generate_sequence", json!({"message": "Write one"})).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["type"], "sequence");
    assert_eq!(body["response"], SEQUENCE_CONFIRMATION);
    assert_eq!(body["json"]["title"], "Intro");
    assert_eq!(body["json"]["steps"][0]["Step 1"]["Strategy"], "Open");
}

#[tokio::test]
async fn generate_extracts_object_wrapped_in_prose_without_keyword() {
    let reply = r#"Sure! {"title":"Follow-up","steps":[]} Anything else?"#;
    let app = app_with(MockAIProvider::new().with_response(reply));

    let (status, body) = post(&app, "/generate_sequence", json!({"message": "Write one"})).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["type"], "sequence");
    assert_eq!(body["json"], json!({"title": "Follow-up", "steps": []}));
}

#[tokio::test]
async fn generate_passes_plain_text_through() {
    let app = app_with(MockAIProvider::new().with_response("Sounds good, let's proceed."));

    let (status, body) = post(&app, "/generate_sequence", json!({"message": "ok"})).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({"response": "Sounds good, let's proceed.", "type": "message"})
    );
}

#[tokio::test]
async fn generate_with_unparsable_json_keeps_original_text() {
    let reply = "Here is the JSON: {title: oops";
    let app = app_with(MockAIProvider::new().with_response(reply));

    let (_, body) = post(&app, "/generate_sequence", json!({"message": "go"})).await;

    assert_eq!(body["type"], "message");
    assert_eq!(body["response"], reply);
    assert!(body.get("json").is_none());
}

#[tokio::test]
async fn generate_sends_context_in_order() {
    let provider = MockAIProvider::new();
    let app = app_with(provider.clone());

    let (status, _) = post(
        &app,
        "/generate_sequence",
        json!({
            "message": "shorter please",
            "context": [
                {"role": "user", "content": "write a sequence"},
                {"role": "assistant", "content": "done"}
            ]
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let request = provider.last_call().unwrap();
    let contents: Vec<&str> = request.messages[1..]
        .iter()
        .map(|m| m.content.as_str())
        .collect();
    assert_eq!(contents, vec!["write a sequence", "done", "shorter please"]);
}

#[tokio::test]
async fn generate_without_message_is_400() {
    let app = app();

    for payload in [json!({}), json!({"message": ""}), json!({"context": []})] {
        let (status, body) = post(&app, "/generate_sequence", payload).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({"error": "No input provided"}));
    }
}

#[tokio::test]
async fn generate_with_malformed_body_is_400() {
    let (status, body) = post_raw(&app(), "/generate_sequence", "{not json").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "No input provided");
}

#[tokio::test]
async fn generate_with_unknown_context_role_is_400() {
    let provider = MockAIProvider::new();
    let app = app_with(provider.clone());

    let (status, _) = post(
        &app,
        "/generate_sequence",
        json!({"message": "hi", "context": [{"role": "narrator", "content": "x"}]}),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(provider.call_count(), 0);
}

#[tokio::test]
async fn generate_model_failure_is_500_with_description() {
    let app = app_with(MockAIProvider::new().with_error(MockError::Unavailable {
        message: "overloaded".to_string(),
    }));

    let (status, body) = post(&app, "/generate_sequence", json!({"message": "hi"})).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({"error": "provider unavailable: overloaded"}));
}

// =============================================================================
// Saved sequences
// =============================================================================

#[tokio::test]
async fn saved_sequences_list_in_save_order() {
    let app = app();
    let user_id = create_user(&app, "ada@example.com").await;

    for text in ["first", "second"] {
        let (status, body) = post(
            &app,
            "/save_sequence",
            json!({"user_id": user_id, "sequence_text": text}),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"message": "Sequence saved successfully!"}));
    }

    let (status, body) = get(&app, &format!("/get_sequences/{}", user_id)).await;

    assert_eq!(status, StatusCode::OK);
    let texts: Vec<&str> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|s| s["text"].as_str().unwrap())
        .collect();
    assert_eq!(texts, vec!["first", "second"]);
    assert!(body[0]["id"].is_i64());
}

#[tokio::test]
async fn save_sequence_without_fields_is_400() {
    let app = app();

    for payload in [
        json!({}),
        json!({"user_id": 1}),
        json!({"sequence_text": "x"}),
        json!({"user_id": 1, "sequence_text": ""}),
    ] {
        let (status, body) = post(&app, "/save_sequence", payload).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({"error": "Missing data"}));
    }
}

#[tokio::test]
async fn save_sequence_for_unknown_user_is_500() {
    let (status, body) = post(
        &app(),
        "/save_sequence",
        json!({"user_id": 999, "sequence_text": "x"}),
    )
    .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body["error"].as_str().unwrap().contains("foreign key"));
}

#[tokio::test]
async fn unknown_user_has_no_sequences() {
    let (status, body) = get(&app(), "/get_sequences/42").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));
}

// =============================================================================
// Sessions
// =============================================================================

#[tokio::test]
async fn new_session_has_default_title_and_welcome_message() {
    let app = app();
    let user_id = create_user(&app, "ada@example.com").await;

    let session = create_session(&app, user_id, None).await;
    assert_eq!(session["title"], "New Session");
    assert!(session["created_at"].is_string());
    assert!(session["updated_at"].is_string());

    let (status, history) = get(&app, &format!("/api/chat/history/{}", session["id"])).await;

    assert_eq!(status, StatusCode::OK);
    let history = history.as_array().unwrap();
    assert_eq!(history.len(), 1);
    assert_eq!(history[0]["role"], "assistant");
    assert_eq!(history[0]["content"], WELCOME_MESSAGE);
}

#[tokio::test]
async fn sessions_list_newest_first() {
    let app = app();
    let user_id = create_user(&app, "ada@example.com").await;
    let other_user = create_user(&app, "bob@example.com").await;

    let first = create_session(&app, user_id, Some("first")).await;
    create_session(&app, other_user, Some("not mine")).await;
    let second = create_session(&app, user_id, Some("second")).await;

    let (status, body) = get(&app, &format!("/api/sessions?user_id={}", user_id)).await;

    assert_eq!(status, StatusCode::OK);
    let ids: Vec<&Value> = body.as_array().unwrap().iter().map(|s| &s["id"]).collect();
    assert_eq!(ids, vec![&second["id"], &first["id"]]);
}

#[tokio::test]
async fn sessions_require_user_id() {
    let app = app();

    let (status, body) = get(&app, "/api/sessions").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({"error": "User ID is required"}));

    let (status, body) = post(&app, "/api/sessions", json!({"title": "x"})).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({"error": "User ID is required"}));
}

#[tokio::test]
async fn session_with_mistyped_title_is_400() {
    let app = app();
    let user_id = create_user(&app, "ada@example.com").await;

    let (status, body) = post(&app, "/api/sessions", json!({"user_id": user_id, "title": 5})).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({"error": "User ID is required"}));
}

#[tokio::test]
async fn session_for_unknown_user_is_500() {
    let (status, _) = post(&app(), "/api/sessions", json!({"user_id": 5})).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
}

// =============================================================================
// Chat messages
// =============================================================================

#[tokio::test]
async fn messages_append_after_welcome_in_order() {
    let app = app();
    let user_id = create_user(&app, "ada@example.com").await;
    let session = create_session(&app, user_id, None).await;

    for (role, content) in [("user", "Need a sequence"), ("assistant", "Sure")] {
        let (status, body) = post(
            &app,
            "/api/chat/message",
            json!({"session_id": session["id"], "role": role, "content": content}),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["role"], role);
        assert_eq!(body["content"], content);
        assert!(body["id"].is_i64());
        assert!(body["created_at"].is_string());
    }

    let (_, history) = get(&app, &format!("/api/chat/history/{}", session["id"])).await;
    let roles: Vec<&str> = history
        .as_array()
        .unwrap()
        .iter()
        .map(|m| m["role"].as_str().unwrap())
        .collect();
    assert_eq!(roles, vec!["assistant", "user", "assistant"]);

    let (_, sessions) = get(&app, &format!("/api/sessions?user_id={}", user_id)).await;
    assert_eq!(
        sessions[0]["updated_at"],
        history[2]["created_at"],
        "appending a message bumps the session"
    );
}

#[tokio::test]
async fn message_with_missing_fields_is_400() {
    let app = app();

    for payload in [
        json!({}),
        json!({"session_id": 1, "role": "user"}),
        json!({"session_id": 1, "content": "hi"}),
        json!({"role": "user", "content": "hi"}),
        json!({"session_id": 1, "role": "user", "content": ""}),
    ] {
        let (status, body) = post(&app, "/api/chat/message", payload).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({"error": "Missing required fields"}));
    }
}

#[tokio::test]
async fn message_with_unknown_role_is_400() {
    let app = app();
    let user_id = create_user(&app, "ada@example.com").await;
    let session = create_session(&app, user_id, None).await;

    let (status, body) = post(
        &app,
        "/api/chat/message",
        json!({"session_id": session["id"], "role": "system", "content": "hi"}),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("role"));
}

#[tokio::test]
async fn message_for_unknown_session_is_500() {
    let (status, body) = post(
        &app(),
        "/api/chat/message",
        json!({"session_id": 404, "role": "user", "content": "hi"}),
    )
    .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn history_of_unknown_session_is_empty() {
    let (status, body) = get(&app(), "/api/chat/history/31337").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn history_with_non_numeric_id_is_400() {
    let (status, _) = get(&app(), "/api/chat/history/abc").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

// =============================================================================
// Users
// =============================================================================

#[tokio::test]
async fn user_round_trips_through_lookup() {
    let app = app();
    let (status, created) = post(
        &app,
        "/api/users",
        json!({"name": "Grace Hopper", "email": "Grace@Example.com"}),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["email"], "grace@example.com");

    let (status, fetched) = get(&app, &format!("/api/users/{}", created["id"])).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched, created);
}

#[tokio::test]
async fn duplicate_email_is_400() {
    let app = app();
    create_user(&app, "ada@example.com").await;

    let (status, body) = post(
        &app,
        "/api/users",
        json!({"name": "Other", "email": "ada@example.com"}),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("already registered"));
}

#[tokio::test]
async fn user_with_missing_fields_is_400() {
    let (status, body) = post(&app(), "/api/users", json!({"name": "Ada"})).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({"error": "Missing required fields"}));
}

#[tokio::test]
async fn missing_user_is_404() {
    let (status, body) = get(&app(), "/api/users/12").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({"error": "User not found"}));
}
