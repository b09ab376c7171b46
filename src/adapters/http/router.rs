//! Top-level router: every endpoint plus the shared middleware stack.

use axum::{routing::get, Json, Router};
use http::HeaderValue;
use serde_json::{json, Value};
use tower_http::cors::{Any, CorsLayer};
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::TraceLayer;

use super::chat::chat_routes;
use super::outreach::outreach_routes;
use super::session::session_routes;
use super::users::user_routes;
use super::AppState;

pub const HEALTH_MESSAGE: &str = "Helix Backend is running!";

/// Builds the application router.
///
/// An empty `cors_origins` allows any origin.
pub fn build_router(state: AppState, cors_origins: &[String]) -> Router {
    Router::new()
        .route("/", get(health_check))
        .merge(outreach_routes())
        .merge(chat_routes())
        .merge(session_routes())
        .merge(user_routes())
        .with_state(state)
        .layer(cors_layer(cors_origins))
        .layer(TraceLayer::new_for_http())
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
}

fn cors_layer(origins: &[String]) -> CorsLayer {
    let allowed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();

    let cors = CorsLayer::new().allow_headers(Any).allow_methods(Any);
    if allowed.is_empty() {
        cors.allow_origin(Any)
    } else {
        cors.allow_origin(allowed)
    }
}

/// GET / - Liveness check
async fn health_check() -> Json<Value> {
    Json(json!({ "message": HEALTH_MESSAGE }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::ai::MockAIProvider;
    use crate::adapters::memory::InMemoryStore;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use std::sync::Arc;
    use tower::ServiceExt;

    fn state() -> AppState {
        let store = InMemoryStore::new();
        AppState::new(
            Arc::new(store.clone()),
            Arc::new(store.clone()),
            Arc::new(store.clone()),
            Arc::new(store),
            Arc::new(MockAIProvider::new()),
        )
    }

    #[tokio::test]
    async fn health_check_responds() {
        let app = build_router(state(), &[]);

        let response = app
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert!(response.headers().contains_key("x-request-id"));
    }

    #[tokio::test]
    async fn configured_origin_is_echoed() {
        let app = build_router(state(), &["http://localhost:3000".to_string()]);

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/")
                    .header("origin", "http://localhost:3000")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(
            response.headers().get("access-control-allow-origin").unwrap(),
            "http://localhost:3000"
        );
    }

    #[tokio::test]
    async fn unknown_route_is_404() {
        let app = build_router(state(), &[]);

        let response = app
            .oneshot(Request::builder().uri("/nope").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
