//! HTTP routes for chat message endpoints.

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{add_message, get_history};
use crate::adapters::http::AppState;

/// Creates the chat router.
///
/// # Routes
/// - `GET /api/chat/history/:session_id` - Session history, oldest first
/// - `POST /api/chat/message` - Append a message
pub fn chat_routes() -> Router<AppState> {
    Router::new()
        .route("/api/chat/history/:session_id", get(get_history))
        .route("/api/chat/message", post(add_message))
}
