//! HTTP routes for session endpoints.

use axum::{routing::get, Router};

use super::handlers::{create_session, list_sessions};
use crate::adapters::http::AppState;

/// Creates the session router.
///
/// # Routes
/// - `GET /api/sessions?user_id=` - Sessions of a user, newest first
/// - `POST /api/sessions` - Create a session seeded with the welcome message
pub fn session_routes() -> Router<AppState> {
    Router::new().route("/api/sessions", get(list_sessions).post(create_session))
}
