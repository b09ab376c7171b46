//! HTTP routes for user endpoints.

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{create_user, get_user};
use crate::adapters::http::AppState;

/// Creates the user router.
pub fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/api/users", post(create_user))
        .route("/api/users/:user_id", get(get_user))
}
