//! HTTP routes for outreach sequence endpoints.

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{generate_sequence, get_sequences, save_sequence};
use crate::adapters::http::AppState;

/// Creates the outreach router.
///
/// # Routes
/// - `POST /generate_sequence` - Model reply, classified as message or sequence
/// - `POST /save_sequence` - Store sequence text
/// - `GET /get_sequences/:user_id` - Saved sequences, oldest first
pub fn outreach_routes() -> Router<AppState> {
    Router::new()
        .route("/generate_sequence", post(generate_sequence))
        .route("/save_sequence", post(save_sequence))
        .route("/get_sequences/:user_id", get(get_sequences))
}
