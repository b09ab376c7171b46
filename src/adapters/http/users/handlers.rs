//! HTTP handlers for user endpoints.

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::chat::MISSING_REQUIRED_FIELDS;
use crate::adapters::http::error::{bad_request, handle_outreach_error, rejected_body};
use crate::adapters::http::AppState;
use crate::application::{CreateUserCommand, GetUserQuery, OutreachError};
use crate::domain::foundation::UserId;

use super::dto::{CreateUserRequest, UserResponse};

/// POST /api/users - Register a user
pub async fn create_user(
    State(state): State<AppState>,
    payload: Result<Json<CreateUserRequest>, JsonRejection>,
) -> Response {
    let req = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejected_body(rejection, MISSING_REQUIRED_FIELDS),
    };
    let (Some(name), Some(email)) = (req.name, req.email) else {
        return bad_request(MISSING_REQUIRED_FIELDS);
    };

    match state
        .create_user_handler()
        .handle(CreateUserCommand { name, email })
        .await
    {
        Ok(user) => (StatusCode::CREATED, Json(UserResponse::from(user))).into_response(),
        Err(e) => handle_outreach_error(e),
    }
}

/// GET /api/users/:user_id - Fetch a user
pub async fn get_user(State(state): State<AppState>, Path(user_id): Path<String>) -> Response {
    let user_id = match user_id.parse::<UserId>() {
        Ok(id) => id,
        Err(e) => return handle_outreach_error(OutreachError::from(e)),
    };

    match state.get_user_handler().handle(GetUserQuery { user_id }).await {
        Ok(user) => (StatusCode::OK, Json(UserResponse::from(user))).into_response(),
        Err(e) => handle_outreach_error(e),
    }
}
