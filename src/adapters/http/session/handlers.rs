//! HTTP handlers for session endpoints.

use axum::{
    extract::{rejection::JsonRejection, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::error::{bad_request, handle_outreach_error, rejected_body};
use crate::adapters::http::AppState;
use crate::application::{CreateSessionCommand, ListUserSessionsQuery, OutreachError};
use crate::domain::foundation::UserId;

use super::dto::{CreateSessionRequest, ListSessionsQuery, SessionResponse};

pub const USER_ID_REQUIRED: &str = "User ID is required";

/// GET /api/sessions?user_id= - List a user's sessions, newest first
pub async fn list_sessions(
    State(state): State<AppState>,
    Query(query): Query<ListSessionsQuery>,
) -> Response {
    let raw = match query.user_id {
        Some(raw) if !raw.trim().is_empty() => raw,
        _ => return bad_request(USER_ID_REQUIRED),
    };
    let user_id = match raw.parse::<UserId>() {
        Ok(id) => id,
        Err(e) => return handle_outreach_error(OutreachError::from(e)),
    };

    match state
        .list_sessions_handler()
        .handle(ListUserSessionsQuery { user_id })
        .await
    {
        Ok(sessions) => {
            let response: Vec<SessionResponse> =
                sessions.into_iter().map(SessionResponse::from).collect();
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => handle_outreach_error(e),
    }
}

/// POST /api/sessions - Create a session seeded with the welcome message
pub async fn create_session(
    State(state): State<AppState>,
    payload: Result<Json<CreateSessionRequest>, JsonRejection>,
) -> Response {
    let req = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejected_body(rejection, USER_ID_REQUIRED),
    };
    let Some(Ok(user_id)) = req.user_id.map(UserId::new) else {
        return bad_request(USER_ID_REQUIRED);
    };

    let cmd = CreateSessionCommand {
        user_id,
        title: req.title,
    };

    match state.create_session_handler().handle(cmd).await {
        Ok(session) => {
            let response = SessionResponse::from(session);
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => handle_outreach_error(e),
    }
}
