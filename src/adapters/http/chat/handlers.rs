//! HTTP handlers for chat message endpoints.

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::error::{bad_request, handle_outreach_error, rejected_body};
use crate::adapters::http::AppState;
use crate::application::{AddMessageCommand, GetHistoryQuery, OutreachError};
use crate::domain::conversation::Role;
use crate::domain::foundation::SessionId;

use super::dto::{AddMessageRequest, MessageResponse};

pub const MISSING_REQUIRED_FIELDS: &str = "Missing required fields";

/// GET /api/chat/history/:session_id - Messages of a session, oldest first
pub async fn get_history(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
) -> Response {
    let session_id = match session_id.parse::<SessionId>() {
        Ok(id) => id,
        Err(e) => return handle_outreach_error(OutreachError::from(e)),
    };

    match state
        .get_history_handler()
        .handle(GetHistoryQuery { session_id })
        .await
    {
        Ok(messages) => {
            let response: Vec<MessageResponse> =
                messages.into_iter().map(MessageResponse::from).collect();
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => handle_outreach_error(e),
    }
}

/// POST /api/chat/message - Append a message to a session
pub async fn add_message(
    State(state): State<AppState>,
    payload: Result<Json<AddMessageRequest>, JsonRejection>,
) -> Response {
    let req = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejected_body(rejection, MISSING_REQUIRED_FIELDS),
    };

    let (Some(raw_session_id), Some(role), Some(content)) = (req.session_id, req.role, req.content)
    else {
        return bad_request(MISSING_REQUIRED_FIELDS);
    };
    if role.is_empty() || content.is_empty() {
        return bad_request(MISSING_REQUIRED_FIELDS);
    }
    let Ok(session_id) = SessionId::new(raw_session_id) else {
        return bad_request(MISSING_REQUIRED_FIELDS);
    };

    let role = match role.parse::<Role>() {
        Ok(role) => role,
        Err(e) => return handle_outreach_error(OutreachError::from(e)),
    };

    let cmd = AddMessageCommand {
        session_id,
        role,
        content,
    };

    match state.add_message_handler().handle(cmd).await {
        Ok(message) => {
            let response = MessageResponse::from(message);
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => handle_outreach_error(e),
    }
}
