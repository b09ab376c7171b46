//! HTTP handlers for outreach sequence endpoints.

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::error::{bad_request, handle_outreach_error, rejected_body};
use crate::adapters::http::AppState;
use crate::application::{
    GenerateSequenceCommand, ListSequencesQuery, OutreachError, SaveSequenceCommand,
};
use crate::domain::foundation::UserId;
use crate::domain::outreach::ChatTurn;

use super::dto::{
    GenerateSequenceRequest, GenerateSequenceResponse, MessageResponse, SaveSequenceRequest,
    SavedSequenceResponse,
};

pub const NO_INPUT: &str = "No input provided";
pub const MISSING_DATA: &str = "Missing data";
pub const SEQUENCE_SAVED: &str = "Sequence saved successfully!";

/// POST /generate_sequence - Ask the model and classify its reply
pub async fn generate_sequence(
    State(state): State<AppState>,
    payload: Result<Json<GenerateSequenceRequest>, JsonRejection>,
) -> Response {
    let req = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejected_body(rejection, NO_INPUT),
    };

    let message = match req.message {
        Some(message) if !message.is_empty() => message,
        _ => return bad_request(NO_INPUT),
    };

    let context = match req
        .context
        .unwrap_or_default()
        .into_iter()
        .map(|turn| turn.into_turn())
        .collect::<Result<Vec<ChatTurn>, _>>()
    {
        Ok(turns) => turns,
        Err(e) => return handle_outreach_error(e.into()),
    };

    let cmd = GenerateSequenceCommand { message, context };

    match state.generate_sequence_handler().handle(cmd).await {
        Ok(reply) => {
            let response = GenerateSequenceResponse::from(reply);
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => handle_outreach_error(e),
    }
}

/// POST /save_sequence - Store sequence text for a user
pub async fn save_sequence(
    State(state): State<AppState>,
    payload: Result<Json<SaveSequenceRequest>, JsonRejection>,
) -> Response {
    let req = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejected_body(rejection, MISSING_DATA),
    };

    let (Some(raw_user_id), Some(sequence_text)) = (req.user_id, req.sequence_text) else {
        return bad_request(MISSING_DATA);
    };
    let Ok(user_id) = UserId::new(raw_user_id) else {
        return bad_request(MISSING_DATA);
    };
    if sequence_text.is_empty() {
        return bad_request(MISSING_DATA);
    }

    let cmd = SaveSequenceCommand {
        user_id,
        sequence_text,
    };

    match state.save_sequence_handler().handle(cmd).await {
        Ok(_) => {
            let response = MessageResponse {
                message: SEQUENCE_SAVED.to_string(),
            };
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => handle_outreach_error(e),
    }
}

/// GET /get_sequences/:user_id - List a user's saved sequences
pub async fn get_sequences(State(state): State<AppState>, Path(user_id): Path<String>) -> Response {
    let user_id = match user_id.parse::<UserId>() {
        Ok(id) => id,
        Err(e) => return handle_outreach_error(OutreachError::from(e)),
    };

    match state
        .list_sequences_handler()
        .handle(ListSequencesQuery { user_id })
        .await
    {
        Ok(sequences) => {
            let response: Vec<SavedSequenceResponse> =
                sequences.into_iter().map(SavedSequenceResponse::from).collect();
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => handle_outreach_error(e),
    }
}
