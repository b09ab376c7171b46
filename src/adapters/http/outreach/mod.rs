//! HTTP adapter for outreach sequence endpoints.

mod dto;
mod handlers;
mod routes;

pub use dto::{
    ContextTurnRequest, GenerateSequenceRequest, GenerateSequenceResponse, MessageResponse,
    SaveSequenceRequest, SavedSequenceResponse,
};
pub use handlers::{MISSING_DATA, NO_INPUT, SEQUENCE_SAVED};
pub use routes::outreach_routes;
