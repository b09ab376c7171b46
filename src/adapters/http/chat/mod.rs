//! HTTP adapter for chat message endpoints.

mod dto;
mod handlers;
mod routes;

pub use dto::{AddMessageRequest, MessageResponse};
pub use handlers::MISSING_REQUIRED_FIELDS;
pub use routes::chat_routes;
