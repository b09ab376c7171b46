//! HTTP adapter for session endpoints.

mod dto;
mod handlers;
mod routes;

pub use dto::{CreateSessionRequest, ListSessionsQuery, SessionResponse};
pub use handlers::USER_ID_REQUIRED;
pub use routes::session_routes;
