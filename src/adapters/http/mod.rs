//! HTTP adapters - REST API implementations.
//!
//! Each capability has its own module with DTOs, handlers and routes.
//! `build_router` merges them over one shared `AppState`.

pub mod chat;
mod error;
pub mod outreach;
mod router;
pub mod session;
mod state;
pub mod users;

pub use error::{handle_outreach_error, ErrorResponse};
pub use router::{build_router, HEALTH_MESSAGE};
pub use state::AppState;
