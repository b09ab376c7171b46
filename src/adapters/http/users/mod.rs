//! HTTP adapter for user endpoints.

mod dto;
mod handlers;
mod routes;

pub use dto::{CreateUserRequest, UserResponse};
pub use routes::user_routes;
