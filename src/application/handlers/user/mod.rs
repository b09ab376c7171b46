//! User command and query handlers.

mod create_user;
mod get_user;

pub use create_user::{CreateUserCommand, CreateUserHandler};
pub use get_user::{GetUserHandler, GetUserQuery, USER_NOT_FOUND};
