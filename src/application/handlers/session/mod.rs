//! Session command and query handlers.

mod create_session;
mod list_user_sessions;

pub use create_session::{CreateSessionCommand, CreateSessionHandler};
pub use list_user_sessions::{ListUserSessionsHandler, ListUserSessionsQuery};
