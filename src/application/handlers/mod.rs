//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations over the ports.

pub mod conversation;
pub mod outreach;
pub mod session;
pub mod user;

pub use conversation::{AddMessageCommand, AddMessageHandler, GetHistoryHandler, GetHistoryQuery};
pub use outreach::{
    GenerateSequenceCommand, GenerateSequenceHandler, ListSequencesHandler, ListSequencesQuery,
    SaveSequenceCommand, SaveSequenceHandler,
};
pub use session::{
    CreateSessionCommand, CreateSessionHandler, ListUserSessionsHandler, ListUserSessionsQuery,
};
pub use user::{CreateUserCommand, CreateUserHandler, GetUserHandler, GetUserQuery, USER_NOT_FOUND};
