//! Application layer - Commands, Queries, and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.
//! Command handlers write, query handlers read; both return `OutreachError`.

mod error;
pub mod handlers;

pub use error::OutreachError;
pub use handlers::{
    AddMessageCommand, AddMessageHandler, CreateSessionCommand, CreateSessionHandler,
    CreateUserCommand, CreateUserHandler, GenerateSequenceCommand, GenerateSequenceHandler,
    GetHistoryHandler, GetHistoryQuery, GetUserHandler, GetUserQuery, ListSequencesHandler,
    ListSequencesQuery, ListUserSessionsHandler, ListUserSessionsQuery, SaveSequenceCommand,
    SaveSequenceHandler,
};
