//! Shared application state for the HTTP surface.

use std::sync::Arc;

use crate::application::{
    AddMessageHandler, CreateSessionHandler, CreateUserHandler, GenerateSequenceHandler,
    GetHistoryHandler, GetUserHandler, ListSequencesHandler, ListUserSessionsHandler,
    SaveSequenceHandler,
};
use crate::ports::{
    AIProvider, MessageRepository, SequenceRepository, SessionRepository, UserRepository,
};

/// Shared application state containing all dependencies.
///
/// Cloned per request; every dependency is an `Arc` so clones are cheap.
#[derive(Clone)]
pub struct AppState {
    pub users: Arc<dyn UserRepository>,
    pub sessions: Arc<dyn SessionRepository>,
    pub messages: Arc<dyn MessageRepository>,
    pub sequences: Arc<dyn SequenceRepository>,
    pub ai_provider: Arc<dyn AIProvider>,
}

impl AppState {
    pub fn new(
        users: Arc<dyn UserRepository>,
        sessions: Arc<dyn SessionRepository>,
        messages: Arc<dyn MessageRepository>,
        sequences: Arc<dyn SequenceRepository>,
        ai_provider: Arc<dyn AIProvider>,
    ) -> Self {
        Self {
            users,
            sessions,
            messages,
            sequences,
            ai_provider,
        }
    }

    pub fn generate_sequence_handler(&self) -> GenerateSequenceHandler {
        GenerateSequenceHandler::new(self.ai_provider.clone())
    }

    pub fn save_sequence_handler(&self) -> SaveSequenceHandler {
        SaveSequenceHandler::new(self.sequences.clone())
    }

    pub fn list_sequences_handler(&self) -> ListSequencesHandler {
        ListSequencesHandler::new(self.sequences.clone())
    }

    pub fn create_session_handler(&self) -> CreateSessionHandler {
        CreateSessionHandler::new(self.sessions.clone(), self.messages.clone())
    }

    pub fn list_sessions_handler(&self) -> ListUserSessionsHandler {
        ListUserSessionsHandler::new(self.sessions.clone())
    }

    pub fn add_message_handler(&self) -> AddMessageHandler {
        AddMessageHandler::new(self.messages.clone())
    }

    pub fn get_history_handler(&self) -> GetHistoryHandler {
        GetHistoryHandler::new(self.messages.clone())
    }

    pub fn create_user_handler(&self) -> CreateUserHandler {
        CreateUserHandler::new(self.users.clone())
    }

    pub fn get_user_handler(&self) -> GetUserHandler {
        GetUserHandler::new(self.users.clone())
    }
}
