//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! ## Persistence Ports
//!
//! - `UserRepository` - Recruiter accounts
//! - `SessionRepository` - Chat sessions
//! - `MessageRepository` - Messages within a session
//! - `SequenceRepository` - Saved outreach sequences
//!
//! ## Language Model Port
//!
//! - `AIProvider` - Chat completion against the configured model

mod ai_provider;
mod message_repository;
mod sequence_repository;
mod session_repository;
mod user_repository;

pub use ai_provider::{
    AIError, AIProvider, CompletionRequest, CompletionResponse, FinishReason, Message,
    MessageRole, ProviderInfo, TokenUsage,
};
pub use message_repository::MessageRepository;
pub use sequence_repository::SequenceRepository;
pub use session_repository::SessionRepository;
pub use user_repository::UserRepository;
