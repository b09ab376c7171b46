//! Conversation domain module.
//!
//! Stored chat messages exchanged inside a session.

mod message;

pub use message::{Message, NewMessage, Role, WELCOME_MESSAGE};
