//! Chat message command and query handlers.

mod add_message;
mod get_history;

pub use add_message::{AddMessageCommand, AddMessageHandler};
pub use get_history::{GetHistoryHandler, GetHistoryQuery};
