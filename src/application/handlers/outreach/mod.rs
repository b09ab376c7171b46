//! Outreach sequence handlers: generation through the model, saving and listing.

mod generate_sequence;
mod list_sequences;
mod save_sequence;

pub use generate_sequence::{GenerateSequenceCommand, GenerateSequenceHandler};
pub use list_sequences::{ListSequencesHandler, ListSequencesQuery};
pub use save_sequence::{SaveSequenceCommand, SaveSequenceHandler};
