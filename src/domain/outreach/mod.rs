//! Outreach domain module.
//!
//! Turning model replies into structured outreach sequences, assembling the
//! prompt that asks for them, and the saved-sequence record.

mod extractor;
mod prompt;
mod sequence;

pub use extractor::{
    extract_sequence, ExtractedReply, ReplyKind, SequenceDraft, SEQUENCE_CONFIRMATION,
};
pub use prompt::{assemble_conversation, ChatTurn, TurnRole, SYSTEM_INSTRUCTION};
pub use sequence::{NewOutreachSequence, OutreachSequence};
