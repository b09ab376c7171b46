//! Strongly-typed identifier value objects.
//!
//! Every row is keyed by a database-assigned `BIGSERIAL`, so identifiers wrap
//! an `i64`. Only positive values are valid keys.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ValidationError;

macro_rules! serial_id {
    ($(#[$meta:meta])* $name:ident, $field:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(i64);

        impl $name {
            /// Wraps a raw key, rejecting zero and negative values.
            pub fn new(raw: i64) -> Result<Self, ValidationError> {
                if raw <= 0 {
                    return Err(ValidationError::invalid_format(
                        $field,
                        "must be a positive integer",
                    ));
                }
                Ok(Self(raw))
            }

            /// Wraps a key read back from storage.
            pub fn from_db(raw: i64) -> Self {
                Self(raw)
            }

            /// Returns the raw key.
            pub fn as_i64(&self) -> i64 {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl FromStr for $name {
            type Err = ValidationError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let raw = s.trim().parse::<i64>().map_err(|_| {
                    ValidationError::invalid_format($field, "must be an integer")
                })?;
                Self::new(raw)
            }
        }
    };
}

serial_id!(
    /// Identifier of a registered user.
    UserId,
    "user_id"
);

serial_id!(
    /// Identifier of a chat session.
    SessionId,
    "session_id"
);

serial_id!(
    /// Identifier of a chat message.
    MessageId,
    "message_id"
);

serial_id!(
    /// Identifier of a saved outreach sequence.
    SequenceId,
    "sequence_id"
);
