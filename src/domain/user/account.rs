//! User account entity.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::domain::foundation::{UserId, ValidationError};

/// Maximum length for user name and email columns.
pub const MAX_NAME_LENGTH: usize = 100;
pub const MAX_EMAIL_LENGTH: usize = 100;

static EMAIL_FORMAT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("email pattern is valid"));

/// A registered recruiter.
///
/// Users are created once and never modified.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub email: String,
}

/// Validated insert payload for a user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    name: String,
    email: String,
}

impl NewUser {
    /// Validate name and email.
    ///
    /// Both are trimmed. The email is lowercased so uniqueness is
    /// case-insensitive.
    ///
    /// # Errors
    ///
    /// - `EmptyField` if either value is blank
    /// - `TooLong` if either exceeds 100 characters
    /// - `InvalidFormat` if the email is not `local@domain.tld`
    pub fn new(name: &str, email: &str) -> Result<Self, ValidationError> {
        let name = name.trim();
        let email = email.trim().to_lowercase();

        if name.is_empty() {
            return Err(ValidationError::empty_field("name"));
        }
        if email.is_empty() {
            return Err(ValidationError::empty_field("email"));
        }
        let name_len = name.chars().count();
        if name_len > MAX_NAME_LENGTH {
            return Err(ValidationError::too_long("name", MAX_NAME_LENGTH, name_len));
        }
        let email_len = email.chars().count();
        if email_len > MAX_EMAIL_LENGTH {
            return Err(ValidationError::too_long("email", MAX_EMAIL_LENGTH, email_len));
        }
        if !EMAIL_FORMAT.is_match(&email) {
            return Err(ValidationError::invalid_format(
                "email",
                "expected an address like name@example.com",
            ));
        }

        Ok(Self {
            name: name.to_string(),
            email,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }
}
