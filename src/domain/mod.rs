//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (IDs, timestamps, errors)
//! - `user` - Recruiter accounts
//! - `session` - Chat session threads
//! - `conversation` - Messages stored within a session
//! - `outreach` - Sequence extraction, prompt assembly and saved sequences

pub mod conversation;
pub mod foundation;
pub mod outreach;
pub mod session;
pub mod user;
