//! Helix - Recruiting Outreach Assistant Backend
//!
//! Stores recruiters, chat sessions, messages and saved outreach sequences,
//! and asks a language model to draft multi-step outreach sequences. Model
//! replies that embed a sequence object are extracted into structured form;
//! anything else passes through as a plain chat message.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
