//! Adapters - Implementations of the ports.
//!
//! - `ai` - OpenAI client and a scripted mock
//! - `http` - axum REST surface
//! - `memory` - In-memory repositories for tests and local runs
//! - `postgres` - sqlx repositories and migrations

pub mod ai;
pub mod http;
pub mod memory;
pub mod postgres;
