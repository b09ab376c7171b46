//! In-memory adapters for the persistence ports.

mod store;

pub use store::InMemoryStore;
