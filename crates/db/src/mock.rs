//! In-process stand-ins for the PostgreSQL store, used by tests and local runs.

pub mod store;

pub use store::InMemoryStore;
