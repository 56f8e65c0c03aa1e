//! In-memory adapters for local runs and integration tests.

mod store;

pub use store::InMemoryForumStore;
