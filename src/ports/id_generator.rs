//! Identifier generation port.
//!
//! Repositories prefix the generated suffix with the entity kind
//! (`thread-`, `comment-`, `reply-`). Uniqueness is the generator's job.

/// Produces opaque, unique identifier suffixes.
pub trait IdGenerator: Send + Sync {
    /// Returns a new suffix. Never empty.
    fn generate(&self) -> String;
}
