//! Thread domain - discussion threads and their detail projection.

mod detail;
mod entities;

pub use detail::{DetailThread, ThreadRow};
pub use entities::{AddedThread, NewThread, NewThreadPayload};
