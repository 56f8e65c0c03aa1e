//! Random identifier suffixes backed by UUID v4.

use uuid::Uuid;

use crate::ports::IdGenerator;

/// Generates 32-character lowercase hex suffixes (`thread-<suffix>`).
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidIdGenerator;

impl UuidIdGenerator {
    pub fn new() -> Self {
        Self
    }
}

impl IdGenerator for UuidIdGenerator {
    fn generate(&self) -> String {
        Uuid::new_v4().simple().to_string()
    }
}
