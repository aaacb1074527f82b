//! Core types for the logging module.

use serde::{Deserialize, Serialize};

/// Length of the short dispatch ID format (first N characters of UUID).
pub const SHORT_ID_LENGTH: usize = 8;

/// Unique identifier for one dispatch, used for log correlation.
///
/// Uses UUID v7 so IDs sort by creation time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DispatchId(uuid::Uuid);

impl DispatchId {
    /// Creates a new unique dispatch ID using UUID v7.
    pub fn new() -> Self {
        Self(uuid::Uuid::new_v7(uuid::Timestamp::now(uuid::NoContext)))
    }

    /// Returns the short form of the ID (first [`SHORT_ID_LENGTH`] characters).
    pub fn short(&self) -> String {
        self.0.to_string().chars().take(SHORT_ID_LENGTH).collect()
    }
}

impl Default for DispatchId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for DispatchId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<uuid::Uuid> for DispatchId {
    fn from(uuid: uuid::Uuid) -> Self {
        Self(uuid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dispatch_ids_are_unique_and_ordered() {
        let a = DispatchId::new();
        let b = DispatchId::new();
        assert_ne!(a, b);
        assert!(a.to_string() <= b.to_string());
        assert_eq!(a.short().len(), SHORT_ID_LENGTH);
    }
}
