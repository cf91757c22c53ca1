//! Connection types for the follow graph.

use serde::{Deserialize, Serialize};

/// A directed follow relation between two users, by name.
///
/// `from` follows `to`. This is the sparse-edge-list form of a matrix cell,
/// used by snapshots and reports. Implements `Ord` for deterministic
/// ordering: (from, to).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Connection {
    /// Following user (edge source).
    pub from: String,
    /// Followed user (edge target).
    pub to: String,
}

impl Connection {
    /// Create a new connection.
    pub fn new(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
        }
    }
}

// Canonical ordering: from, then to
impl PartialOrd for Connection {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Connection {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        match self.from.cmp(&other.from) {
            std::cmp::Ordering::Equal => self.to.cmp(&other.to),
            ord => ord,
        }
    }
}
