//! User vertex type for the follow graph.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A user vertex in the follow graph.
///
/// Each user carries a unique, case-sensitive name and a dense zero-based
/// `index` into the adjacency matrix. The index is assigned by the graph at
/// insertion time and renumbered by compaction after a removal; it is never
/// set by callers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    name: String,
    index: usize,
}

impl User {
    /// Create a user at the given matrix index.
    pub(crate) fn new(name: impl Into<String>, index: usize) -> Self {
        Self {
            name: name.into(),
            index,
        }
    }

    /// The user's unique name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The user's current matrix index, in `[0, live_count)`.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Renumber this user. Compaction only.
    pub(crate) fn set_index(&mut self, index: usize) {
        self.index = index;
    }
}

impl fmt::Display for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}
