//! In-memory follow-graph engine.
//!
//! The engine owns two pieces of shared state: the vertex registry (an
//! insertion-ordered list of users, each holding a dense matrix index) and a
//! fixed-capacity square boolean adjacency matrix where `matrix[i][j]` means
//! the user at index `i` follows the user at index `j`.
//!
//! ## Index invariant
//!
//! At any time the set of indices in use is exactly `{0, .., N-1}` for N live
//! users. Removal closes the gap: rows above the freed index shift down,
//! columns shift left, the freed last row/column is zeroed, and every
//! remaining user is renumbered to its position in the registry. Cells
//! outside the live range are always false.

use tracing::debug;

use crate::types::{Connection, User};

/// Default maximum number of users a graph can hold.
pub const MAX_USERS: usize = 100;

/// Error type for graph mutations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GraphError {
    /// The registry is full; the graph is left unchanged.
    #[error("maximum number of users reached (capacity {capacity})")]
    CapacityExceeded {
        /// The fixed capacity that was exceeded.
        capacity: usize,
    },
}

/// The follow graph: vertex registry plus adjacency matrix.
#[derive(Debug, Clone)]
pub struct FollowGraph {
    users: Vec<User>,
    matrix: Vec<Vec<bool>>,
    capacity: usize,
}

impl FollowGraph {
    /// Create an empty graph with the default capacity of [`MAX_USERS`].
    pub fn new() -> Self {
        Self::with_capacity(MAX_USERS)
    }

    /// Create an empty graph with a fixed capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            users: Vec::new(),
            matrix: vec![vec![false; capacity]; capacity],
            capacity,
        }
    }

    /// The fixed capacity of this graph.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of live users.
    pub fn user_count(&self) -> usize {
        self.users.len()
    }

    /// Whether the graph has no users.
    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }

    /// Live users in index order.
    pub fn users(&self) -> &[User] {
        &self.users
    }

    /// Linear lookup by exact, case-sensitive name.
    pub fn user_by_name(&self, name: &str) -> Option<&User> {
        self.users.iter().find(|u| u.name() == name)
    }

    /// Add a user with the next sequential index.
    ///
    /// Adding a name that already exists is a no-op; both calls resolve to
    /// the same index. Fails only when the registry is at capacity, leaving
    /// the graph unchanged.
    pub fn add_user(&mut self, name: &str) -> Result<(), GraphError> {
        if self.user_by_name(name).is_some() {
            return Ok(());
        }
        if self.users.len() >= self.capacity {
            return Err(GraphError::CapacityExceeded {
                capacity: self.capacity,
            });
        }
        let index = self.users.len();
        self.users.push(User::new(name, index));
        debug!(name, index, "user added");
        Ok(())
    }

    /// Remove a user and every edge incident to it, then compact.
    ///
    /// Removing a name that does not exist is a silent no-op.
    pub fn remove_user(&mut self, name: &str) {
        let Some(removed) = self.user_by_name(name).map(User::index) else {
            return;
        };
        self.users.remove(removed);

        // Shift rows above the freed index down, columns right of it left,
        // then zero the now-unused last row and column.
        let live = self.users.len();
        for i in removed..live {
            for j in 0..self.capacity {
                self.matrix[i][j] = self.matrix[i + 1][j];
            }
        }
        for j in removed..live {
            for i in 0..self.capacity {
                self.matrix[i][j] = self.matrix[i][j + 1];
            }
        }
        for k in 0..self.capacity {
            self.matrix[live][k] = false;
            self.matrix[k][live] = false;
        }

        // Renumber so indices stay dense in original relative order.
        for (i, user) in self.users.iter_mut().enumerate() {
            user.set_index(i);
        }
        debug!(name, index = removed, "user removed, indices compacted");
    }

    /// Record that `from` follows `to`. Idempotent.
    ///
    /// Either name failing to resolve makes this a no-op.
    pub fn add_connection(&mut self, from: &str, to: &str) {
        let (Some(f), Some(t)) = (self.user_by_name(from), self.user_by_name(to)) else {
            return;
        };
        let (f, t) = (f.index(), t.index());
        self.matrix[f][t] = true;
    }

    /// Erase a follow relation. No-op when either name is unresolved.
    pub fn remove_connection(&mut self, from: &str, to: &str) {
        let (Some(f), Some(t)) = (self.user_by_name(from), self.user_by_name(to)) else {
            return;
        };
        let (f, t) = (f.index(), t.index());
        self.matrix[f][t] = false;
    }

    /// Whether `from` currently follows `to`. False when either name is
    /// unresolved.
    pub fn has_connection(&self, from: &str, to: &str) -> bool {
        match (self.user_by_name(from), self.user_by_name(to)) {
            (Some(f), Some(t)) => self.matrix[f.index()][t.index()],
            _ => false,
        }
    }

    /// In-degree: how many live users follow the user at `index`.
    pub fn count_followers(&self, index: usize) -> usize {
        (0..self.users.len())
            .filter(|&i| self.matrix[i][index])
            .count()
    }

    /// Out-degree: how many live users the user at `index` follows.
    pub fn count_following(&self, index: usize) -> usize {
        (0..self.users.len())
            .filter(|&j| self.matrix[index][j])
            .count()
    }

    /// Indices followed by `index`, ascending. Traversals rely on this
    /// ordering for deterministic exploration.
    pub fn neighbors(&self, index: usize) -> impl Iterator<Item = usize> + '_ {
        (0..self.users.len()).filter(move |&j| self.matrix[index][j])
    }

    /// Every live edge as a sorted `(from, to)` name-pair list.
    pub fn connections(&self) -> Vec<Connection> {
        let mut edges: Vec<Connection> = Vec::new();
        for from in &self.users {
            for j in self.neighbors(from.index()) {
                edges.push(Connection::new(from.name(), self.users[j].name()));
            }
        }
        edges.sort();
        edges
    }

    /// Name of the user at `index`. Panics on a dead index; callers stay
    /// inside `[0, user_count)`.
    pub(crate) fn name_at(&self, index: usize) -> &str {
        self.users[index].name()
    }
}

impl Default for FollowGraph {
    fn default() -> Self {
        Self::new()
    }
}
