//! # follow-graph
//!
//! In-memory social follow-graph engine.
//!
//! Users are vertices, follow relationships are directed edges, and the
//! engine answers structural queries over them:
//!
//! 1. Shortest path and all simple paths between two users
//! 2. Every simple cycle, de-duplicated up to rotation
//! 3. Follower/following degrees and report orderings
//!
//! ## Architecture
//!
//! ```text
//! names → FollowGraph (registry + adjacency matrix) → traversal outcomes
//!              ↓                         ↑
//!        GraphSnapshot (save/load)   loaders (bulk text files)
//! ```
//!
//! The registry assigns each user a dense zero-based index into a
//! fixed-capacity boolean matrix; removal compacts the index space so live
//! indices are always exactly `0..user_count`. Traversals are recursive DFS
//! over indices with ascending-order neighbor visits, which makes every
//! query deterministic for a given insertion order.
//!
//! Single-threaded by contract: one graph, one caller, no suspension points.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod canonical;
pub mod graph;
pub mod loader;
pub mod ordering;
pub mod snapshot;
pub mod traversal;
pub mod types;

// Re-exports
pub use canonical::{
    canonical_cycle, canonical_hash, canonical_hash_hex, to_canonical_bytes, PATH_SEPARATOR,
};
pub use graph::{FollowGraph, GraphError, MAX_USERS};
pub use loader::{load_connections, load_users, LoaderError};
pub use ordering::UserOrdering;
pub use snapshot::{load_graph, save_graph, GraphSnapshot, SnapshotError, SNAPSHOT_FILE};
pub use traversal::{AllPathsOutcome, PathOutcome};
pub use types::{Connection, User};
