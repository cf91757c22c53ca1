//! Whole-graph snapshot persistence.
//!
//! A snapshot captures everything needed to round-trip a graph: the fixed
//! capacity, user names in index order, and the sparse edge list, plus an
//! xxh64 checksum over the canonical encoding of those three fields. The
//! checksum makes corruption detectable; a load that fails for any reason
//! (missing file, bad JSON, checksum mismatch, invariant violation) recovers
//! to a fresh empty graph instead of surfacing an error.

use std::fs;
use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::canonical::canonical_hash_hex;
use crate::graph::FollowGraph;
use crate::types::Connection;

/// Default snapshot file name.
pub const SNAPSHOT_FILE: &str = "follow_graph.json";

/// Error type for snapshot writes.
///
/// Loads never error; see [`load_graph`].
#[derive(Debug, thiserror::Error)]
pub enum SnapshotError {
    /// Filesystem failure.
    #[error("snapshot I/O failed: {0}")]
    Io(#[from] std::io::Error),
    /// Serialization failure.
    #[error("snapshot encoding failed: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Serialized form of a [`FollowGraph`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GraphSnapshot {
    /// Fixed capacity of the captured graph.
    pub capacity: usize,
    /// User names in index order; position is the user's matrix index.
    pub users: Vec<String>,
    /// Sorted sparse edge list, by name pair.
    pub edges: Vec<Connection>,
    /// xxh64 over the canonical encoding of (capacity, users, edges).
    pub checksum: String,
    /// Unix timestamp of capture. Not covered by the checksum.
    pub saved_at: i64,
}

impl GraphSnapshot {
    /// Capture the full state of a graph.
    pub fn capture(graph: &FollowGraph) -> Self {
        let users: Vec<String> = graph.users().iter().map(|u| u.name().to_string()).collect();
        let edges = graph.connections();
        let capacity = graph.capacity();
        let checksum = Self::checksum_of(capacity, &users, &edges);
        let saved_at = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs() as i64;

        Self {
            capacity,
            users,
            edges,
            checksum,
            saved_at,
        }
    }

    fn checksum_of(capacity: usize, users: &[String], edges: &[Connection]) -> String {
        canonical_hash_hex(&(capacity, users, edges))
    }

    /// Whether the stored checksum matches the stored content.
    pub fn verify(&self) -> bool {
        self.checksum == Self::checksum_of(self.capacity, &self.users, &self.edges)
    }

    /// Rebuild a graph from this snapshot.
    ///
    /// Returns `None` when the checksum fails or the content violates graph
    /// invariants (duplicate names, more users than capacity). Edges are
    /// replayed through the normal mutation path, so an edge naming an
    /// unlisted user silently drops, matching live semantics.
    pub fn restore(&self) -> Option<FollowGraph> {
        if !self.verify() {
            return None;
        }

        let mut graph = FollowGraph::with_capacity(self.capacity);
        for name in &self.users {
            graph.add_user(name).ok()?;
        }
        if graph.user_count() != self.users.len() {
            // Duplicate names collapsed; index correspondence is broken.
            return None;
        }
        for edge in &self.edges {
            graph.add_connection(&edge.from, &edge.to);
        }
        Some(graph)
    }
}

/// Serialize `graph` to pretty JSON at `path`.
pub fn save_graph(graph: &FollowGraph, path: impl AsRef<Path>) -> Result<(), SnapshotError> {
    let path = path.as_ref();
    let snapshot = GraphSnapshot::capture(graph);
    let json = serde_json::to_string_pretty(&snapshot)?;
    fs::write(path, json)?;

    debug!(
        path = %path.display(),
        users = snapshot.users.len(),
        edges = snapshot.edges.len(),
        "graph snapshot saved"
    );
    Ok(())
}

/// Load a graph from `path`, or a fresh empty graph when that fails.
///
/// Every failure mode recovers locally: an absent file starts a new session
/// silently, while unreadable bytes, malformed JSON, a checksum mismatch, or
/// invariant-violating content log a warning first.
pub fn load_graph(path: impl AsRef<Path>) -> FollowGraph {
    let path = path.as_ref();
    if !path.exists() {
        debug!(path = %path.display(), "no snapshot found, starting fresh");
        return FollowGraph::new();
    }

    let bytes = match fs::read_to_string(path) {
        Ok(bytes) => bytes,
        Err(err) => {
            warn!(path = %path.display(), %err, "snapshot unreadable, starting fresh");
            return FollowGraph::new();
        }
    };

    let snapshot: GraphSnapshot = match serde_json::from_str(&bytes) {
        Ok(snapshot) => snapshot,
        Err(err) => {
            warn!(path = %path.display(), %err, "snapshot malformed, starting fresh");
            return FollowGraph::new();
        }
    };

    match snapshot.restore() {
        Some(graph) => {
            debug!(
                path = %path.display(),
                users = graph.user_count(),
                "graph snapshot loaded"
            );
            graph
        }
        None => {
            warn!(path = %path.display(), "snapshot failed verification, starting fresh");
            FollowGraph::new()
        }
    }
}
