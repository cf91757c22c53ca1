//! Bulk text-file ingestion.
//!
//! Thin wrappers that feed the engine's per-item mutations from line-based
//! files: one username per line, or `from,to` connection pairs. Per-line
//! anomalies (blanks, duplicates, malformed pairs, unresolved names) follow
//! the engine's no-op semantics and never abort the load; only I/O failure
//! and capacity exhaustion surface as errors.

use std::fs;
use std::path::Path;

use tracing::{debug, warn};

use crate::graph::{FollowGraph, GraphError};

/// Error type for bulk loads.
#[derive(Debug, thiserror::Error)]
pub enum LoaderError {
    /// The input file could not be read.
    #[error("load failed: {0}")]
    Io(#[from] std::io::Error),
    /// A user line hit the capacity limit.
    #[error(transparent)]
    Graph(#[from] GraphError),
}

/// Add one user per line of `path`. Blank lines and duplicate names skip
/// silently. Returns the number of users actually added.
pub fn load_users(graph: &mut FollowGraph, path: impl AsRef<Path>) -> Result<usize, LoaderError> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path)?;

    let mut added = 0;
    for line in contents.lines() {
        let name = line.trim();
        if name.is_empty() {
            continue;
        }
        let before = graph.user_count();
        graph.add_user(name)?;
        if graph.user_count() > before {
            added += 1;
        }
    }

    debug!(path = %path.display(), added, "bulk user load complete");
    Ok(added)
}

/// Apply one `from,to` connection per line of `path`. Whitespace around
/// either name is tolerated; malformed lines log a warning and skip;
/// connections naming unknown users no-op per the engine contract. Returns
/// the number of lines handed to the engine.
pub fn load_connections(
    graph: &mut FollowGraph,
    path: impl AsRef<Path>,
) -> Result<usize, LoaderError> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path)?;

    let mut applied = 0;
    for (lineno, line) in contents.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let mut parts = line.splitn(2, ',');
        let from = parts.next().map(str::trim).unwrap_or_default();
        let to = parts.next().map(str::trim);
        match to {
            Some(to) if !from.is_empty() && !to.is_empty() => {
                graph.add_connection(from, to);
                applied += 1;
            }
            _ => {
                warn!(path = %path.display(), line = lineno + 1, "malformed connection line skipped");
            }
        }
    }

    debug!(path = %path.display(), applied, "bulk connection load complete");
    Ok(applied)
}
