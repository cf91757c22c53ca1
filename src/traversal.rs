//! DFS traversal queries over the follow graph.
//!
//! All three queries run recursive depth-first search over the live index
//! range, visiting neighbors in ascending index order and never revisiting a
//! vertex within the current path. Recursion depth is bounded by the live
//! user count, which is bounded by the graph capacity.
//!
//! Absence of a result is a valid answer, not an error: unresolved endpoints
//! and empty result sets come back as descriptive outcome variants.

use std::collections::HashSet;
use std::fmt;

use crate::canonical::{canonical_cycle, PATH_SEPARATOR};
use crate::graph::FollowGraph;

/// Outcome of a shortest-path query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathOutcome {
    /// Ordered user names from source to target, endpoints included.
    Found(Vec<String>),
    /// The named endpoint is not a registered user.
    UnknownUser(String),
    /// Both endpoints exist but no path connects them.
    NotFound,
}

impl PathOutcome {
    /// The path's user names, when one was found.
    pub fn path(&self) -> Option<&[String]> {
        match self {
            Self::Found(names) => Some(names),
            _ => None,
        }
    }
}

impl fmt::Display for PathOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Found(names) => write!(f, "{}", names.join(PATH_SEPARATOR)),
            Self::UnknownUser(name) => write!(f, "The vertex {name} does not exist."),
            Self::NotFound => write!(f, "No path found."),
        }
    }
}

/// Outcome of an all-paths query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AllPathsOutcome {
    /// Every simple path, rendered and sorted lexicographically.
    Found(Vec<String>),
    /// The named endpoint is not a registered user.
    UnknownUser(String),
    /// Both endpoints exist but no path connects them.
    NotFound {
        /// The query's source name.
        from: String,
        /// The query's target name.
        to: String,
    },
}

impl AllPathsOutcome {
    /// The rendered paths, when any were found.
    pub fn paths(&self) -> Option<&[String]> {
        match self {
            Self::Found(paths) => Some(paths),
            _ => None,
        }
    }
}

impl fmt::Display for AllPathsOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Found(paths) => write!(f, "{}", paths.join("\n")),
            Self::UnknownUser(name) => write!(f, "The vertex {name} does not exist."),
            Self::NotFound { from, to } => {
                write!(f, "No path exists between {from} and {to}.")
            }
        }
    }
}

impl FollowGraph {
    /// Shortest path from `from` to `to` by hop count.
    ///
    /// Explores every simple path and keeps the one with the fewest
    /// vertices. Ties go to the first minimal-length path discovered;
    /// neighbors are explored in ascending index order, so the tie-break is
    /// deterministic for a given insertion order. The source endpoint is
    /// checked before the target.
    pub fn shortest_path(&self, from: &str, to: &str) -> PathOutcome {
        let Some(source) = self.user_by_name(from) else {
            return PathOutcome::UnknownUser(from.to_string());
        };
        let Some(target) = self.user_by_name(to) else {
            return PathOutcome::UnknownUser(to.to_string());
        };

        let mut visited = HashSet::new();
        let mut current = Vec::new();
        let mut best: Option<Vec<usize>> = None;
        self.shortest_dfs(
            source.index(),
            target.index(),
            &mut visited,
            &mut current,
            &mut best,
        );

        match best {
            Some(indices) => PathOutcome::Found(self.render_names(&indices)),
            None => PathOutcome::NotFound,
        }
    }

    fn shortest_dfs(
        &self,
        current: usize,
        target: usize,
        visited: &mut HashSet<usize>,
        path: &mut Vec<usize>,
        best: &mut Option<Vec<usize>>,
    ) {
        visited.insert(current);
        path.push(current);

        if current == target {
            if best.as_ref().map_or(true, |b| path.len() < b.len()) {
                *best = Some(path.clone());
            }
        } else {
            for neighbor in self.neighbors(current) {
                if !visited.contains(&neighbor) {
                    self.shortest_dfs(neighbor, target, visited, path, best);
                }
            }
        }

        path.pop();
        visited.remove(&current);
    }

    /// Every simple path from `from` to `to`, rendered and sorted
    /// lexicographically by the rendered string.
    pub fn all_paths(&self, from: &str, to: &str) -> AllPathsOutcome {
        let Some(source) = self.user_by_name(from) else {
            return AllPathsOutcome::UnknownUser(from.to_string());
        };
        let Some(target) = self.user_by_name(to) else {
            return AllPathsOutcome::UnknownUser(to.to_string());
        };

        let mut visited = HashSet::new();
        let mut current = Vec::new();
        let mut found = Vec::new();
        self.all_paths_dfs(
            source.index(),
            target.index(),
            &mut visited,
            &mut current,
            &mut found,
        );

        if found.is_empty() {
            return AllPathsOutcome::NotFound {
                from: from.to_string(),
                to: to.to_string(),
            };
        }
        found.sort();
        AllPathsOutcome::Found(found)
    }

    fn all_paths_dfs(
        &self,
        current: usize,
        target: usize,
        visited: &mut HashSet<usize>,
        path: &mut Vec<usize>,
        found: &mut Vec<String>,
    ) {
        visited.insert(current);
        path.push(current);

        if current == target {
            found.push(self.render_names(path).join(PATH_SEPARATOR));
        } else {
            for neighbor in self.neighbors(current) {
                if !visited.contains(&neighbor) {
                    self.all_paths_dfs(neighbor, target, visited, path, found);
                }
            }
        }

        path.pop();
        visited.remove(&current);
    }

    /// Every simple cycle in the graph, de-duplicated up to rotation.
    ///
    /// Each live vertex seeds a DFS that records a cycle when an edge leads
    /// back to the seed with at least two distinct vertices on the path, so
    /// two-cycles count and pure self-loops do not. A cycle discovered again
    /// from another seed (a rotation of the same vertex sequence) is dropped
    /// via its canonical form; the rendering that is kept preserves the
    /// traversal order of the first discovery, closing with the seed name.
    ///
    /// Results come back in discovery order; callers sort for display.
    pub fn find_all_loops(&self) -> Vec<String> {
        let mut loops = Vec::new();
        let mut seen = HashSet::new();

        for start in 0..self.user_count() {
            let mut path = Vec::new();
            self.loops_dfs(start, start, &mut path, &mut loops, &mut seen);
        }

        loops
    }

    fn loops_dfs(
        &self,
        start: usize,
        current: usize,
        path: &mut Vec<usize>,
        loops: &mut Vec<String>,
        seen: &mut HashSet<String>,
    ) {
        path.push(current);

        for neighbor in self.neighbors(current) {
            if neighbor == start && path.len() > 1 {
                let members = self.render_names(path);
                if seen.insert(canonical_cycle(&members)) {
                    let mut rendered = members;
                    rendered.push(self.name_at(start).to_string());
                    loops.push(rendered.join(PATH_SEPARATOR));
                }
            } else if !path.contains(&neighbor) {
                self.loops_dfs(start, neighbor, path, loops, seen);
            }
        }

        path.pop();
    }

    fn render_names(&self, indices: &[usize]) -> Vec<String> {
        indices
            .iter()
            .map(|&i| self.name_at(i).to_string())
            .collect()
    }
}
