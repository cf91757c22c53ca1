//! End-to-end tests for the follow-graph engine.
//!
//! These tests exercise the public surface the way a driver would: named
//! mutations in, rendered outcomes out, plus snapshot round-trips and the
//! compaction invariant under arbitrary operation sequences.

use std::collections::BTreeSet;

use proptest::prelude::*;

use follow_graph::{
    load_connections, load_graph, load_users, save_graph, AllPathsOutcome, FollowGraph,
    GraphError, GraphSnapshot, PathOutcome, UserOrdering,
};

// ─────────────────────────────────────────────────────────────────────────────
// Test Helpers
// ─────────────────────────────────────────────────────────────────────────────

fn graph_with(names: &[&str], edges: &[(&str, &str)]) -> FollowGraph {
    let mut graph = FollowGraph::new();
    for name in names {
        graph.add_user(name).unwrap();
    }
    for (from, to) in edges {
        graph.add_connection(from, to);
    }
    graph
}

// ─────────────────────────────────────────────────────────────────────────────
// SPEC SCENARIOS
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn linear_chain_queries() {
    let graph = graph_with(&["A", "B", "C"], &[("A", "B"), ("B", "C")]);

    assert_eq!(graph.shortest_path("A", "C").to_string(), "A -> B -> C");
    assert_eq!(
        graph.all_paths("A", "C"),
        AllPathsOutcome::Found(vec!["A -> B -> C".to_string()])
    );
}

#[test]
fn triangle_has_exactly_one_loop() {
    let graph = graph_with(&["A", "B", "C"], &[("A", "B"), ("B", "C"), ("C", "A")]);

    let loops = graph.find_all_loops();
    assert_eq!(loops.len(), 1);
    assert_eq!(loops[0], "A -> B -> C -> A");
}

#[test]
fn unknown_endpoint_is_named_in_the_outcome() {
    let graph = graph_with(&["B"], &[]);

    let outcome = graph.shortest_path("X", "B");
    assert_eq!(outcome, PathOutcome::UnknownUser("X".to_string()));
    assert_eq!(outcome.to_string(), "The vertex X does not exist.");
}

#[test]
fn disconnected_vertices_yield_informational_results() {
    let graph = graph_with(&["A", "B"], &[]);

    assert_eq!(graph.shortest_path("A", "B").to_string(), "No path found.");
    assert_eq!(
        graph.all_paths("A", "B").to_string(),
        "No path exists between A and B."
    );
}

#[test]
fn duplicate_add_keeps_count_and_index() {
    let mut graph = graph_with(&["A", "B"], &[]);

    graph.add_user("A").unwrap();

    assert_eq!(graph.user_count(), 2);
    assert_eq!(graph.user_by_name("A").unwrap().index(), 0);
}

#[test]
fn capacity_violation_is_reported_and_harmless() {
    let mut graph = FollowGraph::with_capacity(1);
    graph.add_user("A").unwrap();

    let err = graph.add_user("B").unwrap_err();
    assert_eq!(err, GraphError::CapacityExceeded { capacity: 1 });
    assert_eq!(graph.user_count(), 1);
}

#[test]
fn removal_compacts_and_requeries_cleanly() {
    let mut graph = graph_with(
        &["A", "B", "C", "D"],
        &[("A", "B"), ("B", "C"), ("C", "D"), ("A", "D")],
    );

    graph.remove_user("B");

    // The route through B is gone; the direct edge survives renumbering.
    assert_eq!(graph.shortest_path("A", "D").to_string(), "A -> D");
    assert_eq!(
        graph.all_paths("A", "D"),
        AllPathsOutcome::Found(vec!["A -> D".to_string()])
    );
    assert_eq!(graph.shortest_path("A", "C"), PathOutcome::NotFound);
}

#[test]
fn two_cycle_counts_self_loop_does_not() {
    let graph = graph_with(&["A", "B"], &[("A", "B"), ("B", "A"), ("A", "A")]);

    assert_eq!(graph.find_all_loops(), ["A -> B -> A"]);
}

#[test]
fn degrees_stay_consistent_with_report_orderings() {
    let graph = graph_with(
        &["carol", "alice", "bob"],
        &[("carol", "alice"), ("bob", "alice"), ("carol", "bob")],
    );

    let by_name: Vec<_> = graph
        .users_sorted(UserOrdering::ByName)
        .iter()
        .map(|u| u.name().to_string())
        .collect();
    assert_eq!(by_name, ["alice", "bob", "carol"]);

    let by_followers: Vec<_> = graph
        .users_sorted(UserOrdering::ByFollowers)
        .iter()
        .map(|u| u.name().to_string())
        .collect();
    assert_eq!(by_followers, ["alice", "bob", "carol"]);

    let by_following: Vec<_> = graph
        .users_sorted(UserOrdering::ByFollowing)
        .iter()
        .map(|u| u.name().to_string())
        .collect();
    assert_eq!(by_following, ["carol", "bob", "alice"]);
}

// ─────────────────────────────────────────────────────────────────────────────
// PERSISTENCE
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn snapshot_roundtrip_preserves_names_indices_and_edges() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("graph.json");
    let graph = graph_with(
        &["alice", "bob", "carol", "dave"],
        &[("alice", "bob"), ("bob", "carol"), ("dave", "alice")],
    );

    save_graph(&graph, &path).unwrap();
    let loaded = load_graph(&path);

    assert_eq!(loaded.user_count(), graph.user_count());
    for user in graph.users() {
        assert_eq!(
            loaded.user_by_name(user.name()).unwrap().index(),
            user.index()
        );
    }
    assert_eq!(loaded.connections(), graph.connections());

    // And the reloaded graph answers queries identically.
    assert_eq!(
        loaded.shortest_path("alice", "carol").to_string(),
        graph.shortest_path("alice", "carol").to_string()
    );
}

#[test]
fn missing_snapshot_loads_fresh() {
    let dir = tempfile::tempdir().unwrap();
    assert!(load_graph(dir.path().join("nothing_here.json")).is_empty());
}

#[test]
fn tampered_snapshot_loads_fresh() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("graph.json");

    save_graph(&graph_with(&["alice", "bob"], &[("alice", "bob")]), &path).unwrap();

    let mut snapshot: GraphSnapshot =
        serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    snapshot.users[1] = "mallory".to_string();
    std::fs::write(&path, serde_json::to_string_pretty(&snapshot).unwrap()).unwrap();

    assert!(load_graph(&path).is_empty());
}

// ─────────────────────────────────────────────────────────────────────────────
// BULK LOADS
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn bulk_load_then_query() {
    let dir = tempfile::tempdir().unwrap();
    let users_path = dir.path().join("users.txt");
    let connections_path = dir.path().join("connections.txt");
    std::fs::write(&users_path, "alice\nbob\ncarol\nalice\n").unwrap();
    std::fs::write(
        &connections_path,
        "alice, bob\nbob, carol\nbroken line\ncarol, ghost\n",
    )
    .unwrap();

    let mut graph = FollowGraph::new();
    assert_eq!(load_users(&mut graph, &users_path).unwrap(), 3);
    assert_eq!(load_connections(&mut graph, &connections_path).unwrap(), 3);

    assert_eq!(
        graph.shortest_path("alice", "carol").to_string(),
        "alice -> bob -> carol"
    );
    // The ghost edge never materialized.
    assert_eq!(graph.connections().len(), 2);
}

// ─────────────────────────────────────────────────────────────────────────────
// COMPACTION INVARIANT (property)
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone)]
enum Op {
    Add(String),
    Remove(String),
    Connect(String, String),
    Disconnect(String, String),
}

fn name_strategy() -> impl Strategy<Value = String> {
    prop::sample::select(vec!["ana", "ben", "cal", "dee", "eli", "fay"]).prop_map(String::from)
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        name_strategy().prop_map(Op::Add),
        name_strategy().prop_map(Op::Remove),
        (name_strategy(), name_strategy()).prop_map(|(a, b)| Op::Connect(a, b)),
        (name_strategy(), name_strategy()).prop_map(|(a, b)| Op::Disconnect(a, b)),
    ]
}

proptest! {
    #[test]
    fn compaction_invariant_holds_under_arbitrary_ops(
        ops in prop::collection::vec(op_strategy(), 1..80)
    ) {
        const CAPACITY: usize = 4;

        let mut graph = FollowGraph::with_capacity(CAPACITY);
        // Reference model: insertion-ordered names and logical edges.
        let mut names: Vec<String> = Vec::new();
        let mut edges: BTreeSet<(String, String)> = BTreeSet::new();

        for op in ops {
            match op {
                Op::Add(name) => {
                    let known = names.contains(&name);
                    let result = graph.add_user(&name);
                    if known || names.len() < CAPACITY {
                        prop_assert!(result.is_ok());
                        if !known {
                            names.push(name);
                        }
                    } else {
                        prop_assert_eq!(
                            result.unwrap_err(),
                            GraphError::CapacityExceeded { capacity: CAPACITY }
                        );
                    }
                }
                Op::Remove(name) => {
                    graph.remove_user(&name);
                    names.retain(|n| n != &name);
                    edges.retain(|(f, t)| f != &name && t != &name);
                }
                Op::Connect(from, to) => {
                    graph.add_connection(&from, &to);
                    if names.contains(&from) && names.contains(&to) {
                        edges.insert((from, to));
                    }
                }
                Op::Disconnect(from, to) => {
                    graph.remove_connection(&from, &to);
                    edges.remove(&(from, to));
                }
            }

            // Live indices are exactly 0..N in insertion order.
            prop_assert_eq!(graph.user_count(), names.len());
            for (i, user) in graph.users().iter().enumerate() {
                prop_assert_eq!(user.index(), i);
                prop_assert_eq!(user.name(), names[i].as_str());
            }

            // Every logical edge survived renumbering, nothing extra did.
            let live: BTreeSet<(String, String)> = graph
                .connections()
                .into_iter()
                .map(|c| (c.from, c.to))
                .collect();
            prop_assert_eq!(&live, &edges);

            // Degrees re-derive from the logical edge set.
            for user in graph.users() {
                let followers = edges.iter().filter(|(_, t)| t.as_str() == user.name()).count();
                let following = edges.iter().filter(|(f, _)| f.as_str() == user.name()).count();
                prop_assert_eq!(graph.count_followers(user.index()), followers);
                prop_assert_eq!(graph.count_following(user.index()), following);
            }
        }
    }
}
