//! Orderings over the live user set for reports.
//!
//! One comparison routine parameterized by a selector replaces per-ordering
//! comparator types; follower/following counts resolve against the adjacency
//! matrix at comparison time, with no side effects.

use std::cmp::Ordering;

use crate::graph::FollowGraph;
use crate::types::User;

/// Which ordering to apply when listing users.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserOrdering {
    /// Ascending lexicographic on username.
    ByName,
    /// Descending follower count; ties ascending by following count.
    ByFollowers,
    /// Descending following count; ties descending by follower count.
    ByFollowing,
}

impl FollowGraph {
    /// Compare two users under the given ordering.
    pub fn compare_users(&self, ordering: UserOrdering, a: &User, b: &User) -> Ordering {
        match ordering {
            UserOrdering::ByName => a.name().cmp(b.name()),
            UserOrdering::ByFollowers => self
                .count_followers(b.index())
                .cmp(&self.count_followers(a.index()))
                .then_with(|| {
                    self.count_following(a.index())
                        .cmp(&self.count_following(b.index()))
                }),
            UserOrdering::ByFollowing => self
                .count_following(b.index())
                .cmp(&self.count_following(a.index()))
                .then_with(|| {
                    self.count_followers(b.index())
                        .cmp(&self.count_followers(a.index()))
                }),
        }
    }

    /// Live users sorted under the given ordering.
    ///
    /// The sort is stable, so users left equal by the ordering keep their
    /// registry (insertion) order.
    pub fn users_sorted(&self, ordering: UserOrdering) -> Vec<&User> {
        let mut sorted: Vec<&User> = self.users().iter().collect();
        sorted.sort_by(|a, b| self.compare_users(ordering, a, b));
        sorted
    }
}
