//! Canonical forms for deterministic hashing and de-duplication.
//!
//! ## Determinism Guarantees
//!
//! - Stable field order: Struct fields serialize in declaration order
//! - Stable Vec order: Vectors serialize in index order
//! - No HashMap allowed: Use BTreeMap for maps in hashed data
//! - Cycle keys are rotation-invariant: the same loop discovered from any
//!   start vertex maps to one canonical rendering

use serde::Serialize;
use xxhash_rust::xxh64::xxh64;

/// Separator between user names in rendered paths and cycles.
pub const PATH_SEPARATOR: &str = " -> ";

/// Serialize a value to canonical JSON bytes for hashing.
///
/// This function produces deterministic output for the same input,
/// suitable for checksum computation and tamper detection.
pub fn to_canonical_bytes<T: Serialize>(value: &T) -> Vec<u8> {
    serde_json::to_vec(value).expect("Canonical serialization failed")
}

/// Compute canonical hash of a serializable value.
pub fn canonical_hash<T: Serialize>(value: &T) -> u64 {
    let bytes = to_canonical_bytes(value);
    xxh64(&bytes, 0)
}

/// Compute canonical hash and return as hex string.
pub fn canonical_hash_hex<T: Serialize>(value: &T) -> String {
    format!("{:016x}", canonical_hash(value))
}

/// Canonical key for a simple cycle given its member names in traversal
/// order (without the repeated closing name).
///
/// The sequence is rotated to start at its lexicographically smallest
/// member, so every rotation of the same cycle produces the same key. The
/// key is used purely for de-duplication; display strings keep the order
/// the cycle was actually discovered in.
pub fn canonical_cycle(members: &[String]) -> String {
    if members.is_empty() {
        return String::new();
    }
    let pivot = members
        .iter()
        .enumerate()
        .min_by(|(_, a), (_, b)| a.cmp(b))
        .map(|(i, _)| i)
        .unwrap_or(0);

    let n = members.len();
    let mut rotated: Vec<&str> = Vec::with_capacity(n + 1);
    for i in 0..n {
        rotated.push(&members[(pivot + i) % n]);
    }
    rotated.push(&members[pivot]);
    rotated.join(PATH_SEPARATOR)
}
