//! Canonical serialization for deterministic fingerprints.
//!
//! Thread contexts are fingerprinted so consumers can compare the result
//! of two reconstructions without walking both sequences. For the
//! fingerprint to be meaningful the serialized form has to be stable:
//!
//! - struct fields serialize in declaration order
//! - vectors serialize in index order
//! - no `HashMap` in fingerprinted data; use `BTreeMap` where a map is
//!   unavoidable

use serde::Serialize;
use xxhash_rust::xxh64::xxh64;

/// Serialize a value to canonical JSON bytes for hashing.
pub fn to_canonical_bytes<T: Serialize>(value: &T) -> Vec<u8> {
    serde_json::to_vec(value).expect("canonical serialization failed")
}

/// Compute the canonical hash of a serializable value.
pub fn canonical_hash<T: Serialize>(value: &T) -> u64 {
    xxh64(&to_canonical_bytes(value), 0)
}

/// Compute the canonical hash and return it as a fixed-width hex string.
pub fn canonical_hash_hex<T: Serialize>(value: &T) -> String {
    format!("{:016x}", canonical_hash(value))
}
