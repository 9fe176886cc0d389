use xxhash_rust::xxh3::xxh3_64;

use crate::common::config::BucketIndex;

/// Maps a key to its bucket index for a table of `capacity` buckets.
///
/// The hash is the sum of the Unicode scalar values of every character in the
/// key, reduced modulo `capacity`. Keys built from the same multiset of
/// characters ("Amy", "May") always share a bucket. The empty key lands in
/// bucket 0.
///
/// `capacity` must be at least 1; tables reject smaller capacities at
/// construction.
pub fn hash(key: &str, capacity: usize) -> BucketIndex {
    CodePointSum.bucket_index(key, capacity)
}

/// A strategy for turning a key into a 64-bit hash value.
pub trait HashFunction {
    /// Returns the raw hash value of the given key.
    fn hash_key(&self, key: &str) -> u64;

    /// Returns the bucket the key belongs to in a table of `capacity` buckets.
    fn bucket_index(&self, key: &str, capacity: usize) -> BucketIndex {
        debug_assert!(capacity > 0, "bucket_index requires a non-zero capacity");
        (self.hash_key(key) % capacity as u64) as BucketIndex
    }
}

/// Sums the code points of the key. Deterministic and collision-prone by design.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CodePointSum;

impl HashFunction for CodePointSum {
    fn hash_key(&self, key: &str) -> u64 {
        key.chars().map(|c| c as u64).sum()
    }
}

/// XXH3 over the UTF-8 bytes of the key.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Xxh3Hash;

impl HashFunction for Xxh3Hash {
    fn hash_key(&self, key: &str) -> u64 {
        xxh3_64(key.as_bytes())
    }
}

/// Runtime selection between the built-in hash functions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum HashFunctionKind {
    #[default]
    CodePointSum,
    Xxh3,
}

impl HashFunction for HashFunctionKind {
    fn hash_key(&self, key: &str) -> u64 {
        match self {
            HashFunctionKind::CodePointSum => CodePointSum.hash_key(key),
            HashFunctionKind::Xxh3 => Xxh3Hash.hash_key(key),
        }
    }
}
