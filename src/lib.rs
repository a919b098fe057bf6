//! bucket-hashmap: a single-threaded hash map backed by an array of
//! chained buckets with dynamic resizing.
//!
//! Internal Design:
//!
//! Summary
//! - Goal: keep the map in two small layers so each piece can be reasoned
//!   about independently.
//! - Layers:
//!   - Bucket<K, V>: one collision chain with head-insert order; supports
//!     prepend, scan-based find/remove, and head-to-tail traversal. Stored
//!     as a reversed `Vec` rather than hand-rolled next-pointers, which
//!     keeps identical chain semantics without nullable links.
//!   - BucketHashMap<K, V>: public API; owns the bucket array, addresses a
//!     key's home bucket by `hash % capacity`, and doubles the array when
//!     the load factor exceeds 3/4 after a put.
//!
//! Constraints
//! - Single-threaded: no internal locking and no interior mutability. The
//!   map is a plain owned struct, so exclusive access is whatever `&mut`
//!   already enforces; consumers needing cross-thread sharing must wrap the
//!   whole map in their own synchronization.
//! - Unique keys per bucket, enforced by `put`'s overwrite-in-place check.
//! - Absence is an `Option`, never an error: get/remove/contains on a
//!   missing key return `None`/`false`.
//! - Capacity starts at 8, only ever doubles, and never shrinks.
//!
//! Hashing invariants
//! - Each entry stores its precomputed `u64` hash; re-indexing during a
//!   resize reuses the stored hash, so `K: Hash` is never invoked after
//!   insertion.
//! - Hashes are unsigned, so reduction modulo the bucket count is total for
//!   every representable hash value.
//! - The build-hasher is a per-map `RandomState`; there is no hasher type
//!   parameter. `Hash`/`Eq` consistency on `K` is the caller's contract.
//!
//! Notes and non-goals
//! - No iteration order guarantee beyond what chaining incidentally
//!   produces.
//! - No persistence, no wire format, no shrink-on-deletion policy.
//! - Public API surface is `BucketHashMap`; the bucket layer is an
//!   implementation detail.

mod bucket;
mod bucket_hash_map;
mod bucket_hash_map_proptest;

// Public surface
pub use bucket_hash_map::{BucketHashMap, Iter};
