//! BucketHashMap: the table layer. Owns the bucket array, computes home
//! slots, and doubles the array when the load factor passes the threshold.

use crate::bucket::{self, Bucket, Entry};
use core::borrow::Borrow;
use core::hash::{BuildHasher, Hash};
use core::slice;
use std::collections::hash_map::RandomState;

/// Number of buckets a fresh map starts with.
const INITIAL_CAPACITY: usize = 8;

/// Load-factor ceiling as a ratio: the map grows as soon as `len / capacity`
/// exceeds `MAX_LOAD_NUM / MAX_LOAD_DEN`. The comparison is done in integer
/// arithmetic so the threshold is exact.
const MAX_LOAD_NUM: usize = 3;
const MAX_LOAD_DEN: usize = 4;

/// A hash map of unique keys resolved by separate chaining.
///
/// Each key lives in exactly one bucket, addressed by reducing the key's
/// hash modulo the current bucket count. The hash is the unsigned `u64`
/// produced by the standard `Hasher`, so the modulo reduction is total and
/// there is no signed edge case to work around.
///
/// The build-hasher is a per-map `RandomState`; callers cannot inject their
/// own hash function. `Hash` and `Eq` on `K` must be consistent (equal keys
/// hash equal) — an inconsistent key type is a contract violation and the
/// map does not defend against it.
pub struct BucketHashMap<K, V> {
    hasher: RandomState,
    buckets: Vec<Bucket<K, V>>,
    len: usize,
}

impl<K, V> BucketHashMap<K, V>
where
    K: Eq + Hash,
{
    /// Creates an empty map with [`INITIAL_CAPACITY`] buckets.
    pub fn new() -> Self {
        Self {
            hasher: RandomState::new(),
            buckets: (0..INITIAL_CAPACITY).map(|_| Bucket::new()).collect(),
            len: 0,
        }
    }

    /// Number of entries currently stored.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of buckets. Starts at 8 and doubles on growth; never shrinks.
    pub fn capacity(&self) -> usize {
        self.buckets.len()
    }

    fn make_hash<Q>(&self, q: &Q) -> u64
    where
        Q: ?Sized + Hash,
    {
        self.hasher.hash_one(q)
    }

    /// Home slot for a hash under the current capacity.
    fn bucket_index(&self, hash: u64) -> usize {
        (hash % self.buckets.len() as u64) as usize
    }

    /// Inserts `key -> value`. If the key is already present its value is
    /// overwritten in place and the entry count does not change; otherwise a
    /// new entry is prepended to its home bucket. Immediately after this
    /// returns, `len / capacity` is at most 3/4 — crossing that bound
    /// triggers a synchronous [`grow`](Self::grow).
    pub fn put(&mut self, key: K, value: V) {
        let hash = self.make_hash(&key);
        let idx = self.bucket_index(hash);
        if let Some(entry) = self.buckets[idx].find_where_mut(|e| e.key == key) {
            entry.value = value;
            return;
        }
        self.buckets[idx].prepend(Entry { key, value, hash });
        self.len += 1;
        if self.len * MAX_LOAD_DEN > self.capacity() * MAX_LOAD_NUM {
            self.grow();
        }
    }

    /// Returns a reference to the value for `key`, or `None` if absent.
    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        let hash = self.make_hash(key);
        self.buckets[self.bucket_index(hash)]
            .find_where(|e| e.key.borrow() == key)
            .map(|e| &e.value)
    }

    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.get(key).is_some()
    }

    /// Removes the entry for `key` and returns its value, or `None` if the
    /// key is absent. Removal never shrinks the bucket array.
    pub fn remove<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        let hash = self.make_hash(key);
        let idx = self.bucket_index(hash);
        let entry = self.buckets[idx].remove_where(|e| e.key.borrow() == key)?;
        self.len -= 1;
        Some(entry.value)
    }

    /// Visits every entry, walking buckets in index order and each chain
    /// head to tail. No order is guaranteed beyond what chaining produces.
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter {
            buckets: self.buckets.iter(),
            chain: None,
        }
    }

    /// Doubles the bucket array and re-homes every entry under the new
    /// capacity. Entries move from the old array to the new one; keys and
    /// values are never cloned, and `K: Hash` is not re-invoked because each
    /// entry carries its hash. Touches every entry exactly once.
    fn grow(&mut self) {
        let new_capacity = self.capacity() * 2;
        let old = core::mem::replace(
            &mut self.buckets,
            (0..new_capacity).map(|_| Bucket::new()).collect(),
        );
        for bucket in old {
            for entry in bucket {
                let idx = self.bucket_index(entry.hash);
                self.buckets[idx].prepend(entry);
            }
        }
    }

    /// Structural self-check used by the property tests: the tracked count
    /// matches the chains, every entry sits in its home bucket, and the
    /// capacity is on the doubling sequence with the load factor in bounds.
    #[cfg(test)]
    pub(crate) fn check_invariants(&self) {
        let cap = self.capacity();
        assert!(cap >= INITIAL_CAPACITY && cap.is_power_of_two());
        assert!(self.len * MAX_LOAD_DEN <= cap * MAX_LOAD_NUM);
        let chained: usize = self.buckets.iter().map(Bucket::len).sum();
        assert_eq!(self.len, chained);
        for (i, bucket) in self.buckets.iter().enumerate() {
            for entry in bucket.iter() {
                assert_eq!(self.bucket_index(entry.hash), i);
                assert_eq!(entry.hash, self.make_hash(&entry.key));
            }
        }
    }
}

impl<K, V> Default for BucketHashMap<K, V>
where
    K: Eq + Hash,
{
    fn default() -> Self {
        Self::new()
    }
}

/// Borrowing iterator over all entries of a [`BucketHashMap`].
pub struct Iter<'a, K, V> {
    buckets: slice::Iter<'a, Bucket<K, V>>,
    chain: Option<bucket::Iter<'a, K, V>>,
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(chain) = &mut self.chain {
                if let Some(e) = chain.next() {
                    return Some((&e.key, &e.value));
                }
            }
            self.chain = Some(self.buckets.next()?.iter());
        }
    }
}
