//! Bucket: the chain layer. A bucket owns every entry whose hash lands on
//! its slot and resolves collisions by linear scan.

use core::slice;
use std::vec;

/// An owned key-value pair plus the precomputed hash of its key.
///
/// The hash is computed once when the entry is created and reused for every
/// re-index; `K: Hash` is never invoked again after insertion.
#[derive(Debug)]
pub(crate) struct Entry<K, V> {
    pub(crate) key: K,
    pub(crate) value: V,
    pub(crate) hash: u64,
}

/// A single collision chain with head-insert order: the entry prepended most
/// recently is visited first.
///
/// The chain is stored as a `Vec` kept in reverse, so the vector's tail is
/// the chain's head. `prepend` is then a push and head-to-tail traversal is
/// reverse iteration; no hand-rolled next-pointers are needed.
///
/// A bucket performs no key-uniqueness checks of its own; the table layer
/// scans for an equal key before prepending.
#[derive(Debug)]
pub(crate) struct Bucket<K, V> {
    // entries[len - 1] is the chain head.
    entries: Vec<Entry<K, V>>,
}

impl<K, V> Bucket<K, V> {
    pub(crate) const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Tracked entry count. O(1), never recomputed by traversal.
    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }

    /// Adds an entry at the chain head. O(1). The caller is responsible for
    /// ensuring no entry with an equal key is already in the chain.
    pub(crate) fn prepend(&mut self, entry: Entry<K, V>) {
        self.entries.push(entry);
    }

    /// Scans head to tail and returns the first entry matching `pred`.
    pub(crate) fn find_where<F>(&self, mut pred: F) -> Option<&Entry<K, V>>
    where
        F: FnMut(&Entry<K, V>) -> bool,
    {
        self.entries.iter().rev().find(|e| pred(e))
    }

    /// Like [`find_where`](Self::find_where), but the match may be mutated
    /// in place. Used by the table layer to overwrite a value on re-put.
    pub(crate) fn find_where_mut<F>(&mut self, mut pred: F) -> Option<&mut Entry<K, V>>
    where
        F: FnMut(&Entry<K, V>) -> bool,
    {
        self.entries.iter_mut().rev().find(|e| pred(e))
    }

    /// Unlinks and returns the first entry matching `pred`, scanning head to
    /// tail. Returns `None` if nothing matches. O(chain length).
    pub(crate) fn remove_where<F>(&mut self, mut pred: F) -> Option<Entry<K, V>>
    where
        F: FnMut(&Entry<K, V>) -> bool,
    {
        // rposition scans from the vector's tail, which is the chain head.
        let pos = self.entries.iter().rposition(|e| pred(e))?;
        Some(self.entries.remove(pos))
    }

    /// Head-to-tail cursor over the chain. Lazy and restartable; reflects
    /// the chain at the time it is created.
    pub(crate) fn iter(&self) -> Iter<'_, K, V> {
        Iter {
            inner: self.entries.iter().rev(),
        }
    }
}

/// Borrowing head-to-tail cursor over a bucket's entries.
#[derive(Debug)]
pub(crate) struct Iter<'a, K, V> {
    inner: core::iter::Rev<slice::Iter<'a, Entry<K, V>>>,
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = &'a Entry<K, V>;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }
}

/// Consuming the bucket yields owned entries head to tail. This is how a
/// resize transfers entries into the new bucket array without cloning.
impl<K, V> IntoIterator for Bucket<K, V> {
    type Item = Entry<K, V>;
    type IntoIter = core::iter::Rev<vec::IntoIter<Entry<K, V>>>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter().rev()
    }
}
