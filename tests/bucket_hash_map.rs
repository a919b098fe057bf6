// BucketHashMap unit test suite (consolidated).
//
// Each test documents what behavior is being verified and which invariants
// are assumed or asserted. The core invariants exercised:
// - Round-trip: put(k, v) makes get(k) == v and contains_key(k) true.
// - Uniqueness: a second put of the same key overwrites in place; the
//   count does not change.
// - Count: len() equals distinct puts minus successful removes at every
//   observable point.
// - Growth: crossing the 3/4 load factor doubles the capacity while every
//   inserted key keeps its last-assigned value; capacity never shrinks.
// - Absence: get/remove on a missing key return None, never a panic.
use bucket_hashmap::BucketHashMap;
use std::collections::BTreeSet;
use std::hash::{Hash, Hasher};

// Test: round-trip across a mix of key and value types.
// Verifies: values come back by reference exactly as stored.
#[test]
fn put_then_get_round_trips() {
    let mut m: BucketHashMap<String, Vec<u8>> = BucketHashMap::new();
    m.put("empty".to_string(), vec![]);
    m.put("bytes".to_string(), vec![1, 2, 3]);
    assert_eq!(m.get("empty"), Some(&vec![]));
    assert_eq!(m.get("bytes"), Some(&vec![1, 2, 3]));
    assert!(m.contains_key("bytes"));
    assert_eq!(m.len(), 2);
}

// Test: overwrite semantics.
// Assumes: put on a present key replaces the value in place.
// Verifies: get returns the last value; count stays 1.
#[test]
fn second_put_overwrites_and_keeps_count() {
    let mut m: BucketHashMap<&'static str, i32> = BucketHashMap::new();
    m.put("a", 1);
    m.put("a", 2);
    assert_eq!(m.get(&"a"), Some(&2));
    assert_eq!(m.len(), 1);
}

// Test: removal on present and absent keys.
// Verifies: remove returns the stored value once, None afterwards; the
// count only moves on a successful remove.
#[test]
fn remove_present_and_absent() {
    let mut m: BucketHashMap<String, i32> = BucketHashMap::new();
    assert_eq!(m.remove("missing"), None);
    assert_eq!(m.len(), 0);

    m.put("a".to_string(), 1);
    m.put("b".to_string(), 2);
    assert_eq!(m.remove("a"), Some(1));
    assert_eq!(m.len(), 1);
    assert_eq!(m.remove("a"), None);
    assert_eq!(m.len(), 1);
    assert!(m.contains_key("b"));
}

// Test: the literal growth scenario from a fresh table.
// Assumes: the threshold check is strictly `len / capacity > 3/4`.
// Verifies: 6 inserts leave capacity 8 (load exactly 0.75); the 7th doubles
// it to 16; all 7 keys remain retrievable.
#[test]
fn grows_on_seventh_insert() {
    let mut m: BucketHashMap<String, usize> = BucketHashMap::new();
    assert_eq!(m.capacity(), 8);
    for i in 0..6 {
        m.put(format!("k{i}"), i);
    }
    assert_eq!(m.capacity(), 8);

    m.put("k6".to_string(), 6);
    assert_eq!(m.capacity(), 16);
    for i in 0..7 {
        assert_eq!(m.get(format!("k{i}").as_str()), Some(&i));
    }
}

// Test: contents survive repeated growth with interleaved overwrites.
// Verifies: after several doublings, every key maps to its last-assigned
// value and the load factor bound holds after each put.
#[test]
fn repeated_growth_preserves_last_values() {
    let mut m: BucketHashMap<u32, u32> = BucketHashMap::new();
    for i in 0..500 {
        m.put(i, i);
        assert!(4 * m.len() <= 3 * m.capacity());
    }
    // Overwrite a slice of the keys, then grow some more.
    for i in 0..100 {
        m.put(i, i + 1000);
    }
    for i in 500..700 {
        m.put(i, i);
    }

    assert_eq!(m.len(), 700);
    for i in 0..100 {
        assert_eq!(m.get(&i), Some(&(i + 1000)));
    }
    for i in 100..700 {
        assert_eq!(m.get(&i), Some(&i));
    }
}

// Test: count bookkeeping over an interleaved workload.
// Verifies: len() == distinct puts - successful removes throughout.
#[test]
fn count_tracks_distinct_puts_minus_removes() {
    let mut m: BucketHashMap<u32, u32> = BucketHashMap::new();
    let mut expected = 0usize;
    for i in 0..60 {
        m.put(i % 20, i);
        if i < 20 {
            expected += 1;
        }
        assert_eq!(m.len(), expected);
    }
    for i in 0..10 {
        assert!(m.remove(&i).is_some());
        expected -= 1;
        assert_eq!(m.len(), expected);
    }
    // Misses do not move the count.
    assert_eq!(m.remove(&5), None);
    assert_eq!(m.len(), expected);
}

// Test: emptiness transitions.
// Verifies: is_empty flips with the first put and the last remove.
#[test]
fn is_empty_transitions() {
    let mut m: BucketHashMap<String, ()> = BucketHashMap::new();
    assert!(m.is_empty());
    m.put("k".to_string(), ());
    assert!(!m.is_empty());
    m.remove("k");
    assert!(m.is_empty());
}

// Test: iteration over live entries.
// Assumes: no particular order beyond what chaining produces.
// Verifies: each live entry appears exactly once, removed ones never.
#[test]
fn iteration_yields_live_entries_once() {
    let mut m: BucketHashMap<String, i32> = BucketHashMap::new();
    for i in 0..20 {
        m.put(format!("k{i}"), i);
    }
    for i in (0..20).step_by(2) {
        m.remove(format!("k{i}").as_str());
    }

    let seen: BTreeSet<String> = m.iter().map(|(k, _)| k.clone()).collect();
    let expected: BTreeSet<String> = (0..20)
        .filter(|i| i % 2 == 1)
        .map(|i| format!("k{i}"))
        .collect();
    assert_eq!(seen, expected);
    assert_eq!(m.iter().count(), m.len());
}

// Degenerate key: every instance hashes identically, so all entries land
// in one bucket and lookups must resolve purely by Eq.
#[derive(Debug, Clone, PartialEq, Eq)]
struct AllCollide(u64);

impl Hash for AllCollide {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(0);
    }
}

// Test: collision chains through the public API.
// Verifies: colliding keys round-trip independently; removing one leaves
// the others; growth does not separate what Eq must distinguish.
#[test]
fn colliding_keys_survive_growth() {
    let mut m: BucketHashMap<AllCollide, u64> = BucketHashMap::new();
    for i in 0..40 {
        m.put(AllCollide(i), i * 3);
    }
    assert!(m.capacity() > 8, "forced chain still triggers growth");

    assert_eq!(m.remove(&AllCollide(17)), Some(51));
    assert_eq!(m.get(&AllCollide(17)), None);
    for i in (0..40).filter(|&i| i != 17) {
        assert_eq!(m.get(&AllCollide(i)), Some(&(i * 3)));
    }
    assert_eq!(m.len(), 39);
}
