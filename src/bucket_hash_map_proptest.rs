#![cfg(test)]

// Property tests for BucketHashMap kept inside the crate so they can call
// the structural self-check (`check_invariants`), which needs access to the
// bucket array.

use crate::BucketHashMap;
use proptest::prelude::*;
use std::collections::HashMap;

// Pool-indexed operations to improve shrinking: indices shrink to earlier
// keys, the pool shrinks, and op lists shrink in length.
#[derive(Clone, Debug)]
enum Op {
    Put(usize, i32),
    Remove(usize),
    Get(usize),
    Contains(usize),
}

fn op_strategy(pool: usize) -> impl Strategy<Value = Op> {
    prop_oneof![
        (0..pool, any::<i32>()).prop_map(|(k, v)| Op::Put(k, v)),
        (0..pool).prop_map(Op::Remove),
        (0..pool).prop_map(Op::Get),
        (0..pool).prop_map(Op::Contains),
    ]
}

fn key(i: usize) -> String {
    format!("k{}", i)
}

proptest! {
    // The map agrees with a std::collections::HashMap model after every
    // operation, and its structural invariants hold throughout: tracked
    // count equals the sum of chain lengths, every entry sits in its home
    // bucket, capacity stays on the doubling sequence, and the load factor
    // never exceeds 3/4 after a put.
    #[test]
    fn matches_std_hashmap_model(
        ops in (1usize..=24).prop_flat_map(|pool| {
            proptest::collection::vec(op_strategy(pool), 1..256)
        }),
    ) {
        let mut m: BucketHashMap<String, i32> = BucketHashMap::new();
        let mut model: HashMap<String, i32> = HashMap::new();

        for op in ops {
            match op {
                Op::Put(i, v) => {
                    let k = key(i);
                    m.put(k.clone(), v);
                    model.insert(k, v);
                }
                Op::Remove(i) => {
                    let k = key(i);
                    prop_assert_eq!(m.remove(k.as_str()), model.remove(&k));
                }
                Op::Get(i) => {
                    let k = key(i);
                    prop_assert_eq!(m.get(k.as_str()), model.get(&k));
                }
                Op::Contains(i) => {
                    let k = key(i);
                    prop_assert_eq!(m.contains_key(k.as_str()), model.contains_key(&k));
                }
            }

            prop_assert_eq!(m.len(), model.len());
            m.check_invariants();
        }

        // Final sweep: every model entry is retrievable and iteration
        // yields exactly the model's contents.
        for (k, v) in &model {
            prop_assert_eq!(m.get(k.as_str()), Some(v));
        }
        let collected: HashMap<String, i32> = m.iter().map(|(k, v)| (k.clone(), *v)).collect();
        prop_assert_eq!(collected, model);
    }

    // Growth preserves contents: a put sequence that crosses the threshold
    // leaves every previously inserted key retrievable with its
    // last-assigned value, and capacity is monotonically non-decreasing.
    #[test]
    fn growth_preserves_contents(n in 1u64..300) {
        let mut m: BucketHashMap<u64, u64> = BucketHashMap::new();
        let mut last_cap = m.capacity();
        for i in 0..n {
            m.put(i, i * 7);
            prop_assert!(m.capacity() >= last_cap);
            last_cap = m.capacity();
        }
        m.check_invariants();
        for i in 0..n {
            prop_assert_eq!(m.get(&i), Some(&(i * 7)));
        }
    }
}
