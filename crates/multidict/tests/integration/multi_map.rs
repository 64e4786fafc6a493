// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use multidict::{errors::KeyNotFound, MultiMap};
use multidict_test_utils::{
    eq_props::{assert_eq_props, assert_ne_props},
    naive_map::NaiveMultiMap,
    test_types::{
        assert_pairs_eq, map_from_ops, new_test_map, test_value_strategy,
        without_chaos, Alloc, ChaosEq, ChaosKey, HashBuilder, TestOp,
    },
    unwind::catch_panic,
};
use proptest::prelude::*;
use test_strategy::proptest;

fn new_map<K, V>() -> MultiMap<K, V, HashBuilder, Alloc> {
    MultiMap::with_hasher_in(HashBuilder::default(), Alloc::default())
}

#[test]
fn add_get_remove_clear() {
    let mut map = new_map::<u32, &str>();

    assert!(map.add(1, "value1"));
    assert!(map.add(1, "value2"));
    assert_eq!(map.get(&1).unwrap().as_slice(), ["value1", "value2"]);

    assert_eq!(map.remove(&1, &"value1"), Ok(Some("value1")));
    assert_eq!(map.get(&1).unwrap().as_slice(), ["value2"]);

    assert_eq!(map.clear(&1), Ok(()));
    assert_eq!(map.get(&1).unwrap_err(), KeyNotFound);
    assert_eq!(map.get_or_default(&1).len(), 0);

    map.validate().expect("map should be valid");
}

#[test]
fn string_keys_and_fractional_values() {
    let mut map = new_map::<String, f64>();

    assert!(map.add("key1".to_owned(), 100.50));
    assert!(map.add("key1".to_owned(), 200.75));
    assert_eq!(map.get("key1").unwrap().as_slice(), [100.50, 200.75]);

    assert_eq!(map.remove("key1", &100.50), Ok(Some(100.50)));
    assert_eq!(map.get("key1").unwrap().as_slice(), [200.75]);

    map.clear("key1").unwrap();
    assert_eq!(map.get("key1").unwrap_err(), KeyNotFound);
    assert_eq!(map.get_or_default("key1").count(), 0);
}

#[test]
fn duplicates_are_kept_in_insertion_order() {
    let mut map = new_map::<u8, &str>();
    for value in ["a", "b", "a", "c", "a"] {
        assert!(map.add(0, value));
    }

    assert_eq!(map.len(), 5);
    assert_eq!(map.key_count(), 1);
    assert_eq!(map.get(&0).unwrap().as_slice(), ["a", "b", "a", "c", "a"]);
    assert!(map.contains(&0, &"c"));
    assert!(!map.contains(&0, &"z"));
    assert!(!map.contains(&1, &"a"));
}

#[test]
fn remove_takes_first_occurrence() {
    let mut map = new_map::<u8, &str>();
    for value in ["a", "b", "a", "c"] {
        map.add(0, value);
    }

    assert_eq!(map.remove(&0, &"a"), Ok(Some("a")));
    assert_eq!(map.get(&0).unwrap().as_slice(), ["b", "a", "c"]);

    assert_eq!(map.remove(&0, &"a"), Ok(Some("a")));
    assert_eq!(map.get(&0).unwrap().as_slice(), ["b", "c"]);

    // Removing a value that isn't there is not an error, and changes nothing.
    assert_eq!(map.remove(&0, &"a"), Ok(None));
    assert_eq!(map.get(&0).unwrap().as_slice(), ["b", "c"]);
    assert_eq!(map.len(), 2);

    map.validate().expect("map should be valid");
}

#[test]
fn emptied_key_stays_present() {
    let mut map = new_map::<u8, &str>();
    map.add(7, "only");

    assert_eq!(map.remove(&7, &"only"), Ok(Some("only")));
    assert!(map.contains_key(&7));
    assert_eq!(map.get(&7).unwrap().len(), 0);
    assert_eq!(map.len(), 0);
    assert_eq!(map.key_count(), 1);
    assert!(!map.is_empty());
    assert_eq!(map.keys().collect::<Vec<_>>(), [&7]);

    // The key contributes nothing to traversal.
    assert_eq!(map.iter().count(), 0);

    // A present key can still be cleared.
    assert_eq!(map.clear(&7), Ok(()));
    assert!(!map.contains_key(&7));
    assert!(map.is_empty());

    // And a later add recreates it.
    map.add(7, "again");
    assert_eq!(map.get(&7).unwrap().as_slice(), ["again"]);

    map.validate().expect("map should be valid");
}

#[test]
fn missing_key_errors() {
    let mut map = new_map::<u8, &str>();
    map.add(1, "a");

    assert_eq!(map.get(&2).unwrap_err(), KeyNotFound);
    assert_eq!(map.remove(&2, &"a"), Err(KeyNotFound));
    assert_eq!(map.clear(&2), Err(KeyNotFound));
    assert_eq!(KeyNotFound.to_string(), "key not found in map");

    // Clearing twice fails the second time.
    assert_eq!(map.clear(&1), Ok(()));
    assert_eq!(map.clear(&1), Err(KeyNotFound));
    assert_eq!(map.remove(&1, &"a"), Err(KeyNotFound));

    // None of the failed calls changed anything.
    assert!(map.is_empty());
    map.validate().expect("map should be valid");
}

#[test]
fn traversal_yields_every_pair() {
    let mut map = new_map::<u8, u32>();
    map.add(1, 10);
    map.add(1, 11);
    map.add(2, 20);
    map.add(3, 30);
    map.add(3, 31);
    map.add(3, 32);
    map.add(4, 40);
    map.remove(&4, &40).unwrap();

    let iter = map.iter();
    assert_eq!(iter.len(), 6);
    let mut pairs: Vec<_> = iter.map(|(k, v)| (*k, *v)).collect();
    pairs.sort();
    assert_eq!(pairs, [(1, 10), (1, 11), (2, 20), (3, 30), (3, 31), (3, 32)]);

    // Values under one key are contiguous and in insertion order.
    let threes: Vec<_> =
        map.iter().filter(|(k, _)| **k == 3).map(|(_, v)| *v).collect();
    assert_eq!(threes, [30, 31, 32]);

    // The owned iterator yields the same pairs.
    let mut owned: Vec<_> = map.clone().into_iter().collect();
    owned.sort();
    assert_eq!(owned, pairs);

    let mut keys: Vec<_> = map.keys().copied().collect();
    keys.sort();
    assert_eq!(keys, [1, 2, 3, 4]);
}

#[test]
fn iterators_report_exact_sizes() {
    let mut map = new_map::<u8, u8>();
    for i in 0..10 {
        map.add(i % 3, i);
    }

    let mut iter = map.iter();
    for remaining in (0..10).rev() {
        assert!(iter.next().is_some());
        assert_eq!(iter.len(), remaining);
    }
    assert_eq!(iter.next(), None);
    assert_eq!(iter.next(), None, "iterator is fused");

    let mut into_iter = map.into_iter();
    assert_eq!(into_iter.len(), 10);
    into_iter.next();
    assert_eq!(into_iter.len(), 9);
}

#[test]
fn values_and_iter_are_restartable() {
    let mut map = new_map::<u8, u32>();
    for value in [1, 2, 3] {
        map.add(0, value);
    }
    map.add(1, 4);

    // A clone of a partially consumed Values continues from the same place,
    // independently of the original.
    let mut values = map.get(&0).unwrap();
    assert_eq!(values.next(), Some(&1));
    let cloned = values.clone();
    assert_eq!(values.collect::<Vec<_>>(), [&2, &3]);
    assert_eq!(cloned.collect::<Vec<_>>(), [&2, &3]);

    // A fresh lookup starts from the beginning again.
    assert_eq!(map.get(&0).unwrap().as_slice(), [1, 2, 3]);
    assert_eq!(map.get_or_default(&0).count(), 3);

    let mut iter = map.iter();
    let first = iter.next().unwrap();
    let cloned = iter.clone();
    assert_eq!(cloned.len(), 3);
    let rest: Vec<_> = iter.collect();
    let cloned_rest: Vec<_> = cloned.collect();
    assert_eq!(rest, cloned_rest);

    let mut seen = vec![first];
    seen.extend(rest);
    seen.sort();
    let mut restarted: Vec<_> = map.iter().collect();
    restarted.sort();
    assert_eq!(seen, restarted);
    assert_eq!(restarted, [(&0, &1), (&0, &2), (&0, &3), (&1, &4)]);
}

#[test]
fn debug_impls() {
    let mut map = new_map::<u8, &str>();
    map.add(1, "a");
    map.add(1, "b");

    assert_eq!(format!("{map:?}"), r#"{1: ["a", "b"]}"#);
    assert_eq!(
        format!("{:?}", map.get(&1).unwrap()),
        r#"Values { inner: Iter(["a", "b"]) }"#
    );

    map.remove(&1, &"a").unwrap();
    map.remove(&1, &"b").unwrap();
    assert_eq!(format!("{map:?}"), "{1: []}");
}

#[test]
fn with_capacity() {
    let map = MultiMap::<u8, String, HashBuilder>::with_capacity_and_hasher(
        1024,
        HashBuilder::default(),
    );
    assert!(map.capacity() >= 1024);
    assert!(map.is_empty());
}

#[test]
fn extend_and_collect() {
    let pairs = [(1, "a"), (2, "b"), (1, "c"), (1, "a")];
    let map: MultiMap<u8, &str, HashBuilder, Alloc> =
        pairs.iter().copied().collect();
    assert_eq!(map.len(), 4);
    assert_eq!(map.get(&1).unwrap().as_slice(), ["a", "c", "a"]);

    let mut extended = new_map::<u8, &str>();
    extended.extend(pairs);
    assert_eq_props(map, extended);
}

#[test]
fn clear_all_removes_everything() {
    let mut map = new_map::<u8, &str>();
    map.add(1, "a");
    map.add(2, "b");
    map.remove(&2, &"b").unwrap();

    map.clear_all();
    assert!(map.is_empty());
    assert_eq!(map.len(), 0);
    assert_eq!(map.get(&2).unwrap_err(), KeyNotFound);
    map.validate().expect("map should be valid");
}

// Test various conditions for non-equality.
//
// It's a bit difficult to capture mutations in a proptest, so this is a small
// example-based test.
#[test]
fn test_map_ne() {
    let mut map1 = new_map::<u8, &str>();
    map1.add(1, "a");
    map1.add(1, "b");

    // Same values in a different order.
    let mut map2 = new_map::<u8, &str>();
    map2.add(1, "b");
    map2.add(1, "a");
    assert_ne_props(map1.clone(), map2);

    // A key without values is not the same as a missing key.
    let mut map3 = map1.clone();
    map3.add(2, "c");
    map3.remove(&2, &"c").unwrap();
    assert_ne_props(map1.clone(), map3.clone());

    // But it is the same as another key without values.
    let mut map4 = map1.clone();
    map4.add(2, "d");
    map4.remove(&2, &"d").unwrap();
    assert_eq_props(map3, map4);

    // Same number of values, different keys.
    let mut map5 = new_map::<u8, &str>();
    map5.add(1, "a");
    map5.add(3, "b");
    assert_ne_props(map1, map5);
}

#[test]
fn key_order_does_not_affect_equality() {
    let mut map1 = new_map::<u8, &str>();
    let mut map2 = new_map::<u8, &str>();
    for key in 0..32 {
        map1.add(key, "x");
    }
    for key in (0..32).rev() {
        map2.add(key, "x");
    }
    assert_eq_props(map1, map2);
}

#[proptest(cases = 64)]
fn proptest_ops(
    #[strategy(prop::collection::vec(any::<TestOp>(), 0..512))] ops: Vec<
        TestOp,
    >,
) {
    let mut map = new_test_map();
    let mut naive_map = NaiveMultiMap::new();

    // Now perform the operations on both maps.
    for op in ops {
        match op {
            TestOp::Add { key, value } => {
                let map_res = map.add(key, value.clone());
                let naive_res = naive_map.add(key, value);
                assert_eq!(map_res, naive_res, "add results match");

                map.validate().expect("map should be valid");
            }
            TestOp::Get { key } => {
                let map_res = map.get(&key).map(|values| values.as_slice());
                let naive_res = naive_map.get(&key);
                assert_eq!(map_res, naive_res, "get results match");

                assert_eq!(
                    map.get_or_default(&key).as_slice(),
                    naive_map.get_or_default(&key),
                    "get_or_default results match"
                );
                assert_eq!(map.contains_key(&key), naive_res.is_ok());
            }
            TestOp::Remove { key, value } => {
                let map_res = map.remove(&key, &value);
                let naive_res = naive_map.remove(&key, &value);
                assert_eq!(map_res, naive_res, "remove results match");

                map.validate().expect("map should be valid");
            }
            TestOp::Clear { key } => {
                let map_res = map.clear(&key);
                let naive_res = naive_map.clear(&key);
                assert_eq!(map_res, naive_res, "clear results match");

                map.validate().expect("map should be valid");
            }
        }

        assert_eq!(map.len(), naive_map.len(), "len matches");
        assert_eq!(map.key_count(), naive_map.key_count(), "key_count matches");
        assert_eq!(map.is_empty(), naive_map.is_empty(), "is_empty matches");
        assert_eq!(map.iter().len(), naive_map.len(), "iter len matches");

        // Check that the iterators work correctly.
        assert_pairs_eq(map.iter(), naive_map.iter());
        let mut keys: Vec<_> = map.keys().collect();
        keys.sort();
        let mut naive_keys: Vec<_> = naive_map.keys().collect();
        naive_keys.sort();
        assert_eq!(keys, naive_keys, "keys match");
    }
}

#[proptest(cases = 64)]
fn proptest_permutation_eq(
    #[strategy(
        prop::collection::vec((0..16u8, test_value_strategy()), 0..128)
            .prop_shuffle()
    )]
    pairs: Vec<(u8, String)>,
) {
    // Interleaving pairs for different keys doesn't change the map, as long
    // as each key sees its values in the same order.
    let mut map1 = new_test_map();
    for (key, value) in &pairs {
        map1.add(*key, value.clone());
    }

    let mut by_key = pairs.clone();
    // Stable, so values under a key keep their relative order.
    by_key.sort_by_key(|(key, _)| *key);
    let mut map2 = new_test_map();
    for (key, value) in by_key {
        map2.add(key, value);
    }

    assert_eq_props(map1, map2);
}

#[proptest(cases = 32)]
fn proptest_clone_eq(
    #[strategy(prop::collection::vec(any::<TestOp>(), 0..256))] ops: Vec<
        TestOp,
    >,
) {
    let map = map_from_ops(&ops);
    let cloned = map.clone();
    cloned.validate().expect("cloned map should be valid");
    assert_eq_props(map, cloned);
}

#[test]
fn test_chaos_keys() {
    let mut map = new_map::<ChaosKey, u32>();
    let mut chaos_eq = ChaosEq::all_variants().into_iter().cycle();

    for i in 0..64u32 {
        eprintln!("iteration {i}");
        // Reuse a small set of keys so that chaotic keys collide with
        // well-behaved ones.
        let plain = ChaosKey::new((i % 4) as u8);
        let chaotic = ChaosKey::new((i % 4) as u8)
            .with_chaos(chaos_eq.next().unwrap());

        // These may or may not find an existing key, and may even panic; what
        // matters is that the map is left in a valid state.
        catch_panic(|| map.add(chaotic.clone(), i));
        catch_panic(|| map.add(plain.clone(), i));
        catch_panic(|| map.get(&chaotic).map(|values| values.len()));
        catch_panic(|| map.remove(&chaotic, &i));
        if i % 5 == 0 {
            catch_panic(|| map.clear(&chaotic));
        }
        catch_panic(|| map.iter().count());

        without_chaos(|| {
            map.validate().unwrap_or_else(|error| {
                panic!("iteration {i}: map invalid: {error}")
            });
            assert_eq!(map.iter().count(), map.len());
        });
    }
}

#[test]
fn inconsistent_key_eq_never_drops_values() {
    for chaos in ChaosEq::all_variants() {
        eprintln!("chaos: {chaos:?}");

        // The chaotic key arrives after the bucket exists.
        let mut map = new_map::<ChaosKey, u32>();
        map.add(ChaosKey::new(1), 10);
        map.add(ChaosKey::new(1), 11);
        map.add(ChaosKey::new(1).with_chaos(chaos.clone()), 12);
        without_chaos(|| assert_all_values_kept(&map, &[10, 11, 12]));

        // The chaotic key owns the bucket, and plain keys arrive later.
        let mut map = new_map::<ChaosKey, u32>();
        map.add(ChaosKey::new(1).with_chaos(chaos.clone()), 10);
        map.add(ChaosKey::new(1), 11);
        map.add(ChaosKey::new(1), 12);
        without_chaos(|| assert_all_values_kept(&map, &[10, 11, 12]));
    }
}

fn assert_all_values_kept(
    map: &MultiMap<ChaosKey, u32, HashBuilder, Alloc>,
    expected: &[u32],
) {
    map.validate().expect("map should be valid");
    assert_eq!(map.len(), expected.len(), "no values were dropped");
    let mut values: Vec<_> = map.iter().map(|(_, value)| *value).collect();
    values.sort();
    assert_eq!(values, expected);
}

#[test]
fn test_chaos_values() {
    let mut map = new_map::<u8, ChaosKey>();
    let mut chaos_eq = ChaosEq::all_variants().into_iter().cycle();

    for i in 0..64u8 {
        eprintln!("iteration {i}");
        let value =
            ChaosKey::new(i % 3).with_chaos(chaos_eq.next().unwrap());

        // remove depends on the values' PartialEq, which lies here. The
        // cached length must stay in sync regardless.
        catch_panic(|| map.add(i % 2, value.clone()));
        catch_panic(|| map.remove(&(i % 2), &value));
        catch_panic(|| map.contains(&(i % 2), &value));

        without_chaos(|| {
            map.validate().unwrap_or_else(|error| {
                panic!("iteration {i}: map invalid: {error}")
            });
        });
    }
}

#[cfg(feature = "allocator-api2")]
mod alloc_tests {
    use multidict::{errors::KeyNotFound, MultiMap};
    use multidict_test_utils::{bumpalo::Bump, test_types::HashBuilder};

    #[test]
    fn map_in_bump_arena() {
        let bump = Bump::new();
        let mut map = MultiMap::<u32, u32, HashBuilder, &Bump>::with_hasher_in(
            HashBuilder::default(),
            &bump,
        );

        for i in 0..100 {
            assert!(map.add(i % 10, i));
        }
        assert_eq!(map.len(), 100);
        assert_eq!(map.key_count(), 10);
        assert_eq!(map.get(&3).unwrap().len(), 10);
        assert_eq!(map.remove(&3, &13), Ok(Some(13)));
        assert_eq!(map.clear(&4), Ok(()));
        assert_eq!(map.get(&4).unwrap_err(), KeyNotFound);
        assert_eq!(map.len(), 89);
        map.validate().expect("map should be valid");

        let cloned = map.clone();
        assert_eq!(map, cloned);
        assert!(bump.allocated_bytes() > 0);
    }

    #[test]
    fn add_reports_allocation_failure() {
        let bump = Bump::new();
        let mut map = MultiMap::<u32, u32, HashBuilder, &Bump>::with_hasher_in(
            HashBuilder::default(),
            &bump,
        );
        assert!(map.add(1, 1));

        // No new chunks can be allocated, so the map runs out of space once
        // the current chunk is used up.
        bump.set_allocation_limit(Some(0));
        let mut failed_at = None;
        for i in 2..10_000 {
            if !map.add(i, i) {
                failed_at = Some(i);
                break;
            }
        }

        let failed_at = failed_at.expect("arena eventually runs out of space");
        assert!(!map.contains_key(&failed_at), "failed add leaves no key");
        assert_eq!(map.len(), map.key_count());
        map.validate().expect("map should be valid");
    }

    #[test]
    fn try_add_hands_back_key_and_value() {
        let bump = Bump::new();
        let mut map = MultiMap::<u32, u32, HashBuilder, &Bump>::with_hasher_in(
            HashBuilder::default(),
            &bump,
        );
        assert!(map.add(0, 0));
        bump.set_allocation_limit(Some(0));

        // Add new keys until one of them can't be stored.
        let mut key = 1;
        let error = loop {
            match map.try_add(key, key * 10) {
                Ok(()) => key += 1,
                Err(error) => break error,
            }
            assert!(key < 100_000, "arena never ran out of space");
        };

        assert_eq!(error.key(), &key);
        assert_eq!(error.value(), &(key * 10));
        assert_eq!(error.into_parts(), (key, key * 10));
        assert!(!map.contains_key(&key), "failed add leaves no key");
        assert_eq!(map.len(), key as usize);
        map.validate().expect("map should be valid");
    }

    #[test]
    fn failed_push_leaves_bucket_unchanged() {
        let bump = Bump::new();
        let mut map = MultiMap::<u32, u32, HashBuilder, &Bump>::with_hasher_in(
            HashBuilder::default(),
            &bump,
        );
        assert!(map.add(1, 0));
        bump.set_allocation_limit(Some(0));

        // Grow the bucket for key 1 until it can't grow any further.
        let mut next = 1;
        let error = loop {
            match map.try_add(1, next) {
                Ok(()) => next += 1,
                Err(error) => break error,
            }
            assert!(next < 100_000, "arena never ran out of space");
        };

        assert_eq!(error.into_parts(), (1, next));
        let expected: Vec<u32> = (0..next).collect();
        assert_eq!(map.get(&1).unwrap().as_slice(), expected.as_slice());
        assert_eq!(map.len(), expected.len());
        assert_eq!(map.key_count(), 1);

        // add reports the same failure as false, and changes nothing.
        assert!(!map.add(1, next));
        assert_eq!(map.get(&1).unwrap().len(), expected.len());
        map.validate().expect("map should be valid");
    }
}

#[cfg(feature = "serde")]
mod serde_tests {
    use multidict::MultiMap;
    use multidict_test_utils::{
        serde_utils::assert_serialize_roundtrip,
        test_types::{Alloc, HashBuilder, TestOp},
    };
    use test_strategy::proptest;

    #[proptest]
    fn proptest_serialize_roundtrip(ops: Vec<TestOp>) {
        assert_serialize_roundtrip(ops);
    }

    #[test]
    fn empty_keys_survive_roundtrip() {
        let mut map = MultiMap::<String, u32, HashBuilder, Alloc>::default();
        map.add("k".to_owned(), 1);
        map.remove("k", &1).unwrap();

        let serialized = serde_json::to_string(&map).unwrap();
        assert_eq!(serialized, r#"{"k":[]}"#);

        let deserialized: MultiMap<String, u32, HashBuilder, Alloc> =
            serde_json::from_str(&serialized).unwrap();
        assert!(deserialized.contains_key("k"));
        assert_eq!(deserialized.len(), 0);
    }

    #[test]
    fn duplicate_keys_are_appended() {
        let input = r#"{"k": [1, 2], "j": [], "k": [3]}"#;
        let map: MultiMap<String, u32, HashBuilder, Alloc> =
            serde_json::from_str(input).unwrap();
        assert_eq!(map.get("k").unwrap().as_slice(), [1, 2, 3]);
        assert_eq!(map.get("j").unwrap().len(), 0);
        assert_eq!(map.len(), 3);
        map.validate().expect("map should be valid");
    }

    #[test]
    fn rejects_non_list_values() {
        let input = r#"{"k": 1}"#;
        let res: Result<MultiMap<String, u32, HashBuilder, Alloc>, _> =
            serde_json::from_str(input);
        assert!(res.is_err());
    }
}

#[cfg(feature = "daft")]
mod daft_tests {
    use daft::Diffable;
    use multidict::MultiMap;
    use multidict_test_utils::test_types::{Alloc, HashBuilder};

    #[test]
    fn diff_classifies_keys() {
        let mut before = MultiMap::<u8, &str, HashBuilder, Alloc>::default();
        before.add(1, "a");
        before.add(2, "b");
        before.add(3, "c");

        let mut after = before.clone();
        after.add(2, "b2");
        after.clear(&3).unwrap();
        after.add(4, "d");

        let diff = before.diff(&after);
        assert_eq!(diff.common.len(), 2);
        assert_eq!(diff.unchanged().collect::<Vec<_>>(), [(&1, &["a"][..])]);

        let modified: Vec<_> = diff.modified().collect();
        assert_eq!(modified.len(), 1);
        let (key, leaf) = &modified[0];
        assert_eq!(**key, 2);
        assert_eq!(leaf.before, ["b"]);
        assert_eq!(leaf.after, ["b", "b2"]);

        assert!(diff.is_unchanged(&&1u8));
        assert!(diff.is_modified(&&2u8));
        assert_eq!(diff.removed.get(&&3u8).copied(), Some(&["c"][..]));
        assert_eq!(diff.added.get(&&4u8).copied(), Some(&["d"][..]));
    }
}

#[cfg(feature = "proptest")]
#[proptest(cases = 16)]
fn proptest_arbitrary_map(map: MultiMap<u8, String, HashBuilder, Alloc>) {
    // Test that the arbitrarily generated map is valid.
    map.validate().expect("map should be valid");
    assert_eq!(map.is_empty(), map.key_count() == 0);

    // Every pair should be findable through its key.
    let mut count = 0;
    for (key, value) in &map {
        count += 1;
        assert!(map.contains(key, value));
    }
    assert_eq!(count, map.len());
}
