// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use multidict::MultiMap;
use proptest::prelude::*;
use std::{cell::Cell, hash::Hash};
use test_strategy::Arbitrary;

thread_local! {
    static WITHOUT_CHAOS: Cell<bool> = const { Cell::new(false) };
}

#[cfg(feature = "default-hasher")]
pub type HashBuilder = multidict::DefaultHashBuilder;

#[cfg(not(feature = "default-hasher"))]
pub type HashBuilder = std::hash::RandomState;

pub type Alloc = multidict::internal::Global;

/// The map type most tests run against.
pub type TestMap = MultiMap<u8, String, HashBuilder, Alloc>;

/// Creates an empty [`TestMap`].
pub fn new_test_map() -> TestMap {
    MultiMap::with_hasher_in(HashBuilder::default(), Alloc::default())
}

/// Temporarily disable chaos testing.
pub fn without_chaos<F, T>(f: F)
where
    F: FnOnce() -> T,
{
    let guard = ChaosGuard::new();
    f();
    // Explicitly drop the guard to ensure that the chaos flag is reset.
    drop(guard);
}

struct ChaosGuard {}

impl ChaosGuard {
    fn new() -> Self {
        WITHOUT_CHAOS.set(true);
        Self {}
    }
}

impl Drop for ChaosGuard {
    fn drop(&mut self) {
        WITHOUT_CHAOS.set(false);
    }
}

#[derive(Clone, Debug, Eq, Ord, PartialEq, PartialOrd)]
pub enum ChaosEq {
    Always,
    Never,
    FlipFlop(Cell<bool>),
}

impl ChaosEq {
    pub fn all_variants() -> [Self; 3] {
        [Self::Always, Self::Never, Self::FlipFlop(Cell::new(false))]
    }
}

/// A small value whose equality can be made to misbehave.
///
/// The hash is always computed from `key`, so a chaotic `ChaosKey` still lands
/// in a consistent place in a hash table. Only comparisons lie.
#[derive(Clone, Debug)]
pub struct ChaosKey {
    pub key: u8,
    chaos: Option<ChaosEq>,
}

impl ChaosKey {
    pub fn new(key: u8) -> Self {
        Self { key, chaos: None }
    }

    pub fn with_chaos(self, chaos: ChaosEq) -> Self {
        Self { chaos: Some(chaos), ..self }
    }
}

impl Hash for ChaosKey {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.key.hash(state);
    }
}

impl PartialEq for ChaosKey {
    fn eq(&self, other: &Self) -> bool {
        if WITHOUT_CHAOS.get() {
            return self.key == other.key;
        }
        match self.chaos {
            Some(ChaosEq::Always) => true,
            Some(ChaosEq::Never) => false,
            Some(ChaosEq::FlipFlop(ref cell)) => {
                let value = cell.get();
                cell.set(!value);
                value
            }
            None => self.key == other.key,
        }
    }
}

impl Eq for ChaosKey {}

/// An operation against a map of small integer keys and short string values.
///
/// The key and value spaces are kept small so that random sequences of
/// operations hit the same keys and values often.
#[derive(Clone, Debug, Arbitrary)]
pub enum TestOp {
    // Make adds a bit more common to try and fill up the map.
    #[weight(4)]
    Add {
        #[strategy(0..8u8)]
        key: u8,
        #[strategy(test_value_strategy())]
        value: String,
    },
    Get {
        #[strategy(0..10u8)]
        key: u8,
    },
    #[weight(2)]
    Remove {
        #[strategy(0..10u8)]
        key: u8,
        #[strategy(test_value_strategy())]
        value: String,
    },
    Clear {
        #[strategy(0..10u8)]
        key: u8,
    },
}

/// Values are drawn from a handful of short strings, so duplicates are common.
pub fn test_value_strategy() -> impl Strategy<Value = String> {
    prop::sample::select(&["a", "b", "c", "d", ""][..])
        .prop_map(|value| value.to_owned())
}

/// Builds a map by applying `ops` in order, ignoring errors.
pub fn map_from_ops(ops: &[TestOp]) -> TestMap {
    let mut map = new_test_map();
    for op in ops {
        match op {
            TestOp::Add { key, value } => {
                map.add(*key, value.clone());
            }
            TestOp::Get { .. } => {}
            TestOp::Remove { key, value } => {
                let _ = map.remove(key, value);
            }
            TestOp::Clear { key } => {
                let _ = map.clear(key);
            }
        }
    }
    map
}

/// Asserts that two iterators over `(key, value)` pairs yield the same pairs,
/// treating key order as arbitrary but value order under a key as significant.
pub fn assert_pairs_eq<'a, K, V>(
    actual: impl IntoIterator<Item = (&'a K, &'a V)>,
    expected: impl IntoIterator<Item = (&'a K, &'a V)>,
) where
    K: 'a + Ord + std::fmt::Debug,
    V: 'a + PartialEq + std::fmt::Debug,
{
    // A stable sort by key keeps the values under each key in their original
    // order.
    let mut actual: Vec<_> = actual.into_iter().collect();
    actual.sort_by_key(|(key, _)| *key);
    let mut expected: Vec<_> = expected.into_iter().collect();
    expected.sort_by_key(|(key, _)| *key);
    assert_eq!(actual, expected, "pairs match");
}
