// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::{support::alloc::Allocator, MultiMap};
use alloc::vec::Vec;
use core::{
    fmt,
    hash::{BuildHasher, Hash},
    marker::PhantomData,
};
use serde_core::{
    de::{Error as _, MapAccess, Visitor},
    Deserialize, Deserializer, Serialize, Serializer,
};

/// A `MultiMap` serializes to a map from each key to the list of its values.
///
/// Keys without values serialize as an empty list, so key membership survives
/// a round trip. Keys are serialized in arbitrary order.
///
/// # Examples
///
/// ```
/// # #[cfg(feature = "default-hasher")] {
/// use multidict::MultiMap;
/// # use multidict_test_utils::serde_json;
///
/// let mut map = MultiMap::new();
/// map.add(1, "a");
/// map.add(1, "b");
///
/// let serialized = serde_json::to_string(&map).unwrap();
/// assert_eq!(serialized, r#"{"1":["a","b"]}"#);
/// # }
/// ```
impl<K, V, S, A> Serialize for MultiMap<K, V, S, A>
where
    K: Serialize,
    V: Serialize,
    A: Allocator,
{
    fn serialize<Ser: Serializer>(
        &self,
        serializer: Ser,
    ) -> Result<Ser::Ok, Ser::Error> {
        serializer.collect_map(
            self.table.iter().map(|(key, bucket)| (key, bucket.as_slice())),
        )
    }
}

/// The `Deserialize` impl reads a map from key to list of values, rebuilding
/// the buckets in list order.
///
/// If a key appears more than once, the later values are appended after the
/// earlier ones.
impl<'de, K, V, S, A> Deserialize<'de> for MultiMap<K, V, S, A>
where
    K: Deserialize<'de> + Eq + Hash,
    V: Deserialize<'de>,
    S: BuildHasher + Default,
    A: Allocator + Clone + Default,
{
    fn deserialize<D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Self, D::Error> {
        deserializer.deserialize_map(MultiMapVisitor { _marker: PhantomData })
    }
}

struct MultiMapVisitor<K, V, S, A: Allocator> {
    _marker: PhantomData<fn() -> MultiMap<K, V, S, A>>,
}

impl<'de, K, V, S, A> Visitor<'de> for MultiMapVisitor<K, V, S, A>
where
    K: Deserialize<'de> + Eq + Hash,
    V: Deserialize<'de>,
    S: BuildHasher + Default,
    A: Allocator + Clone + Default,
{
    type Value = MultiMap<K, V, S, A>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a map from keys to lists of values")
    }

    fn visit_map<M>(self, mut access: M) -> Result<Self::Value, M::Error>
    where
        M: MapAccess<'de>,
    {
        // The size hint comes from the input, so don't preallocate from it.
        let mut map = MultiMap::with_hasher_in(S::default(), A::default());

        while let Some((key, values)) = access.next_entry::<K, Vec<V>>()? {
            map.try_append(key, values).map_err(|_| {
                M::Error::custom("failed to reserve space for map values")
            })?;
        }

        Ok(map)
    }
}

