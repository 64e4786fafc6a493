// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use super::{IntoIter, Iter, Keys, Values};
use crate::{
    errors::{AllocationFailure, KeyNotFound},
    internal::ValidationError,
    support::{
        alloc::{global_alloc, AllocWrapper, Allocator, Global},
        bucket::{remove_first, try_push, Bucket},
        key_table::KeyTable,
    },
    DefaultHashBuilder,
};
use alloc::format;
use core::{
    fmt,
    hash::{BuildHasher, Hash},
};
use derive_where::derive_where;
use equivalent::Equivalent;
use hashbrown::hash_table::Entry;

/// A hash map that stores any number of values under each key.
///
/// Values under a key are kept in the order they were added. Adding the same
/// value twice stores it twice.
///
/// A key is *present* from the first [`add`](Self::add) until
/// [`clear`](Self::clear) is called for it. Removing values one at a time
/// with [`remove`](Self::remove) never makes a key absent: a key can be
/// present with no values at all.
///
/// Similar to [`HashMap`], the iteration order of keys is arbitrary.
///
/// # Examples
///
/// ```
/// # #[cfg(feature = "default-hasher")] {
/// use multidict::MultiMap;
///
/// let mut map = MultiMap::new();
/// map.add("fruit", "apple");
/// map.add("fruit", "pear");
/// map.add("vegetable", "leek");
///
/// assert_eq!(map.len(), 3);
/// assert_eq!(map.key_count(), 2);
/// assert_eq!(map.get("fruit").unwrap().as_slice(), ["apple", "pear"]);
///
/// // Removing the only value under a key keeps the key around.
/// map.remove("vegetable", &"leek").unwrap();
/// assert!(map.contains_key("vegetable"));
/// assert_eq!(map.get("vegetable").unwrap().len(), 0);
///
/// // Clearing it does not.
/// map.clear("vegetable").unwrap();
/// assert!(!map.contains_key("vegetable"));
/// # }
/// ```
///
/// [`HashMap`]: std::collections::HashMap
#[derive_where(Clone; K: Clone, V: Clone, S: Clone, A: Clone)]
#[derive_where(Default; S: Default, A: Default)]
pub struct MultiMap<K, V, S = DefaultHashBuilder, A: Allocator = Global> {
    pub(super) table: KeyTable<K, V, S, A>,
    // Invariant: the sum of the lengths of all buckets.
    pub(super) len: usize,
}

#[cfg(feature = "default-hasher")]
impl<K, V> MultiMap<K, V> {
    /// Creates a new, empty `MultiMap`.
    ///
    /// # Examples
    ///
    /// ```
    /// use multidict::MultiMap;
    ///
    /// let map: MultiMap<u32, String> = MultiMap::new();
    /// assert!(map.is_empty());
    /// ```
    #[inline]
    pub fn new() -> Self {
        Self::with_hasher_in(DefaultHashBuilder::default(), global_alloc())
    }

    /// Creates a new `MultiMap` with room for at least `capacity` keys.
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_capacity_and_hasher_in(
            capacity,
            DefaultHashBuilder::default(),
            global_alloc(),
        )
    }
}

#[cfg(feature = "default-hasher")]
impl<K, V, A: Allocator> MultiMap<K, V, DefaultHashBuilder, A> {
    /// Creates a new, empty `MultiMap` using the given allocator.
    ///
    /// Both the key table and every bucket are allocated with `alloc`.
    pub fn new_in(alloc: A) -> Self {
        Self::with_hasher_in(DefaultHashBuilder::default(), alloc)
    }

    /// Creates a new `MultiMap` with room for at least `capacity` keys, using
    /// the given allocator.
    pub fn with_capacity_in(capacity: usize, alloc: A) -> Self {
        Self::with_capacity_and_hasher_in(
            capacity,
            DefaultHashBuilder::default(),
            alloc,
        )
    }
}

impl<K, V, S: BuildHasher> MultiMap<K, V, S> {
    /// Creates a new, empty `MultiMap` with the given hasher.
    #[inline]
    pub fn with_hasher(hasher: S) -> Self {
        Self::with_hasher_in(hasher, global_alloc())
    }

    /// Creates a new `MultiMap` with room for at least `capacity` keys, using
    /// the given hasher.
    pub fn with_capacity_and_hasher(capacity: usize, hasher: S) -> Self {
        Self::with_capacity_and_hasher_in(capacity, hasher, global_alloc())
    }
}

impl<K, V, S: BuildHasher, A: Allocator> MultiMap<K, V, S, A> {
    /// Creates a new, empty `MultiMap` with the given hasher and allocator.
    #[inline]
    pub fn with_hasher_in(hasher: S, alloc: A) -> Self {
        Self::with_capacity_and_hasher_in(0, hasher, alloc)
    }

    /// Creates a new `MultiMap` with room for at least `capacity` keys, using
    /// the given hasher and allocator.
    pub fn with_capacity_and_hasher_in(
        capacity: usize,
        hasher: S,
        alloc: A,
    ) -> Self {
        Self {
            table: KeyTable::with_capacity_and_hasher_in(
                capacity, hasher, alloc,
            ),
            len: 0,
        }
    }

    /// Returns the hasher used by the map.
    #[inline]
    pub fn hasher(&self) -> &S {
        &self.table.state
    }

    /// Returns the allocator used by the map.
    #[inline]
    pub fn allocator(&self) -> &A {
        self.table.allocator()
    }

    /// Returns the number of keys the map can hold without reallocating its
    /// key table.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.table.items.capacity()
    }

    /// Returns the total number of values in the map, across all keys.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns the number of keys present in the map.
    ///
    /// Keys whose values have all been [removed](Self::remove) are counted.
    #[inline]
    pub fn key_count(&self) -> usize {
        self.table.len()
    }

    /// Returns true if no keys are present in the map.
    ///
    /// A map holding only keys without values is not empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.table.len() == 0
    }

    /// Iterates over every `(key, value)` pair in the map.
    ///
    /// Each key is yielded once per value stored under it, with its values in
    /// insertion order. Keys without values are skipped. The order of keys is
    /// arbitrary.
    #[inline]
    pub fn iter(&self) -> Iter<'_, K, V, A> {
        Iter::new(&self.table, self.len)
    }

    /// Iterates over the keys present in the map, including keys without
    /// values.
    #[inline]
    pub fn keys(&self) -> Keys<'_, K, V, A> {
        Keys::new(&self.table)
    }

    /// Removes every key and value from the map.
    pub fn clear_all(&mut self) {
        self.table.items.clear();
        self.len = 0;
    }
}

impl<K: Eq + Hash, V, S: BuildHasher, A: Allocator> MultiMap<K, V, S, A> {
    /// Checks general invariants of the map.
    ///
    /// The code below always upholds these invariants, but it's useful to have
    /// an explicit check for tests.
    #[doc(hidden)]
    pub fn validate(&self) -> Result<(), ValidationError>
    where
        K: fmt::Debug,
    {
        let actual: usize =
            self.table.iter().map(|(_, bucket)| bucket.len()).sum();
        if actual != self.len {
            return Err(ValidationError::Len { cached: self.len, actual });
        }

        // Every key must be reachable through a lookup. This fails if the Hash
        // and Eq implementations of K disagree with each other.
        for (key, _) in self.table.iter() {
            if self.table.find(key).is_none() {
                return Err(ValidationError::general(format!(
                    "key {key:?} is stored but cannot be looked up"
                )));
            }
        }

        Ok(())
    }

    /// Adds `value` to the end of the values for `key`, creating the key if
    /// it isn't present.
    ///
    /// Returns true if the value was added, and false if memory for it could
    /// not be reserved. In the latter case the map is left unchanged; use
    /// [`try_add`](Self::try_add) to get the key and value back.
    ///
    /// # Examples
    ///
    /// ```
    /// # #[cfg(feature = "default-hasher")] {
    /// use multidict::MultiMap;
    ///
    /// let mut map = MultiMap::new();
    /// assert!(map.add(1, "a"));
    /// assert!(map.add(1, "a"));
    /// assert_eq!(map.get(&1).unwrap().as_slice(), ["a", "a"]);
    /// # }
    /// ```
    #[inline]
    pub fn add(&mut self, key: K, value: V) -> bool
    where
        A: Clone,
    {
        self.try_add(key, value).is_ok()
    }

    /// Adds `value` to the end of the values for `key`, creating the key if
    /// it isn't present.
    ///
    /// Space is reserved before anything is modified, so on error the map is
    /// unchanged. In particular, a failed add never leaves a new key behind.
    pub fn try_add(
        &mut self,
        key: K,
        value: V,
    ) -> Result<(), AllocationFailure<K, V>>
    where
        A: Clone,
    {
        // Room for a new key is reserved up front, so that inserting into a
        // vacant entry below can't reallocate. The key is then looked up
        // exactly once: a second lookup could disagree with the first if
        // K's Eq is inconsistent.
        if self.table.try_reserve_one().is_err() {
            return Err(AllocationFailure::new(key, value));
        }
        let alloc = AllocWrapper(self.table.allocator().clone());

        match self.table.entry(&key) {
            Entry::Occupied(mut entry) => {
                let (_, bucket) = entry.get_mut();
                if let Err(value) = try_push(bucket, value) {
                    return Err(AllocationFailure::new(key, value));
                }
            }
            Entry::Vacant(entry) => {
                let mut bucket = Bucket::new_in(alloc);
                if let Err(value) = try_push(&mut bucket, value) {
                    return Err(AllocationFailure::new(key, value));
                }
                entry.insert((key, bucket));
            }
        }

        self.len += 1;
        Ok(())
    }

    /// Appends all of `values` under `key`, creating the key even if `values`
    /// is empty.
    #[cfg(feature = "serde")]
    pub(super) fn try_append<I>(
        &mut self,
        key: K,
        values: I,
    ) -> Result<(), allocator_api2::alloc::AllocError>
    where
        A: Clone,
        I: IntoIterator<Item = V>,
        I::IntoIter: ExactSizeIterator,
    {
        use allocator_api2::alloc::AllocError;

        let values = values.into_iter();
        self.table.try_reserve_one().map_err(|_| AllocError)?;
        let alloc = AllocWrapper(self.table.allocator().clone());

        let added = match self.table.entry(&key) {
            Entry::Occupied(mut entry) => {
                let (_, bucket) = entry.get_mut();
                let before = bucket.len();
                bucket.try_reserve(values.len()).map_err(|_| AllocError)?;
                bucket.extend(values);
                bucket.len() - before
            }
            Entry::Vacant(entry) => {
                let mut bucket = Bucket::new_in(alloc);
                bucket.try_reserve(values.len()).map_err(|_| AllocError)?;
                bucket.extend(values);
                let added = bucket.len();
                entry.insert((key, bucket));
                added
            }
        };

        self.len += added;
        Ok(())
    }

    /// Returns the values for `key`, in the order they were added.
    ///
    /// Returns an error if `key` is not present. A present key without values
    /// returns an empty iterator.
    ///
    /// # Examples
    ///
    /// ```
    /// # #[cfg(feature = "default-hasher")] {
    /// use multidict::{MultiMap, errors::KeyNotFound};
    ///
    /// let mut map = MultiMap::new();
    /// map.add(String::from("k"), 1);
    /// map.add(String::from("k"), 2);
    ///
    /// // Borrowed forms of the key can be used for lookups.
    /// let values: Vec<_> = map.get("k").unwrap().copied().collect();
    /// assert_eq!(values, [1, 2]);
    /// assert_eq!(map.get("missing").unwrap_err(), KeyNotFound);
    /// # }
    /// ```
    pub fn get<Q>(&self, key: &Q) -> Result<Values<'_, V>, KeyNotFound>
    where
        Q: ?Sized + Hash + Equivalent<K>,
    {
        self.table
            .find(key)
            .map(|bucket| Values::new(bucket.as_slice()))
            .ok_or(KeyNotFound)
    }

    /// Returns the values for `key`, or an empty iterator if `key` is not
    /// present.
    pub fn get_or_default<Q>(&self, key: &Q) -> Values<'_, V>
    where
        Q: ?Sized + Hash + Equivalent<K>,
    {
        self.get(key).unwrap_or_default()
    }

    /// Returns true if `key` is present in the map, even if it has no values.
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        Q: ?Sized + Hash + Equivalent<K>,
    {
        self.table.find(key).is_some()
    }

    /// Returns true if `value` is stored under `key`.
    pub fn contains<Q>(&self, key: &Q, value: &V) -> bool
    where
        Q: ?Sized + Hash + Equivalent<K>,
        V: PartialEq,
    {
        self.table.find(key).is_some_and(|bucket| bucket.contains(value))
    }

    /// Removes the first occurrence of `value` from the values for `key`.
    ///
    /// The remaining values keep their order. Returns the removed value, or
    /// `None` if `value` is not stored under `key`. Returns an error if `key`
    /// is not present.
    ///
    /// The key stays present even if this removes its last value. Use
    /// [`clear`](Self::clear) to remove the key itself.
    ///
    /// # Examples
    ///
    /// ```
    /// # #[cfg(feature = "default-hasher")] {
    /// use multidict::MultiMap;
    ///
    /// let mut map = MultiMap::new();
    /// map.add(1, "a");
    /// map.add(1, "b");
    /// map.add(1, "a");
    ///
    /// assert_eq!(map.remove(&1, &"a"), Ok(Some("a")));
    /// assert_eq!(map.get(&1).unwrap().as_slice(), ["b", "a"]);
    ///
    /// // Values that aren't there are ignored.
    /// assert_eq!(map.remove(&1, &"z"), Ok(None));
    /// # }
    /// ```
    pub fn remove<Q>(
        &mut self,
        key: &Q,
        value: &V,
    ) -> Result<Option<V>, KeyNotFound>
    where
        Q: ?Sized + Hash + Equivalent<K>,
        V: PartialEq,
    {
        let bucket = self.table.find_mut(key).ok_or(KeyNotFound)?;
        let removed = remove_first(bucket, value);
        if removed.is_some() {
            self.len -= 1;
        }
        Ok(removed)
    }

    /// Removes `key` and all of its values from the map.
    ///
    /// Returns an error if `key` is not present.
    pub fn clear<Q>(&mut self, key: &Q) -> Result<(), KeyNotFound>
    where
        Q: ?Sized + Hash + Equivalent<K>,
    {
        let (_, bucket) = self.table.remove(key).ok_or(KeyNotFound)?;
        self.len -= bucket.len();
        Ok(())
    }
}

impl<K: fmt::Debug, V: fmt::Debug, S, A: Allocator> fmt::Debug
    for MultiMap<K, V, S, A>
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(
                self.table
                    .iter()
                    .map(|(key, bucket)| (key, bucket.as_slice())),
            )
            .finish()
    }
}

impl<K, V, S, A> PartialEq for MultiMap<K, V, S, A>
where
    K: Eq + Hash,
    V: PartialEq,
    S: BuildHasher,
    A: Allocator,
{
    fn eq(&self, other: &Self) -> bool {
        // Two maps are equal if they have the same keys, and each key has the
        // same sequence of values. The order of keys doesn't matter, but the
        // order of values under a key does.
        if self.len != other.len || self.table.len() != other.table.len() {
            return false;
        }

        self.table.iter().all(|(key, bucket)| {
            other
                .table
                .find(key)
                .is_some_and(|other| bucket.as_slice() == other.as_slice())
        })
    }
}

// The Eq bound on V ensures that the MultiMap forms an equivalence class.
impl<K, V, S, A> Eq for MultiMap<K, V, S, A>
where
    K: Eq + Hash,
    V: Eq,
    S: BuildHasher,
    A: Allocator,
{
}

impl<'a, K, V, S, A: Allocator> IntoIterator for &'a MultiMap<K, V, S, A> {
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V, A>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        Iter::new(&self.table, self.len)
    }
}

/// Consumes the map, yielding owned `(key, value)` pairs.
///
/// The key is cloned once for each value stored under it. Keys without values
/// are dropped.
impl<K: Clone, V, S, A: Allocator> IntoIterator for MultiMap<K, V, S, A> {
    type Item = (K, V);
    type IntoIter = IntoIter<K, V, A>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        IntoIter::new(self.table, self.len)
    }
}

/// Adds every pair in order, as if by [`MultiMap::add`].
///
/// # Panics
///
/// Panics if memory for a value cannot be reserved.
impl<K, V, S, A> Extend<(K, V)> for MultiMap<K, V, S, A>
where
    K: Eq + Hash,
    S: BuildHasher,
    A: Allocator + Clone,
{
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            if let Err(error) = self.try_add(key, value) {
                panic!("{error}");
            }
        }
    }
}

/// Collects pairs into a map, as if by [`MultiMap::add`].
///
/// # Panics
///
/// Panics if memory for a value cannot be reserved.
impl<K, V, S, A> FromIterator<(K, V)> for MultiMap<K, V, S, A>
where
    K: Eq + Hash,
    S: BuildHasher + Default,
    A: Allocator + Clone + Default,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = MultiMap::with_hasher_in(S::default(), A::default());
        map.extend(iter);
        map
    }
}
