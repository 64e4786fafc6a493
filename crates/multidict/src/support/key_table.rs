// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! A hash table from each key to its bucket, along with the hash state.

use super::{
    alloc::{AllocWrapper, Allocator},
    bucket::Bucket,
};
use core::hash::{BuildHasher, Hash};
use derive_where::derive_where;
use equivalent::Equivalent;
use hashbrown::{
    hash_table::{Entry, Iter},
    HashTable, TryReserveError,
};

/// A key together with its bucket.
pub(crate) type Slot<K, V, A> = (K, Bucket<V, A>);

#[derive_where(Clone; K: Clone, V: Clone, S: Clone, A: Clone)]
#[derive_where(Default; S: Default, A: Default)]
pub(crate) struct KeyTable<K, V, S, A: Allocator> {
    pub(crate) state: S,
    pub(crate) items: HashTable<Slot<K, V, A>, AllocWrapper<A>>,
}

impl<K, V, S, A: Allocator> KeyTable<K, V, S, A> {
    pub(crate) fn with_capacity_and_hasher_in(
        capacity: usize,
        state: S,
        alloc: A,
    ) -> Self {
        Self {
            state,
            items: HashTable::with_capacity_in(capacity, AllocWrapper(alloc)),
        }
    }

    #[inline]
    pub(crate) fn allocator(&self) -> &A {
        &self.items.allocator().0
    }

    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub(crate) fn iter(&self) -> Iter<'_, Slot<K, V, A>> {
        self.items.iter()
    }
}

impl<K: Hash + Eq, V, S: BuildHasher, A: Allocator> KeyTable<K, V, S, A> {
    pub(crate) fn find<Q>(&self, key: &Q) -> Option<&Bucket<V, A>>
    where
        Q: ?Sized + Hash + Equivalent<K>,
    {
        let hash = self.state.hash_one(key);
        self.items.find(hash, |(k, _)| key.equivalent(k)).map(|(_, b)| b)
    }

    pub(crate) fn find_mut<Q>(
        &mut self,
        key: &Q,
    ) -> Option<&mut Bucket<V, A>>
    where
        Q: ?Sized + Hash + Equivalent<K>,
    {
        let hash = self.state.hash_one(key);
        self.items
            .find_mut(hash, |(k, _)| key.equivalent(k))
            .map(|(_, b)| b)
    }

    pub(crate) fn remove<Q>(&mut self, key: &Q) -> Option<Slot<K, V, A>>
    where
        Q: ?Sized + Hash + Equivalent<K>,
    {
        let hash = self.state.hash_one(key);
        let entry =
            self.items.find_entry(hash, |(k, _)| key.equivalent(k)).ok()?;
        Some(entry.remove().0)
    }

    /// Ensures that one more key can be inserted without reallocating.
    pub(crate) fn try_reserve_one(&mut self) -> Result<(), TryReserveError> {
        let state = &self.state;
        self.items.try_reserve(1, |(k, _)| state.hash_one(k))
    }

    /// Looks up `key` once, returning the slot it occupies or the place it
    /// would be inserted.
    ///
    /// Inserting into a vacant entry only avoids reallocation if
    /// [`try_reserve_one`](Self::try_reserve_one) was called first.
    pub(crate) fn entry(
        &mut self,
        key: &K,
    ) -> Entry<'_, Slot<K, V, A>, AllocWrapper<A>> {
        let state = &self.state;
        let hash = state.hash_one(key);
        self.items.entry(hash, |(k, _)| k == key, |(k, _)| state.hash_one(k))
    }
}
