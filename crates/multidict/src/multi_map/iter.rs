// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::support::{
    alloc::{AllocWrapper, Allocator},
    key_table::{KeyTable, Slot},
};
use core::{fmt, iter::FusedIterator, slice};
use derive_where::derive_where;
use hashbrown::hash_table;

/// An iterator over the values stored under one key of a [`MultiMap`], in
/// the order they were added.
///
/// Created by [`MultiMap::get`] and [`MultiMap::get_or_default`]. Cloning the
/// iterator restarts iteration from its current position.
///
/// [`MultiMap`]: crate::MultiMap
/// [`MultiMap::get`]: crate::MultiMap::get
/// [`MultiMap::get_or_default`]: crate::MultiMap::get_or_default
#[derive_where(Clone, Default)]
#[derive(Debug)]
pub struct Values<'a, V> {
    inner: slice::Iter<'a, V>,
}

impl<'a, V> Values<'a, V> {
    pub(crate) fn new(values: &'a [V]) -> Self {
        Self { inner: values.iter() }
    }

    /// Returns the values that have not been yielded yet, as a slice.
    #[inline]
    pub fn as_slice(&self) -> &'a [V] {
        self.inner.as_slice()
    }
}

impl<'a, V> Iterator for Values<'a, V> {
    type Item = &'a V;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<V> DoubleEndedIterator for Values<'_, V> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back()
    }
}

impl<V> ExactSizeIterator for Values<'_, V> {
    #[inline]
    fn len(&self) -> usize {
        self.inner.len()
    }
}

// slice::Iter is a FusedIterator, so Values is as well.
impl<V> FusedIterator for Values<'_, V> {}

/// An iterator over the `(key, value)` pairs of a [`MultiMap`].
///
/// Created by [`MultiMap::iter`]. Each key is yielded once per value stored
/// under it, and the values for a key come out in the order they were added.
///
/// Similar to [`HashMap`], the order of keys is arbitrary.
///
/// [`MultiMap`]: crate::MultiMap
/// [`MultiMap::iter`]: crate::MultiMap::iter
/// [`HashMap`]: std::collections::HashMap
#[derive_where(Clone)]
pub struct Iter<'a, K, V, A: Allocator> {
    slots: hash_table::Iter<'a, Slot<K, V, A>>,
    current: Option<(&'a K, slice::Iter<'a, V>)>,
    // Values not yet yielded, across all buckets.
    remaining: usize,
}

impl<'a, K, V, A: Allocator> Iter<'a, K, V, A> {
    pub(super) fn new<S>(table: &'a KeyTable<K, V, S, A>, len: usize) -> Self {
        Self { slots: table.iter(), current: None, remaining: len }
    }
}

impl<'a, K, V, A: Allocator> Iterator for Iter<'a, K, V, A> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some((key, values)) = &mut self.current {
                if let Some(value) = values.next() {
                    self.remaining -= 1;
                    return Some((*key, value));
                }
            }
            let (key, bucket) = self.slots.next()?;
            self.current = Some((key, bucket.iter()));
        }
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K, V, A: Allocator> ExactSizeIterator for Iter<'_, K, V, A> {
    #[inline]
    fn len(&self) -> usize {
        self.remaining
    }
}

// Once the bucket iterator is exhausted, `next` keeps returning None.
impl<K, V, A: Allocator> FusedIterator for Iter<'_, K, V, A> {}

impl<K: fmt::Debug, V: fmt::Debug, A: Allocator> fmt::Debug
    for Iter<'_, K, V, A>
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.clone()).finish()
    }
}

/// An iterator over the keys of a [`MultiMap`].
///
/// Created by [`MultiMap::keys`]. Keys without values are included.
///
/// [`MultiMap`]: crate::MultiMap
/// [`MultiMap::keys`]: crate::MultiMap::keys
#[derive_where(Clone)]
pub struct Keys<'a, K, V, A: Allocator> {
    inner: hash_table::Iter<'a, Slot<K, V, A>>,
}

impl<'a, K, V, A: Allocator> Keys<'a, K, V, A> {
    pub(super) fn new<S>(table: &'a KeyTable<K, V, S, A>) -> Self {
        Self { inner: table.iter() }
    }
}

impl<'a, K, V, A: Allocator> Iterator for Keys<'a, K, V, A> {
    type Item = &'a K;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(key, _)| key)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V, A: Allocator> ExactSizeIterator for Keys<'_, K, V, A> {
    #[inline]
    fn len(&self) -> usize {
        self.inner.len()
    }
}

// hash_table::Iter is a FusedIterator, so Keys is as well.
impl<K, V, A: Allocator> FusedIterator for Keys<'_, K, V, A> {}

impl<K: fmt::Debug, V, A: Allocator> fmt::Debug for Keys<'_, K, V, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.clone()).finish()
    }
}

/// An owning iterator over the `(key, value)` pairs of a [`MultiMap`].
///
/// Created by [`MultiMap::into_iter`]. The key is cloned once for each value
/// stored under it.
///
/// [`MultiMap`]: crate::MultiMap
/// [`MultiMap::into_iter`]: crate::MultiMap::into_iter
pub struct IntoIter<K, V, A: Allocator> {
    slots: hash_table::IntoIter<Slot<K, V, A>, AllocWrapper<A>>,
    current: Option<(K, allocator_api2::vec::IntoIter<V, AllocWrapper<A>>)>,
    remaining: usize,
}

impl<K, V, A: Allocator> IntoIter<K, V, A> {
    pub(super) fn new<S>(table: KeyTable<K, V, S, A>, len: usize) -> Self {
        Self { slots: table.items.into_iter(), current: None, remaining: len }
    }
}

impl<K: Clone, V, A: Allocator> Iterator for IntoIter<K, V, A> {
    type Item = (K, V);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some((key, values)) = &mut self.current {
                if let Some(value) = values.next() {
                    self.remaining -= 1;
                    return Some((key.clone(), value));
                }
            }
            let (key, bucket) = self.slots.next()?;
            self.current = Some((key, bucket.into_iter()));
        }
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K: Clone, V, A: Allocator> ExactSizeIterator for IntoIter<K, V, A> {
    #[inline]
    fn len(&self) -> usize {
        self.remaining
    }
}

impl<K: Clone, V, A: Allocator> FusedIterator for IntoIter<K, V, A> {}

impl<K, V, A: Allocator> fmt::Debug for IntoIter<K, V, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IntoIter")
            .field("remaining", &self.remaining)
            .finish_non_exhaustive()
    }
}
