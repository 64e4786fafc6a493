// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error types for this crate.

use core::fmt;

/// The requested key is not present in the map.
///
/// Returned by [`MultiMap::get`], [`MultiMap::remove`] and
/// [`MultiMap::clear`]. A key whose values have all been removed one by one is
/// still present; only [`MultiMap::clear`] makes a key absent.
///
/// [`MultiMap::get`]: crate::MultiMap::get
/// [`MultiMap::remove`]: crate::MultiMap::remove
/// [`MultiMap::clear`]: crate::MultiMap::clear
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub struct KeyNotFound;

impl fmt::Display for KeyNotFound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("key not found in map")
    }
}

impl core::error::Error for KeyNotFound {}

/// Space for a new value could not be reserved.
///
/// Returned by [`MultiMap::try_add`]. The map is unchanged, and the key and
/// value that were passed in are handed back.
///
/// [`MultiMap::try_add`]: crate::MultiMap::try_add
#[derive(Debug)]
pub struct AllocationFailure<K, V> {
    key: K,
    value: V,
}

impl<K, V> AllocationFailure<K, V> {
    pub(crate) fn new(key: K, value: V) -> Self {
        AllocationFailure { key, value }
    }

    /// Returns the key that was being added to.
    #[inline]
    pub fn key(&self) -> &K {
        &self.key
    }

    /// Returns the value that could not be added.
    #[inline]
    pub fn value(&self) -> &V {
        &self.value
    }

    /// Converts self into the key and value.
    pub fn into_parts(self) -> (K, V) {
        (self.key, self.value)
    }
}

impl<K, V> fmt::Display for AllocationFailure<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("failed to reserve space for a new value in map")
    }
}

impl<K: fmt::Debug, V: fmt::Debug> core::error::Error
    for AllocationFailure<K, V>
{
}
