// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use multidict::errors::KeyNotFound;

/// A naive, inefficient multi-map that acts as an oracle for property-based
/// tests.
///
/// Keys are stored in a vector without any index, and all lookups are linear
/// scans.
#[derive(Clone, Debug)]
pub struct NaiveMultiMap<K, V> {
    entries: Vec<(K, Vec<V>)>,
}

impl<K: Eq, V: PartialEq> NaiveMultiMap<K, V> {
    pub fn new() -> Self {
        Self { entries: Vec::new() }
    }

    pub fn add(&mut self, key: K, value: V) -> bool {
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some((_, values)) => values.push(value),
            None => self.entries.push((key, vec![value])),
        }
        true
    }

    pub fn get(&self, key: &K) -> Result<&[V], KeyNotFound> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, values)| values.as_slice())
            .ok_or(KeyNotFound)
    }

    pub fn get_or_default(&self, key: &K) -> &[V] {
        self.get(key).unwrap_or(&[])
    }

    pub fn remove(
        &mut self,
        key: &K,
        value: &V,
    ) -> Result<Option<V>, KeyNotFound> {
        let (_, values) = self
            .entries
            .iter_mut()
            .find(|(k, _)| k == key)
            .ok_or(KeyNotFound)?;
        // The bucket is left in place even if this empties it.
        Ok(values
            .iter()
            .position(|v| v == value)
            .map(|index| values.remove(index)))
    }

    pub fn clear(&mut self, key: &K) -> Result<(), KeyNotFound> {
        let index = self
            .entries
            .iter()
            .position(|(k, _)| k == key)
            .ok_or(KeyNotFound)?;
        self.entries.remove(index);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.entries.iter().map(|(_, values)| values.len()).sum()
    }

    pub fn key_count(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&K, &V)> + '_ {
        self.entries
            .iter()
            .flat_map(|(key, values)| values.iter().map(move |v| (key, v)))
    }

    pub fn keys(&self) -> impl Iterator<Item = &K> + '_ {
        self.entries.iter().map(|(key, _)| key)
    }
}

impl<K: Eq, V: PartialEq> Default for NaiveMultiMap<K, V> {
    fn default() -> Self {
        Self::new()
    }
}
