// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! `Diffable` implementation.

use crate::{support::alloc::Allocator, MultiMap};
use core::{
    fmt,
    hash::{BuildHasher, Hash},
};
use daft::{Diffable, Leaf};
use derive_where::derive_where;
use equivalent::Equivalent;
use hashbrown::HashMap;

impl<K, V, S, A> Diffable for MultiMap<K, V, S, A>
where
    K: Eq + Hash,
    S: Clone + BuildHasher,
    A: Allocator,
{
    type Diff<'daft>
        = Diff<'daft, K, V, S>
    where
        Self: 'daft;

    fn diff<'daft>(&'daft self, other: &'daft Self) -> Self::Diff<'daft> {
        let mut diff = Diff::with_hasher(self.hasher().clone());
        for (key, values) in self.table.iter() {
            if let Some(other_values) = other.table.find(key) {
                diff.common.insert(
                    key,
                    Leaf {
                        before: values.as_slice(),
                        after: other_values.as_slice(),
                    },
                );
            } else {
                diff.removed.insert(key, values.as_slice());
            }
        }
        for (key, values) in other.table.iter() {
            if self.table.find(key).is_none() {
                diff.added.insert(key, values.as_slice());
            }
        }
        diff
    }
}

/// A diff of two [`MultiMap`]s.
///
/// Keys are matched by equality. For keys present on both sides, the whole
/// list of values is compared: a key whose values were reordered counts as
/// modified.
#[derive_where(Debug; K: fmt::Debug, V: fmt::Debug)]
pub struct Diff<'daft, K, V, S> {
    /// Keys present in both maps, with their values before and after.
    pub common: HashMap<&'daft K, Leaf<&'daft [V]>, S>,

    /// Keys only present in the second map, with their values.
    pub added: HashMap<&'daft K, &'daft [V], S>,

    /// Keys only present in the first map, with their values.
    pub removed: HashMap<&'daft K, &'daft [V], S>,
}

impl<'daft, K, V, S: Clone> Diff<'daft, K, V, S> {
    /// Creates an empty diff whose tables use the given hasher.
    pub fn with_hasher(hasher: S) -> Self {
        Self {
            common: HashMap::with_hasher(hasher.clone()),
            added: HashMap::with_hasher(hasher.clone()),
            removed: HashMap::with_hasher(hasher),
        }
    }
}

impl<'daft, K: Eq + Hash, V: PartialEq, S: BuildHasher> Diff<'daft, K, V, S> {
    /// Returns an iterator over keys whose values are unchanged.
    pub fn unchanged(
        &self,
    ) -> impl Iterator<Item = (&'daft K, &'daft [V])> + '_ {
        self.common.iter().filter_map(|(key, leaf)| {
            (leaf.before == leaf.after).then_some((*key, leaf.before))
        })
    }

    /// Returns an iterator over keys whose values were modified.
    pub fn modified(
        &self,
    ) -> impl Iterator<Item = (&'daft K, Leaf<&'daft [V]>)> + '_ {
        self.common.iter().filter_map(|(key, leaf)| {
            (leaf.before != leaf.after).then(|| {
                (*key, Leaf { before: leaf.before, after: leaf.after })
            })
        })
    }

    /// Returns true if `key` is present in both maps with the same values.
    pub fn is_unchanged<Q>(&self, key: &Q) -> bool
    where
        Q: ?Sized + Hash + Equivalent<&'daft K>,
    {
        self.common.get(key).is_some_and(|leaf| leaf.before == leaf.after)
    }

    /// Returns true if `key` is present in both maps with different values.
    pub fn is_modified<Q>(&self, key: &Q) -> bool
    where
        Q: ?Sized + Hash + Equivalent<&'daft K>,
    {
        self.common.get(key).is_some_and(|leaf| leaf.before != leaf.after)
    }
}
