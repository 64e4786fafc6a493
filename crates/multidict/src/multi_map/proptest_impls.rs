// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Proptest support.

use crate::{support::alloc::Allocator, MultiMap};
use alloc::vec::Vec;
use core::hash::{BuildHasher, Hash};
use proptest::{
    arbitrary::{any_with, Arbitrary},
    collection::{vec, SizeRange, VecStrategy},
    strategy::{Map, Strategy},
};

/// Generates maps by adding a random list of `(key, value)` pairs.
///
/// The size range bounds the number of pairs, which is the map's
/// [`len`](MultiMap::len). Every generated key has at least one value.
impl<K, V, S, A> Arbitrary for MultiMap<K, V, S, A>
where
    K: Arbitrary + Eq + Hash,
    V: Arbitrary,
    S: BuildHasher + Default,
    A: Allocator + Clone + Default,
{
    type Parameters = (SizeRange, K::Parameters, V::Parameters);
    type Strategy =
        Map<VecStrategy<(K::Strategy, V::Strategy)>, fn(Vec<(K, V)>) -> Self>;

    fn arbitrary_with(
        (size, key_params, value_params): Self::Parameters,
    ) -> Self::Strategy {
        vec((any_with::<K>(key_params), any_with::<V>(value_params)), size)
            .prop_map(from_pairs::<K, V, S, A> as fn(Vec<(K, V)>) -> Self)
    }
}

fn from_pairs<K, V, S, A>(pairs: Vec<(K, V)>) -> MultiMap<K, V, S, A>
where
    K: Eq + Hash,
    S: BuildHasher + Default,
    A: Allocator + Clone + Default,
{
    pairs.into_iter().collect()
}
