// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The ordered list of values stored under a single key.

use super::alloc::{AllocWrapper, Allocator};

/// Values for one key, in insertion order, allocated in the map's allocator.
pub(crate) type Bucket<V, A> = allocator_api2::vec::Vec<V, AllocWrapper<A>>;

/// Appends `value` to the end of `bucket` without aborting on allocation
/// failure.
///
/// On failure the bucket is untouched and `value` is handed back.
#[inline]
pub(crate) fn try_push<V, A: Allocator>(
    bucket: &mut Bucket<V, A>,
    value: V,
) -> Result<(), V> {
    if bucket.try_reserve(1).is_err() {
        return Err(value);
    }
    // Cannot reallocate: there is room for at least one more value.
    bucket.push(value);
    Ok(())
}

/// Removes the first value equal to `value`, shifting later values down to
/// keep their order.
#[inline]
pub(crate) fn remove_first<V: PartialEq, A: Allocator>(
    bucket: &mut Bucket<V, A>,
    value: &V,
) -> Option<V> {
    let index = bucket.iter().position(|v| v == value)?;
    Some(bucket.remove(index))
}
