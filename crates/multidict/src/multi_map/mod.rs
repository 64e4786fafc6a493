// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! A hash map that stores any number of values under each key.
//!
//! See [`MultiMap`] for details.

#[cfg(feature = "daft")]
mod daft_impls;
pub(crate) mod imp;
mod iter;
#[cfg(feature = "proptest")]
mod proptest_impls;
#[cfg(feature = "schemars08")]
mod schemars_impls;
#[cfg(feature = "serde")]
mod serde_impls;

#[cfg(feature = "daft")]
pub use daft_impls::Diff;
pub use imp::MultiMap;
pub use iter::{IntoIter, Iter, Keys, Values};
