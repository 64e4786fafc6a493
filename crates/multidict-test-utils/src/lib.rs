// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Test support for multidict: an oracle model, chaos types and assertion
//! helpers.

pub mod eq_props;
pub mod naive_map;
#[cfg(feature = "serde")]
pub mod serde_utils;
pub mod test_types;
pub mod unwind;

/// Re-exports the `bumpalo` crate if the `allocator-api2` feature is enabled --
/// used by tests that run maps inside an arena.
#[cfg(feature = "allocator-api2")]
pub use bumpalo;

/// Re-exports the `serde_json` crate if the `serde` feature is enabled -- used
/// by doctests.
#[cfg(feature = "serde")]
pub use serde_json;
