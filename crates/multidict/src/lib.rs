// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! A hash map that associates any number of values with each key.
//!
//! # Motivation
//!
//! The usual way to attach several values to a key is a map of vectors:
//!
//! ```
//! use std::collections::HashMap;
//!
//! let mut map: HashMap<u32, Vec<&str>> = HashMap::new();
//! map.entry(1).or_default().push("value1");
//! map.entry(1).or_default().push("value2");
//! ```
//!
//! That works, but every caller has to re-implement the same bookkeeping, and
//! the vectors are fully exposed: anyone holding a `&mut` can clear a bucket
//! and leave an empty vector behind, so "the key has no values" and "the key
//! is not in the map" become hard to tell apart.
//!
//! [`MultiMap`] owns that bookkeeping. Values under a key are kept in the
//! order they were added, duplicates included. Lookups hand out read-only
//! views, and each mutation has one well-defined effect on key membership:
//!
//! * [`MultiMap::add`] creates the key on first use.
//! * [`MultiMap::remove`] removes a single value. The key stays present even
//!   if that empties it.
//! * [`MultiMap::clear`] removes the key along with all of its values.
//!
//! # Examples
//!
//! ```
//! # #[cfg(feature = "default-hasher")] {
//! use multidict::{MultiMap, errors::KeyNotFound};
//!
//! let mut map = MultiMap::new();
//! assert!(map.add(1, "value1"));
//! assert!(map.add(1, "value2"));
//!
//! let values: Vec<_> = map.get(&1).unwrap().collect();
//! assert_eq!(values, [&"value1", &"value2"]);
//!
//! map.remove(&1, &"value1").unwrap();
//! assert_eq!(map.get(&1).unwrap().as_slice(), ["value2"]);
//!
//! map.clear(&1).unwrap();
//! assert_eq!(map.get(&1).unwrap_err(), KeyNotFound);
//! assert_eq!(map.get_or_default(&1).count(), 0);
//! # }
//! ```
//!
//! # Optional features
//!
//! * `allocator-api2` (default): custom allocators through the
//!   [`allocator-api2`](allocator_api2) crate.
//! * `default-hasher` (default): use [`foldhash`] as the default hasher, and
//!   enable [`MultiMap::new`].
//! * `std` (default): let the default hasher seed itself from the standard
//!   library.
//! * `serde`: serialize maps as a map from key to the list of its values.
//! * `daft`: diff maps with [`daft`].
//! * `schemars08`: JSON schema generation with schemars 0.8.
//! * `proptest`: an `Arbitrary` implementation for property-based tests.

#![no_std]
#![warn(missing_docs)]

extern crate alloc;

pub mod errors;
#[doc(hidden)]
pub mod internal;
pub mod multi_map;
mod support;

pub use multi_map::MultiMap;
pub use support::hash_builder::DefaultHashBuilder;
