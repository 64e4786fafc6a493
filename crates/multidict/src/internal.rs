// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use alloc::string::String;
use core::fmt;

pub use crate::support::alloc::Global;

/// An invariant of the map does not hold.
#[derive(Debug)]
pub enum ValidationError {
    /// The cached value count disagrees with the buckets.
    Len {
        /// The count stored in the map.
        cached: usize,
        /// The sum of the bucket lengths.
        actual: usize,
    },
    /// Any other inconsistency.
    General(String),
}

impl ValidationError {
    pub(crate) fn general(msg: impl Into<String>) -> Self {
        ValidationError::General(msg.into())
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Len { cached, actual } => write!(
                f,
                "cached value count is {cached}, \
                 but buckets hold {actual} values"
            ),
            Self::General(msg) => msg.fmt(f),
        }
    }
}

impl core::error::Error for ValidationError {}
