// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use std::panic::AssertUnwindSafe;

/// Runs `f`, returning `None` if it panicked.
pub fn catch_panic<T>(f: impl FnOnce() -> T) -> Option<T> {
    match std::panic::catch_unwind(AssertUnwindSafe(f)) {
        Ok(value) => Some(value),
        Err(err) => {
            if let Some(err) = err.downcast_ref::<&str>() {
                eprintln!("caught panic: {err}");
            } else if let Some(err) = err.downcast_ref::<String>() {
                eprintln!("caught panic: {err}");
            } else {
                eprintln!("caught unknown panic");
            }
            None
        }
    }
}
