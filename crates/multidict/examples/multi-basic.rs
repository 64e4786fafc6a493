// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! An example demonstrating basic `MultiMap` use: grouping values under a
//! key, and the difference between removing values and clearing keys.

use multidict::{errors::KeyNotFound, MultiMap};

/// The values we'll store: a reading taken at some site.
#[derive(Clone, Debug, PartialEq)]
struct Reading {
    sensor: &'static str,
    celsius: f64,
}

fn main() {
    // Readings are grouped by site name.
    let mut map: MultiMap<String, Reading> = MultiMap::new();

    let readings = [
        ("north", Reading { sensor: "a", celsius: 12.5 }),
        ("south", Reading { sensor: "b", celsius: 18.0 }),
        ("north", Reading { sensor: "c", celsius: 11.75 }),
        ("north", Reading { sensor: "a", celsius: 12.5 }),
    ];
    for (site, reading) in readings {
        assert!(map.add(site.to_owned(), reading));
    }

    // Duplicate readings are kept, in the order they were added.
    let north: Vec<_> = map.get("north").unwrap().collect();
    println!("north: {north:?}");
    assert_eq!(north.len(), 3);

    // Remove drops the first matching reading only.
    let stale = Reading { sensor: "a", celsius: 12.5 };
    assert_eq!(map.remove("north", &stale), Ok(Some(stale.clone())));
    assert_eq!(map.get("north").unwrap().len(), 2);

    // Removing the last reading at a site leaves the site in place.
    map.remove("south", &Reading { sensor: "b", celsius: 18.0 }).unwrap();
    assert!(map.contains_key("south"));
    assert_eq!(map.get_or_default("south").len(), 0);

    // Clearing removes the site itself.
    map.clear("south").unwrap();
    assert_eq!(map.get("south").unwrap_err(), KeyNotFound);
    assert_eq!(map.clear("south"), Err(KeyNotFound));

    // Missing sites read as empty through get_or_default.
    assert_eq!(map.get_or_default("east").count(), 0);

    // Iterate over all (site, reading) pairs.
    for (site, reading) in &map {
        println!("{site}: {} at {}", reading.sensor, reading.celsius);
    }
}
