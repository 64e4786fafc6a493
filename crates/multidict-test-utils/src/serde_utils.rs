// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Serde-related test utilities.

use crate::test_types::{map_from_ops, TestMap, TestOp};
use std::collections::BTreeMap;

pub fn assert_serialize_roundtrip(ops: Vec<TestOp>) {
    let map = map_from_ops(&ops);

    let serialized = serde_json::to_string(&map).unwrap();
    let deserialized: TestMap = serde_json::from_str(&serialized).unwrap();
    deserialized.validate().expect("deserialized map is valid");

    // Keys without values must survive the round trip too, so compare whole
    // maps rather than just the pairs.
    assert_eq!(map, deserialized, "maps match");
    assert_eq!(map.key_count(), deserialized.key_count(), "key counts match");

    // The serialized form is an ordinary map from keys to lists, so it can
    // also be read back as one.
    let as_btree_map: BTreeMap<u8, Vec<String>> =
        serde_json::from_str(&serialized).unwrap();
    assert_eq!(as_btree_map.len(), map.key_count(), "key counts match");
    for (key, values) in &as_btree_map {
        assert_eq!(
            map.get(key).unwrap().as_slice(),
            values.as_slice(),
            "values for key {key} match"
        );
    }
}
