//! Shared setup for multidict benchmarks.

use multidict::{DefaultHashBuilder, MultiMap};
use std::collections::HashMap;

/// Builds a `MultiMap` with `size` values spread over `size / per_key` keys.
pub fn multi_map(size: u32, per_key: u32) -> MultiMap<u32, String> {
    let mut map = MultiMap::new();
    for i in 0..size {
        map.add(i / per_key, format!("data{i}"));
    }
    map
}

/// Builds the equivalent hand-rolled map of vectors, for comparison.
pub fn vec_map(
    size: u32,
    per_key: u32,
) -> HashMap<u32, Vec<String>, DefaultHashBuilder> {
    let mut map = HashMap::with_hasher(DefaultHashBuilder::default());
    for i in 0..size {
        map.entry(i / per_key)
            .or_insert_with(Vec::new)
            .push(format!("data{i}"));
    }
    map
}
