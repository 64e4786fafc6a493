//! An example demonstrating use of the [`bumpalo`] crate to allocate against.
//!
//! Both the key table and the per-key value lists of a `MultiMap` are
//! allocated in the arena.
//!
//! Requires the `allocator-api2` feature in multidict.

use bumpalo::Bump;
use multidict::MultiMap;
use std::path::PathBuf;

fn main() {
    // Create a new bumpalo arena.
    let bump = Bump::new();

    // Create a new MultiMap using the bumpalo allocator. Keys are file
    // extensions, values are the files that have them.
    let mut map = MultiMap::new_in(&bump);

    for path in ["src/lib.rs", "README.md", "src/main.rs", "CHANGELOG.md"] {
        let path = PathBuf::from(path);
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .unwrap_or_default()
            .to_owned();
        if !map.add(extension, path) {
            eprintln!("arena is out of space");
            return;
        }
    }

    // Values come back in the order they were added.
    let rust_files: Vec<_> = map.get("rs").unwrap().collect();
    println!("rust files: {rust_files:?}");
    assert_eq!(rust_files.len(), 2);

    // Removing one file keeps the extension around with the remaining ones.
    map.remove("md", &PathBuf::from("README.md")).unwrap();
    println!("markdown files: {:?}", map.get("md").unwrap().as_slice());

    println!("map: {map:?}");
    println!("arena bytes allocated: {}", bump.allocated_bytes());
}
