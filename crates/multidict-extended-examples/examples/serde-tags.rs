//! An example of reading a `MultiMap` out of a larger serialized document.
//!
//! A `MultiMap` serializes as a map from each key to the list of its values,
//! so it can be embedded in any serde-derived type.
//!
//! Requires the `serde` feature in multidict.

use multidict::MultiMap;
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize)]
struct Inventory {
    name: String,
    /// Each tag maps to the items carrying it. An item can carry the same tag
    /// more than once.
    tags: MultiMap<String, String>,
}

static INPUT: &str = r#"{
    "name": "pantry",
    "tags": {
        "fruit": ["apple", "pear", "apple"],
        "vegetable": ["leek"],
        "expired": []
    }
}"#;

fn main() {
    let mut inventory: Inventory =
        serde_json::from_str(INPUT).expect("input is valid");
    println!("{} has {} items", inventory.name, inventory.tags.len());

    // Tags without items were kept.
    assert!(inventory.tags.contains_key("expired"));

    // Take one apple out.
    inventory.tags.remove("fruit", &"apple".to_owned()).unwrap();
    inventory.tags.add("expired".to_owned(), "apple".to_owned());

    for (tag, item) in &inventory.tags {
        println!("{tag}: {item}");
    }

    let serialized =
        serde_json::to_string_pretty(&inventory).expect("serializes");
    println!("{serialized}");
}
