// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Utilities for schemars support.

use alloc::{
    boxed::Box,
    string::{String, ToString},
    vec::Vec,
};
use schemars::{
    gen::SchemaGenerator,
    schema::{InstanceType, Metadata, ObjectValidation, Schema, SchemaObject},
    JsonSchema,
};

/// The crate name, used in the x-rust-type extension.
pub(crate) static MULTIDICT_CRATE_NAME: &str = "multidict";

/// The crate version, used in the x-rust-type extension.
///
/// We use * here because we assume the map's shape is going to stay the same
/// across breaking changes.
pub(crate) static MULTIDICT_CRATE_VERSION: &str = "*";

/// Creates the `extension` table for a given path and value type.
fn make_extension_table<V: JsonSchema>(
    path: &'static str,
    generator: &mut SchemaGenerator,
) -> schemars::Map<String, serde_json::Value> {
    [(
        "x-rust-type".to_string(),
        serde_json::json!({
            "crate": MULTIDICT_CRATE_NAME,
            "version": MULTIDICT_CRATE_VERSION,
            "path": path,
            "parameters": [generator.subschema_for::<V>()]
        }),
    )]
    .into_iter()
    .collect()
}

/// Creates the schema for a map that serializes as an object from key to a
/// list of `V`.
pub(crate) fn create_multi_map_schema<V: JsonSchema>(
    title: &str,
    rust_type_path: &'static str,
    generator: &mut SchemaGenerator,
) -> Schema {
    Schema::Object(SchemaObject {
        instance_type: Some(InstanceType::Object.into()),
        object: Some(Box::new(ObjectValidation {
            additional_properties: Some(Box::new(
                generator.subschema_for::<Vec<V>>(),
            )),
            ..Default::default()
        })),
        metadata: Some(Box::new(Metadata {
            title: Some(title.to_string()),
            ..Default::default()
        })),
        extensions: make_extension_table::<V>(rust_type_path, generator),
        ..Default::default()
    })
}
