// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Schemars implementations for MultiMap.

use crate::{
    support::{alloc::Allocator, schemars_utils::create_multi_map_schema},
    MultiMap,
};
use alloc::string::String;
use schemars::{gen::SchemaGenerator, schema::Schema, JsonSchema};

/// JSON object keys are always strings, so the schema only describes the
/// values: each property is a list of `V`.
impl<K, V, S, A> JsonSchema for MultiMap<K, V, S, A>
where
    V: JsonSchema,
    A: Allocator,
{
    fn schema_name() -> String {
        alloc::format!("MultiMap_of_{}", V::schema_name())
    }

    fn json_schema(generator: &mut SchemaGenerator) -> Schema {
        create_multi_map_schema::<V>(
            "MultiMap",
            "multidict::MultiMap",
            generator,
        )
    }

    fn is_referenceable() -> bool {
        false
    }
}
