use crate::foundation::error::{MapGenError, MapGenResult};
use crate::terrain::{GenerationResult, Geometry};
use serde_json::{Map, Value, json};

/// Schema-less map metadata, in document key order.
pub type Manifest = Map<String, Value>;

pub const MAP_KEY: &str = "map";
pub const MINI_MAP_KEY: &str = "mini_map";

/// Decode `info.json` bytes. The top-level value must be an object.
pub fn parse_manifest(bytes: &[u8], name: &str) -> MapGenResult<Manifest> {
    serde_json::from_slice(bytes).map_err(|e| MapGenError::parse(name, e))
}

fn geometry_value(g: Geometry) -> Value {
    json!({
        "width": g.width,
        "height": g.height,
        "num_land_tiles": g.num_land_tiles,
    })
}

/// Overwrite `map` and `mini_map` with the generated geometry; every other key passes through.
pub fn merge_geometry(mut manifest: Manifest, result: &GenerationResult) -> Manifest {
    manifest.insert(MAP_KEY.to_string(), geometry_value(result.map));
    manifest.insert(MINI_MAP_KEY.to_string(), geometry_value(result.mini_map));
    manifest
}

/// Pretty JSON with 2-space indentation.
pub fn manifest_to_pretty_json(manifest: &Manifest, name: &str) -> MapGenResult<Vec<u8>> {
    serde_json::to_vec_pretty(manifest).map_err(|e| MapGenError::serialization(name, e))
}

#[cfg(test)]
#[path = "../tests/unit/manifest.rs"]
mod tests;
