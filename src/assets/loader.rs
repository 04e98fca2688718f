use crate::foundation::error::{MapGenError, MapGenResult};
use crate::manifest::{Manifest, parse_manifest};
use std::path::Path;

pub const IMAGE_FILE: &str = "image.png";
pub const INFO_FILE: &str = "info.json";

/// Raw source image plus decoded manifest for one map.
#[derive(Clone, Debug)]
pub struct MapAssets {
    pub image_bytes: Vec<u8>,
    pub manifest: Manifest,
}

/// Read `<input_dir>/<name>/image.png` and `<input_dir>/<name>/info.json`.
///
/// The image is not inspected here.
pub fn load_map_assets(input_dir: &Path, name: &str) -> MapGenResult<MapAssets> {
    let map_dir = input_dir.join(name);

    let image_path = map_dir.join(IMAGE_FILE);
    tracing::info!(path = %image_path.display(), "reading image file");
    let image_bytes =
        std::fs::read(&image_path).map_err(|e| MapGenError::io(&image_path, e))?;

    let info_path = map_dir.join(INFO_FILE);
    tracing::info!(path = %info_path.display(), "reading info.json");
    let info_bytes = std::fs::read(&info_path).map_err(|e| MapGenError::io(&info_path, e))?;
    let manifest = parse_manifest(&info_bytes, name)?;

    Ok(MapAssets {
        image_bytes,
        manifest,
    })
}

#[cfg(test)]
#[path = "../../tests/unit/assets/loader.rs"]
mod tests;
