use crate::foundation::error::{MapGenError, MapGenResult};
use crate::manifest::{Manifest, manifest_to_pretty_json};
use crate::terrain::GenerationResult;
use std::path::{Path, PathBuf};

pub const MAP_FILE: &str = "map.bin";
pub const MINI_MAP_FILE: &str = "mini_map.bin";
pub const THUMBNAIL_FILE: &str = "thumbnail.webp";
pub const MANIFEST_FILE: &str = "manifest.json";

/// Files written for one map, in write order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BundlePaths {
    pub dir: PathBuf,
    pub map: PathBuf,
    pub mini_map: PathBuf,
    pub thumbnail: PathBuf,
    pub manifest: PathBuf,
}

impl BundlePaths {
    pub fn new(output_dir: &Path, name: &str) -> Self {
        let dir = output_dir.join(name);
        Self {
            map: dir.join(MAP_FILE),
            mini_map: dir.join(MINI_MAP_FILE),
            thumbnail: dir.join(THUMBNAIL_FILE),
            manifest: dir.join(MANIFEST_FILE),
            dir,
        }
    }

    pub fn files(&self) -> [&Path; 4] {
        [&self.map, &self.mini_map, &self.thumbnail, &self.manifest]
    }
}

fn write_file(path: &Path, bytes: &[u8]) -> MapGenResult<()> {
    std::fs::write(path, bytes).map_err(|e| MapGenError::io(path, e))
}

/// Write the four artifacts into `<output_dir>/<name>/`, replacing existing files.
///
/// Files are written one by one; a failure leaves earlier files updated and later ones untouched.
pub fn write_bundle(
    output_dir: &Path,
    name: &str,
    result: &GenerationResult,
    manifest: &Manifest,
) -> MapGenResult<BundlePaths> {
    let paths = BundlePaths::new(output_dir, name);
    let manifest_json = manifest_to_pretty_json(manifest, name)?;

    std::fs::create_dir_all(&paths.dir).map_err(|e| MapGenError::io(&paths.dir, e))?;

    write_file(&paths.map, &result.map_bytes)?;
    write_file(&paths.mini_map, &result.mini_map_bytes)?;
    write_file(&paths.thumbnail, &result.thumbnail_bytes)?;
    write_file(&paths.manifest, &manifest_json)?;

    tracing::debug!(dir = %paths.dir.display(), "bundle written");
    Ok(paths)
}

#[cfg(test)]
#[path = "../tests/unit/output.rs"]
mod tests;
