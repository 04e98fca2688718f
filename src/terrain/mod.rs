//! Boundary between the pipeline and the image-to-terrain converter.
//!
//! The pipeline only relies on two properties of a [`TerrainEngine`]: identical inputs produce
//! byte-identical outputs, and one call never observes state left behind by another.

pub mod raster;

use crate::foundation::error::MapGenResult;

pub use raster::RasterTerrainEngine;

/// Input for one terrain conversion.
#[derive(Clone, Copy, Debug)]
pub struct GeneratorArgs<'a> {
    /// Raw source image bytes, in any format the engine accepts.
    pub image_bytes: &'a [u8],
    /// Drop land regions below the engine's size threshold.
    pub remove_small: bool,
    /// Map name, used for diagnostics only.
    pub name: &'a str,
}

/// Dimensions and land count of a packed terrain grid.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Geometry {
    pub width: u32,
    pub height: u32,
    pub num_land_tiles: u64,
}

/// Packed artifacts plus geometry for one map.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GenerationResult {
    pub map_bytes: Vec<u8>,
    pub mini_map_bytes: Vec<u8>,
    pub thumbnail_bytes: Vec<u8>,
    pub map: Geometry,
    pub mini_map: Geometry,
}

/// Converts a source image into packed terrain artifacts.
///
/// Implementations must be deterministic and must not carry state between calls.
pub trait TerrainEngine {
    fn generate(&self, args: &GeneratorArgs<'_>) -> MapGenResult<GenerationResult>;
}

impl<E: TerrainEngine + ?Sized> TerrainEngine for &E {
    fn generate(&self, args: &GeneratorArgs<'_>) -> MapGenResult<GenerationResult> {
        (**self).generate(args)
    }
}

impl<E: TerrainEngine + ?Sized> TerrainEngine for Box<E> {
    fn generate(&self, args: &GeneratorArgs<'_>) -> MapGenResult<GenerationResult> {
        (**self).generate(args)
    }
}
