//! Offline packer turning map source images and JSON sidecars into distributable bundles.
//!
//! For every entry of a [`Catalog`], the [`PipelineRunner`] resolves the input/output roots,
//! loads `image.png` and `info.json`, asks a [`TerrainEngine`] for packed terrain, injects the
//! resulting geometry into the manifest and writes `map.bin`, `mini_map.bin`, `thumbnail.webp`
//! and `manifest.json`. The first failure aborts the run.
#![forbid(unsafe_code)]

mod foundation;

pub mod assets;
pub mod catalog;
pub mod manifest;
pub mod output;
pub mod paths;
pub mod pipeline;
pub mod terrain;

pub use crate::foundation::error::{MapGenError, MapGenResult};

pub use crate::assets::{MapAssets, load_map_assets};
pub use crate::catalog::{Catalog, MapDescriptor};
pub use crate::manifest::{Manifest, merge_geometry};
pub use crate::output::{BundlePaths, write_bundle};
pub use crate::paths::{MapRoots, WorkDir};
pub use crate::pipeline::{PipelineError, PipelineRunner, ProcessedMap, RunReport, RunState, Stage};
pub use crate::terrain::{
    GenerationResult, GeneratorArgs, Geometry, RasterTerrainEngine, TerrainEngine,
};
