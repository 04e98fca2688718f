//! Reading per-map source files from the input root.

pub mod loader;

pub use loader::{IMAGE_FILE, INFO_FILE, MapAssets, load_map_assets};
