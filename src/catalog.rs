use crate::foundation::error::{MapGenError, MapGenResult};
use std::collections::BTreeSet;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// One named map asset to be packed.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct MapDescriptor {
    /// Directory name under both the input and output roots.
    pub name: String,
    /// Test fixtures live under the test roots and skip small-island removal.
    #[serde(default)]
    pub is_test: bool,
}

impl MapDescriptor {
    /// Production map descriptor.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            is_test: false,
        }
    }

    /// Test fixture descriptor.
    pub fn test(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            is_test: true,
        }
    }

    /// Whether the terrain engine should drop small islands for this map.
    pub fn remove_small(&self) -> bool {
        !self.is_test
    }
}

/// Ordered list of maps to process. Order is processing order.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Catalog {
    pub maps: Vec<MapDescriptor>,
}

impl Catalog {
    pub fn new(maps: Vec<MapDescriptor>) -> Self {
        Self { maps }
    }

    /// Catalog shipped with the binary when no catalog file is given.
    pub fn builtin() -> Self {
        Self::new(vec![
            MapDescriptor::new("annecy"),
            MapDescriptor::new("paris"),
            MapDescriptor::test("plains"),
        ])
    }

    /// Parse a catalog from a JSON reader.
    pub fn from_reader<R: std::io::Read>(r: R) -> MapGenResult<Self> {
        serde_json::from_reader(r)
            .map_err(|e| MapGenError::config(format!("parse catalog JSON: {e}")))
    }

    /// Parse a catalog from a JSON file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> MapGenResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            MapGenError::config(format!("open catalog '{}': {e}", path.display()))
        })?;
        Self::from_reader(BufReader::new(f)).map_err(|e| match e {
            MapGenError::Config(msg) => {
                MapGenError::config(format!("{msg} (in '{}')", path.display()))
            }
            other => other,
        })
    }

    /// Reject names that cannot be used verbatim as a single directory component, and duplicates.
    pub fn validate(&self) -> MapGenResult<()> {
        let mut seen = BTreeSet::new();
        for (idx, map) in self.maps.iter().enumerate() {
            let name = map.name.as_str();
            if name.is_empty() {
                return Err(MapGenError::config(format!(
                    "catalog entry {idx} has an empty name"
                )));
            }
            if name == "." || name == ".." || name.contains(['/', '\\']) {
                return Err(MapGenError::config(format!(
                    "catalog entry {idx} name '{name}' is not a plain directory name"
                )));
            }
            if !seen.insert(name) {
                return Err(MapGenError::config(format!(
                    "catalog lists '{name}' more than once"
                )));
            }
        }
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.maps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.maps.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, MapDescriptor> {
        self.maps.iter()
    }
}

impl FromIterator<MapDescriptor> for Catalog {
    fn from_iter<I: IntoIterator<Item = MapDescriptor>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

#[cfg(test)]
#[path = "../tests/unit/catalog.rs"]
mod tests;
