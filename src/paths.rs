use crate::foundation::error::{MapGenError, MapGenResult};
use std::path::{Component, Path, PathBuf};

/// Input and output roots for one class of maps (production or test).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MapRoots {
    /// Holds `<name>/image.png` and `<name>/info.json`.
    pub input: PathBuf,
    /// Receives `<name>/` output bundles.
    pub output: PathBuf,
}

impl MapRoots {
    /// Join the fixed relative offsets onto `workdir`.
    ///
    /// Production maps read from `assets/maps` and write to `../resources/maps`; test fixtures read
    /// from `assets/test_maps` and write to `../tests/testdata/maps`. The `..` is folded away
    /// lexically, without touching the filesystem.
    pub fn from_workdir(workdir: &Path, is_test: bool) -> Self {
        if is_test {
            Self {
                input: workdir.join("assets").join("test_maps"),
                output: clean(&workdir.join("..").join("tests").join("testdata").join("maps")),
            }
        } else {
            Self {
                input: workdir.join("assets").join("maps"),
                output: clean(&workdir.join("..").join("resources").join("maps")),
            }
        }
    }

    /// Resolve against the current process working directory.
    pub fn resolve(is_test: bool) -> MapGenResult<Self> {
        let cwd = std::env::current_dir().map_err(MapGenError::Resolution)?;
        Ok(Self::from_workdir(&cwd, is_test))
    }

    pub fn input_map_dir(&self, name: &str) -> PathBuf {
        self.input.join(name)
    }

    pub fn output_map_dir(&self, name: &str) -> PathBuf {
        self.output.join(name)
    }
}

/// Drop `.` segments and fold `name/..` pairs. Leading `..` of a relative path are kept; `..` at
/// the root stays at the root.
fn clean(path: &Path) -> PathBuf {
    let mut out: Vec<Component<'_>> = Vec::new();
    for c in path.components() {
        match c {
            Component::CurDir => {}
            Component::ParentDir => match out.last() {
                Some(Component::Normal(_)) => {
                    out.pop();
                }
                Some(Component::RootDir | Component::Prefix(_)) => {}
                _ => out.push(c),
            },
            _ => out.push(c),
        }
    }
    if out.is_empty() {
        return PathBuf::from(".");
    }
    out.into_iter().collect()
}

/// Working directory the pipeline resolves its roots against.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum WorkDir {
    /// The process working directory, looked up for every map.
    #[default]
    Current,
    /// A fixed directory, independent of the process working directory.
    Fixed(PathBuf),
}

impl WorkDir {
    pub fn roots(&self, is_test: bool) -> MapGenResult<MapRoots> {
        match self {
            Self::Current => MapRoots::resolve(is_test),
            Self::Fixed(dir) => Ok(MapRoots::from_workdir(dir, is_test)),
        }
    }
}

#[cfg(test)]
#[path = "../tests/unit/paths.rs"]
mod tests;
