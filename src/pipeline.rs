//! Sequential, fail-fast driver over a [`Catalog`].
//!
//! Each catalog entry runs resolve → load → generate → merge → write. The first failing stage
//! aborts the whole run; later entries are never touched. Entries are processed one at a time in
//! catalog order.

use crate::assets::load_map_assets;
use crate::catalog::{Catalog, MapDescriptor};
use crate::foundation::error::{MapGenError, MapGenResult};
use crate::manifest::merge_geometry;
use crate::output::{BundlePaths, write_bundle};
use crate::paths::WorkDir;
use crate::terrain::{GeneratorArgs, Geometry, TerrainEngine};
use std::fmt;
use std::path::PathBuf;

/// Per-map processing stage, used to tag failures.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Stage {
    Resolve,
    Load,
    Generate,
    Merge,
    Write,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Stage::Resolve => "resolve paths",
            Stage::Load => "load assets",
            Stage::Generate => "generate terrain",
            Stage::Merge => "merge manifest",
            Stage::Write => "write bundle",
        })
    }
}

#[derive(thiserror::Error, Debug)]
pub enum PipelineError {
    /// A stage failure, tagged with the map being processed.
    #[error("map '{map}' failed at {stage}: {source}")]
    Stage {
        map: String,
        stage: Stage,
        #[source]
        source: MapGenError,
    },

    /// `run` was called on a runner that already finished.
    #[error("runner already finished ({0:?}); create a new runner to run again")]
    Finished(RunState),
}

impl PipelineError {
    /// Name of the map that failed.
    pub fn map(&self) -> Option<&str> {
        match self {
            Self::Stage { map, .. } => Some(map),
            Self::Finished(_) => None,
        }
    }

    pub fn stage(&self) -> Option<Stage> {
        match self {
            Self::Stage { stage, .. } => Some(*stage),
            Self::Finished(_) => None,
        }
    }

    /// Underlying stage error.
    pub fn cause(&self) -> Option<&MapGenError> {
        match self {
            Self::Stage { source, .. } => Some(source),
            Self::Finished(_) => None,
        }
    }
}

/// Runner progress. `Done` and `Aborted` end a run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RunState {
    #[default]
    Idle,
    /// Processing the catalog entry at this index.
    Running(usize),
    Done,
    Aborted,
}

/// Outcome of one successfully processed map.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProcessedMap {
    pub name: String,
    pub bundle: BundlePaths,
    pub map: Geometry,
    pub mini_map: Geometry,
}

/// Every map of a completed run, in catalog order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RunReport {
    pub processed: Vec<ProcessedMap>,
}

pub struct PipelineRunner<E> {
    engine: E,
    workdir: WorkDir,
    state: RunState,
}

impl<E: TerrainEngine> PipelineRunner<E> {
    /// Runner resolving paths against the process working directory.
    pub fn new(engine: E) -> Self {
        Self {
            engine,
            workdir: WorkDir::Current,
            state: RunState::Idle,
        }
    }

    /// Resolve paths against `dir` instead of the process working directory.
    pub fn with_workdir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.workdir = WorkDir::Fixed(dir.into());
        self
    }

    pub fn state(&self) -> RunState {
        self.state
    }

    pub fn engine(&self) -> &E {
        &self.engine
    }

    /// Process every catalog entry in order, stopping at the first failure.
    ///
    /// A runner runs once; calling `run` again after `Done` or `Aborted` is rejected without
    /// touching the catalog.
    pub fn run(&mut self, catalog: &Catalog) -> Result<RunReport, PipelineError> {
        if self.state != RunState::Idle {
            return Err(PipelineError::Finished(self.state));
        }
        let mut report = RunReport::default();

        for (idx, desc) in catalog.iter().enumerate() {
            self.state = RunState::Running(idx);
            tracing::info!(map = %desc.name, index = idx, "processing map");
            match self.process(desc) {
                Ok(done) => report.processed.push(done),
                Err(err) => {
                    tracing::error!(map = %desc.name, error = %err, "error processing map");
                    self.state = RunState::Aborted;
                    return Err(err);
                }
            }
        }

        self.state = RunState::Done;
        Ok(report)
    }

    fn process(&self, desc: &MapDescriptor) -> Result<ProcessedMap, PipelineError> {
        let name = desc.name.as_str();
        let _span = tracing::info_span!("map", name).entered();

        let roots = stage(name, Stage::Resolve, || self.workdir.roots(desc.is_test))?;
        let assets = stage(name, Stage::Load, || load_map_assets(&roots.input, name))?;
        let result = stage(name, Stage::Generate, || {
            self.engine.generate(&GeneratorArgs {
                image_bytes: &assets.image_bytes,
                remove_small: desc.remove_small(),
                name,
            })
        })?;
        let manifest = stage(name, Stage::Merge, || {
            Ok(merge_geometry(assets.manifest, &result))
        })?;
        let bundle = stage(name, Stage::Write, || {
            write_bundle(&roots.output, name, &result, &manifest)
        })?;

        Ok(ProcessedMap {
            name: name.to_string(),
            bundle,
            map: result.map,
            mini_map: result.mini_map,
        })
    }
}

fn stage<T>(
    map: &str,
    stage: Stage,
    f: impl FnOnce() -> MapGenResult<T>,
) -> Result<T, PipelineError> {
    tracing::info!(map, %stage, "begin");
    let out = f().map_err(|source| PipelineError::Stage {
        map: map.to_string(),
        stage,
        source,
    })?;
    tracing::info!(map, %stage, "done");
    Ok(out)
}

#[cfg(test)]
#[path = "../tests/unit/pipeline.rs"]
mod tests;
