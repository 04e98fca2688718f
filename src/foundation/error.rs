use std::path::{Path, PathBuf};

pub type MapGenResult<T> = Result<T, MapGenError>;

#[derive(thiserror::Error, Debug)]
pub enum MapGenError {
    #[error("resolution error: cannot determine working directory: {0}")]
    Resolution(#[source] std::io::Error),

    #[error("io error at '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("parse error: info.json for '{name}': {source}")]
    Parse {
        name: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("generation error for '{name}': {message}")]
    Generation { name: String, message: String },

    #[error("serialization error: manifest for '{name}': {source}")]
    Serialization {
        name: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("config error: {0}")]
    Config(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl MapGenError {
    pub fn io(path: impl AsRef<Path>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    pub fn parse(name: impl Into<String>, source: serde_json::Error) -> Self {
        Self::Parse {
            name: name.into(),
            source,
        }
    }

    pub fn generation(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Generation {
            name: name.into(),
            message: message.into(),
        }
    }

    pub fn serialization(name: impl Into<String>, source: serde_json::Error) -> Self {
        Self::Serialization {
            name: name.into(),
            source,
        }
    }

    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Path attached to an I/O failure, if any.
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::Io { path, .. } => Some(path),
            _ => None,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
