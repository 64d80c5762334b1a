//! Error types for the generator pipeline

use std::io;
use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, GenerateError>;

#[derive(Debug, Error)]
pub enum GenerateError {
    /// Root directory missing or unreadable
    #[error("failed to read source root {path:?}: {source}")]
    Discover {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Invalid ignore glob
    #[error("invalid ignore pattern: {0}")]
    Pattern(#[source] ignore::Error),

    /// Output path not writable
    #[error("failed to write manifest {path:?}: {source}")]
    Persist {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Existing manifest unreadable during a check
    #[error("failed to read manifest {path:?}: {source}")]
    ReadManifest {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid configuration: {0}")]
    Config(String),

    /// Config file unreadable or not valid TOML
    #[error("failed to load config file {path:?}: {source}")]
    ConfigFile {
        path: PathBuf,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

impl GenerateError {
    pub fn persist(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Persist {
            path: path.into(),
            source,
        }
    }

    pub fn config_file(
        path: impl Into<PathBuf>,
        source: impl Into<Box<dyn std::error::Error + Send + Sync>>,
    ) -> Self {
        Self::ConfigFile {
            path: path.into(),
            source: source.into(),
        }
    }
}
