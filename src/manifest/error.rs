use crate::pattern::PatternError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ManifestError {
    #[error("failed to read '{path}': {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse '{path}': {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("failed to write '{path}': {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to serialize manifest: {0}")]
    Serialize(#[from] serde_json::Error),
}

pub type ManifestResult<T> = Result<T, ManifestError>;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AssembleError {
    #[error("route '{route}' is malformed: {source}")]
    Pattern {
        route: String,
        #[source]
        source: PatternError,
    },
    #[error("route '{route}' is already filed as '{existing}'")]
    ConflictingRoute { route: String, existing: String },
    #[error("dynamic route '{route}' accepts the same paths as '{existing}'")]
    ConflictingDynamicRoute { route: String, existing: String },
    #[error("public file name '{name}' must be a non-empty file name")]
    InvalidPublicFile { name: String },
}

pub type AssembleResult<T> = Result<T, AssembleError>;
