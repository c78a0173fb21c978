use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::manifest::{AssembleError, ManifestError};
use crate::router::RouterOptionsError;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config '{path}': {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("config field '{field}' {reason}")]
    Invalid { field: &'static str, reason: String },
    #[error(transparent)]
    Router(#[from] RouterOptionsError),
}

pub type ConfigResult<T> = Result<T, ConfigError>;

#[derive(Debug, Error)]
pub enum BuildError {
    #[error("build command is empty")]
    EmptyCommand,
    #[error("failed to start build command '{program}': {source}")]
    Spawn {
        program: String,
        #[source]
        source: io::Error,
    },
    #[error("build command '{program}' exited with {status}: {stderr}")]
    Failed {
        program: String,
        status: String,
        stderr: String,
    },
}

#[derive(Debug, Error)]
pub enum ProvisionError {
    #[error("{provisioner} failed to {operation}: {message}")]
    Failed {
        provisioner: &'static str,
        operation: &'static str,
        message: String,
    },
    #[error("{provisioner} returned unusable output: {message}")]
    InvalidOutput {
        provisioner: &'static str,
        message: String,
    },
}

impl ProvisionError {
    pub fn failed(
        provisioner: &'static str,
        operation: &'static str,
        message: impl Into<String>,
    ) -> Self {
        Self::Failed {
            provisioner,
            operation,
            message: message.into(),
        }
    }
}

pub type ProvisionResult<T> = Result<T, ProvisionError>;

#[derive(Debug, Error)]
pub enum DeployError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Build(#[from] BuildError),
    #[error(transparent)]
    Manifest(#[from] ManifestError),
    #[error(transparent)]
    Assemble(#[from] AssembleError),
    #[error("i/o error at '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error(transparent)]
    Provision(#[from] ProvisionError),
    #[error("backend url '{url}' has no host")]
    BackendUrl {
        url: String,
        #[source]
        source: Option<url::ParseError>,
    },
}

impl DeployError {
    pub(crate) fn io_at(path: &Path) -> impl FnOnce(io::Error) -> DeployError + use<> {
        let path = path.to_path_buf();
        move |source| DeployError::Io { path, source }
    }
}

pub type DeployResult<T> = Result<T, DeployError>;
