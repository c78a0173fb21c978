use crate::manifest::ManifestError;
use crate::path::PathError;
use crate::readonly::ReadOnlyError;
use thiserror::Error;

use super::RouterOptionsError;

#[derive(Debug, Error)]
pub enum RouterError {
    #[error(transparent)]
    Options(#[from] RouterOptionsError),
    #[error(transparent)]
    Manifest(#[from] ManifestError),
    #[error(transparent)]
    Path(#[from] PathError),
    #[error(transparent)]
    ReadOnly(ReadOnlyError),
    #[error("no route matched path '{path}' and no not-found page exists")]
    RouteNotFound { path: String },
}

impl From<ReadOnlyError> for RouterError {
    fn from(err: ReadOnlyError) -> Self {
        match err {
            ReadOnlyError::RouteNotFound { path } => RouterError::RouteNotFound { path },
            ReadOnlyError::Path(err) => RouterError::Path(err),
            other => RouterError::ReadOnly(other),
        }
    }
}

pub type RouterResult<T> = Result<T, RouterError>;
