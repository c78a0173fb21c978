use thiserror::Error;

use crate::path::PathError;
use crate::pattern::PatternError;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ReadOnlyError {
    #[error("no route matched path '{path}'")]
    RouteNotFound { path: String },
    #[error(transparent)]
    Path(#[from] PathError),
    #[error("manifest entry '{route}' is not a valid positional path")]
    InvalidEntry {
        route: String,
        #[source]
        source: PatternError,
    },
    #[error("manifest entry '{route}' stores pattern '{stored}' but compiles to '{expected}'")]
    ManifestIntegrity {
        route: String,
        stored: String,
        expected: String,
    },
}

pub type ReadOnlyResult<T> = Result<T, ReadOnlyError>;
