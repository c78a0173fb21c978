use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PathError {
    #[error("path is empty")]
    Empty,
    #[error("path '{input}' must start with '/'")]
    MissingLeadingSlash { input: String },
    #[error("path contains control or whitespace byte {byte} in '{input}'")]
    ControlOrWhitespace { input: String, byte: u8 },
}

pub type PathResult<T> = Result<T, PathError>;
