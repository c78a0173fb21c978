use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PatternError {
    #[error("route '{route}' must start with '/'")]
    MissingLeadingSlash { route: String },
    #[error("route '{route}' contains an empty segment")]
    EmptySegment { route: String },
    #[error("parameter segment '{segment}' is missing a name")]
    ParameterMissingName { segment: String },
    #[error("segment '{segment}' has unbalanced brackets")]
    UnbalancedBrackets { segment: String },
    #[error(
        "parameter name '{name}' in segment '{segment}' must start with an alphabetic character or underscore (found '{found}')"
    )]
    ParameterInvalidStart {
        segment: String,
        name: String,
        found: char,
    },
    #[error(
        "parameter name '{name}' in segment '{segment}' contains invalid character '{invalid}'"
    )]
    ParameterInvalidCharacter {
        segment: String,
        name: String,
        invalid: char,
    },
    #[error("parameter '{name}' appears more than once in '{route}'")]
    DuplicateParameterName { route: String, name: String },
    #[error("segment '{segment}' mixes parameter and literal syntax")]
    MixedParameterLiteralSyntax { segment: String },
    #[error("compiled pattern '{pattern}' is not a valid regular expression: {error}")]
    InvalidRegex { pattern: String, error: String },
}

pub type PatternResult<T> = Result<T, PatternError>;
