use regex::Regex;

use super::lexer::parse_positional;
use super::matcher::{CaptureList, match_path};
use super::{PatternError, PatternResult, RoutePattern, RouteToken};

const SEPARATOR: &str = "\\/";
const PARAM_GROUP: &str = "([^\\/]+?)";
const TRAILING: &str = "(?:\\/)?$";

/// A positional-parameter path together with its anchored pattern string.
///
/// `tokens` drive matching; `source` is the representation persisted in the
/// manifest and is always derived from the tokens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompiledPattern {
    pattern: RoutePattern,
    source: String,
}

impl CompiledPattern {
    pub fn from_pattern(pattern: RoutePattern) -> Self {
        let source = pattern_source(&pattern);
        Self { pattern, source }
    }

    pub fn pattern(&self) -> &RoutePattern {
        &self.pattern
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn positional_path(&self) -> String {
        self.pattern.positional_path()
    }

    pub fn capture_count(&self) -> usize {
        self.pattern.param_count()
    }

    pub fn match_path<'a>(&'a self, path: &'a str) -> Option<CaptureList<'a>> {
        match_path(path, &self.pattern)
    }

    pub fn to_regex(&self) -> PatternResult<Regex> {
        Regex::new(&self.source).map_err(|err| PatternError::InvalidRegex {
            pattern: self.source.clone(),
            error: err.to_string(),
        })
    }
}

#[tracing::instrument(level = "trace", skip_all, fields(path = %positional))]
pub fn compile_pattern(positional: &str) -> PatternResult<CompiledPattern> {
    parse_positional(positional).map(CompiledPattern::from_pattern)
}

/// Renders the anchored pattern for `pattern`, e.g.
/// `^\/blog\/([^\/]+?)(?:\/)?$` for `/blog/:id`.
pub fn pattern_source(pattern: &RoutePattern) -> String {
    if pattern.tokens.is_empty() {
        return format!("^{SEPARATOR}?$");
    }

    let mut out = String::from("^");
    for token in &pattern.tokens {
        out.push_str(SEPARATOR);
        match token {
            RouteToken::Literal(lit) => out.push_str(&regex::escape(lit)),
            RouteToken::Param { .. } => out.push_str(PARAM_GROUP),
        }
    }
    out.push_str(TRAILING);
    out
}
