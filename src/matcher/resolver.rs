use crate::pattern::CompiledPattern;
use crate::types::RouteParams;

use super::params::captures_to_map;

#[derive(Debug, Clone)]
pub struct DynamicEntry {
    pub route: Box<str>,
    pub file: Box<str>,
    pub pattern: CompiledPattern,
}

/// Returns the first entry whose pattern matches `path`, with its bound
/// parameters.
#[tracing::instrument(level = "trace", skip(entries, path), fields(path = %path, candidates = entries.len() as u64))]
pub fn find_dynamic<'e>(
    entries: &'e [DynamicEntry],
    path: &str,
    decode: bool,
) -> Option<(&'e DynamicEntry, RouteParams)> {
    entries.iter().find_map(|entry| {
        entry
            .pattern
            .match_path(path)
            .map(|caps| (entry, captures_to_map(caps, decode)))
    })
}
