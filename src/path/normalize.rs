use memchr::{memchr, memchr2};
use percent_encoding::percent_decode_str;
use std::borrow::Cow;

use crate::path::{PathError, PathResult};

/// Splits a request URI into its path and query string. A fragment, if
/// present, is dropped.
#[inline]
pub fn split_request_uri(uri: &str) -> (&str, Option<&str>) {
    let bytes = uri.as_bytes();
    match memchr2(b'?', b'#', bytes) {
        Some(pos) if bytes[pos] == b'?' => {
            let query = &uri[pos + 1..];
            let query = match memchr(b'#', query.as_bytes()) {
                Some(hash) => &query[..hash],
                None => query,
            };
            (&uri[..pos], Some(query))
        }
        Some(pos) => (&uri[..pos], None),
        None => (uri, None),
    }
}

#[tracing::instrument(level = "trace", skip(path), fields(path_len = path.len() as u64))]
pub fn validate_request_path(path: &str) -> PathResult<()> {
    if path.is_empty() {
        return Err(PathError::Empty);
    }
    if !path.starts_with('/') {
        return Err(PathError::MissingLeadingSlash {
            input: path.to_string(),
        });
    }
    if let Some(&byte) = path
        .as_bytes()
        .iter()
        .find(|b| b.is_ascii_control() || b.is_ascii_whitespace())
    {
        return Err(PathError::ControlOrWhitespace {
            input: path.to_string(),
            byte,
        });
    }
    Ok(())
}

/// `/about/` → `Some("/about")`; the root and slash-free endings give `None`.
#[inline]
pub fn trim_trailing_slash(path: &str) -> Option<&str> {
    if path.len() > 1 {
        path.strip_suffix('/')
    } else {
        None
    }
}

/// Percent-decodes a captured path parameter. Invalid UTF-8 is replaced
/// rather than rejected.
#[inline]
pub fn decode_param(raw: &str) -> Cow<'_, str> {
    percent_decode_str(raw).decode_utf8_lossy()
}

pub fn parse_query(query: &str) -> Vec<(String, String)> {
    url::form_urlencoded::parse(query.as_bytes())
        .map(|(k, v)| (k.into_owned(), v.into_owned()))
        .collect()
}
