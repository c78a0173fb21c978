use memchr::memchr;
use smallvec::SmallVec;

use super::{RoutePattern, RouteToken};

pub type CapturedParam<'a> = (&'a str, &'a str);
pub type CaptureList<'a> = SmallVec<[CapturedParam<'a>; 4]>;

/// Matches `path` segment by segment against `pattern`.
///
/// A single trailing slash is accepted, parameter segments never match the
/// empty string, and literals compare exactly. Captures come back in token
/// order.
#[tracing::instrument(level = "trace", skip(pattern), fields(tokens = pattern.tokens.len() as u64))]
pub fn match_path<'a>(path: &'a str, pattern: &'a RoutePattern) -> Option<CaptureList<'a>> {
    if pattern.tokens.is_empty() {
        return (path.is_empty() || path == "/").then(SmallVec::new);
    }

    let rest = path.strip_prefix('/')?;
    let mut remaining = rest.strip_suffix('/').unwrap_or(rest);
    let last = pattern.tokens.len() - 1;
    let mut out: CaptureList = SmallVec::new();

    for (idx, token) in pattern.tokens.iter().enumerate() {
        let (seg, next) = match memchr(b'/', remaining.as_bytes()) {
            Some(pos) => (&remaining[..pos], Some(&remaining[pos + 1..])),
            None => (remaining, None),
        };

        match token {
            RouteToken::Literal(lit) => {
                if seg != lit {
                    return None;
                }
            }
            RouteToken::Param { name } => {
                if seg.is_empty() {
                    return None;
                }
                out.push((name.as_str(), seg));
            }
        }

        match next {
            Some(next) if idx < last => remaining = next,
            None if idx == last => {}
            _ => return None,
        }
    }

    Some(out)
}
