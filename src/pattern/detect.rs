/// Returns true when at least one segment of `route` is a bracketed parameter
/// such as `[id]`.
///
/// Only segments that are wholly enclosed count; `a[b]` is literal text.
pub fn is_dynamic_route(route: &str) -> bool {
    route.split('/').any(is_bracket_segment)
}

#[inline]
pub(crate) fn is_bracket_segment(seg: &str) -> bool {
    seg.len() >= 2 && seg.starts_with('[') && seg.ends_with(']')
}
