use crate::path::{decode_param, parse_query};
use crate::pattern::CaptureList;
use crate::types::RouteParams;

pub(crate) fn captures_to_map(captures: CaptureList<'_>, decode: bool) -> RouteParams {
    let mut map = RouteParams::new();
    for (name, raw) in captures {
        let value = if decode {
            decode_param(raw).into_owned()
        } else {
            raw.to_string()
        };
        map.insert(name.to_string(), value);
    }
    map
}

/// Folds query-string parameters into `params`. A name already bound by the
/// path keeps its path value; repeated query names keep the last value.
pub fn merge_query(params: &mut RouteParams, query: Option<&str>) {
    let Some(query) = query.filter(|q| !q.is_empty()) else {
        return;
    };
    let mut from_query = RouteParams::new();
    for (name, value) in parse_query(query) {
        from_query.insert(name, value);
    }
    for (name, value) in from_query {
        params.entry(name).or_insert(value);
    }
}
