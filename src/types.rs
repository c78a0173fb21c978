use std::collections::BTreeMap;

/// Parameter name → decoded value. Ordered so serialized invocations are stable.
pub type RouteParams = BTreeMap<String, String>;
