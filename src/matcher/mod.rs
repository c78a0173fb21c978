mod params;
pub mod resolver;

pub use params::merge_query;
pub use resolver::{DynamicEntry, find_dynamic};
