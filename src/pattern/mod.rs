mod compiled;
mod detect;
mod error;
mod lexer;
mod matcher;
mod scoring;
mod segment;

pub use compiled::{CompiledPattern, compile_pattern, pattern_source};
pub use detect::is_dynamic_route;
pub use error::{PatternError, PatternResult};
pub use lexer::{parse_positional, parse_route, to_positional_path};
pub use matcher::{CaptureList, CapturedParam, match_path};
pub use scoring::{compare_specificity, patterns_overlap};
pub use segment::{RoutePattern, RouteToken};
