mod errors;
mod options;
mod service;

pub use errors::{RouterError, RouterResult};
pub use options::{
    DEFAULT_NOT_FOUND_ROUTES, DEFAULT_STATIC_EXTENSION, MatchOrder, RouterConfig,
    RouterConfigBuilder, RouterConfigError, RouterOptions, RouterOptionsBuilder,
    RouterOptionsError,
};
pub use service::{PageInvocation, Router};
