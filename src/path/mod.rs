mod error;
mod normalize;

pub use error::{PathError, PathResult};
pub use normalize::{
    decode_param, parse_query, split_request_uri, trim_trailing_slash, validate_request_path,
};
