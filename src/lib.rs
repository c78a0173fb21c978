pub mod deploy;
pub mod edge;
pub mod manifest;
mod matcher;
pub mod path;
pub mod pattern;
pub mod readonly;
pub mod router;
pub mod types;

pub use edge::{OriginClassifier, OriginDecision};
pub use manifest::{BuildManifest, ManifestAssembler};
pub use matcher::merge_query;
pub use readonly::{Resolution, RouteTable};
pub use router::{MatchOrder, PageInvocation, Router, RouterError, RouterOptions, RouterResult};
pub use types::RouteParams;
