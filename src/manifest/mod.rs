mod assembler;
mod error;
mod model;
pub mod store;

pub use assembler::ManifestAssembler;
pub use error::{AssembleError, AssembleResult, ManifestError, ManifestResult};
pub use model::{
    BuildManifest, CloudFrontOrigins, DynamicPage, OriginDomain, Pages, RouteKind, SsrPages,
};
pub use store::{MANIFEST_FILE_NAME, read_manifest, read_pages_manifest, write_manifest};
