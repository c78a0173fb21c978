//! Deployment driver: build, assemble, bundle, upload and provision.

mod build;
pub mod bundle;
mod config;
mod context;
mod driver;
mod error;
pub mod provisioner;

pub use build::CommandBuilder;
pub use config::{
    BundleAsset, DEFAULT_EDGE_BUNDLE_DIR, DEFAULT_SSR_BUNDLE_DIR, DEFAULT_STATIC_TTL, DEFAULT_TTL,
    DeployConfig, EdgeFunctionConfig,
};
pub use context::DeployContext;
pub use driver::{Deployment, DeploymentOutputs, static_origin_host};
pub use error::{
    BuildError, ConfigError, ConfigResult, DeployError, DeployResult, ProvisionError,
    ProvisionResult,
};
pub use provisioner::{
    ApplicationBuilder, BackendInputs, BackendOutputs, BackendProvisioner, BucketInputs,
    BucketOutputs, BucketProvisioner, CacheBehavior, CodeSource, DistributionDefaults,
    DistributionInputs, DistributionOrigin, DistributionOutputs, DistributionProvisioner,
    FunctionInputs, FunctionOutputs, FunctionProvisioner, FunctionRole, Provisioners,
    PublishedVersion, RolePolicy, Upload,
};
