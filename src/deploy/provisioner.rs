//! Contracts for the external collaborators a deployment wires together.
//!
//! Inputs serialize to the JSON shapes the provisioning components accept,
//! so an implementation backed by a component runtime can forward them
//! as-is.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::PathBuf;
use std::sync::Arc;

use super::{BuildError, DeployContext, ProvisionResult};

#[async_trait]
pub trait ApplicationBuilder: Send + Sync {
    async fn build(&self, ctx: &DeployContext) -> Result<(), BuildError>;
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodeSource {
    pub src: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BackendInputs {
    pub code: CodeSource,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BackendOutputs {
    pub url: String,
}

#[async_trait]
pub trait BackendProvisioner: Send + Sync {
    async fn deploy(&self, inputs: &BackendInputs) -> ProvisionResult<BackendOutputs>;
    async fn remove(&self) -> ProvisionResult<()>;
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BucketInputs {
    pub accelerated: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BucketOutputs {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Upload {
    Dir {
        dir: PathBuf,
        #[serde(rename = "keyPrefix")]
        key_prefix: String,
    },
    File {
        file: PathBuf,
        key: String,
    },
}

#[async_trait]
pub trait BucketProvisioner: Send + Sync {
    async fn deploy(&self, inputs: &BucketInputs) -> ProvisionResult<BucketOutputs>;
    async fn upload(&self, upload: &Upload) -> ProvisionResult<()>;
    async fn remove(&self) -> ProvisionResult<()>;
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RolePolicy {
    pub arn: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FunctionRole {
    pub service: Vec<String>,
    pub policy: RolePolicy,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FunctionInputs {
    pub description: String,
    pub handler: String,
    pub code: PathBuf,
    pub role: FunctionRole,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FunctionOutputs {
    pub arn: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublishedVersion {
    pub version: String,
}

#[async_trait]
pub trait FunctionProvisioner: Send + Sync {
    async fn deploy(&self, inputs: &FunctionInputs) -> ProvisionResult<FunctionOutputs>;
    async fn publish_version(&self) -> ProvisionResult<PublishedVersion>;
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CacheBehavior {
    pub ttl: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DistributionDefaults {
    pub ttl: u64,
    /// Event name (`origin-request`) → qualified function version.
    #[serde(rename = "lambda@edge")]
    pub lambda_at_edge: BTreeMap<String, String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DistributionOrigin {
    Url(String),
    Bucket {
        url: String,
        private: bool,
        #[serde(rename = "pathPatterns")]
        path_patterns: BTreeMap<String, CacheBehavior>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DistributionInputs {
    pub defaults: DistributionDefaults,
    pub origins: Vec<DistributionOrigin>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DistributionOutputs {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
}

#[async_trait]
pub trait DistributionProvisioner: Send + Sync {
    async fn deploy(&self, inputs: &DistributionInputs) -> ProvisionResult<DistributionOutputs>;
    async fn remove(&self) -> ProvisionResult<()>;
}

/// Everything a [`Deployment`](super::Deployment) calls out to. Without a
/// `builder`, the deployment runs the configured build command.
#[derive(Clone)]
pub struct Provisioners {
    pub builder: Option<Arc<dyn ApplicationBuilder>>,
    pub backend: Arc<dyn BackendProvisioner>,
    pub bucket: Arc<dyn BucketProvisioner>,
    pub function: Arc<dyn FunctionProvisioner>,
    pub distribution: Arc<dyn DistributionProvisioner>,
}

impl std::fmt::Debug for Provisioners {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Provisioners").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn uploads_use_component_field_names() {
        let dir = Upload::Dir {
            dir: PathBuf::from("app/.next/static"),
            key_prefix: "_next/static".into(),
        };
        assert_eq!(
            serde_json::to_value(&dir).unwrap(),
            json!({ "dir": "app/.next/static", "keyPrefix": "_next/static" })
        );
        let file = Upload::File {
            file: PathBuf::from("app/.next/serverless/pages/terms.html"),
            key: "static-pages/terms.html".into(),
        };
        assert_eq!(
            serde_json::to_value(&file).unwrap(),
            json!({ "file": "app/.next/serverless/pages/terms.html", "key": "static-pages/terms.html" })
        );
    }

    #[test]
    fn distribution_inputs_match_component_shape() {
        let inputs = DistributionInputs {
            defaults: DistributionDefaults {
                ttl: 5,
                lambda_at_edge: BTreeMap::from([(
                    "origin-request".to_string(),
                    "arn:fn:1".to_string(),
                )]),
            },
            origins: vec![
                DistributionOrigin::Url("https://api.example.com".into()),
                DistributionOrigin::Bucket {
                    url: "http://assets.s3.amazonaws.com".into(),
                    private: true,
                    path_patterns: BTreeMap::from([
                        ("_next/*".to_string(), CacheBehavior { ttl: 86400 }),
                        ("static/*".to_string(), CacheBehavior { ttl: 86400 }),
                    ]),
                },
            ],
        };
        assert_eq!(
            serde_json::to_value(&inputs).unwrap(),
            json!({
                "defaults": { "ttl": 5, "lambda@edge": { "origin-request": "arn:fn:1" } },
                "origins": [
                    "https://api.example.com",
                    {
                        "url": "http://assets.s3.amazonaws.com",
                        "private": true,
                        "pathPatterns": { "_next/*": { "ttl": 86400 }, "static/*": { "ttl": 86400 } }
                    }
                ]
            })
        );
    }
}
