use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::router::RouterOptions;

use super::{ConfigError, ConfigResult};

pub const DEFAULT_SSR_BUNDLE_DIR: &str = "serverless-nextjs-tmp";
pub const DEFAULT_EDGE_BUNDLE_DIR: &str = "lambda-at-edge-tmp";
pub const DEFAULT_TTL: u64 = 5;
pub const DEFAULT_STATIC_TTL: u64 = 86_400;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BundleAsset {
    pub from: PathBuf,
    pub to: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EdgeFunctionConfig {
    pub description: String,
    pub handler: String,
    pub role_services: Vec<String>,
    pub policy_arn: String,
}

impl Default for EdgeFunctionConfig {
    fn default() -> Self {
        Self {
            description: "Lambda@Edge for Next CloudFront distribution".to_string(),
            handler: "index.handler".to_string(),
            role_services: vec![
                "lambda.amazonaws.com".to_string(),
                "edgelambda.amazonaws.com".to_string(),
            ],
            policy_arn: "arn:aws:iam::aws:policy/AdministratorAccess".to_string(),
        }
    }
}

/// Deployment settings, usually read from `ssr-manifest.toml`.
///
/// Relative paths are resolved against `source_root` by
/// [`DeployContext`](super::DeployContext), never against the process
/// working directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeployConfig {
    pub source_root: PathBuf,
    pub ssr_bundle_dir: PathBuf,
    pub edge_bundle_dir: PathBuf,
    /// Program followed by its arguments, run in `source_root`.
    pub build_command: Vec<String>,
    pub ssr_handler: Option<PathBuf>,
    pub edge_handler: Option<PathBuf>,
    pub ssr_assets: Vec<BundleAsset>,
    pub bucket_accelerated: bool,
    pub default_ttl: u64,
    pub static_ttl: u64,
    pub edge_function: EdgeFunctionConfig,
    pub router: RouterOptions,
}

impl Default for DeployConfig {
    fn default() -> Self {
        Self {
            source_root: PathBuf::from("."),
            ssr_bundle_dir: PathBuf::from(DEFAULT_SSR_BUNDLE_DIR),
            edge_bundle_dir: PathBuf::from(DEFAULT_EDGE_BUNDLE_DIR),
            build_command: vec!["npx".into(), "next".into(), "build".into()],
            ssr_handler: None,
            edge_handler: None,
            ssr_assets: Vec::new(),
            bucket_accelerated: true,
            default_ttl: DEFAULT_TTL,
            static_ttl: DEFAULT_STATIC_TTL,
            edge_function: EdgeFunctionConfig::default(),
            router: RouterOptions::default(),
        }
    }
}

impl DeployConfig {
    pub fn from_file(path: &Path) -> ConfigResult<Self> {
        let raw = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&raw)
    }

    pub fn from_toml_str(raw: &str) -> ConfigResult<Self> {
        let config: DeployConfig = toml::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> ConfigResult<()> {
        if self.build_command.first().is_none_or(|p| p.trim().is_empty()) {
            return Err(ConfigError::Invalid {
                field: "build_command",
                reason: "must name a program".to_string(),
            });
        }
        for (field, dir) in [
            ("ssr_bundle_dir", &self.ssr_bundle_dir),
            ("edge_bundle_dir", &self.edge_bundle_dir),
        ] {
            if dir.as_os_str().is_empty() {
                return Err(ConfigError::Invalid {
                    field,
                    reason: "must not be empty".to_string(),
                });
            }
        }
        if self.ssr_bundle_dir == self.edge_bundle_dir {
            return Err(ConfigError::Invalid {
                field: "edge_bundle_dir",
                reason: "must differ from ssr_bundle_dir".to_string(),
            });
        }
        if self.edge_function.handler.is_empty() {
            return Err(ConfigError::Invalid {
                field: "edge_function.handler",
                reason: "must not be empty".to_string(),
            });
        }
        if self.static_ttl < self.default_ttl {
            return Err(ConfigError::Invalid {
                field: "static_ttl",
                reason: format!("must be at least default_ttl ({})", self.default_ttl),
            });
        }
        self.router.validate()?;
        Ok(())
    }
}
