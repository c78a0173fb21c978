use futures_util::future::try_join_all;
use std::collections::BTreeMap;
use std::sync::Arc;

use crate::manifest::store::list_public_files;
use crate::manifest::{BuildManifest, ManifestAssembler, read_pages_manifest};

use super::bundle::{build_edge_bundle, build_ssr_bundle, empty_dir};
use super::{
    ApplicationBuilder, BackendInputs, BucketInputs, CacheBehavior, CodeSource, CommandBuilder,
    DeployConfig, DeployContext, DeployError, DeployResult, DistributionDefaults,
    DistributionInputs, DistributionOrigin, DistributionOutputs, FunctionInputs, FunctionRole,
    Provisioners, RolePolicy, Upload,
};

const STATIC_PAGES_PREFIX: &str = "static-pages/";
const ORIGIN_REQUEST_EVENT: &str = "origin-request";
const STATIC_PATH_PATTERNS: [&str; 2] = ["_next/*", "static/*"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeploymentOutputs {
    pub manifest: BuildManifest,
    pub bucket_name: String,
    pub backend_url: String,
    /// `<function arn>:<published version>`.
    pub edge_function_version: String,
    pub distribution: DistributionOutputs,
}

/// Drives one application through build, bundling and provisioning.
#[derive(Clone)]
pub struct Deployment {
    config: DeployConfig,
    ctx: DeployContext,
    builder: Arc<dyn ApplicationBuilder>,
    provisioners: Provisioners,
}

impl std::fmt::Debug for Deployment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Deployment")
            .field("config", &self.config)
            .field("ctx", &self.ctx)
            .finish_non_exhaustive()
    }
}

pub fn static_origin_host(bucket: &str) -> String {
    format!("{bucket}.s3.amazonaws.com")
}

fn backend_host(backend_url: &str) -> DeployResult<String> {
    let parsed = url::Url::parse(backend_url).map_err(|err| DeployError::BackendUrl {
        url: backend_url.to_string(),
        source: Some(err),
    })?;
    parsed
        .host_str()
        .map(str::to_string)
        .ok_or_else(|| DeployError::BackendUrl {
            url: backend_url.to_string(),
            source: None,
        })
}

impl Deployment {
    pub fn new(config: DeployConfig, provisioners: Provisioners) -> DeployResult<Self> {
        config.validate()?;
        let ctx = DeployContext::from_config(&config);
        let builder: Arc<dyn ApplicationBuilder> = match &provisioners.builder {
            Some(builder) => builder.clone(),
            None => Arc::new(CommandBuilder::from_argv(&config.build_command)?),
        };
        Ok(Self {
            config,
            ctx,
            builder,
            provisioners,
        })
    }

    pub fn context(&self) -> &DeployContext {
        &self.ctx
    }

    pub fn config(&self) -> &DeployConfig {
        &self.config
    }

    pub fn assemble_manifest(&self) -> DeployResult<BuildManifest> {
        let pages = read_pages_manifest(&self.ctx.pages_manifest())?;
        let public_files = list_public_files(&self.ctx.public_dir())?;
        let manifest = ManifestAssembler::new(self.config.router.clone())
            .assemble(&pages, public_files.as_slice())?;
        Ok(manifest)
    }

    fn uploads(&self, manifest: &BuildManifest) -> Vec<Upload> {
        let mut uploads = vec![
            Upload::Dir {
                dir: self.ctx.next_static_dir(),
                key_prefix: "_next/static".to_string(),
            },
            Upload::Dir {
                dir: self.ctx.static_dir(),
                key_prefix: "static".to_string(),
            },
            Upload::Dir {
                dir: self.ctx.public_dir(),
                key_prefix: "public".to_string(),
            },
        ];
        let serverless = self.ctx.serverless_dir();
        uploads.extend(manifest.pages.html.values().map(|page| Upload::File {
            file: serverless.join(page),
            key: format!(
                "{STATIC_PAGES_PREFIX}{}",
                page.strip_prefix("pages/").unwrap_or(page)
            ),
        }));
        uploads
    }

    fn function_inputs(&self) -> FunctionInputs {
        let edge = &self.config.edge_function;
        FunctionInputs {
            description: edge.description.clone(),
            handler: edge.handler.clone(),
            code: self.ctx.edge_bundle().to_path_buf(),
            role: FunctionRole {
                service: edge.role_services.clone(),
                policy: RolePolicy {
                    arn: edge.policy_arn.clone(),
                },
            },
        }
    }

    fn distribution_inputs(
        &self,
        backend_url: &str,
        bucket_name: &str,
        function_version: &str,
    ) -> DistributionInputs {
        let path_patterns = STATIC_PATH_PATTERNS
            .iter()
            .map(|pattern| {
                (
                    pattern.to_string(),
                    CacheBehavior {
                        ttl: self.config.static_ttl,
                    },
                )
            })
            .collect();
        DistributionInputs {
            defaults: DistributionDefaults {
                ttl: self.config.default_ttl,
                lambda_at_edge: BTreeMap::from([(
                    ORIGIN_REQUEST_EVENT.to_string(),
                    function_version.to_string(),
                )]),
            },
            origins: vec![
                DistributionOrigin::Url(backend_url.to_string()),
                DistributionOrigin::Bucket {
                    url: format!("http://{}", static_origin_host(bucket_name)),
                    private: true,
                    path_patterns,
                },
            ],
        }
    }

    /// Runs every stage in order. The first failure aborts; nothing already
    /// provisioned is rolled back.
    #[tracing::instrument(level = "info", skip(self), fields(source = %self.ctx.source_root().display()))]
    pub async fn deploy(&self) -> DeployResult<DeploymentOutputs> {
        let p = &self.provisioners;

        self.builder.build(&self.ctx).await?;
        tracing::info!("build finished");

        let mut manifest = self.assemble_manifest()?;
        tracing::info!(
            html = manifest.pages.html.len(),
            non_dynamic = manifest.pages.ssr.non_dynamic.len(),
            dynamic = manifest.pages.ssr.dynamic.len(),
            public_files = manifest.public_files.len(),
            "manifest assembled"
        );

        tokio::try_join!(
            empty_dir(self.ctx.ssr_bundle()),
            empty_dir(self.ctx.edge_bundle())
        )?;
        build_ssr_bundle(&self.ctx, &self.config, &manifest).await?;

        let bucket = p
            .bucket
            .deploy(&BucketInputs {
                accelerated: self.config.bucket_accelerated,
            })
            .await?;
        tracing::info!(bucket = %bucket.name, "bucket ready");

        let uploads = self.uploads(&manifest);
        try_join_all(uploads.iter().map(|upload| p.bucket.upload(upload))).await?;
        tracing::info!(count = uploads.len(), "assets uploaded");

        let backend = p
            .backend
            .deploy(&BackendInputs {
                code: CodeSource {
                    src: self.ctx.ssr_bundle().to_path_buf(),
                },
            })
            .await?;
        tracing::info!(url = %backend.url, "backend ready");

        manifest.set_origins(backend_host(&backend.url)?, static_origin_host(&bucket.name));
        build_edge_bundle(&self.ctx, &self.config, &manifest).await?;

        let function = p.function.deploy(&self.function_inputs()).await?;
        let published = p.function.publish_version().await?;
        let edge_function_version = format!("{}:{}", function.arn, published.version);
        tracing::info!(function = %edge_function_version, "edge function published");

        let distribution = p
            .distribution
            .deploy(&self.distribution_inputs(&backend.url, &bucket.name, &edge_function_version))
            .await?;
        tracing::info!("distribution deployed");

        Ok(DeploymentOutputs {
            manifest,
            bucket_name: bucket.name,
            backend_url: backend.url,
            edge_function_version,
            distribution,
        })
    }

    #[tracing::instrument(level = "info", skip(self))]
    pub async fn remove(&self) -> DeployResult<()> {
        let p = &self.provisioners;
        p.distribution.remove().await?;
        p.backend.remove().await?;
        p.bucket.remove().await?;
        Ok(())
    }
}
