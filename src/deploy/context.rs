use std::path::{Path, PathBuf};

use super::DeployConfig;

const NEXT_DIR: &str = ".next";
const SERVERLESS_DIR: &str = "serverless";
const PAGES_MANIFEST_FILE: &str = "pages-manifest.json";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeployContext {
    source_root: PathBuf,
    ssr_bundle: PathBuf,
    edge_bundle: PathBuf,
}

impl DeployContext {
    pub fn new(
        source_root: impl Into<PathBuf>,
        ssr_bundle: impl AsRef<Path>,
        edge_bundle: impl AsRef<Path>,
    ) -> Self {
        let source_root = source_root.into();
        Self {
            ssr_bundle: source_root.join(ssr_bundle),
            edge_bundle: source_root.join(edge_bundle),
            source_root,
        }
    }

    pub fn from_config(config: &DeployConfig) -> Self {
        Self::new(
            config.source_root.clone(),
            &config.ssr_bundle_dir,
            &config.edge_bundle_dir,
        )
    }

    pub fn source_root(&self) -> &Path {
        &self.source_root
    }

    pub fn ssr_bundle(&self) -> &Path {
        &self.ssr_bundle
    }

    pub fn edge_bundle(&self) -> &Path {
        &self.edge_bundle
    }

    /// Resolves `rel` against the source root; absolute paths pass through.
    pub fn source_path(&self, rel: impl AsRef<Path>) -> PathBuf {
        self.source_root.join(rel)
    }

    pub fn serverless_dir(&self) -> PathBuf {
        self.source_root.join(NEXT_DIR).join(SERVERLESS_DIR)
    }

    pub fn pages_manifest(&self) -> PathBuf {
        self.serverless_dir().join(PAGES_MANIFEST_FILE)
    }

    pub fn next_static_dir(&self) -> PathBuf {
        self.source_root.join(NEXT_DIR).join("static")
    }

    pub fn static_dir(&self) -> PathBuf {
        self.source_root.join("static")
    }

    pub fn public_dir(&self) -> PathBuf {
        self.source_root.join("public")
    }
}
