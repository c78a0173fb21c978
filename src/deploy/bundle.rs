use futures_util::future::try_join_all;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::fs;

use crate::manifest::store::to_json_string;
use crate::manifest::{BuildManifest, MANIFEST_FILE_NAME, ManifestError};

use super::{DeployConfig, DeployContext, DeployError, DeployResult};

const HANDLER_ENTRY: &str = "index.js";

pub async fn empty_dir(dir: &Path) -> DeployResult<()> {
    match fs::remove_dir_all(dir).await {
        Ok(()) => {}
        Err(err) if err.kind() == ErrorKind::NotFound => {}
        Err(source) => {
            return Err(DeployError::Io {
                path: dir.to_path_buf(),
                source,
            });
        }
    }
    fs::create_dir_all(dir).await.map_err(DeployError::io_at(dir))
}

async fn copy_dir_all(from: &Path, to: &Path) -> DeployResult<()> {
    let mut pending = vec![(from.to_path_buf(), to.to_path_buf())];
    while let Some((src, dst)) = pending.pop() {
        fs::create_dir_all(&dst).await.map_err(DeployError::io_at(&dst))?;
        let mut entries = fs::read_dir(&src).await.map_err(DeployError::io_at(&src))?;
        while let Some(entry) = entries.next_entry().await.map_err(DeployError::io_at(&src))? {
            let source = entry.path();
            let target = dst.join(entry.file_name());
            let file_type = entry.file_type().await.map_err(DeployError::io_at(&source))?;
            if file_type.is_dir() {
                pending.push((source, target));
            } else {
                fs::copy(&source, &target).await.map_err(DeployError::io_at(&source))?;
            }
        }
    }
    Ok(())
}

/// Copies a file or a whole directory tree, creating parents as needed.
pub async fn copy_path(from: &Path, to: &Path) -> DeployResult<()> {
    let meta = fs::metadata(from).await.map_err(DeployError::io_at(from))?;
    if meta.is_dir() {
        return copy_dir_all(from, to).await;
    }
    if let Some(parent) = to.parent() {
        fs::create_dir_all(parent).await.map_err(DeployError::io_at(parent))?;
    }
    fs::copy(from, to).await.map_err(DeployError::io_at(from))?;
    Ok(())
}

pub async fn write_bundle_manifest(bundle: &Path, manifest: &BuildManifest) -> DeployResult<()> {
    let path = bundle.join(MANIFEST_FILE_NAME);
    let json = to_json_string(manifest)?;
    fs::write(&path, json)
        .await
        .map_err(|source| ManifestError::Write { path, source })?;
    Ok(())
}

async fn populate(
    bundle: &Path,
    copies: Vec<(PathBuf, PathBuf)>,
    manifest: &BuildManifest,
) -> DeployResult<()> {
    let copies = copies.iter().map(|(from, to)| copy_path(from, to));
    tokio::try_join!(try_join_all(copies), write_bundle_manifest(bundle, manifest))?;
    Ok(())
}

/// Fills the rendering bundle: compiled pages, handler, extra assets and
/// the manifest, copied concurrently.
#[tracing::instrument(level = "debug", skip_all, fields(bundle = %ctx.ssr_bundle().display()))]
pub async fn build_ssr_bundle(
    ctx: &DeployContext,
    config: &DeployConfig,
    manifest: &BuildManifest,
) -> DeployResult<()> {
    let bundle = ctx.ssr_bundle();
    let mut copies = vec![(ctx.serverless_dir().join("pages"), bundle.join("pages"))];
    if let Some(handler) = &config.ssr_handler {
        copies.push((ctx.source_path(handler), bundle.join(HANDLER_ENTRY)));
    }
    for asset in &config.ssr_assets {
        copies.push((ctx.source_path(&asset.from), bundle.join(&asset.to)));
    }
    populate(bundle, copies, manifest).await
}

#[tracing::instrument(level = "debug", skip_all, fields(bundle = %ctx.edge_bundle().display()))]
pub async fn build_edge_bundle(
    ctx: &DeployContext,
    config: &DeployConfig,
    manifest: &BuildManifest,
) -> DeployResult<()> {
    let bundle = ctx.edge_bundle();
    let copies = config
        .edge_handler
        .iter()
        .map(|handler| (ctx.source_path(handler), bundle.join(HANDLER_ENTRY)))
        .collect();
    populate(bundle, copies, manifest).await
}
