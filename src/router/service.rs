use serde::Serialize;
use std::path::Path;

use crate::manifest::{BuildManifest, read_manifest};
use crate::matcher::merge_query;
use crate::path::split_request_uri;
use crate::readonly::{ReadOnlyError, Resolution, RouteTable};
use crate::router::{RouterError, RouterOptions, RouterResult};
use crate::types::RouteParams;

/// The page a rendering function should run, with path and query
/// parameters merged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageInvocation {
    pub path: String,
    pub resolution: Resolution,
    pub params: RouteParams,
    /// Set when the request missed and a not-found page was substituted.
    pub not_found: bool,
}

impl PageInvocation {
    pub fn file(&self) -> &str {
        self.resolution.file()
    }
}

#[derive(Debug, Clone)]
pub struct Router {
    table: RouteTable,
    options: RouterOptions,
}

impl Router {
    pub fn from_manifest(manifest: &BuildManifest, options: RouterOptions) -> RouterResult<Self> {
        options.validate()?;
        let table = RouteTable::from_manifest(manifest, &options)?;
        tracing::debug!(routes = table.len(), "router loaded");
        Ok(Self { table, options })
    }

    pub fn load(path: &Path, options: RouterOptions) -> RouterResult<Self> {
        let manifest = read_manifest(path)?;
        Self::from_manifest(&manifest, options)
    }

    pub fn table(&self) -> &RouteTable {
        &self.table
    }

    pub fn options(&self) -> &RouterOptions {
        &self.options
    }

    pub fn find(&self, path: &str) -> RouterResult<Resolution> {
        Ok(self.table.find(path)?)
    }

    #[tracing::instrument(level = "trace", skip(self, uri), fields(uri = %uri))]
    pub fn resolve(&self, uri: &str) -> RouterResult<PageInvocation> {
        let (path, query) = split_request_uri(uri);

        let (resolution, not_found) = match self.table.find(path) {
            Ok(hit) => (hit, false),
            Err(ReadOnlyError::RouteNotFound { path }) => (self.not_found_page(&path)?, true),
            Err(err) => return Err(err.into()),
        };

        let mut params = match &resolution {
            Resolution::DynamicRender { params, .. } => params.clone(),
            _ => RouteParams::new(),
        };
        merge_query(&mut params, query);

        Ok(PageInvocation {
            path: path.to_string(),
            resolution,
            params,
            not_found,
        })
    }

    fn not_found_page(&self, path: &str) -> RouterResult<Resolution> {
        for route in &self.options.not_found_routes {
            if let Some(page) = self.table.find_page(route) {
                tracing::warn!(
                    path = %path,
                    fallback = %route,
                    "no route matched; serving not-found page"
                );
                return Ok(page);
            }
        }
        Err(RouterError::RouteNotFound {
            path: path.to_string(),
        })
    }
}
