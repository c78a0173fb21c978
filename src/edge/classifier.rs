use serde::Serialize;

use crate::manifest::BuildManifest;
use crate::path::split_request_uri;
use crate::readonly::RouteTable;
use crate::router::{RouterOptions, RouterResult};

/// Request prefixes served straight from the static origin.
pub const STATIC_PATH_PREFIXES: [&str; 3] = ["/_next/", "/static/", "/public/"];
pub const STATIC_PAGES_KEY_PREFIX: &str = "static-pages/";
pub const PUBLIC_KEY_PREFIX: &str = "public/";

const PAGES_DIR_PREFIX: &str = "pages/";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "origin", rename_all = "camelCase")]
pub enum OriginDecision {
    Static { key: String },
    Dynamic,
}

#[derive(Debug, Clone)]
pub struct OriginClassifier {
    table: RouteTable,
}

impl OriginClassifier {
    pub fn from_manifest(manifest: &BuildManifest) -> RouterResult<Self> {
        let table = RouteTable::from_manifest(manifest, &RouterOptions::default())?;
        Ok(Self { table })
    }

    pub fn from_table(table: RouteTable) -> Self {
        Self { table }
    }

    #[tracing::instrument(level = "trace", skip(self, uri), fields(uri = %uri))]
    pub fn classify(&self, uri: &str) -> OriginDecision {
        let (path, _) = split_request_uri(uri);

        if STATIC_PATH_PREFIXES
            .iter()
            .any(|prefix| path.starts_with(prefix))
        {
            return OriginDecision::Static {
                key: path[1..].to_string(),
            };
        }

        if let Some(file) = self.table.html_file(path) {
            let page = file.strip_prefix(PAGES_DIR_PREFIX).unwrap_or(file);
            return OriginDecision::Static {
                key: format!("{STATIC_PAGES_KEY_PREFIX}{page}"),
            };
        }

        if let Some(file) = self.table.public_file(path) {
            return OriginDecision::Static {
                key: format!("{PUBLIC_KEY_PREFIX}{file}"),
            };
        }

        OriginDecision::Dynamic
    }
}
