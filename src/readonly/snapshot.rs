use hashbrown::HashMap as FastHashMap;
use serde::Serialize;

use crate::manifest::BuildManifest;
use crate::matcher::{DynamicEntry, find_dynamic};
use crate::path::{trim_trailing_slash, validate_request_path};
use crate::pattern::compile_pattern;
use crate::router::RouterOptions;
use crate::types::RouteParams;

use super::{ReadOnlyError, ReadOnlyResult};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum Resolution {
    Page { file: String },
    PublicFile { file: String },
    Render { file: String },
    DynamicRender {
        route: String,
        file: String,
        params: RouteParams,
    },
}

impl Resolution {
    pub fn file(&self) -> &str {
        match self {
            Resolution::Page { file }
            | Resolution::PublicFile { file }
            | Resolution::Render { file }
            | Resolution::DynamicRender { file, .. } => file,
        }
    }

    pub fn is_static(&self) -> bool {
        matches!(self, Resolution::Page { .. } | Resolution::PublicFile { .. })
    }
}

#[derive(Debug, Clone, Default)]
pub struct RouteTable {
    pub(crate) html: FastHashMap<Box<str>, Box<str>>,
    pub(crate) public_files: FastHashMap<Box<str>, Box<str>>,
    pub(crate) non_dynamic: FastHashMap<Box<str>, Box<str>>,
    pub(crate) dynamic: Vec<DynamicEntry>,
    strict_trailing_slash: bool,
    decode_params: bool,
}

fn copy_literal_map<'a>(
    entries: impl Iterator<Item = (&'a String, &'a String)>,
) -> FastHashMap<Box<str>, Box<str>> {
    entries
        .map(|(route, file)| (Box::from(route.as_str()), Box::from(file.as_str())))
        .collect()
}

impl RouteTable {
    #[tracing::instrument(level = "debug", skip_all, fields(routes = manifest.route_count() as u64))]
    pub fn from_manifest(
        manifest: &BuildManifest,
        options: &RouterOptions,
    ) -> ReadOnlyResult<Self> {
        let mut dynamic = Vec::with_capacity(manifest.pages.ssr.dynamic.len());
        for (route, page) in manifest.pages.ssr.dynamic.iter() {
            let pattern = compile_pattern(route).map_err(|source| ReadOnlyError::InvalidEntry {
                route: route.to_string(),
                source,
            })?;
            if pattern.source() != page.regex {
                return Err(ReadOnlyError::ManifestIntegrity {
                    route: route.to_string(),
                    stored: page.regex.clone(),
                    expected: pattern.source().to_string(),
                });
            }
            dynamic.push(DynamicEntry {
                route: route.as_str().into(),
                file: page.file.as_str().into(),
                pattern,
            });
        }

        Ok(Self {
            html: copy_literal_map(manifest.pages.html.iter()),
            public_files: copy_literal_map(manifest.public_files.iter()),
            non_dynamic: copy_literal_map(manifest.pages.ssr.non_dynamic.iter()),
            dynamic,
            strict_trailing_slash: options.strict_trailing_slash,
            decode_params: options.decode_params,
        })
    }

    pub fn len(&self) -> usize {
        self.html.len() + self.public_files.len() + self.non_dynamic.len() + self.dynamic.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn html_file(&self, route: &str) -> Option<&str> {
        self.html.get(route).map(|f| &**f)
    }

    pub fn public_file(&self, route: &str) -> Option<&str> {
        self.public_files.get(route).map(|f| &**f)
    }

    fn find_literal(&self, path: &str) -> Option<Resolution> {
        if let Some(file) = self.html.get(path) {
            return Some(Resolution::Page { file: file.to_string() });
        }
        if let Some(file) = self.public_files.get(path) {
            return Some(Resolution::PublicFile { file: file.to_string() });
        }
        self.non_dynamic
            .get(path)
            .map(|file| Resolution::Render { file: file.to_string() })
    }

    pub(crate) fn find_page(&self, route: &str) -> Option<Resolution> {
        if let Some(file) = self.html.get(route) {
            return Some(Resolution::Page { file: file.to_string() });
        }
        self.non_dynamic
            .get(route)
            .map(|file| Resolution::Render { file: file.to_string() })
    }

    #[tracing::instrument(level = "trace", skip(self, path), fields(path = %path))]
    pub fn find(&self, path: &str) -> ReadOnlyResult<Resolution> {
        validate_request_path(path)?;

        if let Some(hit) = self.find_literal(path) {
            return Ok(hit);
        }
        if !self.strict_trailing_slash {
            if let Some(hit) = trim_trailing_slash(path).and_then(|p| self.find_literal(p)) {
                return Ok(hit);
            }
        }

        if let Some((entry, params)) = find_dynamic(&self.dynamic, path, self.decode_params) {
            tracing::event!(tracing::Level::TRACE, route = %entry.route, "dynamic route matched");
            return Ok(Resolution::DynamicRender {
                route: entry.route.to_string(),
                file: entry.file.to_string(),
                params,
            });
        }

        Err(ReadOnlyError::RouteNotFound {
            path: path.to_string(),
        })
    }
}
