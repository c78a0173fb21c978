use indexmap::IndexMap;

use crate::path::trim_trailing_slash;
use crate::pattern::{
    PatternError, RoutePattern, RouteToken, compare_specificity, compile_pattern,
    is_dynamic_route, parse_route, patterns_overlap,
};
use crate::router::{MatchOrder, RouterOptions};

use super::{AssembleError, AssembleResult, BuildManifest, DynamicPage};

#[derive(Debug, Clone, Default)]
pub struct ManifestAssembler {
    options: RouterOptions,
}

struct DynamicEntry {
    route: String,
    positional: String,
    pattern: RoutePattern,
    page: DynamicPage,
}

impl ManifestAssembler {
    pub fn new(options: RouterOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &RouterOptions {
        &self.options
    }

    #[tracing::instrument(level = "debug", skip_all, fields(routes = pages.len() as u64, public = public_files.len() as u64))]
    pub fn assemble<S: AsRef<str>>(
        &self,
        pages: &IndexMap<String, String>,
        public_files: &[S],
    ) -> AssembleResult<BuildManifest> {
        let mut manifest = BuildManifest::default();
        let mut dynamic: Vec<DynamicEntry> = Vec::new();

        for (route, file) in pages.iter() {
            if file.ends_with(self.options.static_extension.as_str()) {
                let key = claim_literal(&manifest, route)?;
                manifest.pages.html.insert(key, file.clone());
                continue;
            }

            let parsed = parse_route(route).map_err(|source| AssembleError::Pattern {
                route: route.to_string(),
                source,
            })?;

            if !is_dynamic_route(route) {
                let key = claim_literal(&manifest, route)?;
                manifest.pages.ssr.non_dynamic.insert(key, file.clone());
                continue;
            }

            let entry = self.compile_dynamic(route, file, &parsed)?;
            if let Some(existing) = dynamic
                .iter()
                .find(|other| other.pattern.same_shape(&entry.pattern))
            {
                return Err(AssembleError::ConflictingDynamicRoute {
                    route: route.to_string(),
                    existing: existing.route.clone(),
                });
            }
            if let Some(other) = dynamic
                .iter()
                .find(|other| patterns_overlap(&other.pattern, &entry.pattern))
            {
                tracing::debug!(
                    route = %route,
                    overlaps = %other.route,
                    "dynamic routes overlap; manifest order decides"
                );
            }
            dynamic.push(entry);
        }

        if self.options.match_order == MatchOrder::SpecificFirst {
            dynamic.sort_by(|a, b| compare_specificity(&a.pattern, &b.pattern));
        }
        manifest.pages.ssr.dynamic = dynamic
            .into_iter()
            .map(|entry| (entry.positional, entry.page))
            .collect();

        for name in public_files {
            let name = name.as_ref();
            if name.is_empty() || name.contains('/') {
                return Err(AssembleError::InvalidPublicFile {
                    name: name.to_string(),
                });
            }
            manifest
                .public_files
                .insert(format!("/{name}"), name.to_string());
        }

        tracing::debug!(
            html = manifest.pages.html.len(),
            non_dynamic = manifest.pages.ssr.non_dynamic.len(),
            dynamic = manifest.pages.ssr.dynamic.len(),
            public = manifest.public_files.len(),
            "assembled build manifest"
        );

        Ok(manifest)
    }

    fn compile_dynamic(
        &self,
        route: &str,
        file: &str,
        parsed: &RoutePattern,
    ) -> AssembleResult<DynamicEntry> {
        let pattern_error = |source| AssembleError::Pattern {
            route: route.to_string(),
            source,
        };

        // A literal containing ':' would read back as a parameter.
        if let Some(RouteToken::Literal(segment)) = parsed
            .tokens
            .iter()
            .find(|t| matches!(t, RouteToken::Literal(lit) if lit.contains(':')))
        {
            return Err(pattern_error(PatternError::MixedParameterLiteralSyntax {
                segment: segment.clone(),
            }));
        }

        let positional = parsed.positional_path();
        let compiled = compile_pattern(&positional).map_err(pattern_error)?;

        Ok(DynamicEntry {
            route: route.to_string(),
            positional,
            pattern: compiled.pattern().clone(),
            page: DynamicPage {
                file: file.to_string(),
                regex: compiled.source().to_string(),
            },
        })
    }
}

/// `/about/` and `/about` share one key; a second claim is a conflict.
fn claim_literal(manifest: &BuildManifest, route: &str) -> AssembleResult<String> {
    let key = trim_trailing_slash(route).unwrap_or(route);
    if manifest.pages.html.contains_key(key) || manifest.pages.ssr.non_dynamic.contains_key(key) {
        return Err(AssembleError::ConflictingRoute {
            route: route.to_string(),
            existing: key.to_string(),
        });
    }
    Ok(key.to_string())
}
