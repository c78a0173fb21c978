#![allow(dead_code)]

use indexmap::IndexMap;
use ssr_manifest::manifest::{BuildManifest, ManifestAssembler};
use ssr_manifest::router::RouterOptions;

/// Route → output file, in the order the build step enumerates them.
pub const PAGES_MANIFEST: &str = r#"{
  "/": "pages/index.js",
  "/_app": "pages/_app.js",
  "/_document": "pages/_document.js",
  "/404": "pages/404.js",
  "/terms": "pages/terms.html",
  "/about": "pages/about.html",
  "/customers/new": "pages/customers/new.js",
  "/blog/[id]": "pages/blog/[id].js",
  "/customers/[customer]": "pages/customers/[customer].js",
  "/customers/[customer]/[post]": "pages/customers/[customer]/[post].js",
  "/customers/[customer]/profile": "pages/customers/[customer]/profile.js",
  "/[root]": "pages/[root].js"
}"#;

pub const PUBLIC_FILES: [&str; 2] = ["favicon.ico", "sw.js"];

pub fn fixture_pages() -> IndexMap<String, String> {
    serde_json::from_str(PAGES_MANIFEST).expect("fixture pages manifest should parse")
}

pub fn fixture_manifest_with(options: RouterOptions) -> BuildManifest {
    ManifestAssembler::new(options)
        .assemble(&fixture_pages(), PUBLIC_FILES.as_slice())
        .expect("fixture should assemble")
}

pub fn fixture_manifest() -> BuildManifest {
    fixture_manifest_with(RouterOptions::default())
}
