mod common;

use common::{fixture_manifest, fixture_manifest_with};
use ssr_manifest::path::PathError;
use ssr_manifest::readonly::{ReadOnlyError, Resolution, RouteTable};
use ssr_manifest::router::{MatchOrder, Router, RouterError, RouterOptions};
use std::sync::Arc;
use std::thread;

fn router() -> Router {
    Router::from_manifest(&fixture_manifest(), RouterOptions::default())
        .expect("router should load")
}

fn dynamic(resolution: &Resolution) -> (&str, &ssr_manifest::RouteParams) {
    match resolution {
        Resolution::DynamicRender { route, params, .. } => (route.as_str(), params),
        other => panic!("unexpected resolution: {other:?}"),
    }
}

#[test]
fn resolver_when_literal_and_pattern_match_then_specific_entry_wins() {
    let router = router();
    let hit = router.find("/customers/42/profile").expect("should resolve");
    let (route, params) = dynamic(&hit);
    assert_eq!(route, "/customers/:customer/profile");
    assert_eq!(hit.file(), "pages/customers/[customer]/profile.js");
    assert_eq!(params.get("customer").map(String::as_str), Some("42"));

    let hit = router.find("/customers/42/abc").expect("should resolve");
    let (route, params) = dynamic(&hit);
    assert_eq!(route, "/customers/:customer/:post");
    assert_eq!(params["post"], "abc");
}

#[test]
fn resolver_when_defined_first_then_build_order_decides() {
    let options = RouterOptions::builder()
        .match_order(MatchOrder::DefinedFirst)
        .build()
        .expect("options should build");
    let manifest = fixture_manifest_with(options.clone());
    let router = Router::from_manifest(&manifest, options).expect("router should load");
    let hit = router.find("/customers/42/profile").expect("should resolve");
    assert_eq!(dynamic(&hit).0, "/customers/:customer/:post");
}

#[test]
fn resolver_when_literal_sections_hit_then_no_pattern_runs() {
    let router = router();
    assert_eq!(
        router.find("/customers/new").expect("should resolve"),
        Resolution::Render {
            file: "pages/customers/new.js".to_string()
        }
    );
    assert_eq!(
        router.find("/terms").expect("should resolve"),
        Resolution::Page {
            file: "pages/terms.html".to_string()
        }
    );
    assert_eq!(
        router.find("/sw.js").expect("should resolve"),
        Resolution::PublicFile {
            file: "sw.js".to_string()
        }
    );
    assert_eq!(dynamic(&router.find("/hello").expect("should resolve")).0, "/:root");
    assert_eq!(
        router.find("/").expect("should resolve"),
        Resolution::Render {
            file: "pages/index.js".to_string()
        }
    );
}

#[test]
fn resolve_when_query_present_then_params_merge_with_path_priority() {
    let invocation = router()
        .resolve("/blog/hello%20world?id=ignored&page=2#comments")
        .expect("should resolve");
    assert_eq!(invocation.path, "/blog/hello%20world");
    assert_eq!(invocation.file(), "pages/blog/[id].js");
    assert_eq!(invocation.params["id"], "hello world");
    assert_eq!(invocation.params["page"], "2");
    assert!(!invocation.not_found);

    let json = serde_json::to_value(&invocation).expect("serialize");
    assert_eq!(json["resolution"]["kind"], "dynamicRender");
    assert_eq!(json["notFound"], false);
}

#[test]
fn resolve_when_nothing_matches_then_not_found_page() {
    let invocation = router().resolve("/a/b/c/d").expect("should fall back");
    assert!(invocation.not_found);
    assert_eq!(invocation.file(), "pages/404.js");
}

#[test]
fn resolve_when_no_not_found_page_then_error() {
    let mut manifest = fixture_manifest();
    manifest.pages.ssr.non_dynamic.shift_remove("/404");
    let router =
        Router::from_manifest(&manifest, RouterOptions::default()).expect("router should load");
    match router.resolve("/a/b/c/d") {
        Err(RouterError::RouteNotFound { path }) => assert_eq!(path, "/a/b/c/d"),
        other => panic!("unexpected result: {other:?}"),
    }
}

#[test]
fn resolve_when_path_invalid_then_path_error() {
    match router().resolve("blog/1") {
        Err(RouterError::Path(PathError::MissingLeadingSlash { input })) => {
            assert_eq!(input, "blog/1")
        }
        other => panic!("unexpected result: {other:?}"),
    }
}

#[test]
fn table_when_decode_disabled_then_raw_values() {
    let options = RouterOptions::builder()
        .decode_params(false)
        .build()
        .expect("options should build");
    let table =
        RouteTable::from_manifest(&fixture_manifest(), &options).expect("table should load");
    let hit = table.find("/blog/a%2Fb").expect("should resolve");
    assert_eq!(dynamic(&hit).1["id"], "a%2Fb");

    match table.find("/a/b/c/d") {
        Err(ReadOnlyError::RouteNotFound { path }) => assert_eq!(path, "/a/b/c/d"),
        other => panic!("unexpected result: {other:?}"),
    }
}

#[test]
fn router_when_shared_across_threads_then_consistent() {
    let router = Arc::new(router());
    let handles: Vec<_> = (0..8)
        .map(|i| {
            let router = Arc::clone(&router);
            thread::spawn(move || {
                let invocation = router
                    .resolve(&format!("/customers/{i}/profile"))
                    .expect("should resolve");
                invocation.params["customer"].clone()
            })
        })
        .collect();
    for (i, handle) in handles.into_iter().enumerate() {
        assert_eq!(handle.join().expect("thread should finish"), i.to_string());
    }
}
