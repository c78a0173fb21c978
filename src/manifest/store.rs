use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use indexmap::IndexMap;

use super::{BuildManifest, ManifestError, ManifestResult};

pub const MANIFEST_FILE_NAME: &str = "manifest.json";

pub fn read_pages_manifest(path: &Path) -> ManifestResult<IndexMap<String, String>> {
    let raw = fs::read_to_string(path).map_err(|source| ManifestError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    parse_pages_manifest(&raw, path)
}

pub fn parse_pages_manifest(raw: &str, origin: &Path) -> ManifestResult<IndexMap<String, String>> {
    serde_json::from_str(raw).map_err(|source| ManifestError::Parse {
        path: origin.to_path_buf(),
        source,
    })
}

/// Lists public asset names sorted by name. A missing directory yields an
/// empty list; other I/O failures are errors.
pub fn list_public_files(dir: &Path) -> ManifestResult<Vec<String>> {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(err) if err.kind() == ErrorKind::NotFound => {
            tracing::warn!(dir = %dir.display(), "public directory not found; no public files");
            return Ok(Vec::new());
        }
        Err(source) => {
            return Err(ManifestError::Read {
                path: dir.to_path_buf(),
                source,
            });
        }
    };

    let mut names = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|source| ManifestError::Read {
            path: dir.to_path_buf(),
            source,
        })?;
        names.push(entry.file_name().to_string_lossy().into_owned());
    }
    names.sort();
    Ok(names)
}

/// Pretty JSON with a trailing newline; identical manifests render to
/// identical bytes.
pub fn to_json_string(manifest: &BuildManifest) -> ManifestResult<String> {
    let mut out = serde_json::to_string_pretty(manifest)?;
    out.push('\n');
    Ok(out)
}

pub fn read_manifest(path: &Path) -> ManifestResult<BuildManifest> {
    let raw = fs::read_to_string(path).map_err(|source| ManifestError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&raw).map_err(|source| ManifestError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

pub fn write_manifest(path: &Path, manifest: &BuildManifest) -> ManifestResult<()> {
    let json = to_json_string(manifest)?;
    fs::write(path, json).map_err(|source| ManifestError::Write {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::manifest::DynamicPage;

    #[test]
    fn manifest_round_trips_through_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(MANIFEST_FILE_NAME);

        let mut manifest = BuildManifest::default();
        manifest
            .pages
            .ssr
            .non_dynamic
            .insert("/customers/new".into(), "pages/customers/new.js".to_string());
        manifest.pages.ssr.dynamic.insert(
            "/blog/:id".into(),
            DynamicPage {
                file: "pages/blog/[id].js".into(),
                regex: r"^\/blog\/([^\/]+?)(?:\/)?$".into(),
            },
        );

        write_manifest(&path, &manifest).unwrap();
        let raw = fs::read_to_string(&path).unwrap();
        assert!(raw.contains(r#""regex": "^\\/blog\\/([^\\/]+?)(?:\\/)?$""#));

        let loaded = read_manifest(&path).unwrap();
        assert_eq!(loaded, manifest);
    }

    #[test]
    fn missing_pages_manifest_is_a_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_pages_manifest(&dir.path().join("pages-manifest.json"))
            .expect_err("missing file must fail");
        assert!(matches!(err, ManifestError::Read { .. }));
    }

    #[test]
    fn pages_manifest_keeps_document_order() {
        let raw = r#"{ "/zeta": "pages/zeta.js", "/": "pages/index.js", "/blog/[id]": "pages/blog/[id].js", "/about": "pages/about.html" }"#;
        let pages = parse_pages_manifest(raw, Path::new("pages-manifest.json")).unwrap();
        assert_eq!(
            pages.keys().map(String::as_str).collect::<Vec<_>>(),
            ["/zeta", "/", "/blog/[id]", "/about"]
        );

        let value: serde_json::Value = serde_json::from_str(raw).unwrap();
        let keys: Vec<_> = value.as_object().unwrap().keys().cloned().collect();
        assert_eq!(keys, ["/zeta", "/", "/blog/[id]", "/about"]);
    }

    #[test]
    fn invalid_pages_manifest_is_a_parse_error() {
        let err = parse_pages_manifest("[1, 2]", Path::new("pages-manifest.json"))
            .expect_err("array must fail");
        assert!(matches!(err, ManifestError::Parse { .. }));
    }

    #[test]
    fn public_files_are_sorted_and_missing_dir_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        assert!(list_public_files(&dir.path().join("public")).unwrap().is_empty());

        let public = dir.path().join("public");
        fs::create_dir(&public).unwrap();
        fs::write(public.join("sw.js"), "").unwrap();
        fs::write(public.join("favicon.ico"), "").unwrap();
        assert_eq!(
            list_public_files(&public).unwrap(),
            vec!["favicon.ico".to_string(), "sw.js".to_string()]
        );
    }
}
