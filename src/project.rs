//! Project root lookup and package manifest identity

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::debug;

use crate::layout::Layout;

#[derive(Debug, Deserialize)]
struct ManifestIdentity {
    name: Option<String>,
}

/// Find the nearest ancestor of `start` (inclusive) that contains `marker`
///
/// Falls back to `start` itself when no ancestor up to the filesystem root
/// carries the marker.
pub fn find_project_root(start: &Path, marker: &str) -> PathBuf {
    start
        .ancestors()
        .find(|dir| dir.join(marker).is_file())
        .map_or_else(|| start.to_path_buf(), Path::to_path_buf)
}

/// Read the `"name"` field of the package manifest in `dir`
///
/// Missing or malformed manifests yield `None`.
pub fn manifest_name(dir: &Path, layout: &Layout) -> Option<String> {
    let path = dir.join(&layout.manifest_file);
    let content = fs::read_to_string(&path).ok()?;
    match serde_json::from_str::<ManifestIdentity>(&content) {
        Ok(identity) => identity.name,
        Err(e) => {
            debug!(path = %path.display(), error = %e, "ignoring unreadable manifest");
            None
        }
    }
}

/// Whether `dir` is the root of this package, judged by its manifest
pub fn is_package_root(dir: &Path, layout: &Layout) -> bool {
    manifest_name(dir, layout).as_deref() == Some(layout.package_name.as_str())
}

/// Nearest ancestor of `path` (inclusive) that is the root of this package
pub fn find_package_root(path: &Path, layout: &Layout) -> Option<PathBuf> {
    path.ancestors()
        .find(|dir| is_package_root(dir, layout))
        .map(Path::to_path_buf)
}
