//! Execution context detection
//!
//! Decides whether the running binary belongs to a durable package install
//! or to a transient execution cache, and which directory the asset catalog
//! should be read from. Symlinks are only safe to create into the former.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::layout::Layout;
use crate::project;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecutionContext {
    pub is_ephemeral: bool,
    /// Durable package root, present only when not ephemeral
    pub resolved_source_path: Option<PathBuf>,
    /// Package root derived from the running binary, used to read the
    /// catalog when nothing durable was found
    pub fallback_source_path: PathBuf,
}

impl ExecutionContext {
    /// Directory the asset catalog is read from
    pub fn catalog_source(&self) -> &Path {
        self.resolved_source_path
            .as_deref()
            .unwrap_or(&self.fallback_source_path)
    }
}

/// Detect the execution context for a binary located at `self_path`
pub fn detect(self_path: &Path, project_root: &Path, layout: &Layout) -> ExecutionContext {
    let self_root = self_package_root(self_path, layout);

    if layout.is_dependency_path(self_path) && !layout.is_ephemeral_path(self_path) {
        debug!(root = %self_root.display(), "running from a permanent install");
        return ExecutionContext {
            is_ephemeral: false,
            resolved_source_path: Some(self_root.clone()),
            fallback_source_path: self_root,
        };
    }

    if let Some(local) = find_local_install(project_root, layout) {
        debug!(root = %local.display(), "using the project's installed copy");
        return ExecutionContext {
            is_ephemeral: false,
            resolved_source_path: Some(local),
            fallback_source_path: self_root,
        };
    }

    debug!(root = %self_root.display(), "running from a transient location");
    ExecutionContext {
        is_ephemeral: true,
        resolved_source_path: None,
        fallback_source_path: self_root,
    }
}

/// Package root owning `self_path`, or the directory holding it
fn self_package_root(self_path: &Path, layout: &Layout) -> PathBuf {
    project::find_package_root(self_path, layout).unwrap_or_else(|| {
        if self_path.is_dir() {
            self_path.to_path_buf()
        } else {
            self_path
                .parent()
                .map_or_else(|| self_path.to_path_buf(), Path::to_path_buf)
        }
    })
}

/// Installed copy of this package in the project's dependency tree
fn find_local_install(project_root: &Path, layout: &Layout) -> Option<PathBuf> {
    let candidate = project_root
        .join(&layout.dependency_dir)
        .join(&layout.package_name);

    if !project::is_package_root(&candidate, layout) {
        return None;
    }

    Some(dunce::canonicalize(&candidate).unwrap_or(candidate))
}
