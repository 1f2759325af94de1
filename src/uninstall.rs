//! Uninstaller
//!
//! Removes every catalog name present in a managed directory, whatever its
//! kind. When the catalog cannot be read, falls back to the names shipped
//! by earlier releases and removes those best-effort.
//!
//! Only names in the live catalog are found: an entry installed by an
//! older release and since renamed or dropped is left behind.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::catalog::Catalog;
use crate::common::fs::remove_entry;
use crate::error::{PromptlinkError, Result};
use crate::layout::{Layout, Scope};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UninstallReport {
    pub scope: Scope,
    pub managed_dir: PathBuf,
    pub removed: Vec<String>,
    /// Names came from the built-in list because the catalog was unreadable
    pub used_fallback: bool,
}

impl UninstallReport {
    pub fn nothing_removed(&self) -> bool {
        self.removed.is_empty()
    }
}

/// Remove this package's entries from one scope of `project_root`
///
/// With `catalog` set, removal errors abort the operation. Without it,
/// the fallback names are removed best-effort and errors are logged.
pub fn uninstall(
    project_root: &Path,
    layout: &Layout,
    catalog: Option<&Catalog>,
    scope: Scope,
) -> Result<UninstallReport> {
    let managed_dir = layout.managed_path(project_root, scope);
    let used_fallback = catalog.is_none();

    let names: Vec<String> = match catalog {
        Some(catalog) => catalog
            .for_scope(scope)
            .names()
            .map(str::to_string)
            .collect(),
        None => {
            warn!(
                scope = scope.label(),
                "asset catalog unavailable, removing previously known names"
            );
            layout.known_names.clone()
        }
    };

    let mut removed = Vec::new();
    if managed_dir.is_dir() {
        for name in names {
            let target = managed_dir.join(&name);
            match remove_entry(&target) {
                Ok(true) => {
                    debug!(target = %target.display(), "removed entry");
                    removed.push(name);
                }
                Ok(false) => {}
                Err(e) if used_fallback => {
                    warn!(target = %target.display(), error = %e, "could not remove entry");
                }
                Err(e) => {
                    return Err(PromptlinkError::FileWriteFailed {
                        path: target.display().to_string(),
                        reason: e.to_string(),
                    });
                }
            }
        }
    }

    if !removed.is_empty() {
        remove_dir_if_empty(&managed_dir);
        info!(scope = scope.label(), removed = removed.len(), "uninstall finished");
    }

    Ok(UninstallReport {
        scope,
        managed_dir,
        removed,
        used_fallback,
    })
}

fn remove_dir_if_empty(dir: &Path) {
    let is_empty = fs::read_dir(dir)
        .map(|mut d| d.next().is_none())
        .unwrap_or(false);
    if is_empty {
        if let Err(e) = fs::remove_dir(dir) {
            debug!(dir = %dir.display(), error = %e, "left empty managed directory");
        }
    }
}
