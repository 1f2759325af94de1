//! Operations module for installing, inspecting and uninstalling assets
//!
//! Every operation starts the same way: locate the project root from the
//! working directory, detect the execution context from the running
//! binary's location, then read the asset catalog fresh. `Invocation`
//! holds the first two; the catalog is re-read by each operation.

use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::catalog::{Catalog, read_catalog};
use crate::context::{self, ExecutionContext};
use crate::error::Result;
use crate::installer::{InstallOptions, InstallReport, Installer};
use crate::layout::{Layout, Scope};
use crate::project;
use crate::status::{InstallationStatus, inspect};
use crate::uninstall::{UninstallReport, uninstall};

/// Per-command view of the project and the package being run
#[derive(Debug, Clone)]
pub struct Invocation {
    pub project_root: PathBuf,
    pub context: ExecutionContext,
    pub layout: Layout,
}

impl Invocation {
    /// Locate the project from `cwd` and the package from `self_path`
    pub fn detect(cwd: &Path, self_path: &Path, layout: Layout) -> Self {
        let cwd = dunce::canonicalize(cwd).unwrap_or_else(|_| cwd.to_path_buf());
        let project_root = project::find_project_root(&cwd, &layout.manifest_file);
        let context = context::detect(self_path, &project_root, &layout);

        debug!(
            project = %project_root.display(),
            ephemeral = context.is_ephemeral,
            source = %context.catalog_source().display(),
            "resolved invocation"
        );

        Self {
            project_root,
            context,
            layout,
        }
    }

    pub fn catalog(&self) -> Result<Catalog> {
        read_catalog(self.context.catalog_source(), &self.layout)
    }

    pub fn install(&self, scopes: &[Scope], options: &InstallOptions) -> Result<Vec<InstallReport>> {
        let catalog = self.catalog()?;
        Installer::new(&self.project_root, &self.layout, &self.context).install(
            &catalog,
            scopes,
            options,
        )
    }

    /// Status of every scope
    pub fn status(&self) -> Result<Vec<InstallationStatus>> {
        let catalog = self.catalog()?;
        [Scope::Prompts, Scope::Skills]
            .into_iter()
            .map(|scope| inspect(&self.project_root, &self.layout, &catalog, scope))
            .collect()
    }

    /// Uninstall the given scopes, falling back to known names when the
    /// catalog cannot be read
    pub fn uninstall(&self, scopes: &[Scope]) -> Result<Vec<UninstallReport>> {
        let catalog = match self.catalog() {
            Ok(catalog) => Some(catalog),
            Err(e) => {
                warn!(error = %e, "could not read asset catalog");
                None
            }
        };

        scopes
            .iter()
            .map(|&scope| uninstall(&self.project_root, &self.layout, catalog.as_ref(), scope))
            .collect()
    }
}
