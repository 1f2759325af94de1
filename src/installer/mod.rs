//! Link/copy installer
//!
//! This module handles:
//! - Refusing to install into the package's own source tree
//! - Choosing symlink or copy mode under the ephemeral-context policy
//! - An upfront collision check across every scope before any write
//! - Replacing colliding entries under `force`, then writing every entry
//!
//! The collision check is all-or-nothing; the write phase is not. An I/O
//! error while writing stops immediately and leaves the entries already
//! written in place.

mod mode;

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::catalog::{Catalog, CatalogEntry, EntryKind};
use crate::common::fs::{copy_dir_recursive, create_relative_symlink, probe, remove_entry};
use crate::config::EphemeralPolicy;
use crate::context::ExecutionContext;
use crate::error::{PromptlinkError, Result};
use crate::layout::{Layout, Scope};
use crate::path_utils::display_relative;
use crate::project;

pub use mode::{InstallMode, ModeDecision, resolve_mode};

#[derive(Debug, Clone, Copy, Default)]
pub struct InstallOptions {
    /// Copy entries instead of linking them
    pub copy: bool,
    /// Replace entries that already exist in the managed directory
    pub force: bool,
    pub policy: EphemeralPolicy,
    /// Caller confirmed copying under `EphemeralPolicy::RequireConfirm`
    pub confirmed: bool,
}

/// Outcome of installing one scope
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallReport {
    pub scope: Scope,
    pub managed_dir: PathBuf,
    pub mode: InstallMode,
    pub files: usize,
    pub directories: usize,
    /// Names that existed before and were replaced under `force`
    pub replaced: Vec<String>,
    /// A symlink install was turned into a copy by the ephemeral policy
    pub downgraded: bool,
}

impl InstallReport {
    pub fn total(&self) -> usize {
        self.files + self.directories
    }
}

/// Writes for one scope, computed before anything is touched
#[derive(Debug)]
struct ScopePlan {
    scope: Scope,
    managed_dir: PathBuf,
    entries: Vec<CatalogEntry>,
    collisions: Vec<String>,
}

/// Installer for a single project
pub struct Installer<'a> {
    project_root: &'a Path,
    layout: &'a Layout,
    context: &'a ExecutionContext,
}

impl<'a> Installer<'a> {
    pub fn new(project_root: &'a Path, layout: &'a Layout, context: &'a ExecutionContext) -> Self {
        Self {
            project_root,
            layout,
            context,
        }
    }

    /// Install `catalog` into every scope in `scopes`, in order
    pub fn install(
        &self,
        catalog: &Catalog,
        scopes: &[Scope],
        options: &InstallOptions,
    ) -> Result<Vec<InstallReport>> {
        self.ensure_not_self_install()?;

        let decision = resolve_mode(
            self.context.is_ephemeral,
            options.copy,
            options.policy,
            options.confirmed,
        )?;

        let plans = scopes
            .iter()
            .map(|&scope| self.plan_scope(catalog, scope))
            .collect::<Result<Vec<_>>>()?;

        let collisions: Vec<String> = plans
            .iter()
            .flat_map(|plan| {
                plan.collisions.iter().map(move |name| {
                    display_relative(self.project_root, &plan.managed_dir.join(name))
                })
            })
            .collect();

        if !collisions.is_empty() && !options.force {
            return Err(PromptlinkError::Collision { names: collisions });
        }

        let mut completed = 0;
        let mut reports = Vec::with_capacity(plans.len());
        for plan in plans {
            reports.push(self.execute(plan, decision, &mut completed)?);
        }

        Ok(reports)
    }

    fn ensure_not_self_install(&self) -> Result<()> {
        if project::is_package_root(self.project_root, self.layout) {
            return Err(PromptlinkError::SelfInstall {
                path: self.project_root.display().to_string(),
            });
        }
        Ok(())
    }

    fn plan_scope(&self, catalog: &Catalog, scope: Scope) -> Result<ScopePlan> {
        let managed_dir = self.layout.managed_path(self.project_root, scope);
        let entries = catalog.for_scope(scope).entries;

        if let Some(blocker) = self.non_directory_ancestor(&managed_dir) {
            return Err(PromptlinkError::ManagedDirBlocked {
                path: display_relative(self.project_root, &blocker),
            });
        }

        let mut collisions = Vec::new();
        if managed_dir.is_dir() {
            for entry in &entries {
                let target = managed_dir.join(&entry.name);
                let found = probe(&target).map_err(|e| PromptlinkError::FileReadFailed {
                    path: target.display().to_string(),
                    reason: e.to_string(),
                })?;
                if found.is_some() {
                    collisions.push(entry.name.clone());
                }
            }
        }

        Ok(ScopePlan {
            scope,
            managed_dir,
            entries,
            collisions,
        })
    }

    /// First path from the project root down to `managed_dir` that exists
    /// but is not a directory
    fn non_directory_ancestor(&self, managed_dir: &Path) -> Option<PathBuf> {
        let relative = managed_dir.strip_prefix(self.project_root).ok()?;
        let mut current = self.project_root.to_path_buf();
        for component in relative.components() {
            current.push(component);
            if !current.exists() {
                return None;
            }
            if !current.is_dir() {
                return Some(current);
            }
        }
        None
    }

    fn execute(
        &self,
        plan: ScopePlan,
        decision: ModeDecision,
        completed: &mut usize,
    ) -> Result<InstallReport> {
        fs::create_dir_all(&plan.managed_dir).map_err(|e| PromptlinkError::FileWriteFailed {
            path: plan.managed_dir.display().to_string(),
            reason: e.to_string(),
        })?;

        for name in &plan.collisions {
            let target = plan.managed_dir.join(name);
            remove_entry(&target).map_err(|e| partial_failure(&target, *completed, &e))?;
            debug!(target = %target.display(), "removed existing entry");
        }

        let mut report = InstallReport {
            scope: plan.scope,
            managed_dir: plan.managed_dir,
            mode: decision.mode,
            files: 0,
            directories: 0,
            replaced: plan.collisions,
            downgraded: decision.downgraded,
        };

        for entry in &plan.entries {
            let target = report.managed_dir.join(&entry.name);
            write_entry(entry, &target, decision.mode)
                .map_err(|e| partial_failure(&target, *completed, &e))?;
            *completed += 1;

            match entry.kind {
                EntryKind::File => report.files += 1,
                EntryKind::Directory => report.directories += 1,
            }
            debug!(
                source = %entry.source_path.display(),
                target = %target.display(),
                mode = %decision.mode,
                "installed entry"
            );
        }

        info!(
            scope = plan.scope.label(),
            files = report.files,
            directories = report.directories,
            mode = %report.mode,
            "install finished"
        );

        Ok(report)
    }
}

fn write_entry(entry: &CatalogEntry, target: &Path, mode: InstallMode) -> io::Result<()> {
    match (mode, entry.kind) {
        (InstallMode::Symlink, kind) => {
            create_relative_symlink(&entry.source_path, target, kind == EntryKind::Directory)
        }
        (InstallMode::Copy, EntryKind::File) => fs::copy(&entry.source_path, target).map(|_| ()),
        (InstallMode::Copy, EntryKind::Directory) => copy_dir_recursive(&entry.source_path, target),
    }
}

fn partial_failure(path: &Path, completed: usize, e: &io::Error) -> PromptlinkError {
    PromptlinkError::PartialFailure {
        path: path.display().to_string(),
        completed,
        reason: e.to_string(),
    }
}
