//! Installation state inspector
//!
//! Read-only reconciliation of the managed directory against the live
//! catalog. An entry counts as installed when something with its name is
//! present; a symlink is not checked against the catalog's source path,
//! so an unrelated link with a catalog name is classified as ours. Its
//! target is recorded in `EntryStatus::link_target` for display only.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use crate::catalog::{Catalog, EntryKind};
use crate::common::fs::{FoundEntry, probe};
use crate::error::{PromptlinkError, Result};
use crate::layout::{Layout, Scope};

/// What was found for one catalog entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Observed {
    Symlink,
    Copy,
    Absent,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryStatus {
    pub name: String,
    pub kind: EntryKind,
    pub observed: Observed,
    pub link_target: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InstallState {
    /// Managed directory does not exist
    NotInstalled,
    /// Managed directory exists but holds no catalog names
    NonePresent,
    FullySymlinked,
    FullyCopied,
    /// Both kinds present, or only some catalog names present
    Mixed,
}

impl fmt::Display for InstallState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            InstallState::NotInstalled => "not installed",
            InstallState::NonePresent => "none present",
            InstallState::FullySymlinked => "symlinked",
            InstallState::FullyCopied => "copied",
            InstallState::Mixed => "mixed",
        };
        f.write_str(text)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallationStatus {
    pub scope: Scope,
    pub managed_dir: PathBuf,
    pub state: InstallState,
    pub entries: Vec<EntryStatus>,
}

impl InstallationStatus {
    pub fn symlinked(&self) -> usize {
        self.count(Observed::Symlink)
    }

    pub fn copied(&self) -> usize {
        self.count(Observed::Copy)
    }

    pub fn absent(&self) -> usize {
        self.count(Observed::Absent)
    }

    /// Number of catalog entries present in any form
    pub fn present(&self) -> usize {
        self.entries.len() - self.absent()
    }

    fn count(&self, observed: Observed) -> usize {
        self.entries
            .iter()
            .filter(|e| e.observed == observed)
            .count()
    }
}

/// Inspect one scope of `project_root` against `catalog`
pub fn inspect(
    project_root: &Path,
    layout: &Layout,
    catalog: &Catalog,
    scope: Scope,
) -> Result<InstallationStatus> {
    let managed_dir = layout.managed_path(project_root, scope);
    let catalog = catalog.for_scope(scope);
    // A file at the managed path (or one of its parents) means nothing is installed
    let managed_dir_exists = managed_dir.is_dir();

    let mut entries = Vec::with_capacity(catalog.len());
    for entry in &catalog.entries {
        let target = managed_dir.join(&entry.name);
        let found = if managed_dir_exists {
            probe(&target).map_err(|e| PromptlinkError::FileReadFailed {
                path: target.display().to_string(),
                reason: e.to_string(),
            })?
        } else {
            None
        };

        let (observed, link_target) = match found {
            None => (Observed::Absent, None),
            Some(FoundEntry::Symlink) => (Observed::Symlink, fs::read_link(&target).ok()),
            Some(FoundEntry::Directory | FoundEntry::File) => (Observed::Copy, None),
        };

        entries.push(EntryStatus {
            name: entry.name.clone(),
            kind: entry.kind,
            observed,
            link_target,
        });
    }

    let state = classify(managed_dir_exists, &entries);

    Ok(InstallationStatus {
        scope,
        managed_dir,
        state,
        entries,
    })
}

fn classify(managed_dir_exists: bool, entries: &[EntryStatus]) -> InstallState {
    if !managed_dir_exists {
        return InstallState::NotInstalled;
    }

    let count = |observed: Observed| entries.iter().filter(|e| e.observed == observed).count();
    let symlinks = count(Observed::Symlink);
    let copies = count(Observed::Copy);
    let absent = count(Observed::Absent);

    if symlinks + copies == 0 {
        InstallState::NonePresent
    } else if absent > 0 || (symlinks > 0 && copies > 0) {
        InstallState::Mixed
    } else if symlinks > 0 {
        InstallState::FullySymlinked
    } else {
        InstallState::FullyCopied
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::read_catalog;
    use crate::installer::{InstallOptions, Installer};
    use crate::test_fixtures::PackageFixture;

    fn status_of(fixture: &PackageFixture, scope: Scope) -> InstallationStatus {
        let ctx = fixture.context();
        let catalog = read_catalog(ctx.catalog_source(), &fixture.layout).unwrap();
        inspect(&fixture.project, &fixture.layout, &catalog, scope).unwrap()
    }

    fn install(fixture: &PackageFixture, copy: bool) {
        let ctx = fixture.context();
        let catalog = read_catalog(ctx.catalog_source(), &fixture.layout).unwrap();
        let options = InstallOptions {
            copy,
            ..InstallOptions::default()
        };
        Installer::new(&fixture.project, &fixture.layout, &ctx)
            .install(&catalog, &[Scope::Prompts], &options)
            .unwrap();
    }

    #[test]
    fn test_not_installed_without_managed_dir() {
        let fixture = PackageFixture::installed();
        let status = status_of(&fixture, Scope::Prompts);
        assert_eq!(status.state, InstallState::NotInstalled);
        assert_eq!(status.absent(), 3);
    }

    #[test]
    fn test_none_present_with_foreign_files() {
        let fixture = PackageFixture::installed();
        std::fs::create_dir_all(fixture.prompts_dir()).unwrap();
        std::fs::write(fixture.prompts_dir().join("team.prompt.md"), "ours").unwrap();

        assert_eq!(
            status_of(&fixture, Scope::Prompts).state,
            InstallState::NonePresent
        );
    }

    #[cfg(unix)]
    #[test]
    fn test_fully_symlinked() {
        let fixture = PackageFixture::installed();
        install(&fixture, false);

        let status = status_of(&fixture, Scope::Prompts);
        assert_eq!(status.state, InstallState::FullySymlinked);
        assert_eq!(status.symlinked(), 3);
        assert!(status.entries.iter().all(|e| e.link_target.is_some()));
    }

    #[test]
    fn test_fully_copied() {
        let fixture = PackageFixture::installed();
        install(&fixture, true);

        let status = status_of(&fixture, Scope::Prompts);
        assert_eq!(status.state, InstallState::FullyCopied);
        assert_eq!(status.copied(), 3);
        assert_eq!(status.present(), 3);
    }

    #[test]
    fn test_partially_present_is_mixed() {
        let fixture = PackageFixture::installed();
        install(&fixture, true);
        std::fs::remove_file(fixture.prompts_dir().join("b.prompt.md")).unwrap();

        let status = status_of(&fixture, Scope::Prompts);
        assert_eq!(status.state, InstallState::Mixed);
        assert_eq!(status.absent(), 1);
    }

    #[cfg(unix)]
    #[test]
    fn test_links_and_copies_are_mixed() {
        let fixture = PackageFixture::installed();
        install(&fixture, false);
        let target = fixture.prompts_dir().join("a.prompt.md");
        std::fs::remove_file(&target).unwrap();
        std::fs::write(&target, "local edit").unwrap();

        let status = status_of(&fixture, Scope::Prompts);
        assert_eq!(status.state, InstallState::Mixed);
        assert_eq!(status.symlinked(), 2);
        assert_eq!(status.copied(), 1);
    }

    #[cfg(unix)]
    #[test]
    fn test_unrelated_symlink_with_catalog_name_counts_as_installed() {
        let fixture = PackageFixture::installed();
        let prompts = fixture.prompts_dir();
        std::fs::create_dir_all(&prompts).unwrap();
        std::os::unix::fs::symlink("/nowhere/else.md", prompts.join("a.prompt.md")).unwrap();

        let status = status_of(&fixture, Scope::Prompts);
        let entry = &status.entries[0];
        assert_eq!(entry.name, "a.prompt.md");
        assert_eq!(entry.observed, Observed::Symlink);
        assert_eq!(entry.link_target, Some(PathBuf::from("/nowhere/else.md")));
        assert_eq!(status.state, InstallState::Mixed);
    }

    #[test]
    fn test_file_at_managed_path_is_not_installed() {
        let fixture = PackageFixture::installed();
        std::fs::create_dir_all(fixture.project.join(".github")).unwrap();
        std::fs::write(fixture.prompts_dir(), "not a directory").unwrap();

        let status = status_of(&fixture, Scope::Prompts);
        assert_eq!(status.state, InstallState::NotInstalled);
        assert_eq!(status.absent(), 3);
    }

    #[test]
    fn test_file_at_parent_of_managed_path_is_not_installed() {
        let fixture = PackageFixture::installed();
        std::fs::write(fixture.project.join(".github"), "not a directory").unwrap();

        assert_eq!(
            status_of(&fixture, Scope::Prompts).state,
            InstallState::NotInstalled
        );
        assert_eq!(
            status_of(&fixture, Scope::Skills).state,
            InstallState::NotInstalled
        );
    }

    #[test]
    fn test_skills_scope_only_checks_directories() {
        let fixture = PackageFixture::installed();
        let status = status_of(&fixture, Scope::Skills);
        assert_eq!(status.entries.len(), 1);
        assert_eq!(status.entries[0].name, "dir1");
    }

    #[test]
    fn test_inspect_is_read_only() {
        let fixture = PackageFixture::installed();
        status_of(&fixture, Scope::Prompts);
        assert!(!fixture.project.join(".github").exists());
    }
}
