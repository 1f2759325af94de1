//! Fixed filesystem layout shared by every operation
//!
//! Holds the names promptlink agrees on with the package it ships in and
//! with the consuming project: where the assets live, what a prompt
//! descriptor looks like, and where installed entries go.

use std::path::{Component, Path, PathBuf};

/// Package manifest file, also used as the project marker
pub const MANIFEST_FILE: &str = "package.json";

/// Project-local configuration file
pub const CONFIG_FILE: &str = "promptlink.yaml";

/// Names shipped by earlier releases, removed when the catalog is unreadable
pub const KNOWN_ASSET_NAMES: &[&str] = &[
    "perf-audit.prompt.md",
    "bundle-report.prompt.md",
    "web-vitals.prompt.md",
    "perf-budget",
    "perf-lens",
];

/// Installed entry set
///
/// Prompts receive every catalog entry; skills receive only the
/// directory entries, each as `<skills_dir>/<name>/`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scope {
    Prompts,
    Skills,
}

impl Scope {
    pub fn label(self) -> &'static str {
        match self {
            Scope::Prompts => "prompts",
            Scope::Skills => "skills",
        }
    }

    /// Scopes touched by a command, given its `--skills` flag
    pub fn selected(skills: bool) -> Vec<Scope> {
        if skills {
            vec![Scope::Prompts, Scope::Skills]
        } else {
            vec![Scope::Prompts]
        }
    }
}

#[derive(Debug, Clone)]
pub struct Layout {
    /// Value of `"name"` in the package manifest
    pub package_name: String,
    pub manifest_file: String,
    pub assets_dir: String,
    /// Glob matched against file names directly under the assets directory
    pub descriptor_pattern: String,
    pub prompts_dir: PathBuf,
    pub skills_dir: PathBuf,
    /// Directory under which package managers keep permanent installs
    pub dependency_dir: String,
    /// Path components that mark a transient execution cache
    pub ephemeral_markers: Vec<String>,
    /// Prefixes of path components that mark a transient execution cache
    pub ephemeral_prefixes: Vec<String>,
    pub known_names: Vec<String>,
}

impl Default for Layout {
    fn default() -> Self {
        Self {
            package_name: env!("CARGO_PKG_NAME").to_string(),
            manifest_file: MANIFEST_FILE.to_string(),
            assets_dir: "assets".to_string(),
            descriptor_pattern: "*.prompt.md".to_string(),
            prompts_dir: PathBuf::from(".github").join("prompts"),
            skills_dir: PathBuf::from(".github").join("skills"),
            dependency_dir: "node_modules".to_string(),
            ephemeral_markers: vec!["_npx".to_string()],
            ephemeral_prefixes: vec!["dlx-".to_string(), "bunx-".to_string()],
            known_names: KNOWN_ASSET_NAMES.iter().map(|s| (*s).to_string()).collect(),
        }
    }
}

impl Layout {
    /// Managed directory for a scope, relative to the project root
    pub fn managed_dir(&self, scope: Scope) -> &Path {
        match scope {
            Scope::Prompts => &self.prompts_dir,
            Scope::Skills => &self.skills_dir,
        }
    }

    /// Absolute managed directory for a scope inside `project_root`
    pub fn managed_path(&self, project_root: &Path, scope: Scope) -> PathBuf {
        project_root.join(self.managed_dir(scope))
    }

    pub fn assets_path(&self, source_root: &Path) -> PathBuf {
        source_root.join(&self.assets_dir)
    }

    /// Whether any component of `path` names a transient execution cache
    pub fn is_ephemeral_path(&self, path: &Path) -> bool {
        path.components().any(|c| match c {
            Component::Normal(name) => {
                let name = name.to_string_lossy();
                self.ephemeral_markers.iter().any(|m| *m == name)
                    || self
                        .ephemeral_prefixes
                        .iter()
                        .any(|p| name.starts_with(p.as_str()))
            }
            _ => false,
        })
    }

    /// Whether `path` lies below a package manager's dependency tree
    pub fn is_dependency_path(&self, path: &Path) -> bool {
        path.components()
            .any(|c| matches!(c, Component::Normal(name) if name == self.dependency_dir.as_str()))
    }
}
