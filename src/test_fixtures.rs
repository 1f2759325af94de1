//! Test fixtures and utilities for reducing test setup duplication.
//!
//! # Usage
//!
//! ```ignore
//! use crate::test_fixtures::{create_temp_dir, PackageFixture};
//!
//! #[test]
//! fn my_test() {
//!     // Simple temp directory
//!     let temp = create_temp_dir();
//!
//!     // Consuming project with a permanently installed package
//!     let fixture = PackageFixture::installed();
//! }
//! ```

use std::path::{Path, PathBuf};

use tempfile::TempDir;

use crate::context::{self, ExecutionContext};
use crate::layout::{Layout, MANIFEST_FILE};

/// Create a temp directory in the system temp location.
///
/// Uses `crate::temp::temp_dir_base()` to ensure temp dirs are never
/// created under the current working directory.
///
/// # Panics
///
/// Panics if the temp directory cannot be created.
#[must_use]
pub fn create_temp_dir() -> TempDir {
    TempDir::new_in(crate::temp::temp_dir_base()).expect("Failed to create temp directory")
}

/// Create a nested directory structure inside a temp directory.
///
/// # Panics
///
/// Panics if the directory cannot be created.
#[must_use]
pub fn create_nested_dir(temp: &TempDir, path: &str) -> PathBuf {
    let nested = temp.path().join(path);
    std::fs::create_dir_all(&nested).expect("Failed to create nested directory");
    nested
}

/// Create test files in a directory.
///
/// Takes a list of (path, content) tuples relative to the temp directory.
///
/// # Panics
///
/// Panics if any file cannot be created.
pub fn create_test_files(temp: &TempDir, files: &[(&str, &str)]) {
    write_files(temp.path(), files);
}

/// Write (path, content) pairs below `base`, creating parents as needed.
///
/// # Panics
///
/// Panics if any file cannot be created.
pub fn write_files(base: &Path, files: &[(&str, &str)]) {
    for (path, content) in files {
        let full_path = base.join(path);
        if let Some(parent) = full_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&full_path, content).expect("Failed to write test file");
    }
}

/// Write a package manifest carrying `name` into `dir`.
///
/// # Panics
///
/// Panics if the manifest cannot be written.
pub fn write_manifest(dir: &Path, name: &str) {
    std::fs::create_dir_all(dir).expect("Failed to create manifest directory");
    std::fs::write(
        dir.join(MANIFEST_FILE),
        format!("{{\n  \"name\": \"{name}\",\n  \"version\": \"1.0.0\"\n}}\n"),
    )
    .expect("Failed to write manifest");
}

/// Catalog used across tests: two prompt descriptors and one directory
pub const SAMPLE_ASSETS: &[(&str, &str)] = &[
    ("assets/a.prompt.md", "# Prompt A\n"),
    ("assets/b.prompt.md", "# Prompt B\n"),
    ("assets/dir1/SKILL.md", "# Skill\n"),
    ("assets/dir1/refs/guide.md", "guide\n"),
];

/// A consuming project plus a copy of this package somewhere on disk.
pub struct PackageFixture {
    pub temp: TempDir,
    pub project: PathBuf,
    pub package: PathBuf,
    pub layout: Layout,
}

impl PackageFixture {
    /// Package installed in the project's dependency tree.
    #[must_use]
    pub fn installed() -> Self {
        Self::at("app/node_modules/promptlink")
    }

    /// Package unpacked in a transient execution cache.
    #[must_use]
    pub fn ephemeral() -> Self {
        Self::at("cache/_npx/1f2e/node_modules/promptlink")
    }

    /// Package at `package_rel` (relative to the temp dir) with a project
    /// at `app/`.
    ///
    /// # Panics
    ///
    /// Panics if any fixture file cannot be created.
    #[must_use]
    pub fn at(package_rel: &str) -> Self {
        let temp = create_temp_dir();
        let layout = Layout::default();
        let root = dunce::canonicalize(temp.path()).expect("Failed to canonicalize temp dir");

        let project = root.join("app");
        write_manifest(&project, "web-app");

        let package = root.join(package_rel);
        write_manifest(&package, &layout.package_name);
        write_files(&package, SAMPLE_ASSETS);

        Self {
            temp,
            project,
            package,
            layout,
        }
    }

    /// Path of the running binary inside the package
    #[must_use]
    pub fn self_path(&self) -> PathBuf {
        self.package.join("bin").join("promptlink")
    }

    #[must_use]
    pub fn context(&self) -> ExecutionContext {
        context::detect(&self.self_path(), &self.project, &self.layout)
    }

    #[must_use]
    pub fn prompts_dir(&self) -> PathBuf {
        self.project.join(".github").join("prompts")
    }

    #[must_use]
    pub fn skills_dir(&self) -> PathBuf {
        self.project.join(".github").join("skills")
    }
}

#[cfg(test)]
#[allow(clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn test_create_temp_dir() {
        let temp = create_temp_dir();
        assert!(temp.path().exists());
    }

    #[test]
    fn test_create_test_files() {
        let temp = create_temp_dir();
        create_test_files(&temp, &[("assets/a.prompt.md", "# A")]);

        let content = std::fs::read_to_string(temp.path().join("assets/a.prompt.md"))
            .expect("Failed to read");
        assert_eq!(content, "# A");
    }

    #[test]
    fn test_package_fixture_layout() {
        let fixture = PackageFixture::installed();
        assert!(fixture.project.join(MANIFEST_FILE).exists());
        assert!(fixture.package.join("assets/dir1/SKILL.md").exists());
        assert!(!fixture.context().is_ephemeral);
        assert!(PackageFixture::ephemeral().context().is_ephemeral);
    }
}
