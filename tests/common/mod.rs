//! Common test utilities for promptlink integration tests

#![allow(dead_code)]

use std::path::{Path, PathBuf};

use assert_cmd::Command;
use tempfile::TempDir;

/// Consuming project plus a copy of the package somewhere on disk
pub struct TestProject {
    /// Temporary directory
    pub temp: TempDir,
    /// Project root (contains package.json)
    pub project: PathBuf,
    /// Package root (contains package.json and assets/)
    pub package: PathBuf,
}

impl TestProject {
    /// Package installed in the project's node_modules
    pub fn installed() -> Self {
        Self::with_package_at("app/node_modules/promptlink")
    }

    /// Package unpacked in a transient npx cache
    pub fn ephemeral() -> Self {
        Self::with_package_at("home/.npm/_npx/7c1d/node_modules/promptlink")
    }

    pub fn with_package_at(package_rel: &str) -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let root = dunce::canonicalize(temp.path()).expect("Failed to canonicalize temp dir");

        let project = root.join("app");
        write_manifest(&project, "web-app");

        let package = root.join(package_rel);
        write_manifest(&package, "promptlink");
        for (path, content) in [
            ("assets/a.prompt.md", "# Prompt A\n"),
            ("assets/b.prompt.md", "# Prompt B\n"),
            ("assets/dir1/SKILL.md", "# Skill\n"),
            ("assets/dir1/refs/guide.md", "guide\n"),
            ("assets/README.md", "not a descriptor\n"),
        ] {
            write_file(&package.join(path), content);
        }

        Self {
            temp,
            project,
            package,
        }
    }

    pub fn self_path(&self) -> PathBuf {
        self.package.join("bin").join("promptlink")
    }

    pub fn prompts_dir(&self) -> PathBuf {
        self.project.join(".github").join("prompts")
    }

    pub fn skills_dir(&self) -> PathBuf {
        self.project.join(".github").join("skills")
    }

    /// Write a file relative to the project root
    pub fn write_file(&self, path: &str, content: &str) {
        write_file(&self.project.join(path), content);
    }

    /// Command running the binary inside the project, as if it lived in the package
    pub fn cmd(&self) -> Command {
        let mut cmd = promptlink_cmd();
        cmd.current_dir(&self.project)
            .arg("--self-path")
            .arg(self.self_path())
            .env_remove("RUST_LOG");
        cmd
    }
}

pub fn write_manifest(dir: &Path, name: &str) {
    write_file(
        &dir.join("package.json"),
        &format!("{{\n  \"name\": \"{name}\",\n  \"version\": \"1.0.0\"\n}}\n"),
    );
}

pub fn write_file(path: &Path, content: &str) {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).expect("Failed to create parent directory");
    }
    std::fs::write(path, content).expect("Failed to write file");
}

#[allow(deprecated)]
pub fn promptlink_cmd() -> Command {
    Command::cargo_bin("promptlink").expect("Failed to find promptlink binary")
}
