//! Version command implementation
//!
//! Besides the build, reports which package copy this invocation would
//! install from and where it would install to.

use std::path::PathBuf;

use crate::error::Result;
use crate::layout::Scope;
use crate::operations::Invocation;
use crate::path_utils::{display_relative, to_forward_slashes};

/// Run version command
pub fn run(workspace: Option<PathBuf>, self_path: Option<PathBuf>) -> Result<()> {
    println!("promptlink {}", env!("CARGO_PKG_VERSION"));
    println!();
    println!("Build info:");
    println!("  Minimum Rust version: {}", env!("CARGO_PKG_RUST_VERSION"));
    println!("  Profile: {}", build_profile());

    let invocation = super::helpers::invocation(workspace, self_path)?;
    println!();
    println!("Package:");
    for line in package_lines(&invocation) {
        println!("  {line}");
    }

    Ok(())
}

fn build_profile() -> &'static str {
    if cfg!(debug_assertions) {
        "debug"
    } else {
        "release"
    }
}

fn package_lines(invocation: &Invocation) -> Vec<String> {
    let source = invocation.context.catalog_source();
    let location = if invocation.context.is_ephemeral {
        "temporary package cache"
    } else {
        "installed package"
    };
    let assets = match invocation.catalog() {
        Ok(catalog) => format!("{} entries", catalog.len()),
        Err(_) => "not found".to_string(),
    };

    let mut lines = vec![
        format!("Source: {} ({location})", to_forward_slashes(source)),
        format!("Assets: {assets}"),
        format!(
            "Project: {}",
            to_forward_slashes(&invocation.project_root)
        ),
    ];
    for scope in [Scope::Prompts, Scope::Skills] {
        let managed = invocation
            .layout
            .managed_path(&invocation.project_root, scope);
        lines.push(format!(
            "Installs {} into: {}",
            scope.label(),
            display_relative(&invocation.project_root, &managed)
        ));
    }
    lines
}
