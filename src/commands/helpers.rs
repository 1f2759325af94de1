//! Command helper utilities

use std::path::PathBuf;

use crate::error::{PromptlinkError, Result};
use crate::layout::Layout;
use crate::operations::Invocation;

/// Resolve the directory the project lookup starts from
///
/// If a workspace path is provided, use it. Otherwise,
/// resolve to the current directory.
pub fn resolve_workspace_path(workspace: Option<PathBuf>) -> Result<PathBuf> {
    match workspace {
        Some(path) => Ok(path),
        None => std::env::current_dir().map_err(|e| PromptlinkError::IoError {
            message: format!("Failed to get current directory: {e}"),
        }),
    }
}

/// Resolve the location of the running executable
pub fn resolve_self_path(self_path: Option<PathBuf>) -> Result<PathBuf> {
    match self_path {
        Some(path) => Ok(path),
        None => std::env::current_exe().map_err(|e| PromptlinkError::IoError {
            message: format!("Failed to locate the running executable: {e}"),
        }),
    }
}

/// Build the invocation shared by install, uninstall and status
pub fn invocation(workspace: Option<PathBuf>, self_path: Option<PathBuf>) -> Result<Invocation> {
    let cwd = resolve_workspace_path(workspace)?;
    let self_path = resolve_self_path(self_path)?;
    Ok(Invocation::detect(&cwd, &self_path, Layout::default()))
}
