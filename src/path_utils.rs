//! Cross-platform path display helpers

use std::path::Path;

/// Convert path separators to forward slashes for display
pub fn to_forward_slashes(path: &Path) -> String {
    path.to_string_lossy().replace('\\', "/")
}

/// Display `path` relative to `root` when it lies inside it
pub fn display_relative(root: &Path, path: &Path) -> String {
    to_forward_slashes(path.strip_prefix(root).unwrap_or(path))
}
