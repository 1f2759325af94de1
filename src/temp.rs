//! Base directory for test scratch space
//!
//! A relative `TMPDIR` (e.g. `TMPDIR=tmp`) would put scratch projects under
//! the current working directory, where the project root lookup could find
//! this crate's own tree.

use std::env;
use std::path::PathBuf;

/// Absolute directory suitable for creating temporary directories
pub fn temp_dir_base() -> PathBuf {
    let t = env::temp_dir();
    if t.is_absolute() {
        return t;
    }

    #[cfg(windows)]
    {
        env::var("TEMP")
            .or_else(|_| env::var("TMP"))
            .map_or_else(|_| PathBuf::from("C:\\Windows\\Temp"), PathBuf::from)
    }
    #[cfg(not(windows))]
    {
        PathBuf::from("/tmp")
    }
}
