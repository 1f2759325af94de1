//! Asset catalog reader
//!
//! The catalog is the set of entries directly under `<source>/assets/`:
//! prompt descriptor files matching the descriptor glob, and
//! subdirectories installed as whole subtrees. Anything else is ignored.
//! It is read fresh for every operation and never cached.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;
use wax::{CandidatePath, Glob, Pattern};

use crate::error::{PromptlinkError, Result};
use crate::layout::{Layout, Scope};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    File,
    Directory,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogEntry {
    pub name: String,
    pub kind: EntryKind,
    pub source_path: PathBuf,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    /// Sorted by name; names are unique
    pub entries: Vec<CatalogEntry>,
}

impl Catalog {
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.name.as_str())
    }

    /// Entries installed into the given scope
    pub fn for_scope(&self, scope: Scope) -> Catalog {
        let entries = match scope {
            Scope::Prompts => self.entries.clone(),
            Scope::Skills => self
                .entries
                .iter()
                .filter(|e| e.kind == EntryKind::Directory)
                .cloned()
                .collect(),
        };
        Catalog { entries }
    }
}

/// Read the catalog shipped under `source_root`
pub fn read_catalog(source_root: &Path, layout: &Layout) -> Result<Catalog> {
    let assets = layout.assets_path(source_root);
    if !assets.is_dir() {
        return Err(PromptlinkError::CatalogNotFound {
            path: assets.display().to_string(),
        });
    }

    let read_error = |e: std::io::Error| PromptlinkError::FileReadFailed {
        path: assets.display().to_string(),
        reason: e.to_string(),
    };

    let mut entries = Vec::new();
    for dir_entry in fs::read_dir(&assets).map_err(read_error)? {
        let dir_entry = dir_entry.map_err(read_error)?;
        let path = dir_entry.path();
        let Some(name) = dir_entry.file_name().to_str().map(str::to_string) else {
            debug!(path = %path.display(), "skipping non UTF-8 asset name");
            continue;
        };

        let kind = if path.is_dir() {
            EntryKind::Directory
        } else if path.is_file() && is_descriptor(&name, &layout.descriptor_pattern) {
            EntryKind::File
        } else {
            continue;
        };

        entries.push(CatalogEntry {
            name,
            kind,
            source_path: path,
        });
    }

    entries.sort_by(|a, b| a.name.cmp(&b.name));
    debug!(source = %assets.display(), entries = entries.len(), "read asset catalog");

    Ok(Catalog { entries })
}

/// Check a file name against the prompt descriptor glob
fn is_descriptor(name: &str, pattern: &str) -> bool {
    let candidate = CandidatePath::from(name);
    match Glob::new(pattern) {
        Ok(glob) => glob.matched(&candidate).is_some(),
        // Fallback to exact match if pattern is invalid
        Err(_) => name == pattern,
    }
}
