//! Common file system operations: copying, linking and removing entries

use std::fs;
use std::io;
use std::path::{Component, Path, PathBuf};

use walkdir::WalkDir;

/// Kind of filesystem entry found at a target path, without following links
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FoundEntry {
    Symlink,
    Directory,
    File,
}

/// Inspect `path` without following a final symlink
pub fn probe(path: &Path) -> io::Result<Option<FoundEntry>> {
    match fs::symlink_metadata(path) {
        Ok(meta) => {
            let file_type = meta.file_type();
            Ok(Some(if file_type.is_symlink() {
                FoundEntry::Symlink
            } else if file_type.is_dir() {
                FoundEntry::Directory
            } else {
                FoundEntry::File
            }))
        }
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
        Err(e) => Err(e),
    }
}

/// Remove whatever is at `path`: unlink a symlink, delete a directory tree,
/// or delete a file. Returns `false` if nothing was there.
pub fn remove_entry(path: &Path) -> io::Result<bool> {
    match probe(path)? {
        None => Ok(false),
        Some(FoundEntry::Symlink) => {
            remove_symlink(path)?;
            Ok(true)
        }
        Some(FoundEntry::Directory) => {
            fs::remove_dir_all(path)?;
            Ok(true)
        }
        Some(FoundEntry::File) => {
            fs::remove_file(path)?;
            Ok(true)
        }
    }
}

#[cfg(unix)]
fn remove_symlink(path: &Path) -> io::Result<()> {
    fs::remove_file(path)
}

#[cfg(windows)]
fn remove_symlink(path: &Path) -> io::Result<()> {
    // Directory symlinks are removed with remove_dir on Windows
    fs::remove_file(path).or_else(|_| fs::remove_dir(path))
}

/// Copy a directory recursively, following symlinks inside the source
pub fn copy_dir_recursive<P1, P2>(src: P1, dst: P2) -> io::Result<()>
where
    P1: AsRef<Path>,
    P2: AsRef<Path>,
{
    let src_ref = src.as_ref();
    let dst_ref = dst.as_ref();

    fs::create_dir_all(dst_ref)?;

    for entry in WalkDir::new(src_ref).min_depth(1).follow_links(true) {
        let entry = entry.map_err(io::Error::other)?;
        let relative = entry
            .path()
            .strip_prefix(src_ref)
            .map_err(io::Error::other)?;
        let dst_path = dst_ref.join(relative);

        if entry.file_type().is_dir() {
            fs::create_dir_all(&dst_path)?;
        } else {
            fs::copy(entry.path(), &dst_path)?;
        }
    }

    Ok(())
}

/// Create a symlink at `link` whose relative target resolves to `target`
///
/// `target` must be absolute. When no relative form exists (different
/// roots or prefixes) the absolute target is used.
pub fn create_relative_symlink(target: &Path, link: &Path, is_dir: bool) -> io::Result<()> {
    let link_dir = link
        .parent()
        .ok_or_else(|| io::Error::other(format!("{} has no parent", link.display())))?;
    let link_dir = dunce::canonicalize(link_dir)?;
    let target = dunce::canonicalize(target)?;

    let contents = relative_path(&link_dir, &target).unwrap_or(target);
    symlink(&contents, link, is_dir)
}

#[cfg(unix)]
fn symlink(contents: &Path, link: &Path, _is_dir: bool) -> io::Result<()> {
    std::os::unix::fs::symlink(contents, link)
}

#[cfg(windows)]
fn symlink(contents: &Path, link: &Path, is_dir: bool) -> io::Result<()> {
    if is_dir {
        std::os::windows::fs::symlink_dir(contents, link)
    } else {
        std::os::windows::fs::symlink_file(contents, link)
    }
}

/// Path from directory `from` to `to`, both absolute and normalized
///
/// Returns `None` when the two paths share no root.
pub fn relative_path(from: &Path, to: &Path) -> Option<PathBuf> {
    let from: Vec<Component<'_>> = from.components().collect();
    let to: Vec<Component<'_>> = to.components().collect();

    let roots_match = matches!(
        (from.first(), to.first()),
        (Some(a), Some(b)) if a == b && matches!(a, Component::Prefix(_) | Component::RootDir)
    );
    if !roots_match {
        return None;
    }

    let common = from.iter().zip(&to).take_while(|(a, b)| a == b).count();

    let mut result = PathBuf::new();
    for _ in common..from.len() {
        result.push("..");
    }
    for component in &to[common..] {
        result.push(component.as_os_str());
    }
    if result.as_os_str().is_empty() {
        result.push(".");
    }

    Some(result)
}
