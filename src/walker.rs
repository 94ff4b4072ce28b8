//! Template directory traversal.
//!
//! The generator consumes a finite sequence of file system leaves: every
//! regular file, plus every directory with no children. Emitting empty
//! directories as their own leaves lets them survive the round trip through
//! an archive.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::error::{Error, Result};

/// One traversal result: a path relative to the template root (always with
/// `/` separators) plus its kind.
#[derive(Debug)]
pub struct Leaf {
    pub relative_path: String,
    pub kind: LeafKind,
}

#[derive(Debug)]
pub enum LeafKind {
    /// A regular file, read later from this absolute source path.
    File(PathBuf),
    /// A directory with no children.
    EmptyDir,
}

/// Collects the leaves under `root`.
///
/// Files are always leaves; a directory is a leaf only when it has zero
/// children. A completely empty root yields a single `EmptyDir` leaf with
/// relative path `.`, denoting the root itself. Traversal order is
/// unspecified.
pub fn collect_leaves(root: &Path) -> Result<Vec<Leaf>> {
    let mut leaves = Vec::new();
    for entry in WalkDir::new(root).min_depth(1) {
        let entry = entry.map_err(|e| Error::Io(e.into()))?;
        let relative_path = relative_slash_path(entry.path(), root)?;
        if entry.file_type().is_dir() {
            if dir_is_empty(entry.path())? {
                leaves.push(Leaf { relative_path, kind: LeafKind::EmptyDir });
            }
        } else {
            leaves.push(Leaf {
                relative_path,
                kind: LeafKind::File(entry.path().to_path_buf()),
            });
        }
    }
    if leaves.is_empty() {
        leaves.push(Leaf { relative_path: ".".to_string(), kind: LeafKind::EmptyDir });
    }
    Ok(leaves)
}

fn dir_is_empty(path: &Path) -> Result<bool> {
    Ok(fs::read_dir(path)?.next().is_none())
}

fn relative_slash_path(path: &Path, root: &Path) -> Result<String> {
    let relative = path
        .strip_prefix(root)
        .map_err(|e| Error::Io(io::Error::other(e)))?;
    let mut parts = Vec::new();
    for component in relative.components() {
        let part = component.as_os_str().to_str().ok_or_else(|| {
            Error::Io(io::Error::new(
                io::ErrorKind::InvalidData,
                format!("non-UTF-8 path: {:?}", path),
            ))
        })?;
        parts.push(part);
    }
    Ok(parts.join("/"))
}
