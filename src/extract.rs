//! Archive extraction pipeline: unpacks a template archive under a root
//! named after the mod name, replacing placeholder tokens with user values
//! in every entry path and in the contents of text-classified entries.

use std::fs::{self, File};
use std::io::{self, Read};
use std::path::{Component, Path, PathBuf};

use log::debug;
use zip::ZipArchive;

use crate::classify::is_text_path;
use crate::error::{Error, Result};
use crate::identifiers::Identifiers;
use crate::tokens::{expand_content, expand_path};

/// Unpacks `archive_path` into `dest_dir/<mod name>/...`.
///
/// Entry paths are prefixed with the mod name and token-expanded (package in
/// slash form); an expanded path ending in `/` denotes a directory and gets
/// no file. Text-classified entries are read as UTF-8, token-expanded
/// (package in dotted form) and written without a byte-order mark; other
/// entries are streamed byte-for-byte. Entries are processed one at a time;
/// the first failure aborts the run.
///
/// # Returns
/// * The destination root that was created
pub fn extract_archive(
    archive_path: &Path,
    dest_dir: &Path,
    ids: &Identifiers,
) -> Result<PathBuf> {
    if !archive_path.is_file() {
        return Err(Error::InputNotFound(archive_path.display().to_string()));
    }

    let mut archive = ZipArchive::new(File::open(archive_path)?)?;
    let root = dest_dir.join(&ids.mod_name);
    for index in 0..archive.len() {
        let mut entry = archive.by_index(index)?;
        let expanded = format!("{}/{}", ids.mod_name, expand_path(entry.name(), ids));
        reject_parent_components(&expanded)?;
        let target = dest_dir.join(&expanded);

        if expanded.ends_with('/') {
            debug!("creating directory: {}", target.display());
            fs::create_dir_all(&target)?;
            continue;
        }
        if let Some(parent) = target.parent() {
            fs::create_dir_all(parent)?;
        }
        if is_text_path(&expanded) {
            debug!("writing text file: {}", target.display());
            let mut text = String::new();
            entry.read_to_string(&mut text)?;
            fs::write(&target, expand_content(&text, ids))?;
        } else {
            debug!("writing binary file: {}", target.display());
            let mut output = File::create(&target)?;
            io::copy(&mut entry, &mut output)?;
        }
    }

    Ok(root)
}

/// Refuses entry paths that would escape the destination root.
fn reject_parent_components(expanded: &str) -> Result<()> {
    let escapes = Path::new(expanded)
        .components()
        .any(|c| matches!(c, Component::ParentDir | Component::RootDir));
    if escapes {
        return Err(Error::Validation(format!("unsafe entry path {:?}", expanded)));
    }
    Ok(())
}
