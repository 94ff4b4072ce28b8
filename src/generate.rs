//! Archive generation pipeline: packs a template directory into a ZIP,
//! replacing authored literal markers with placeholder tokens in every entry
//! path and in the contents of text-classified files.

use std::fs::{self, File};
use std::io;
use std::path::{Path, PathBuf};

use chrono::{Datelike, Timelike, Utc};
use log::debug;
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

use crate::classify::is_text_path;
use crate::error::{Error, Result};
use crate::tokens::{tokenize_content, tokenize_path};
use crate::walker::{collect_leaves, LeafKind};

/// Packs `template_dir` into a new archive inside `output_dir`.
///
/// The archive is named `template.<unix-epoch-millis>.zip`. Every entry is
/// written with maximal Deflate compression and one last-modified timestamp
/// captured when the run starts. Leaves are processed one at a time; the
/// first failure aborts the run with whatever was already written left
/// behind.
///
/// # Returns
/// * The path of the archive that was written
pub fn generate_archive(template_dir: &Path, output_dir: &Path) -> Result<PathBuf> {
    if !template_dir.is_dir() {
        return Err(Error::InputNotFound(template_dir.display().to_string()));
    }

    let now = Utc::now();
    let archive_path =
        output_dir.join(format!("template.{}.zip", now.timestamp_millis()));
    let stamp = zip::DateTime::from_date_and_time(
        now.year() as u16,
        now.month() as u8,
        now.day() as u8,
        now.hour() as u8,
        now.minute() as u8,
        now.second() as u8,
    )
    .unwrap_or_default();
    let options = SimpleFileOptions::default()
        .compression_method(CompressionMethod::Deflated)
        .compression_level(Some(9))
        .last_modified_time(stamp);

    let mut writer = ZipWriter::new(File::create(&archive_path)?);
    for leaf in collect_leaves(template_dir)? {
        let entry_name = tokenize_path(&leaf.relative_path);
        match leaf.kind {
            LeafKind::EmptyDir => {
                debug!("adding directory entry: {}/", entry_name);
                writer.add_directory(entry_name, options)?;
            }
            LeafKind::File(source) if is_text_path(&entry_name) => {
                debug!("adding text entry: {}", entry_name);
                let text = fs::read_to_string(&source)?;
                writer.start_file(entry_name, options)?;
                io::Write::write_all(&mut writer, tokenize_content(&text).as_bytes())?;
            }
            LeafKind::File(source) => {
                debug!("adding binary entry: {}", entry_name);
                writer.start_file(entry_name, options)?;
                io::copy(&mut File::open(&source)?, &mut writer)?;
            }
        }
    }
    writer.finish()?;

    Ok(archive_path)
}
