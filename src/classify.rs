//! Text/binary classification of template entries.
//! Only text-classified files participate in content substitution; every
//! other file is copied byte-for-byte with just its path rewritten.

use once_cell::sync::Lazy;
use std::collections::HashSet;

/// Extensions whose contents are eligible for placeholder substitution.
static TEXT_FILE_EXTENSIONS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    HashSet::from([
        "accesswidener", "mcmeta", "txt", "md", "gradle", "java", "kt",
        "yaml", "yml", "toml", "xml", "json", "json5", "jsonc", "properties",
    ])
});

/// Returns whether the path names a text file, judged solely by its final
/// dot-delimited extension (case-sensitive exact match). A path with no
/// extension is treated as binary.
pub fn is_text_path(path: &str) -> bool {
    match path.rsplit_once('.') {
        Some((_, extension)) => TEXT_FILE_EXTENSIONS.contains(extension),
        None => false,
    }
}
