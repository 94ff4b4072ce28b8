//! Placeholder token and literal marker tables, plus the substitution passes
//! used by both pipeline directions.
//!
//! Substitution is plain sequential literal replacement: each pass scans the
//! result of the previous one. The pass order is part of the contract; in the
//! generation direction the qualified package literal embeds the bare mod id
//! literal as a substring and must be consumed first.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::identifiers::Identifiers;

/// Placeholder for the slash- or dot-separated package path.
pub const PACKAGE_TOKEN: &str = "!@PKG";
/// Placeholder for the mod id.
pub const MOD_ID_TOKEN: &str = "!@MODID";
/// Placeholder for the mod name.
pub const MOD_NAME_TOKEN: &str = "!@NAME";
/// Placeholder for the display name.
pub const DISPLAY_NAME_TOKEN: &str = "!@DISP";
/// Placeholder for the description.
pub const DESCRIPTION_TOKEN: &str = "!@DESC";

/// Authored literal markers a template is written against.
pub const SAMPLE_PACKAGE: &str = "net.example.examplemodid";
pub const SAMPLE_MOD_ID: &str = "examplemodid";
pub const SAMPLE_MOD_NAME: &str = "ExampleModName";
pub const SAMPLE_DISPLAY_NAME: &str = "Example Display Name";
pub const SAMPLE_DESCRIPTION: &str = "Example Description";

/// Matches the sample package in either directory (`net/example/...`) or
/// dotted spelling, as both occur in template paths.
static SAMPLE_PACKAGE_PATH: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"net[./]example[./]examplemodid").expect("valid pattern"));

/// Rewrites a template-relative path into its archived form, replacing each
/// authored literal marker with its placeholder token.
pub fn tokenize_path(relative_path: &str) -> String {
    SAMPLE_PACKAGE_PATH
        .replace_all(relative_path, PACKAGE_TOKEN)
        .replace(SAMPLE_MOD_ID, MOD_ID_TOKEN)
        .replace(SAMPLE_MOD_NAME, MOD_NAME_TOKEN)
        .replace(SAMPLE_DISPLAY_NAME, DISPLAY_NAME_TOKEN)
        .replace(SAMPLE_DESCRIPTION, DESCRIPTION_TOKEN)
}

/// Rewrites the content of a text-classified template file into its archived
/// form. The qualified package reference is replaced before the bare mod id.
pub fn tokenize_content(text: &str) -> String {
    text.replace(SAMPLE_PACKAGE, PACKAGE_TOKEN)
        .replace(SAMPLE_MOD_ID, MOD_ID_TOKEN)
        .replace(SAMPLE_MOD_NAME, MOD_NAME_TOKEN)
        .replace(SAMPLE_DISPLAY_NAME, DISPLAY_NAME_TOKEN)
        .replace(SAMPLE_DESCRIPTION, DESCRIPTION_TOKEN)
}

/// Rewrites an archive entry path with the user's values. The package token
/// expands to the slash-separated form so it yields directory levels.
pub fn expand_path(entry_path: &str, ids: &Identifiers) -> String {
    entry_path
        .replace(PACKAGE_TOKEN, &ids.package_path())
        .replace(MOD_ID_TOKEN, &ids.mod_id)
        .replace(MOD_NAME_TOKEN, &ids.mod_name)
        .replace(DISPLAY_NAME_TOKEN, &ids.display_name)
        .replace(DESCRIPTION_TOKEN, &ids.description)
}

/// Rewrites the content of a text-classified archive entry with the user's
/// values. Unlike paths, the package token expands to the dotted form.
pub fn expand_content(text: &str, ids: &Identifiers) -> String {
    text.replace(PACKAGE_TOKEN, &ids.package_name)
        .replace(MOD_ID_TOKEN, &ids.mod_id)
        .replace(MOD_NAME_TOKEN, &ids.mod_name)
        .replace(DISPLAY_NAME_TOKEN, &ids.display_name)
        .replace(DESCRIPTION_TOKEN, &ids.description)
}
