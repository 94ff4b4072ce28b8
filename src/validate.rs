//! Identifier grammars for the three checked template values.
//! Each grammar is a pure pass/fail predicate over a candidate string;
//! all character classes are ASCII-only and case-sensitive.

use once_cell::sync::Lazy;
use std::collections::HashSet;

/// Java reserved keywords; a package segment must not equal any of these.
static JAVA_KEYWORDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    HashSet::from([
        "abstract", "assert", "boolean", "break", "byte", "case", "catch", "char",
        "class", "const", "continue", "default", "do", "double", "else", "enum",
        "extends", "final", "finally", "float", "for", "goto", "if", "implements",
        "import", "instanceof", "int", "interface", "long", "native", "new",
        "package", "private", "protected", "public", "return", "short", "static",
        "strictfp", "super", "switch", "synchronized", "this", "throw", "throws",
        "transient", "try", "void", "volatile", "while",
    ])
});

/// Checks a dot-separated Java package name.
///
/// Every segment must be non-empty, must not be a reserved keyword, must
/// start with an ASCII letter or underscore, and may continue with ASCII
/// letters, digits or underscores. Any bad segment rejects the whole name;
/// an empty candidate yields an empty segment and is therefore rejected.
pub fn is_valid_package_name(candidate: &str) -> bool {
    candidate.split('.').all(is_valid_package_segment)
}

fn is_valid_package_segment(segment: &str) -> bool {
    if JAVA_KEYWORDS.contains(segment) {
        return false;
    }
    let mut chars = segment.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// Checks a mod id: a lowercase ASCII letter followed by lowercase letters,
/// digits, underscores or hyphens. Empty input is rejected.
pub fn is_valid_mod_id(candidate: &str) -> bool {
    let mut chars = candidate.chars();
    match chars.next() {
        Some(c) if c.is_ascii_lowercase() => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_' || c == '-')
}

/// Checks a mod name, shaped like a Java identifier: an ASCII letter,
/// underscore or dollar sign, followed by the same classes plus digits.
/// Empty input is rejected.
pub fn is_valid_mod_name(candidate: &str) -> bool {
    let mut chars = candidate.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' || c == '$' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
}
