//! Modkit converts between mod project templates and distributable archives.
//! A template directory is packed into a ZIP with fixed placeholder tokens in
//! place of project-specific identifiers; extraction substitutes the tokens
//! with user-supplied values in both paths and text file contents.

/// Command-line argument structures shared by the two binaries
pub mod cli;

/// Text/binary classification by file extension
pub mod classify;

/// Error types and handling for the modkit tools
pub mod error;

/// Archive extraction pipeline (tokens -> user values)
pub mod extract;

/// Archive generation pipeline (authored literals -> tokens)
pub mod generate;

/// User-supplied identifier values and their validation
pub mod identifiers;

/// Interactive input handling
pub mod prompt;

/// Placeholder token and literal marker tables, substitution passes
pub mod tokens;

/// Identifier grammars (package name, mod id, mod name)
pub mod validate;

/// Template directory traversal
pub mod walker;
