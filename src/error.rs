//! Error handling for the modkit tools.
//! Defines custom error types and results used throughout the application.

use std::io;
use thiserror::Error;

/// Custom error types for modkit operations.
///
/// This enum represents all possible errors that can occur while generating
/// or extracting a template archive. It implements the standard Error trait
/// through thiserror's derive macro.
#[derive(Error, Debug)]
pub enum Error {
    /// Represents errors that occur during file system operations
    #[error("IO error: {0}.")]
    Io(#[from] io::Error),

    /// Represents errors reported by the archive layer
    #[error("Archive error: {0}.")]
    Zip(#[from] zip::result::ZipError),

    /// The supplied input path does not exist or has the wrong kind
    #[error("Input not found: {0}.")]
    InputNotFound(String),

    /// Represents validation failures in user-supplied identifiers
    #[error("Validation error: {0}.")]
    Validation(String),

    /// Represents errors that occur while reading interactive input
    #[error("Prompt error: {0}.")]
    Prompt(String),
}

/// Convenience type alias for Results with modkit's Error as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Default error handler that prints the error and exits the program.
///
/// # Behavior
/// Prints the error message to stderr and exits with status code 1
pub fn default_error_handler(err: Error) -> ! {
    eprintln!("{}", err);
    std::process::exit(1);
}
