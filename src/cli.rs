//! Command-line interface implementation for the modkit tools.
//! Provides argument parsing for the two binaries using clap.

use clap::Parser;
use std::path::PathBuf;

use crate::error::Result;
use crate::prompt::{strip_surrounding_quotes, Prompter};

/// Command-line arguments for the template generator.
#[derive(Parser, Debug)]
#[command(author, version, about = "modkit-gen: pack a template directory into a template archive", long_about = None)]
pub struct GenerateArgs {
    /// Path to the template directory; prompted for when omitted
    #[arg(value_name = "TEMPLATE_DIR")]
    pub template_dir: Option<PathBuf>,

    /// Enable verbose logging output
    #[arg(short, long)]
    pub verbose: bool,
}

/// Command-line arguments for the template extractor.
#[derive(Parser, Debug)]
#[command(author, version, about = "modkit-extract: instantiate a project from a template archive", long_about = None)]
pub struct ExtractArgs {
    /// Path to the template archive; prompted for when omitted
    #[arg(value_name = "TEMPLATE_ZIP")]
    pub archive: Option<PathBuf>,

    /// Enable verbose logging output
    #[arg(short, long)]
    pub verbose: bool,
}

/// Resolves the input path from the positional argument, falling back to an
/// interactive prompt. Prompted input is trimmed and stripped of one pair of
/// surrounding double quotes.
pub fn resolve_input_path(
    arg: Option<PathBuf>,
    prompter: &dyn Prompter,
    prompt: &str,
) -> Result<PathBuf> {
    match arg {
        Some(path) => Ok(path),
        None => {
            let line = prompter.read_line(prompt)?;
            Ok(PathBuf::from(strip_surrounding_quotes(&line)))
        }
    }
}

/// Configures env_logger from the verbose flag; trace output when verbose,
/// silent otherwise.
pub fn init_logger(verbose: bool) {
    env_logger::Builder::new()
        .filter_level(if verbose {
            log::LevelFilter::Trace
        } else {
            log::LevelFilter::Off
        })
        .init();
}
