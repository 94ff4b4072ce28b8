//! Template extractor entry point: prompts for the project identifiers and
//! unpacks a template archive under a root named after the mod name.

use clap::Parser;

use modkit::{
    cli::{init_logger, resolve_input_path, ExtractArgs},
    error::{default_error_handler, Error, Result},
    extract::extract_archive,
    prompt::{prompt_identifiers, DialoguerPrompter},
};

fn main() {
    let args = ExtractArgs::parse();
    init_logger(args.verbose);

    if let Err(err) = run(args) {
        default_error_handler(err);
    }
}

fn run(args: ExtractArgs) -> Result<()> {
    let prompter = DialoguerPrompter::new();
    let archive = resolve_input_path(args.archive, &prompter, "Template archive")?;
    if !archive.is_file() {
        return Err(Error::InputNotFound(archive.display().to_string()));
    }

    // Identifiers are collected and validated before anything is written.
    let identifiers = prompt_identifiers(&prompter)?;
    let root = extract_archive(&archive, &std::env::current_dir()?, &identifiers)?;
    println!("Project extracted to {}.", root.display());
    Ok(())
}
