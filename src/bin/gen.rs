//! Template generator entry point: packs a template directory into a
//! placeholder-tokenized archive in the current directory.

use clap::Parser;

use modkit::{
    cli::{init_logger, resolve_input_path, GenerateArgs},
    error::{default_error_handler, Result},
    generate::generate_archive,
    prompt::DialoguerPrompter,
};

fn main() {
    let args = GenerateArgs::parse();
    init_logger(args.verbose);

    if let Err(err) = run(args) {
        default_error_handler(err);
    }
}

fn run(args: GenerateArgs) -> Result<()> {
    let prompter = DialoguerPrompter::new();
    let template_dir =
        resolve_input_path(args.template_dir, &prompter, "Template directory")?;
    let archive = generate_archive(&template_dir, &std::env::current_dir()?)?;
    println!("Template archive written to {}.", archive.display());
    Ok(())
}
