//! Interactive input handling.
//! The extractor asks for the five identifier values in a fixed order; both
//! tools fall back to prompting for the input path when it is not given as
//! an argument.

use dialoguer::Input;

use crate::error::{Error, Result};
use crate::identifiers::Identifiers;

/// Trait for reading one line of user input.
pub trait Prompter {
    /// Reads a single line for `prompt`, trimmed. Blank input is allowed and
    /// yields the empty string.
    fn read_line(&self, prompt: &str) -> Result<String>;
}

/// Dialoguer-backed prompter used by the binaries.
pub struct DialoguerPrompter;

impl DialoguerPrompter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for DialoguerPrompter {
    fn default() -> Self {
        DialoguerPrompter::new()
    }
}

impl Prompter for DialoguerPrompter {
    fn read_line(&self, prompt: &str) -> Result<String> {
        let input: String = Input::new()
            .with_prompt(prompt)
            .allow_empty(true)
            .interact_text()
            .map_err(|e| Error::Prompt(e.to_string()))?;
        Ok(input.trim().to_string())
    }
}

/// Asks for the five identifier values in the fixed order the original
/// template vocabulary defines, then validates the checked three.
///
/// # Errors
/// * `Error::Validation` listing every identifier that failed its grammar
/// * `Error::Prompt` if reading input fails
pub fn prompt_identifiers(prompter: &dyn Prompter) -> Result<Identifiers> {
    let package_name = prompter.read_line("Package name")?;
    let mod_id = prompter.read_line("Mod ID")?;
    let mod_name = prompter.read_line("Mod name")?;
    let display_name = prompter.read_line("Display name")?;
    let description = prompter.read_line("Description")?;
    Identifiers::validated(package_name, mod_id, mod_name, display_name, description)
}

/// Strips one pair of surrounding double quotes, as pasted paths often
/// carry them.
pub fn strip_surrounding_quotes(input: &str) -> &str {
    input
        .strip_prefix('"')
        .and_then(|s| s.strip_suffix('"'))
        .unwrap_or(input)
}
