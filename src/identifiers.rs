//! User-supplied identifier values bound to the placeholder tokens at
//! extraction time.

use crate::error::{Error, Result};
use crate::validate::{is_valid_mod_id, is_valid_mod_name, is_valid_package_name};

/// The five values a user supplies to instantiate a template.
///
/// Package name, mod id and mod name are grammar-checked; display name and
/// description are free-form and may be empty.
#[derive(Debug, Clone)]
pub struct Identifiers {
    pub package_name: String,
    pub mod_id: String,
    pub mod_name: String,
    pub display_name: String,
    pub description: String,
}

impl Identifiers {
    /// Builds the set after checking the three grammar-constrained values.
    ///
    /// All three are checked up front and every failure is reported in one
    /// message, so the user learns about each bad value in a single run.
    ///
    /// # Errors
    /// * `Error::Validation` listing each identifier that failed its grammar
    pub fn validated(
        package_name: String,
        mod_id: String,
        mod_name: String,
        display_name: String,
        description: String,
    ) -> Result<Self> {
        let mut failures = Vec::new();
        if !is_valid_package_name(&package_name) {
            failures.push(format!("invalid package name {:?}", package_name));
        }
        if !is_valid_mod_id(&mod_id) {
            failures.push(format!("invalid mod id {:?}", mod_id));
        }
        if !is_valid_mod_name(&mod_name) {
            failures.push(format!("invalid mod name {:?}", mod_name));
        }
        if !failures.is_empty() {
            return Err(Error::Validation(failures.join(", ")));
        }
        Ok(Self { package_name, mod_id, mod_name, display_name, description })
    }

    /// The package name with dots replaced by slashes, as used in entry paths.
    pub fn package_path(&self) -> String {
        self.package_name.replace('.', "/")
    }
}
