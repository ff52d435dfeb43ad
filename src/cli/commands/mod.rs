//! Command implementations

pub mod browse;
pub mod catalog;
pub mod role;

use miette::{IntoDiagnostic, Result};

use crate::cli::GlobalOpts;
use crate::core::role::{FileStorage, RoleStore, UserType};
use crate::core::Config;

/// Load the role store for the configured location
pub fn load_role_store(global: &GlobalOpts) -> Result<RoleStore<FileStorage>> {
    let config = Config::locate(global.config_dir.clone()).into_diagnostic()?;
    RoleStore::load(config.role_storage()).into_diagnostic()
}

/// The role gate: data commands refuse to run until a role is selected
///
/// The CLI analog of the prototype rendering the role selector instead of
/// any route.
pub fn require_role(global: &GlobalOpts) -> Result<UserType> {
    load_role_store(global)?.current().ok_or_else(|| {
        miette::miette!(
            "No role selected. Run 'workr role set customer' or 'workr role set contractor' first."
        )
    })
}
