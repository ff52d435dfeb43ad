//! `workr role` command - select, inspect, or clear the persisted role

use clap::Subcommand;
use console::style;
use miette::{IntoDiagnostic, Result};

use crate::cli::GlobalOpts;
use crate::core::role::{RoleAction, UserType};

#[derive(Subcommand, Debug)]
pub enum RoleCommands {
    /// Show the currently selected role
    Show,

    /// Select a role and persist it
    Set(SetArgs),

    /// Unset the role (removes the persisted key)
    Clear,
}

#[derive(clap::Args, Debug)]
pub struct SetArgs {
    /// The role: customer or contractor
    pub role: UserType,
}

/// Run a role subcommand
pub fn run(cmd: RoleCommands, global: &GlobalOpts) -> Result<()> {
    match cmd {
        RoleCommands::Show => run_show(global),
        RoleCommands::Set(args) => run_set(args, global),
        RoleCommands::Clear => run_clear(global),
    }
}

fn run_show(global: &GlobalOpts) -> Result<()> {
    let store = super::load_role_store(global)?;
    match store.current() {
        Some(role) => println!("{}", role),
        None => println!("unset"),
    }
    Ok(())
}

fn run_set(args: SetArgs, global: &GlobalOpts) -> Result<()> {
    let mut store = super::load_role_store(global)?;
    store
        .apply(RoleAction::Select(args.role))
        .into_diagnostic()?;
    println!("Role set to {}", style(args.role).yellow());
    Ok(())
}

fn run_clear(global: &GlobalOpts) -> Result<()> {
    let mut store = super::load_role_store(global)?;
    store.apply(RoleAction::Clear).into_diagnostic()?;
    println!("Role cleared");
    Ok(())
}
