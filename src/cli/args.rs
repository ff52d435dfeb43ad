//! Top-level argument types

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::cli::commands::browse::BrowseArgs;
use crate::cli::commands::catalog::CatalogCommands;
use crate::cli::commands::role::RoleCommands;

/// Workr: browse a freelance-marketplace catalog from the terminal
#[derive(Parser, Debug)]
#[command(name = "workr", version, about)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalOpts,

    #[command(subcommand)]
    pub command: Commands,
}

/// Options shared by every command
#[derive(clap::Args, Debug)]
pub struct GlobalOpts {
    /// Output format
    #[arg(long, short = 'o', global = true, default_value = "auto")]
    pub output: OutputFormat,

    /// Config directory override (where the role key is stored)
    #[arg(long, global = true, env = "WORKR_CONFIG_DIR")]
    pub config_dir: Option<PathBuf>,
}

/// Output format for list and show commands
#[derive(Debug, Clone, Copy, ValueEnum, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Table for lists, pretty text for single records
    #[default]
    Auto,
    Table,
    Json,
    Yaml,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Select or inspect your role (customer or contractor)
    #[command(subcommand)]
    Role(RoleCommands),

    /// List and inspect specialists
    #[command(subcommand)]
    Catalog(CatalogCommands),

    /// Interactive browsing session with favorites
    Browse(BrowseArgs),
}
