//! Command implementations for the promptlink CLI

pub mod completions;
pub mod helpers;
pub mod install;
pub mod status;
pub mod uninstall;
pub mod version;

use crate::cli::{Cli, Commands};
use crate::error::Result;

/// Dispatch a parsed command line
pub fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Install(args) => install::run(cli.workspace, cli.self_path, args),
        Commands::Uninstall(args) => uninstall::run(cli.workspace, cli.self_path, args),
        Commands::Status => status::run(cli.workspace, cli.self_path),
        Commands::Version => version::run(cli.workspace, cli.self_path),
        Commands::Completions(args) => completions::run(args),
    }
}
