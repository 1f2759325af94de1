//! Install command implementation

use std::path::PathBuf;

use console::Term;
use inquire::Confirm;

use crate::cli::InstallArgs;
use crate::config::{EphemeralPolicy, ProjectConfig};
use crate::error::Result;
use crate::installer::InstallOptions;
use crate::layout::Scope;
use crate::operations::Invocation;
use crate::ui;

/// Merge command-line flags over the project configuration
pub fn options_from(args: &InstallArgs, config: &ProjectConfig) -> InstallOptions {
    InstallOptions {
        copy: args.copy || config.copy,
        force: args.force,
        policy: args.ephemeral_policy.unwrap_or(config.ephemeral_policy),
        confirmed: args.yes,
    }
}

fn needs_confirmation(invocation: &Invocation, options: &InstallOptions) -> bool {
    invocation.context.is_ephemeral
        && !options.copy
        && !options.confirmed
        && options.policy == EphemeralPolicy::RequireConfirm
}

fn confirm_copy() -> Result<bool> {
    println!("This command is running from a temporary package cache.");
    println!("Symlinks into it would break once the cache is cleared.");
    Ok(Confirm::new("Copy the files instead?")
        .with_default(true)
        .with_help_message("Press Enter to confirm, or 'n' to cancel")
        .prompt()?)
}

/// Run install command
pub fn run(workspace: Option<PathBuf>, self_path: Option<PathBuf>, args: InstallArgs) -> Result<()> {
    let invocation = super::helpers::invocation(workspace, self_path)?;
    let config = ProjectConfig::load(&invocation.project_root)?;

    let mut options = options_from(&args, &config);
    if needs_confirmation(&invocation, &options) && Term::stdout().is_term() {
        options.confirmed = confirm_copy()?;
    }

    let scopes = Scope::selected(args.skills || config.skills);
    let reports = invocation.install(&scopes, &options)?;
    ui::print_install_reports(&invocation.project_root, &reports);

    Ok(())
}
