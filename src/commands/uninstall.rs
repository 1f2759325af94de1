//! Uninstall command implementation

use std::path::PathBuf;

use crate::cli::UninstallArgs;
use crate::config::ProjectConfig;
use crate::error::Result;
use crate::layout::Scope;
use crate::ui;

/// Run uninstall command
pub fn run(
    workspace: Option<PathBuf>,
    self_path: Option<PathBuf>,
    args: UninstallArgs,
) -> Result<()> {
    let invocation = super::helpers::invocation(workspace, self_path)?;
    let config = ProjectConfig::load(&invocation.project_root)?;

    let scopes = Scope::selected(args.skills || config.skills);
    let reports = invocation.uninstall(&scopes)?;
    ui::print_uninstall_reports(&invocation.project_root, &reports);

    Ok(())
}
