//! Status command implementation

use std::path::PathBuf;

use crate::error::Result;
use crate::ui;

/// Run status command
pub fn run(workspace: Option<PathBuf>, self_path: Option<PathBuf>) -> Result<()> {
    let invocation = super::helpers::invocation(workspace, self_path)?;
    let statuses = invocation.status()?;
    ui::print_status(&invocation.project_root, &statuses);

    Ok(())
}
