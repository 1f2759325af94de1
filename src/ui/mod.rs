//! Console rendering for command results
//!
//! Reports go to stdout; errors and their remediation hints go to stderr.

use std::path::Path;

use console::Style;
use miette::Diagnostic;

use crate::catalog::EntryKind;
use crate::installer::{InstallMode, InstallReport};
use crate::path_utils::display_relative;
use crate::status::{InstallState, InstallationStatus, Observed};
use crate::uninstall::UninstallReport;

fn plural(count: usize, one: &str, many: &str) -> String {
    if count == 1 {
        format!("{count} {one}")
    } else {
        format!("{count} {many}")
    }
}

pub fn print_install_reports(project_root: &Path, reports: &[InstallReport]) {
    let bold = Style::new().bold();
    let green = Style::new().green().bold();
    let yellow = Style::new().yellow();

    for report in reports {
        if report.downgraded {
            println!(
                "{} running from a temporary package cache, copied files instead of linking",
                yellow.apply_to("note:")
            );
        }
        for name in &report.replaced {
            println!("  {} {}", yellow.apply_to("replaced"), name);
        }

        let verb = match report.mode {
            InstallMode::Symlink => "Linked",
            InstallMode::Copy => "Copied",
        };
        println!(
            "{} {} and {} into {}",
            green.apply_to(verb),
            plural(report.files, "file", "files"),
            plural(report.directories, "directory", "directories"),
            bold.apply_to(display_relative(project_root, &report.managed_dir))
        );
    }
}

pub fn print_uninstall_reports(project_root: &Path, reports: &[UninstallReport]) {
    let green = Style::new().green().bold();
    let dim = Style::new().dim();

    for report in reports {
        let managed = display_relative(project_root, &report.managed_dir);
        if report.nothing_removed() {
            println!("Nothing to remove in {managed}");
            continue;
        }
        for name in &report.removed {
            println!("  {} {}", dim.apply_to("removed"), name);
        }
        println!(
            "{} {} from {}",
            green.apply_to("Removed"),
            plural(report.removed.len(), "entry", "entries"),
            managed
        );
    }
}

pub fn print_status(project_root: &Path, statuses: &[InstallationStatus]) {
    let bold = Style::new().bold();

    for status in statuses {
        let managed = display_relative(project_root, &status.managed_dir);
        println!(
            "{} {} ({})",
            bold.apply_to(format!("{}:", status.scope.label())),
            state_style(status.state).apply_to(status.state),
            managed
        );

        if matches!(
            status.state,
            InstallState::NotInstalled | InstallState::NonePresent
        ) {
            continue;
        }

        println!(
            "  {} symlinked, {} copied, {} missing",
            status.symlinked(),
            status.copied(),
            status.absent()
        );
        for entry in &status.entries {
            let suffix = if entry.kind == EntryKind::Directory {
                "/"
            } else {
                ""
            };
            let line = match (&entry.observed, &entry.link_target) {
                (Observed::Symlink, Some(target)) => {
                    format!("symlink -> {}", target.display())
                }
                (Observed::Symlink, None) => "symlink".to_string(),
                (Observed::Copy, _) => "copy".to_string(),
                (Observed::Absent, _) => "missing".to_string(),
            };
            println!("    {}{} {}", entry.name, suffix, Style::new().dim().apply_to(line));
        }
    }
}

fn state_style(state: InstallState) -> Style {
    match state {
        InstallState::FullySymlinked | InstallState::FullyCopied => Style::new().green().bold(),
        InstallState::Mixed => Style::new().yellow().bold(),
        InstallState::NotInstalled | InstallState::NonePresent => Style::new().dim(),
    }
}

/// Print an error and its remediation hint, if any
pub fn print_error(err: &(dyn Diagnostic + 'static)) {
    let red = Style::new().red().bold();
    eprintln!("{} {}", red.apply_to("Error:"), err);
    if let Some(help) = err.help() {
        eprintln!("{} {}", Style::new().cyan().apply_to("help:"), help);
    }
}
