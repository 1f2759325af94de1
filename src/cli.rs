//! CLI definitions using clap derive API

use clap::builder::{Styles, styling::AnsiColor};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::config::EphemeralPolicy;

/// promptlink - install shared prompts and skills into a project
#[derive(Parser, Debug)]
#[command(
    name = "promptlink",
    author,
    version,
    color = clap::ColorChoice::Auto,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Install this package's prompt and skill files into a project",
    long_about = "promptlink links (or copies) the prompt descriptors and skill directories \
                  shipped with this package into the project's .github/prompts and \
                  .github/skills directories, and removes them again.",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n    \
                  promptlink install\n    \
                  promptlink install --copy --skills\n    \
                  promptlink status\n    \
                  promptlink uninstall --skills"
)]
pub struct Cli {
    /// Directory to start the project lookup from (defaults to current directory)
    #[arg(long, short = 'w', global = true)]
    pub workspace: Option<PathBuf>,

    /// Enable verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    /// Treat this path as the running executable when detecting the package
    #[arg(long, global = true, hide = true, value_name = "PATH")]
    pub self_path: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Install prompts (and optionally skills) into the project
    Install(InstallArgs),

    /// Remove installed prompts (and optionally skills) from the project
    Uninstall(UninstallArgs),

    /// Show what is installed
    Status,

    /// Show version information and the package source in use
    Version,

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the install command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                   Link prompts into .github/prompts:\n    promptlink install\n\n\
                   Copy instead of linking:\n    promptlink install --copy\n\n\
                   Replace entries that already exist:\n    promptlink install --force\n\n\
                   Also install skills into .github/skills:\n    promptlink install --skills\n\n\
                   Fail instead of copying when run from a temporary cache:\n    \
                   promptlink install --ephemeral-policy fail")]
pub struct InstallArgs {
    /// Copy files instead of creating symlinks
    #[arg(long)]
    pub copy: bool,

    /// Replace existing entries with the same names
    #[arg(long)]
    pub force: bool,

    /// Also install skill directories into .github/skills
    #[arg(long)]
    pub skills: bool,

    /// What to do when symlinks would point into a temporary package cache
    #[arg(long, value_enum, value_name = "POLICY")]
    pub ephemeral_policy: Option<EphemeralPolicy>,

    /// Confirm copying when the policy requires confirmation
    #[arg(long, short = 'y')]
    pub yes: bool,
}

/// Arguments for the uninstall command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Remove installed prompts:\n    promptlink uninstall\n\n\
                  Remove prompts and skills:\n    promptlink uninstall --skills")]
pub struct UninstallArgs {
    /// Also remove skill directories from .github/skills
    #[arg(long)]
    pub skills: bool,
}

/// Arguments for completions command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Generate bash completions:\n    promptlink completions --shell bash > ~/.bash_completion.d/promptlink\n\n\
                  Generate zsh completions:\n    promptlink completions --shell zsh > ~/.zfunc/_promptlink")]
pub struct CompletionsArgs {
    /// Shell type
    #[arg(long, value_enum, ignore_case = true)]
    pub shell: clap_complete::Shell,
}
