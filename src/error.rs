//! Error types and handling for promptlink
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for promptlink operations
#[derive(Error, Diagnostic, Debug)]
pub enum PromptlinkError {
    // Catalog errors
    #[error("Asset catalog not found at: {path}")]
    #[diagnostic(
        code(promptlink::catalog::not_found),
        help("The package installation looks incomplete or incompatible; reinstall the package")
    )]
    CatalogNotFound { path: String },

    // Install errors
    #[error("Refusing to overwrite existing entries: {}", names.join(", "))]
    #[diagnostic(
        code(promptlink::install::collision),
        help("Re-run with --force to replace the existing entries")
    )]
    Collision { names: Vec<String> },

    #[error("Refusing to install into the package's own source tree: {path}")]
    #[diagnostic(
        code(promptlink::install::self_install),
        help("Run the command from the project that consumes this package")
    )]
    SelfInstall { path: String },

    #[error("Cannot install into {path}: a file is in the way")]
    #[diagnostic(
        code(promptlink::install::not_a_directory),
        help("Move or remove the file so the directory can be created")
    )]
    ManagedDirBlocked { path: String },

    #[error("Running from a temporary package cache; symlinks would dangle once it is cleared")]
    #[diagnostic(
        code(promptlink::install::confirmation_required),
        help("Re-run with --yes to copy the files instead, or pass --copy")
    )]
    EphemeralConfirmationRequired,

    #[error("Running from a temporary package cache; refusing to create symlinks into it")]
    #[diagnostic(
        code(promptlink::install::ephemeral_symlink),
        help("Pass --copy, or install the package into the project first")
    )]
    EphemeralSymlinkRefused,

    #[error("Install stopped at {path} after {completed} entries: {reason}")]
    #[diagnostic(
        code(promptlink::install::partial_failure),
        help("Fix the underlying problem and re-run with --force to finish the install")
    )]
    PartialFailure {
        path: String,
        completed: usize,
        reason: String,
    },

    // File system errors
    #[error("Failed to read {path}: {reason}")]
    #[diagnostic(code(promptlink::fs::read_failed))]
    FileReadFailed { path: String, reason: String },

    #[error("Failed to write {path}: {reason}")]
    #[diagnostic(code(promptlink::fs::write_failed))]
    FileWriteFailed { path: String, reason: String },

    #[error("IO error: {message}")]
    #[diagnostic(code(promptlink::fs::io_error))]
    IoError { message: String },

    // Configuration errors
    #[error("Failed to parse configuration file {path}: {reason}")]
    #[diagnostic(
        code(promptlink::config::parse_failed),
        help("Valid keys are: copy, skills, ephemeral_policy")
    )]
    ConfigParseFailed { path: String, reason: String },
}

impl From<inquire::InquireError> for PromptlinkError {
    fn from(err: inquire::InquireError) -> Self {
        PromptlinkError::IoError {
            message: err.to_string(),
        }
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, PromptlinkError>;
