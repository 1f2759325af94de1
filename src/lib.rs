//! promptlink - install a package's shared prompts and skills into a project
//!
//! The package ships prompt descriptors (`*.prompt.md`) and skill
//! directories under `assets/`. promptlink materializes them in the
//! consuming project's `.github/prompts` (and optionally `.github/skills`)
//! as symlinks or copies, reports what is installed, and removes them.
//!
//! Symlinks are only created into durable package installs: when the
//! binary runs from a transient execution cache, an [`config::EphemeralPolicy`]
//! decides whether to copy instead or to fail.

pub mod catalog;
pub mod cli;
pub mod commands;
pub mod common;
pub mod config;
pub mod context;
pub mod error;
pub mod installer;
pub mod layout;
pub mod operations;
pub mod path_utils;
pub mod project;
pub mod status;
pub mod uninstall;
pub mod ui;

#[cfg(test)]
mod temp;
#[cfg(test)]
mod test_fixtures;

pub use error::{PromptlinkError, Result};
