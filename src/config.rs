//! Project-level configuration (`promptlink.yaml`)
//!
//! Every key is optional; command-line flags take precedence over the file,
//! and the file over built-in defaults.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::{PromptlinkError, Result};
use crate::layout::CONFIG_FILE;

/// What to do when a symlink install is requested from a transient cache
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum EphemeralPolicy {
    /// Copy the files instead of linking them
    #[default]
    AutoCopy,
    /// Copy only after explicit confirmation, fail otherwise
    RequireConfirm,
    /// Always fail
    Fail,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ProjectConfig {
    pub copy: bool,
    pub skills: bool,
    pub ephemeral_policy: EphemeralPolicy,
}

impl ProjectConfig {
    /// Load `promptlink.yaml` from the project root, or defaults if absent
    pub fn load(project_root: &Path) -> Result<Self> {
        let path = project_root.join(CONFIG_FILE);
        if !path.is_file() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path).map_err(|e| PromptlinkError::FileReadFailed {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;

        Self::from_yaml(&content).map_err(|reason| PromptlinkError::ConfigParseFailed {
            path: path.display().to_string(),
            reason,
        })
    }

    fn from_yaml(content: &str) -> std::result::Result<Self, String> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(content).map_err(|e| e.to_string())
    }
}
