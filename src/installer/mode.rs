//! Install mode selection under the ephemeral-context policy

use std::fmt;

use tracing::warn;

use crate::config::EphemeralPolicy;
use crate::error::{PromptlinkError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InstallMode {
    Symlink,
    Copy,
}

impl fmt::Display for InstallMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InstallMode::Symlink => write!(f, "symlink"),
            InstallMode::Copy => write!(f, "copy"),
        }
    }
}

/// Mode actually used, and whether a symlink request was turned into a copy
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModeDecision {
    pub mode: InstallMode,
    pub downgraded: bool,
}

/// Decide the install mode
///
/// Symlinks are never produced when the source lives in a transient cache:
/// depending on `policy` the request becomes a copy or fails.
pub fn resolve_mode(
    is_ephemeral: bool,
    copy: bool,
    policy: EphemeralPolicy,
    confirmed: bool,
) -> Result<ModeDecision> {
    if copy {
        return Ok(ModeDecision {
            mode: InstallMode::Copy,
            downgraded: false,
        });
    }
    if !is_ephemeral {
        return Ok(ModeDecision {
            mode: InstallMode::Symlink,
            downgraded: false,
        });
    }

    match policy {
        EphemeralPolicy::AutoCopy => {
            warn!("running from a temporary package cache, copying files instead of linking");
        }
        EphemeralPolicy::RequireConfirm if confirmed => {}
        EphemeralPolicy::RequireConfirm => {
            return Err(PromptlinkError::EphemeralConfirmationRequired);
        }
        EphemeralPolicy::Fail => return Err(PromptlinkError::EphemeralSymlinkRefused),
    }

    Ok(ModeDecision {
        mode: InstallMode::Copy,
        downgraded: true,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_permanent_context_links() {
        let decision = resolve_mode(false, false, EphemeralPolicy::Fail, false).unwrap();
        assert_eq!(decision.mode, InstallMode::Symlink);
        assert!(!decision.downgraded);
    }

    #[test]
    fn test_explicit_copy_is_never_a_downgrade() {
        for policy in [
            EphemeralPolicy::AutoCopy,
            EphemeralPolicy::RequireConfirm,
            EphemeralPolicy::Fail,
        ] {
            let decision = resolve_mode(true, true, policy, false).unwrap();
            assert_eq!(decision.mode, InstallMode::Copy);
            assert!(!decision.downgraded);
        }
    }

    #[test]
    fn test_ephemeral_auto_copy() {
        let decision = resolve_mode(true, false, EphemeralPolicy::AutoCopy, false).unwrap();
        assert_eq!(decision.mode, InstallMode::Copy);
        assert!(decision.downgraded);
    }

    #[test]
    fn test_ephemeral_require_confirm() {
        let err = resolve_mode(true, false, EphemeralPolicy::RequireConfirm, false).unwrap_err();
        assert!(matches!(err, PromptlinkError::EphemeralConfirmationRequired));

        let decision = resolve_mode(true, false, EphemeralPolicy::RequireConfirm, true).unwrap();
        assert_eq!(decision.mode, InstallMode::Copy);
        assert!(decision.downgraded);
    }

    #[test]
    fn test_ephemeral_fail_ignores_confirmation() {
        let err = resolve_mode(true, false, EphemeralPolicy::Fail, true).unwrap_err();
        assert!(matches!(err, PromptlinkError::EphemeralSymlinkRefused));
    }
}
