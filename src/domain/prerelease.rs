//! Pre-release qualifiers for not-yet-final builds.
//!
//! The tag grammar admits exactly three kinds: alpha, beta, rc. No
//! iteration numbers and no custom identifiers. No ordering is enforced
//! between kinds; transitions like rc -> alpha are accepted.

use crate::error::{Result, TagManagerError};
use std::fmt;
use std::str::FromStr;

/// Pre-release kind (alpha, beta, rc)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PreReleaseKind {
    Alpha,
    Beta,
    Rc,
}

impl PreReleaseKind {
    /// All kinds, in the order offered to the user
    pub const ALL: [PreReleaseKind; 3] = [
        PreReleaseKind::Alpha,
        PreReleaseKind::Beta,
        PreReleaseKind::Rc,
    ];
}

impl FromStr for PreReleaseKind {
    type Err = TagManagerError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "alpha" => Ok(PreReleaseKind::Alpha),
            "beta" => Ok(PreReleaseKind::Beta),
            "rc" => Ok(PreReleaseKind::Rc),
            other => Err(TagManagerError::version(format!(
                "Invalid pre-release kind: '{}'",
                other
            ))),
        }
    }
}

impl fmt::Display for PreReleaseKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PreReleaseKind::Alpha => write!(f, "alpha"),
            PreReleaseKind::Beta => write!(f, "beta"),
            PreReleaseKind::Rc => write!(f, "rc"),
        }
    }
}
