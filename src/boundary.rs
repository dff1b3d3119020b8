use std::fmt;

/// Non-fatal conditions met while preparing a release.
/// These are reported to the user; the workflow continues.
#[derive(Debug, Clone, PartialEq)]
pub enum BoundaryWarning {
    /// Tag fetch from the remote failed; planning uses local tags only
    FetchFailed { remote: String, reason: String },
    /// Branch is not mapped to an environment; only an immutable tag is planned
    UnmappedBranch { branch: String },
}

impl fmt::Display for BoundaryWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoundaryWarning::FetchFailed { remote, reason } => {
                write!(
                    f,
                    "Could not fetch tags from remote '{}': {}. Using local tags.",
                    remote, reason
                )
            }
            BoundaryWarning::UnmappedBranch { branch } => {
                write!(
                    f,
                    "Branch '{}' is not mapped to an environment; no alias tag will be moved",
                    branch
                )
            }
        }
    }
}
