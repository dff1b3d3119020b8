//! Release planning: decide the next immutable/mutable tag pair.
//!
//! The planner classifies the current branch once, picks the prior tag to
//! base off of, bumps the version, and assembles the tag pair. It only
//! computes what the caller should write; creating and pushing refs is
//! the workflow's job.

use crate::config::EnvironmentConfig;
use crate::domain::{
    validate_tag, BranchClass, Environment, IncrementKind, PreReleaseKind, Version, LATEST_ALIAS,
};
use crate::error::{Result, TagManagerError};
use crate::git::TagStore;

/// First version used when a repository has no usable prior tag
const SEED_VERSION: Version = Version {
    major: 0,
    minor: 1,
    patch: 0,
};

/// Outcome of release planning
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionInfo {
    /// Prior tag the plan is based on, if one was found
    pub current_version: Option<String>,
    /// Tag to create once and never move
    pub immutable_tag: String,
    /// Floating alias to move to the new release, if this channel has one
    pub mutable_tag: Option<String>,
    /// Branch the plan applies to
    pub branch: String,
    /// Environment name, when the branch maps to one
    pub environment: Option<String>,
}

impl VersionInfo {
    /// Prior tag for display, "none" when seeding
    pub fn current_version_display(&self) -> &str {
        self.current_version.as_deref().unwrap_or("none")
    }
}

/// Plan the next release for the currently checked-out branch.
///
/// Fails with a configuration error when no environment configuration
/// exists; callers should offer setup instead of guessing a mapping.
pub fn determine_new_version<S: TagStore>(
    store: &S,
    config: Option<&EnvironmentConfig>,
    kind: IncrementKind,
    pre_release: Option<PreReleaseKind>,
) -> Result<VersionInfo> {
    let config = config.ok_or_else(|| {
        TagManagerError::config("No configuration found. Run tag-manager --setup first.")
    })?;

    let branch = store.current_branch()?;
    plan_for_branch(store, config, &branch, kind, pre_release)
}

/// Plan the next release for an explicit branch
pub fn plan_for_branch<S: TagStore>(
    store: &S,
    config: &EnvironmentConfig,
    branch: &str,
    kind: IncrementKind,
    pre_release: Option<PreReleaseKind>,
) -> Result<VersionInfo> {
    match BranchClass::classify(branch, &config.environments) {
        BranchClass::Mapped(environment) => {
            plan_environment_release(store, &environment, kind, pre_release)
        }
        BranchClass::Unmapped(name) => plan_branch_release(store, &name, kind, pre_release),
        BranchClass::Main => plan_main_release(store, branch, kind, pre_release),
    }
}

/// Branch mapped to an environment: base off the environment's own tag
/// history, falling back to the production line, then the seed version.
fn plan_environment_release<S: TagStore>(
    store: &S,
    environment: &Environment,
    kind: IncrementKind,
    pre_release: Option<PreReleaseKind>,
) -> Result<VersionInfo> {
    let latest = store.latest_tag(Some(&environment.name))?;

    let new_version = match &latest {
        Some(tag) => Version::parse_lenient(tag)?.bump(kind),
        None => match store.latest_tag(None)? {
            Some(tag) => Version::parse_lenient(&tag)?.bump(kind),
            None => SEED_VERSION,
        },
    };

    // Production environments get bare tags; -prod is never written out
    let base_tag = if environment.is_production {
        format!("v{}", new_version)
    } else {
        format!("v{}-{}", new_version, environment.name)
    };
    let immutable_tag = apply_pre_release(base_tag, pre_release);

    check_assembled_tag(&immutable_tag)?;

    let mutable_tag = if environment.is_production {
        LATEST_ALIAS.to_string()
    } else {
        environment.name.clone()
    };

    Ok(VersionInfo {
        current_version: latest,
        immutable_tag,
        mutable_tag: Some(mutable_tag),
        branch: environment.branch.clone(),
        environment: Some(environment.name.clone()),
    })
}

/// Unmapped branch: version off the production line, suffix with the
/// branch name. Branch names fall outside the strict tag grammar, so the
/// assembled tag is not grammar-checked and no alias tag is planned.
fn plan_branch_release<S: TagStore>(
    store: &S,
    branch: &str,
    kind: IncrementKind,
    pre_release: Option<PreReleaseKind>,
) -> Result<VersionInfo> {
    let latest = store.latest_tag(None)?;
    let new_version = match &latest {
        Some(tag) => Version::parse_lenient(tag)?.bump(kind),
        None => SEED_VERSION,
    };

    let base_tag = format!("v{}-{}", new_version, branch);
    let immutable_tag = apply_pre_release(base_tag, pre_release);

    Ok(VersionInfo {
        current_version: latest,
        immutable_tag,
        mutable_tag: None,
        branch: branch.to_string(),
        environment: None,
    })
}

/// Main/master with no environment mapping: bare production-line tag,
/// no alias.
fn plan_main_release<S: TagStore>(
    store: &S,
    branch: &str,
    kind: IncrementKind,
    pre_release: Option<PreReleaseKind>,
) -> Result<VersionInfo> {
    let latest = store.latest_tag(None)?;
    let new_version = match &latest {
        Some(tag) => Version::parse_lenient(tag)?.bump(kind),
        None => SEED_VERSION,
    };

    let immutable_tag = apply_pre_release(format!("v{}", new_version), pre_release);

    check_assembled_tag(&immutable_tag)?;

    Ok(VersionInfo {
        current_version: latest,
        immutable_tag,
        mutable_tag: None,
        branch: branch.to_string(),
        environment: None,
    })
}

fn apply_pre_release(base_tag: String, pre_release: Option<PreReleaseKind>) -> String {
    match pre_release {
        Some(kind) => format!("{}-{}", base_tag, kind),
        None => base_tag,
    }
}

/// The planner just built this tag itself, so a grammar failure is an
/// internal invariant break, not a user input error.
fn check_assembled_tag(tag: &str) -> Result<()> {
    validate_tag(tag).map_err(|e| {
        TagManagerError::tag(format!("Assembled tag '{}' failed validation: {}", tag, e))
    })?;
    Ok(())
}
