//! Git operations abstraction layer
//!
//! The [TagStore] trait defines the git operations tag planning and
//! publishing need. Two implementations exist:
//!
//! - [repository::Git2TagStore]: a real implementation using the `git2` crate
//! - [mock::MockTagStore]: an in-memory implementation for testing
//!
//! Planning code depends on the trait rather than a concrete store so it
//! can be exercised without a repository on disk.

pub mod mock;
pub mod repository;

pub use mock::MockTagStore;
pub use repository::Git2TagStore;

use crate::domain::Version;
use crate::error::Result;

/// Common git operations trait for tag planning and publishing.
///
/// All implementors must be `Send + Sync`. Methods return
/// [crate::error::Result], mapping underlying `git2` errors into
/// [crate::error::TagManagerError] variants.
pub trait TagStore: Send + Sync {
    /// Name of the currently checked-out branch
    fn current_branch(&self) -> Result<String>;

    /// Local branch names suitable for environment mapping.
    ///
    /// Working branches (`feature/`, `feat/`, `hotfix/`, `refactor/`
    /// prefixes) are filtered out; the result is deduplicated and sorted.
    fn list_branches(&self) -> Result<Vec<String>>;

    /// All tag names in the repository
    fn list_tags(&self) -> Result<Vec<String>>;

    /// Fetch tags from a remote
    fn fetch_tags(&self, remote: &str) -> Result<()>;

    /// Create a tag at the current HEAD. `force` moves an existing tag.
    fn create_tag(&self, name: &str, force: bool) -> Result<()>;

    /// Push a tag ref to a remote. `force` overwrites the remote ref.
    fn push_tag(&self, remote: &str, name: &str, force: bool) -> Result<()>;

    /// Highest existing tag, scoped to one environment or unscoped.
    ///
    /// Scoped lookup considers tags of the exact shape
    /// `v<version>-<environment>`; unscoped lookup considers bare
    /// `v<version>` tags only. Candidates are ordered by major, then
    /// minor, then patch, descending; suffixes never participate in the
    /// comparison.
    fn latest_tag(&self, environment: Option<&str>) -> Result<Option<String>> {
        let tags = self.list_tags()?;
        Ok(select_latest_tag(&tags, environment))
    }
}

/// Pick the highest-versioned candidate from a tag list.
///
/// Tags that do not carry a parseable `X.Y.Z` triple are skipped.
pub fn select_latest_tag(tags: &[String], environment: Option<&str>) -> Option<String> {
    let candidates = tags.iter().filter(|tag| match environment {
        Some(env) => {
            tag.starts_with('v') && tag.ends_with(&format!("-{}", env))
        }
        None => tag.starts_with('v') && !tag.contains('-'),
    });

    candidates
        .filter_map(|tag| Version::parse_lenient(tag).ok().map(|v| (v, tag)))
        .max_by_key(|(version, _)| *version)
        .map(|(_, tag)| tag.clone())
}
