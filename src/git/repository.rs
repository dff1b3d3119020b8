use crate::error::{Result, TagManagerError};
use crate::git::TagStore;
use git2::{BranchType, Repository};
use std::path::Path;

/// Prefixes of working branches that are not environment candidates
const WORKING_BRANCH_PREFIXES: [&str; 4] = ["feature/", "feat/", "hotfix/", "refactor/"];

/// Tag store backed by a real repository via the `git2` crate
pub struct Git2TagStore {
    repo: Repository,
}

impl Git2TagStore {
    /// Discover the repository at or above the given path
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let repo = Repository::discover(path)?;
        Ok(Git2TagStore { repo })
    }

    /// Discover the repository from the current working directory
    pub fn discover() -> Result<Self> {
        Self::open(".")
    }
}

impl TagStore for Git2TagStore {
    fn current_branch(&self) -> Result<String> {
        let head = self.repo.head()?;
        let name = head.shorthand().ok_or_else(|| {
            TagManagerError::config("HEAD is detached or not on a named branch")
        })?;
        Ok(name.to_string())
    }

    fn list_branches(&self) -> Result<Vec<String>> {
        let mut branches = Vec::new();

        for entry in self.repo.branches(Some(BranchType::Local))? {
            let (branch, _) = entry?;
            if let Some(name) = branch.name()? {
                if WORKING_BRANCH_PREFIXES
                    .iter()
                    .any(|prefix| name.starts_with(prefix))
                {
                    continue;
                }
                branches.push(name.to_string());
            }
        }

        branches.sort();
        branches.dedup();
        Ok(branches)
    }

    fn list_tags(&self) -> Result<Vec<String>> {
        let tags = self.repo.tag_names(None)?;
        Ok(tags.iter().flatten().map(|s| s.to_string()).collect())
    }

    fn fetch_tags(&self, remote: &str) -> Result<()> {
        let mut remote = self
            .repo
            .find_remote(remote)
            .map_err(|e| TagManagerError::remote(format!("Cannot find remote: {}", e)))?;

        remote
            .fetch(&["+refs/tags/*:refs/tags/*"], None, None)
            .map_err(|e| TagManagerError::remote(format!("Fetch failed: {}", e)))?;

        Ok(())
    }

    fn create_tag(&self, name: &str, force: bool) -> Result<()> {
        let head = self.repo.head()?.peel_to_commit()?;
        self.repo
            .tag_lightweight(name, head.as_object(), force)
            .map_err(|e| TagManagerError::tag(format!("Cannot create tag '{}': {}", name, e)))?;
        Ok(())
    }

    fn push_tag(&self, remote: &str, name: &str, force: bool) -> Result<()> {
        let mut remote = self
            .repo
            .find_remote(remote)
            .map_err(|e| TagManagerError::remote(format!("Cannot find remote: {}", e)))?;

        // A leading '+' makes the refspec a forced update, moving the
        // remote ref for mutable alias tags
        let refspec = if force {
            format!("+refs/tags/{}:refs/tags/{}", name, name)
        } else {
            format!("refs/tags/{}:refs/tags/{}", name, name)
        };

        remote
            .push(&[refspec.as_str()], None)
            .map_err(|e| TagManagerError::remote(format!("Push failed for '{}': {}", name, e)))?;

        Ok(())
    }
}

// SAFETY: Git2TagStore wraps git2::Repository which is Send + Sync.
// git2 is thread-safe for read operations via libgit2's thread-safe design.
unsafe impl Sync for Git2TagStore {}
