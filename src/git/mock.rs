use crate::error::{Result, TagManagerError};
use crate::git::TagStore;
use std::sync::Mutex;

/// In-memory tag store for testing without actual git operations.
///
/// Tags created through the trait are recorded so tests can assert on
/// what would have been written.
pub struct MockTagStore {
    branch: String,
    branches: Vec<String>,
    tags: Mutex<Vec<String>>,
    pushed: Mutex<Vec<(String, String, bool)>>,
}

impl MockTagStore {
    /// Create a mock store checked out on the given branch
    pub fn new(branch: impl Into<String>) -> Self {
        MockTagStore {
            branch: branch.into(),
            branches: Vec::new(),
            tags: Mutex::new(Vec::new()),
            pushed: Mutex::new(Vec::new()),
        }
    }

    /// Add an existing tag
    pub fn with_tag(self, name: impl Into<String>) -> Self {
        self.tags
            .lock()
            .expect("mock tag lock poisoned")
            .push(name.into());
        self
    }

    /// Add existing tags
    pub fn with_tags(self, names: &[&str]) -> Self {
        {
            let mut tags = self.tags.lock().expect("mock tag lock poisoned");
            tags.extend(names.iter().map(|s| s.to_string()));
        }
        self
    }

    /// Set the local branch list
    pub fn with_branches(mut self, names: &[&str]) -> Self {
        self.branches = names.iter().map(|s| s.to_string()).collect();
        self
    }

    /// Tags pushed through the trait, as (remote, tag, force)
    pub fn pushed_tags(&self) -> Vec<(String, String, bool)> {
        self.pushed.lock().expect("mock push lock poisoned").clone()
    }
}

impl TagStore for MockTagStore {
    fn current_branch(&self) -> Result<String> {
        Ok(self.branch.clone())
    }

    fn list_branches(&self) -> Result<Vec<String>> {
        Ok(self.branches.clone())
    }

    fn list_tags(&self) -> Result<Vec<String>> {
        Ok(self.tags.lock().expect("mock tag lock poisoned").clone())
    }

    fn fetch_tags(&self, _remote: &str) -> Result<()> {
        Ok(())
    }

    fn create_tag(&self, name: &str, force: bool) -> Result<()> {
        let mut tags = self.tags.lock().expect("mock tag lock poisoned");
        if tags.iter().any(|t| t == name) {
            if !force {
                return Err(TagManagerError::tag(format!(
                    "Tag '{}' already exists",
                    name
                )));
            }
        } else {
            tags.push(name.to_string());
        }
        Ok(())
    }

    fn push_tag(&self, remote: &str, name: &str, force: bool) -> Result<()> {
        self.pushed
            .lock()
            .expect("mock push lock poisoned")
            .push((remote.to_string(), name.to_string(), force));
        Ok(())
    }
}
