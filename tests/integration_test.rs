// tests/integration_test.rs
use std::process::Command;

use tag_manager::config::EnvironmentConfig;
use tag_manager::domain::{Environment, IncrementKind};
use tag_manager::git::{Git2TagStore, TagStore};
use tag_manager::release;

#[test]
fn test_tag_manager_help() {
    let output = Command::new("cargo")
        .args(["run", "--bin", "tag-manager", "--", "--help"])
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("tag-manager"));
    assert!(stdout.contains("semantic version tags"));
}

#[test]
fn test_tag_manager_version_flag() {
    let output = Command::new("cargo")
        .args(["run", "--bin", "tag-manager", "--", "--version"])
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("tag-manager"));
}

#[cfg(test)]
mod git_store_tests {
    use super::*;
    use git2::Repository;
    use std::fs;
    use std::path::Path;
    use tempfile::TempDir;

    // Scratch repository on branch 'develop' with a small tag history
    // and a few working branches.
    fn setup_test_repo() -> TempDir {
        let temp_dir = TempDir::new().expect("Could not create temp dir");
        let repo = Repository::init(temp_dir.path()).expect("Could not init git repo");

        {
            let mut config = repo.config().expect("Could not get config");
            config
                .set_str("user.name", "Test User")
                .expect("Could not set user.name");
            config
                .set_str("user.email", "test@example.com")
                .expect("Could not set user.email");
        }

        let content_path = temp_dir.path().join("README.md");
        fs::write(&content_path, b"Initial content\n").expect("Could not write initial file");

        let mut index = repo.index().expect("Could not get index");
        index
            .add_path(Path::new("README.md"))
            .expect("Could not add file to index");
        index.write().expect("Could not write index");

        let tree_id = index.write_tree().expect("Could not write tree");
        let tree = repo.find_tree(tree_id).expect("Could not find tree");

        let commit_id = repo
            .commit(
                Some("HEAD"),
                &repo.signature().expect("Could not get sig"),
                &repo.signature().expect("Could not get sig"),
                "Initial commit",
                &tree,
                &[],
            )
            .expect("Could not create commit");

        let commit = repo.find_commit(commit_id).expect("Could not find commit");
        let object = repo
            .find_object(commit_id, None)
            .expect("Could not find object");

        for tag in ["v0.1.0", "v0.2.0", "v0.0.7-dev", "v0.0.10-dev", "release-1"] {
            repo.tag_lightweight(tag, &object, false)
                .expect("Could not create tag");
        }

        for branch in ["develop", "qa", "feature/login", "hotfix/crash"] {
            repo.branch(branch, &commit, false)
                .expect("Could not create branch");
        }

        repo.set_head("refs/heads/develop")
            .expect("Could not switch to develop");

        temp_dir
    }

    #[test]
    fn test_store_reports_current_branch() {
        let temp_dir = setup_test_repo();
        let store = Git2TagStore::open(temp_dir.path()).unwrap();

        assert_eq!(store.current_branch().unwrap(), "develop");
    }

    #[test]
    fn test_store_lists_tags() {
        let temp_dir = setup_test_repo();
        let store = Git2TagStore::open(temp_dir.path()).unwrap();

        let tags = store.list_tags().unwrap();
        assert!(tags.contains(&"v0.2.0".to_string()));
        assert!(tags.contains(&"v0.0.10-dev".to_string()));
    }

    #[test]
    fn test_store_latest_tag_ordering() {
        let temp_dir = setup_test_repo();
        let store = Git2TagStore::open(temp_dir.path()).unwrap();

        // Unscoped lookup ignores suffixed and non-version tags
        assert_eq!(store.latest_tag(None).unwrap(), Some("v0.2.0".to_string()));
        // Scoped lookup orders numerically: 0.0.10 beats 0.0.7
        assert_eq!(
            store.latest_tag(Some("dev")).unwrap(),
            Some("v0.0.10-dev".to_string())
        );
        assert_eq!(store.latest_tag(Some("qa")).unwrap(), None);
    }

    #[test]
    fn test_store_create_tag_force_semantics() {
        let temp_dir = setup_test_repo();
        let store = Git2TagStore::open(temp_dir.path()).unwrap();

        store.create_tag("dev", false).unwrap();
        // Recreating without force must fail; force moves the alias
        assert!(store.create_tag("dev", false).is_err());
        assert!(store.create_tag("dev", true).is_ok());
    }

    #[test]
    fn test_store_filters_working_branches() {
        let temp_dir = setup_test_repo();
        let store = Git2TagStore::open(temp_dir.path()).unwrap();

        let branches = store.list_branches().unwrap();
        assert!(branches.contains(&"develop".to_string()));
        assert!(branches.contains(&"qa".to_string()));
        assert!(!branches.iter().any(|b| b.starts_with("feature/")));
        assert!(!branches.iter().any(|b| b.starts_with("hotfix/")));
    }

    #[test]
    fn test_plan_against_scratch_repository() {
        let temp_dir = setup_test_repo();
        let store = Git2TagStore::open(temp_dir.path()).unwrap();

        let config = EnvironmentConfig {
            environments: vec![
                Environment::new("dev", "develop", false),
                Environment::new("prod", "main", true),
            ],
        };

        let info =
            release::determine_new_version(&store, Some(&config), IncrementKind::Patch, None)
                .unwrap();

        assert_eq!(info.immutable_tag, "v0.0.11-dev");
        assert_eq!(info.mutable_tag.as_deref(), Some("dev"));
        assert_eq!(info.current_version.as_deref(), Some("v0.0.10-dev"));
    }
}
