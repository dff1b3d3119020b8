use crate::domain::Environment;
use crate::error::{Result, TagManagerError};
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Configuration file name, looked up in the working directory first
pub const CONFIG_FILE_NAME: &str = ".tag-manager.json";

/// Branch-to-environment mapping for a repository.
///
/// Persisted as flat JSON. Environments are unique by name and by branch;
/// a branch bound to two environments would make tag planning ambiguous.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct EnvironmentConfig {
    pub environments: Vec<Environment>,
}

impl EnvironmentConfig {
    /// Look up the environment bound to a branch
    pub fn environment_for_branch(&self, branch: &str) -> Option<&Environment> {
        self.environments.iter().find(|env| env.branch == branch)
    }

    /// Look up an environment by name
    pub fn environment(&self, name: &str) -> Option<&Environment> {
        self.environments.iter().find(|env| env.name == name)
    }

    /// Check structural invariants: non-empty fields, unique names and branches
    pub fn validate(&self) -> Result<()> {
        let mut names = HashSet::new();
        let mut branches = HashSet::new();

        for env in &self.environments {
            if env.name.is_empty() || env.branch.is_empty() {
                return Err(TagManagerError::config(
                    "Environment entries need a name and a branch",
                ));
            }
            if !names.insert(env.name.as_str()) {
                return Err(TagManagerError::config(format!(
                    "Duplicate environment name '{}'",
                    env.name
                )));
            }
            if !branches.insert(env.branch.as_str()) {
                return Err(TagManagerError::config(format!(
                    "Branch '{}' is mapped to more than one environment",
                    env.branch
                )));
            }
        }

        Ok(())
    }
}

impl Default for EnvironmentConfig {
    fn default() -> Self {
        EnvironmentConfig {
            environments: vec![
                Environment::new("dev", "develop", false),
                Environment::new("qa", "qa", false),
                Environment::new("stg", "staging", false),
                Environment::new("prod", "main", true),
            ],
        }
    }
}

/// Loads the environment configuration, if any exists.
///
/// Lookup order:
/// 1. Custom path provided as parameter
/// 2. `.tag-manager.json` in the current directory
/// 3. `.tag-manager.json` in the user config directory
///
/// # Returns
/// * `Ok(Some(config))` - Loaded and structurally valid configuration
/// * `Ok(None)` - No configuration file found (caller may offer setup)
/// * `Err` - File exists but cannot be read, parsed, or is invalid
pub fn load_config(config_path: Option<&str>) -> Result<Option<EnvironmentConfig>> {
    let path = match resolve_config_path(config_path) {
        Some(path) => path,
        None => return Ok(None),
    };

    let config_str = fs::read_to_string(&path)?;
    let config: EnvironmentConfig = serde_json::from_str(&config_str).map_err(|e| {
        TagManagerError::config(format!("Cannot parse {}: {}", path.display(), e))
    })?;
    config.validate()?;

    Ok(Some(config))
}

fn resolve_config_path(config_path: Option<&str>) -> Option<PathBuf> {
    if let Some(path) = config_path {
        return Some(PathBuf::from(path));
    }

    let local = Path::new(CONFIG_FILE_NAME);
    if local.exists() {
        return Some(local.to_path_buf());
    }

    if let Some(config_dir) = dirs::config_dir() {
        let user_path = config_dir.join(CONFIG_FILE_NAME);
        if user_path.exists() {
            return Some(user_path);
        }
    }

    None
}

/// Saves the configuration as pretty-printed JSON with a trailing newline.
///
/// Writes to the custom path when given, otherwise to
/// `.tag-manager.json` in the current directory.
pub fn save_config(config: &EnvironmentConfig, config_path: Option<&str>) -> Result<PathBuf> {
    config.validate()?;

    let path = config_path
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(CONFIG_FILE_NAME));

    let json = serde_json::to_string_pretty(config).map_err(|e| {
        TagManagerError::config(format!("Cannot serialize configuration: {}", e))
    })?;
    fs::write(&path, json + "\n")?;

    Ok(path)
}
