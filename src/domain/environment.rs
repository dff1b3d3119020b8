use serde::{Deserialize, Serialize};

/// A deployment channel bound to one branch.
///
/// Created and edited only through configuration; read-only everywhere
/// else. On disk the record uses camelCase field names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Environment {
    pub name: String,
    pub branch: String,
    pub is_production: bool,
}

impl Environment {
    /// Create a new environment record
    pub fn new(name: impl Into<String>, branch: impl Into<String>, is_production: bool) -> Self {
        Environment {
            name: name.into(),
            branch: branch.into(),
            is_production,
        }
    }
}

/// How the current branch relates to the environment mapping.
///
/// Derived once per planning run and dispatched by match; the three
/// variants correspond to the three tag-assembly paths.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BranchClass {
    /// Branch is bound to a configured environment
    Mapped(Environment),
    /// Branch is main/master but not bound to any environment
    Main,
    /// Any other branch
    Unmapped(String),
}

impl BranchClass {
    /// Classify a branch against the configured environments
    pub fn classify(branch: &str, environments: &[Environment]) -> Self {
        if let Some(env) = environments.iter().find(|e| e.branch == branch) {
            BranchClass::Mapped(env.clone())
        } else if matches!(branch, "main" | "master") {
            BranchClass::Main
        } else {
            BranchClass::Unmapped(branch.to_string())
        }
    }
}
