//! Domain logic - pure tag and version rules independent of git operations

pub mod environment;
pub mod prerelease;
pub mod tag;
pub mod version;

pub use environment::{BranchClass, Environment};
pub use prerelease::PreReleaseKind;
pub use tag::{validate_tag, EnvSuffix, TagError, TagFields, LATEST_ALIAS};
pub use version::{increment_version, IncrementKind, Version};
