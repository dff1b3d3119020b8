use crate::error::{Result, TagManagerError};
use std::fmt;

/// Semantic version triple
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Version {
    pub major: u32,
    pub minor: u32,
    pub patch: u32,
}

impl Version {
    /// Create a new version
    pub fn new(major: u32, minor: u32, patch: u32) -> Self {
        Version {
            major,
            minor,
            patch,
        }
    }

    /// Parse the numeric triple out of a tag-shaped string.
    ///
    /// Strips a leading 'v' or 'V' and anything after the first '-', so
    /// environment and pre-release suffixes are ignored:
    /// "v0.0.7-dev-rc" -> Version(0, 0, 7).
    pub fn parse_lenient(tag: &str) -> Result<Self> {
        let clean_tag = tag.trim_start_matches('v').trim_start_matches('V');

        // Drop everything after the first '-' (env / pre-release suffixes)
        let version_part = clean_tag.split('-').next().unwrap_or(clean_tag);

        let parts: Vec<&str> = version_part.split('.').collect();
        if parts.len() != 3 {
            return Err(TagManagerError::version(format!(
                "Invalid version format: '{}' - expected X.Y.Z",
                tag
            )));
        }

        let major = parts[0].parse::<u32>().map_err(|_| {
            TagManagerError::version(format!("Invalid major version: {}", parts[0]))
        })?;
        let minor = parts[1].parse::<u32>().map_err(|_| {
            TagManagerError::version(format!("Invalid minor version: {}", parts[1]))
        })?;
        let patch = parts[2].parse::<u32>().map_err(|_| {
            TagManagerError::version(format!("Invalid patch version: {}", parts[2]))
        })?;

        Ok(Version {
            major,
            minor,
            patch,
        })
    }

    /// Bump version according to increment kind.
    ///
    /// Lower components reset to 0. No upper bound is applied here; an
    /// out-of-range result is caught by tag validation.
    pub fn bump(&self, kind: IncrementKind) -> Self {
        match kind {
            IncrementKind::Major => Version {
                major: self.major + 1,
                minor: 0,
                patch: 0,
            },
            IncrementKind::Minor => Version {
                major: self.major,
                minor: self.minor + 1,
                patch: 0,
            },
            IncrementKind::Patch => Version {
                major: self.major,
                minor: self.minor,
                patch: self.patch + 1,
            },
        }
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

/// Which component of the version to increment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IncrementKind {
    Major,
    Minor,
    #[default]
    Patch,
}

/// Increment a version string, returning the bare new triple.
///
/// "v0.0.7-dev-rc" + patch -> "0.0.8"
pub fn increment_version(version: &str, kind: IncrementKind) -> Result<String> {
    let parsed = Version::parse_lenient(version)?;
    Ok(parsed.bump(kind).to_string())
}
