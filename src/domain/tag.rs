//! Tag grammar validation.
//!
//! A tag is `v<major>.<minor>.<patch>` optionally followed by an
//! environment suffix (`-dev`, `-qa`, `-stg`) and/or a pre-release suffix
//! (`-alpha`, `-beta`, `-rc`), lowercase only. A tag with no environment
//! suffix is a production tag; `-prod` is never written out explicitly.

use crate::domain::prerelease::PreReleaseKind;
use std::fmt;
use thiserror::Error;

/// Alias tag that tracks the newest production release
pub const LATEST_ALIAS: &str = "latest";

const TAG_PATTERN: &str = r"^v(\d+)\.(\d+)\.(\d+)(?:-(dev|qa|stg|prod))?(?:-(alpha|beta|rc))?$";

/// Largest value allowed for any version component
const MAX_COMPONENT: u32 = 999;

/// Environment suffix admitted by the tag grammar.
///
/// Production is deliberately absent: production tags are bare.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnvSuffix {
    Dev,
    Qa,
    Stg,
}

impl EnvSuffix {
    pub fn as_str(&self) -> &'static str {
        match self {
            EnvSuffix::Dev => "dev",
            EnvSuffix::Qa => "qa",
            EnvSuffix::Stg => "stg",
        }
    }
}

impl fmt::Display for EnvSuffix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Why a candidate tag was rejected.
///
/// These are ordinary results, not process failures; callers render the
/// message and keep prompting.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TagError {
    #[error("Invalid tag format")]
    InvalidFormat,

    #[error("Version numbers cannot have leading zeros")]
    LeadingZero,

    #[error("Version numbers cannot be larger than 999")]
    TooLarge,

    #[error("Version cannot be 0.0.0 - at least one number must be greater than 0")]
    ZeroVersion,

    #[error("Invalid environment: '{0}'")]
    InvalidEnvironment(String),

    #[error("Production tags cannot use -prod suffix")]
    ProdSuffixForbidden,
}

/// Structured fields extracted from a valid tag
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagFields {
    /// The tag exactly as written (created once, never moved)
    pub immutable_tag: String,
    /// Floating alias for this channel ("latest" or the env name)
    pub mutable_tag: String,
    /// Bare numeric triple, e.g. "1.2.3"
    pub version_only: String,
    /// Environment suffix, if present
    pub env: Option<EnvSuffix>,
    /// Pre-release suffix, if present
    pub pre_release: Option<PreReleaseKind>,
    /// True when no environment suffix is present
    pub is_prod: bool,
    /// True when a pre-release suffix is present
    pub is_prerelease: bool,
    /// Bare production tags count as production pre-releases
    pub is_prod_prerelease: bool,
}

/// Validate a candidate tag against the grammar and extract its fields.
///
/// Rules are checked in order, first failure wins: overall grammar,
/// leading zeros, component bound, all-zero version, `-prod` suffix.
pub fn validate_tag(tag: &str) -> Result<TagFields, TagError> {
    let re = match regex::Regex::new(TAG_PATTERN) {
        Ok(re) => re,
        Err(_) => return Err(TagError::InvalidFormat),
    };

    let captures = re.captures(tag).ok_or(TagError::InvalidFormat)?;

    let mut components = [0u32; 3];
    for (i, component) in components.iter_mut().enumerate() {
        let text = captures
            .get(i + 1)
            .map(|m| m.as_str())
            .ok_or(TagError::InvalidFormat)?;
        // Canonical decimal only: parsing and re-rendering must reproduce
        // the source text, which for digit-only input reduces to this
        if text.len() > 1 && text.starts_with('0') {
            return Err(TagError::LeadingZero);
        }

        // u32 overflow can only mean the component is far out of range
        *component = text.parse::<u32>().map_err(|_| TagError::TooLarge)?;
    }

    if components.iter().any(|&c| c > MAX_COMPONENT) {
        return Err(TagError::TooLarge);
    }

    if components.iter().all(|&c| c == 0) {
        return Err(TagError::ZeroVersion);
    }

    let env = match captures.get(4).map(|m| m.as_str()) {
        None => None,
        Some("dev") => Some(EnvSuffix::Dev),
        Some("qa") => Some(EnvSuffix::Qa),
        Some("stg") => Some(EnvSuffix::Stg),
        Some("prod") => return Err(TagError::ProdSuffixForbidden),
        Some(other) => return Err(TagError::InvalidEnvironment(other.to_string())),
    };

    let pre_release = match captures.get(5).map(|m| m.as_str()) {
        None => None,
        Some("alpha") => Some(PreReleaseKind::Alpha),
        Some("beta") => Some(PreReleaseKind::Beta),
        Some("rc") => Some(PreReleaseKind::Rc),
        Some(_) => return Err(TagError::InvalidFormat),
    };

    let is_prod = env.is_none();
    let mutable_tag = match env {
        Some(suffix) => suffix.as_str().to_string(),
        None => LATEST_ALIAS.to_string(),
    };

    Ok(TagFields {
        immutable_tag: tag.to_string(),
        mutable_tag,
        version_only: format!("{}.{}.{}", components[0], components[1], components[2]),
        env,
        pre_release,
        is_prod,
        is_prerelease: pre_release.is_some(),
        is_prod_prerelease: is_prod,
    })
}
