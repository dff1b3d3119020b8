// tests/validation_test.rs
use tag_manager::domain::{validate_tag, EnvSuffix, PreReleaseKind, TagError};

#[test]
fn test_valid_tags_across_environments_and_prereleases() {
    // (tag, expected env, expected pre-release, expected mutable alias)
    let cases: Vec<(&str, Option<EnvSuffix>, Option<PreReleaseKind>, &str)> = vec![
        ("v1.0.0", None, None, "latest"),
        ("v1.0.0-alpha", None, Some(PreReleaseKind::Alpha), "latest"),
        ("v1.0.0-beta", None, Some(PreReleaseKind::Beta), "latest"),
        ("v1.0.0-rc", None, Some(PreReleaseKind::Rc), "latest"),
        ("v1.0.0-dev", Some(EnvSuffix::Dev), None, "dev"),
        (
            "v1.0.0-dev-alpha",
            Some(EnvSuffix::Dev),
            Some(PreReleaseKind::Alpha),
            "dev",
        ),
        (
            "v1.0.0-dev-rc",
            Some(EnvSuffix::Dev),
            Some(PreReleaseKind::Rc),
            "dev",
        ),
        ("v1.0.0-qa", Some(EnvSuffix::Qa), None, "qa"),
        (
            "v1.0.0-qa-beta",
            Some(EnvSuffix::Qa),
            Some(PreReleaseKind::Beta),
            "qa",
        ),
        ("v1.0.0-stg", Some(EnvSuffix::Stg), None, "stg"),
        (
            "v1.0.0-stg-rc",
            Some(EnvSuffix::Stg),
            Some(PreReleaseKind::Rc),
            "stg",
        ),
        ("v999.999.999", None, None, "latest"),
        ("v0.0.1", None, None, "latest"),
        ("v10.20.30-dev", Some(EnvSuffix::Dev), None, "dev"),
    ];

    for (tag, env, pre_release, mutable) in cases {
        let fields = validate_tag(tag).unwrap_or_else(|e| {
            panic!("expected '{}' to be valid, got: {}", tag, e);
        });

        assert_eq!(fields.immutable_tag, tag);
        assert_eq!(fields.env, env, "env mismatch for '{}'", tag);
        assert_eq!(
            fields.pre_release, pre_release,
            "pre-release mismatch for '{}'",
            tag
        );
        assert_eq!(fields.mutable_tag, mutable, "alias mismatch for '{}'", tag);
        assert_eq!(fields.is_prod, env.is_none());
        assert_eq!(fields.is_prerelease, pre_release.is_some());
        assert_eq!(fields.is_prod_prerelease, fields.is_prod);
    }
}

#[test]
fn test_version_only_field_is_bare_triple() {
    assert_eq!(validate_tag("v1.2.3-dev-rc").unwrap().version_only, "1.2.3");
    assert_eq!(validate_tag("v0.0.1").unwrap().version_only, "0.0.1");
}

#[test]
fn test_prod_suffix_is_forbidden() {
    assert_eq!(
        validate_tag("v1.0.0-prod"),
        Err(TagError::ProdSuffixForbidden)
    );
    assert_eq!(
        validate_tag("v2.5.0-prod-alpha"),
        Err(TagError::ProdSuffixForbidden)
    );
}

#[test]
fn test_zero_version_is_rejected() {
    assert_eq!(validate_tag("v0.0.0"), Err(TagError::ZeroVersion));
    assert_eq!(validate_tag("v0.0.0-dev"), Err(TagError::ZeroVersion));
    assert_eq!(validate_tag("v0.0.0-rc"), Err(TagError::ZeroVersion));
}

#[test]
fn test_leading_zeros_are_rejected() {
    for tag in ["v01.0.0", "v0.01.0", "v0.0.01", "v001.002.003-dev"] {
        assert_eq!(
            validate_tag(tag),
            Err(TagError::LeadingZero),
            "expected leading-zero rejection for '{}'",
            tag
        );
    }
}

#[test]
fn test_components_above_999_are_rejected() {
    assert_eq!(validate_tag("v1000.0.0-dev"), Err(TagError::TooLarge));
    assert_eq!(validate_tag("v0.1000.0"), Err(TagError::TooLarge));
    assert_eq!(validate_tag("v0.0.1000"), Err(TagError::TooLarge));
}

#[test]
fn test_malformed_tags_are_rejected() {
    let malformed = [
        "",
        "latest",
        "dev",
        "1.0.0",
        "v1.0",
        "v1.0.0.0",
        "v1.0.0-",
        "v1.0.0-sandbox",
        "v1.0.0-dev-",
        "v1.0.0-dev-gamma",
        "v1.0.0-alpha-dev", // suffix order matters
        "v1.0.0_dev",
        "V1.0.0",
        "v 1.0.0",
        "v1.0.0-dev extra",
    ];

    for tag in malformed {
        assert_eq!(
            validate_tag(tag),
            Err(TagError::InvalidFormat),
            "expected '{}' to be malformed",
            tag
        );
    }
}

#[test]
fn test_error_messages_are_renderable() {
    // Validation errors are shown to the user and must carry a message
    let errors = [
        validate_tag("nope").unwrap_err(),
        validate_tag("v01.0.0").unwrap_err(),
        validate_tag("v1000.0.0").unwrap_err(),
        validate_tag("v0.0.0").unwrap_err(),
        validate_tag("v1.0.0-prod").unwrap_err(),
    ];

    for err in errors {
        assert!(!err.to_string().is_empty());
    }
}
