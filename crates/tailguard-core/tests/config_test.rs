//! Tests for the tailguard configuration system.

use tailguard_core::config::{
    GateOverrides, GuardFileConfig, MapSource, ProfileName, ProfileResolver, ValueOrigin,
};
use tailguard_core::constants::env_keys;
use tailguard_core::errors::{ConfigError, ErrorCode};

/// Helper: create a temporary directory.
fn tempdir() -> tempfile::TempDir {
    tempfile::TempDir::new().unwrap()
}

#[test]
fn test_preset_defaults_without_overrides() {
    let src = MapSource::new();
    let profile = ProfileResolver::new(&src)
        .resolve(&GateOverrides::default())
        .unwrap();

    assert_eq!(profile.name, ProfileName::Standard);
    assert_eq!(profile, ProfileName::Standard.preset());
}

#[test]
fn test_layer_precedence_cli_over_env_over_file_over_preset() {
    let file = GuardFileConfig::from_toml(
        r#"
[gate]
profile = "lenient"
p99_multiplier = 1.5
mad_multiplier = 5.0
epsilon_ms = 0.2
"#,
    )
    .unwrap();
    let src = MapSource::new()
        .with(env_keys::MAD_MULTIPLIER, "6.0")
        .with(env_keys::EPSILON_MS, "0.3");
    let overrides = GateOverrides {
        epsilon_ms: Some(0.4),
        ..Default::default()
    };

    let profile = ProfileResolver::new(&src)
        .with_file(&file.gate)
        .resolve(&overrides)
        .unwrap();

    // Profile name from file (no CLI, no PROFILE env).
    assert_eq!(profile.name, ProfileName::Lenient);
    // File beats preset.
    assert_eq!(profile.p99_multiplier, 1.5);
    // Env beats file.
    assert_eq!(profile.mad_multiplier, 6.0);
    // CLI beats env.
    assert_eq!(profile.epsilon_ms, 0.4);
    assert_eq!(profile.description, "Exploratory");
}

#[test]
fn test_profile_name_env_fallback() {
    let src = MapSource::new().with(env_keys::PROFILE, "strict");
    let resolver = ProfileResolver::new(&src);

    let from_env = resolver.resolve_name(None).unwrap();
    assert_eq!(from_env.value, ProfileName::Strict);
    assert_eq!(from_env.origin, ValueOrigin::Env);

    let from_cli = resolver.resolve_name(Some("lenient")).unwrap();
    assert_eq!(from_cli.value, ProfileName::Lenient);
    assert_eq!(from_cli.origin, ValueOrigin::Cli);
}

#[test]
fn test_unknown_profile_is_config_error() {
    let src = MapSource::new();
    let err = ProfileResolver::new(&src)
        .resolve(&GateOverrides {
            profile: Some("yolo".to_string()),
            ..Default::default()
        })
        .unwrap_err();
    assert!(matches!(err, ConfigError::UnknownProfile { .. }));
    assert_eq!(err.error_code(), "CONFIG_ERROR");
}

#[test]
fn test_non_numeric_env_override_is_fatal() {
    let src = MapSource::new().with(env_keys::P99_MULTIPLIER, "1.1x");
    let err = ProfileResolver::new(&src)
        .resolve(&GateOverrides::default())
        .unwrap_err();
    match err {
        ConfigError::NonNumericEnv { key, .. } => assert_eq!(key, env_keys::P99_MULTIPLIER),
        other => panic!("Expected NonNumericEnv, got: {:?}", other),
    }
}

#[test]
fn test_require_digest_is_additive() {
    let plain = MapSource::new();
    let standard = |src: &MapSource, force: bool| {
        ProfileResolver::new(src)
            .resolve(&GateOverrides {
                force_digest: force,
                ..Default::default()
            })
            .unwrap()
            .require_digest
    };

    assert!(!standard(&plain, false));
    assert!(standard(&plain, true));
    assert!(standard(&MapSource::new().with(env_keys::REQUIRE_DIGEST, "1"), false));
    // Only the literal "1" counts.
    assert!(!standard(&MapSource::new().with(env_keys::REQUIRE_DIGEST, "true"), false));

    // A config file cannot switch off the strict preset's enforcement.
    let file = GuardFileConfig::from_toml("[gate]\nrequire_digest = false\n").unwrap();
    let strict = ProfileResolver::new(&plain)
        .with_file(&file.gate)
        .resolve(&GateOverrides {
            profile: Some("strict".to_string()),
            ..Default::default()
        })
        .unwrap();
    assert!(strict.require_digest);
}

#[test]
fn test_budget_cap_resolution() {
    let file = GuardFileConfig::from_toml("[gate]\np99_budget_ms = 9.0\n").unwrap();

    let empty = MapSource::new();
    assert_eq!(ProfileResolver::new(&empty).resolve_budget_cap(None).unwrap(), None);
    assert_eq!(
        ProfileResolver::new(&empty)
            .with_file(&file.gate)
            .resolve_budget_cap(None)
            .unwrap(),
        Some(9.0)
    );

    let env = MapSource::new().with(env_keys::P99_BUDGET_MS, "7.5");
    let resolver = ProfileResolver::new(&env).with_file(&file.gate);
    assert_eq!(resolver.resolve_budget_cap(None).unwrap(), Some(7.5));
    assert_eq!(resolver.resolve_budget_cap(Some(3.0)).unwrap(), Some(3.0));
}

#[test]
fn test_config_file_load_and_invalid_toml() {
    let dir = tempdir();
    let good = dir.path().join("tailguard.toml");
    std::fs::write(
        &good,
        "[paths]\nbaseline_file = \"goldens/ci.json\"\n\n[gate]\nprofile = \"strict\"\n",
    )
    .unwrap();
    let config = GuardFileConfig::load(&good).unwrap();
    assert_eq!(config.gate.profile.as_deref(), Some("strict"));
    assert_eq!(
        config.paths.baseline_file.as_deref(),
        Some(std::path::Path::new("goldens/ci.json"))
    );

    let bad = dir.path().join("broken.toml");
    std::fs::write(&bad, "this is not valid toml {{{{").unwrap();
    match GuardFileConfig::load(&bad).unwrap_err() {
        ConfigError::ParseError { .. } => {}
        other => panic!("Expected ParseError, got: {:?}", other),
    }

    match GuardFileConfig::load(&dir.path().join("absent.toml")).unwrap_err() {
        ConfigError::FileUnreadable { .. } => {}
        other => panic!("Expected FileUnreadable, got: {:?}", other),
    }
}

#[test]
fn test_config_file_rejects_negative_multiplier_and_unknown_keys() {
    let err = GuardFileConfig::from_toml("[gate]\nmad_multiplier = -1.0\n").unwrap_err();
    assert!(matches!(err, ConfigError::InvalidValue { ref field, .. } if field == "gate.mad_multiplier"));

    let err = GuardFileConfig::from_toml("[gate]\nmad_multiplyer = 2.0\n").unwrap_err();
    assert!(matches!(err, ConfigError::ParseError { .. }));
}
