use approx::assert_relative_eq;
use units::PhysicalConstants;

use crate::config::{AtlasConfig, ConstantOverrides};
use crate::error::ConfigError;

#[test]
fn test_parse_minimal_config() {
    let config = AtlasConfig::from_toml_str(
        r#"
        seed = "42"
        cosmic_origin_time = 1700000000
        "#,
    )
    .unwrap();

    assert_eq!(config.seed, "42");
    assert_eq!(config.cosmic_origin_time, 1_700_000_000);
    assert!(config.constants.is_empty());
    assert_eq!(config.physical_constants(), PhysicalConstants::standard());
}

#[test]
fn test_constant_overrides_apply() {
    let config = AtlasConfig::from_toml_str(
        r#"
        seed = "42"
        cosmic_origin_time = 0

        [constants]
        gravitational_constant = 1.0e-10
        earth_diameter_km = 10000.0
        "#,
    )
    .unwrap();

    let constants = config.physical_constants();
    assert_relative_eq!(constants.gravitational_constant, 1.0e-10);
    assert_relative_eq!(constants.earth_diameter.to_km(), 10_000.0);
    assert_eq!(constants.sun_mass, PhysicalConstants::standard().sun_mass);
}

#[test]
fn test_empty_seed_is_rejected() {
    let err = AtlasConfig::new("  ", 0).validate().unwrap_err();
    assert!(matches!(err, ConfigError::Invalid(_)));
}

#[test]
fn test_negative_origin_is_rejected() {
    let err = AtlasConfig::new("42", -1).validate().unwrap_err();
    assert!(matches!(err, ConfigError::Invalid(_)));
}

#[test]
fn test_non_positive_constant_is_rejected() {
    let config = AtlasConfig::new("42", 0).with_constants(ConstantOverrides {
        sun_mass_kg: Some(0.0),
        ..Default::default()
    });

    match config.validate() {
        Err(ConfigError::Invalid(message)) => assert!(message.contains("sunMass")),
        other => panic!("expected invalid constants, got {other:?}"),
    }
}

#[test]
fn test_malformed_toml_is_a_parse_error() {
    let err = AtlasConfig::from_toml_str("seed = ").unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));

    let err = AtlasConfig::from_toml_str("seed = \"42\"").unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));
}

#[test]
fn test_toml_round_trip() {
    let config = AtlasConfig::new("galactic", 1_234).with_constants(ConstantOverrides {
        love_number: Some(0.5),
        ..Default::default()
    });

    let text = config.to_toml_string().unwrap();
    assert!(text.contains("love_number"));
    assert!(!text.contains("speed_of_light"));
    assert_eq!(AtlasConfig::from_toml_str(&text).unwrap(), config);
}

#[test]
fn test_load_from_file() {
    let path = std::env::temp_dir().join(format!("atlas-config-{}.toml", std::process::id()));
    std::fs::write(&path, "seed = \"file\"\ncosmic_origin_time = 99\n").unwrap();

    let config = AtlasConfig::load(&path).unwrap();
    std::fs::remove_file(&path).unwrap();

    assert_eq!(config, AtlasConfig::new("file", 99));
}

#[test]
fn test_missing_file_is_an_io_error() {
    let err = AtlasConfig::load("/definitely/not/here/atlas.toml").unwrap_err();
    assert!(matches!(err, ConfigError::Io(_)));
}

#[test]
fn test_fingerprint_tracks_inputs() {
    let a = AtlasConfig::new("42", 0);
    assert_eq!(a.fingerprint(), AtlasConfig::new("42", 0).fingerprint());
    assert_eq!(a.fingerprint().len(), 16);
    assert_ne!(a.fingerprint(), AtlasConfig::new("43", 0).fingerprint());
    assert_ne!(a.fingerprint(), AtlasConfig::new("42", 1).fingerprint());
}

#[test]
fn test_seed_chain_uses_the_phrase() {
    let config = AtlasConfig::new("42", 0);
    assert_eq!(
        config.seed_chain().root(),
        seed_chain::SeedChain::from_phrase("42").root()
    );
}
