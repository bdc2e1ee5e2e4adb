//! Unit tests for configuration validation.

use focus_rail::config::parse_config;
use focus_rail::error::{ConfigError, Error};
use focus_rail::validate_config;

/// Test validation of a valid configuration.
#[test]
fn test_valid_config_passes_validation() {
    let toml_str = r#"
[rail]
manual_speed_steps_per_sec = 5000.0
retract_steps = 1000

[rail.autofocus]
speed_steps_per_sec = 5000.0
"#;

    let config = parse_config(toml_str).expect("Failed to parse TOML");
    assert!(validate_config(&config).is_ok());
}

/// Test validation fails for a non-positive manual speed.
#[test]
fn test_invalid_manual_speed() {
    let toml_str = r#"
[rail]
manual_speed_steps_per_sec = -100.0
"#;

    let result = parse_config(toml_str);
    assert!(matches!(
        result,
        Err(Error::Config(ConfigError::InvalidManualSpeed(_)))
    ));
}

/// Test validation fails for a non-positive autofocus speed.
#[test]
fn test_invalid_autofocus_speed() {
    let toml_str = r#"
[rail]

[rail.autofocus]
speed_steps_per_sec = 0.0
"#;

    let result = parse_config(toml_str);
    assert!(matches!(
        result,
        Err(Error::Config(ConfigError::InvalidAutofocusSpeed(_)))
    ));
}

/// Test validation fails for a zero retraction distance.
#[test]
fn test_zero_retract_steps() {
    let toml_str = r#"
[rail]
retract_steps = 0
"#;

    let result = parse_config(toml_str);
    assert!(matches!(
        result,
        Err(Error::Config(ConfigError::InvalidRetractSteps(0)))
    ));
}

/// Test validation fails for a non-positive ramp acceleration.
#[test]
fn test_invalid_acceleration() {
    let toml_str = r#"
[rail]
acceleration_steps_per_sec2 = 0.0
"#;

    let result = parse_config(toml_str);
    assert!(matches!(
        result,
        Err(Error::Config(ConfigError::InvalidAcceleration(_)))
    ));
}

/// Test validation fails when the ceiling is below a commanded speed.
#[test]
fn test_ceiling_below_commanded_speed() {
    let toml_str = r#"
[rail]
manual_speed_steps_per_sec = 5000.0
max_speed_steps_per_sec = 4000.0
"#;

    let result = parse_config(toml_str);
    assert!(matches!(
        result,
        Err(Error::Config(ConfigError::InvalidMaxSpeed { .. }))
    ));
}
