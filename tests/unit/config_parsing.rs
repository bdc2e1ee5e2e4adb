//! Unit tests for TOML configuration parsing.

use focus_rail::config::parse_config;
use focus_rail::{Steps, StepsPerSec};

/// Test parsing a fully specified rail configuration from TOML.
#[test]
fn test_parse_full_rail_config() {
    let toml_str = r#"
[rail]
name = "focus_stage"
manual_speed_steps_per_sec = 4000.0
retract_steps = 800
acceleration_steps_per_sec2 = 6000.0
max_speed_steps_per_sec = 8000.0
invert_direction = true

[rail.autofocus]
speed_steps_per_sec = 3000.0
"#;

    let config = parse_config(toml_str).expect("Failed to parse TOML");
    let rail = &config.rail;

    assert_eq!(rail.name.as_str(), "focus_stage");
    assert_eq!(rail.manual_speed, StepsPerSec(4000.0));
    assert_eq!(rail.retract_steps, 800);
    assert_eq!(rail.acceleration, 6000.0);
    assert_eq!(rail.max_speed, Some(StepsPerSec(8000.0)));
    assert!(rail.invert_direction);
    assert_eq!(rail.autofocus_speed(), Some(StepsPerSec(3000.0)));
}

/// Test that an empty `[rail]` table falls back to the reference defaults.
#[test]
fn test_parse_defaults() {
    let toml_str = r#"
[rail]
"#;

    let config = parse_config(toml_str).expect("Failed to parse TOML");
    let rail = &config.rail;

    assert_eq!(rail.name.as_str(), "rail");
    assert_eq!(rail.manual_speed, StepsPerSec(5000.0));
    assert_eq!(rail.retract_steps, 1000);
    assert_eq!(rail.acceleration, 5000.0);
    assert!(!rail.invert_direction);
    assert!(!rail.has_autofocus());
}

/// Test that the autofocus table's own defaults apply when it is empty.
#[test]
fn test_parse_empty_autofocus_table() {
    let toml_str = r#"
[rail]

[rail.autofocus]
"#;

    let config = parse_config(toml_str).expect("Failed to parse TOML");

    assert!(config.rail.has_autofocus());
    assert_eq!(config.rail.autofocus_speed(), Some(StepsPerSec(5000.0)));
}

/// Test the resolved speed ceiling with and without an explicit value.
#[test]
fn test_speed_ceiling_resolution() {
    let toml_str = r#"
[rail]
manual_speed_steps_per_sec = 2000.0

[rail.autofocus]
speed_steps_per_sec = 3500.0
"#;

    let config = parse_config(toml_str).expect("Failed to parse TOML");
    assert_eq!(config.rail.speed_ceiling(), StepsPerSec(3500.0));
}

/// Test that retract distance round-trips into the controller's step type.
#[test]
fn test_retract_steps_as_steps() {
    let toml_str = r#"
[rail]
retract_steps = 1200
"#;

    let config = parse_config(toml_str).expect("Failed to parse TOML");
    assert_eq!(Steps(config.rail.retract_steps as i64), Steps(1200));
}

/// Test that a missing `[rail]` table is rejected during parsing.
#[test]
fn test_missing_rail_table_rejected() {
    let result = parse_config("");
    assert!(result.is_err(), "Should reject config without [rail]");
}
