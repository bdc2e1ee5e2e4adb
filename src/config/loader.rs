//! Configuration loading from files (std only).

use std::fs;
use std::path::Path;

use crate::error::{ConfigError, Error, Result};

use super::SystemConfig;

/// Load configuration from a TOML file.
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed.
///
/// # Example
///
/// ```rust,ignore
/// use focus_rail::load_config;
///
/// let config = load_config("rail.toml")?;
/// ```
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<SystemConfig> {
    let content = fs::read_to_string(path.as_ref()).map_err(|e| {
        let msg = heapless::String::try_from(e.to_string().as_str()).unwrap_or_default();
        Error::Config(ConfigError::IoError(msg))
    })?;

    parse_config(&content)
}

/// Parse configuration from a TOML string.
///
/// # Errors
///
/// Returns an error if the TOML is invalid or fails validation.
pub fn parse_config(content: &str) -> Result<SystemConfig> {
    let config: SystemConfig = toml::from_str(content).map_err(|e| {
        let msg = heapless::String::try_from(e.message()).unwrap_or_default();
        Error::Config(ConfigError::ParseError(msg))
    })?;

    // Validate the configuration
    super::validation::validate_config(&config)?;

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::units::StepsPerSec;

    #[test]
    fn test_parse_minimal_config() {
        let toml = r#"
[rail]
"#;

        let config = parse_config(toml).unwrap();
        assert_eq!(config.rail.manual_speed, StepsPerSec(5000.0));
        assert_eq!(config.rail.retract_steps, 1000);
        assert!(!config.rail.has_autofocus());
    }

    #[test]
    fn test_parse_with_autofocus() {
        let toml = r#"
[rail]
name = "Focus Stage"
manual_speed_steps_per_sec = 4000.0
retract_steps = 800

[rail.autofocus]
speed_steps_per_sec = 2500.0
"#;

        let config = parse_config(toml).unwrap();
        assert_eq!(config.rail.name.as_str(), "Focus Stage");
        assert!(config.rail.has_autofocus());
        assert_eq!(config.rail.autofocus_speed(), Some(StepsPerSec(2500.0)));
    }

    #[test]
    fn test_parse_rejects_zero_retract() {
        let toml = r#"
[rail]
retract_steps = 0
"#;

        assert!(parse_config(toml).is_err());
    }
}
