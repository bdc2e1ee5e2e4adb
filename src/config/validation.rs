//! Configuration validation.

use crate::error::{ConfigError, Error, Result};

use super::rail::RailConfig;
use super::SystemConfig;

/// Validate a system configuration.
///
/// Checks:
/// - Manual and autofocus speeds are positive
/// - Retraction distance is non-zero
/// - Ramp acceleration is positive
/// - The speed ceiling covers every commanded speed
pub fn validate_config(config: &SystemConfig) -> Result<()> {
    validate_rail(&config.rail)
}

/// Validate a single rail configuration.
pub fn validate_rail(config: &RailConfig) -> Result<()> {
    if config.manual_speed.value() <= 0.0 {
        return Err(Error::Config(ConfigError::InvalidManualSpeed(
            config.manual_speed.value(),
        )));
    }

    if let Some(speed) = config.autofocus_speed() {
        if speed.value() <= 0.0 {
            return Err(Error::Config(ConfigError::InvalidAutofocusSpeed(
                speed.value(),
            )));
        }
    }

    if config.retract_steps == 0 {
        return Err(Error::Config(ConfigError::InvalidRetractSteps(
            config.retract_steps,
        )));
    }

    if config.acceleration <= 0.0 {
        return Err(Error::Config(ConfigError::InvalidAcceleration(
            config.acceleration,
        )));
    }

    if let Some(max) = config.max_speed {
        if max.value() < config.manual_speed.value() {
            return Err(Error::Config(ConfigError::InvalidMaxSpeed {
                requested: config.manual_speed.value(),
                max: max.value(),
            }));
        }
        if let Some(speed) = config.autofocus_speed() {
            if max.value() < speed.value() {
                return Err(Error::Config(ConfigError::InvalidMaxSpeed {
                    requested: speed.value(),
                    max: max.value(),
                }));
            }
        }
    }

    Ok(())
}
