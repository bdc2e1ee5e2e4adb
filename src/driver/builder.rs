//! Builder pattern for RailDriver.

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin;

use crate::config::units::StepsPerSec;
use crate::config::RailConfig;
use crate::error::{ConfigError, Error, Result};

use super::step_dir::RailDriver;

/// Builder for creating RailDriver instances.
pub struct RailDriverBuilder<STEP, DIR, DELAY>
where
    STEP: OutputPin,
    DIR: OutputPin,
    DELAY: DelayNs,
{
    step_pin: Option<STEP>,
    dir_pin: Option<DIR>,
    delay: Option<DELAY>,
    name: Option<heapless::String<32>>,
    max_speed: Option<StepsPerSec>,
    acceleration: Option<f32>,
    invert_direction: bool,
}

impl<STEP, DIR, DELAY> Default for RailDriverBuilder<STEP, DIR, DELAY>
where
    STEP: OutputPin,
    DIR: OutputPin,
    DELAY: DelayNs,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<STEP, DIR, DELAY> RailDriverBuilder<STEP, DIR, DELAY>
where
    STEP: OutputPin,
    DIR: OutputPin,
    DELAY: DelayNs,
{
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            step_pin: None,
            dir_pin: None,
            delay: None,
            name: None,
            max_speed: None,
            acceleration: None,
            invert_direction: false,
        }
    }

    /// Set the STEP pin.
    pub fn step_pin(mut self, pin: STEP) -> Self {
        self.step_pin = Some(pin);
        self
    }

    /// Set the DIR pin.
    pub fn dir_pin(mut self, pin: DIR) -> Self {
        self.dir_pin = Some(pin);
        self
    }

    /// Set the delay provider.
    pub fn delay(mut self, delay: DELAY) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Set the rail name.
    pub fn name(mut self, name: &str) -> Self {
        self.name = heapless::String::try_from(name).ok();
        self
    }

    /// Set the speed ceiling in steps per second.
    pub fn max_speed(mut self, speed: StepsPerSec) -> Self {
        self.max_speed = Some(speed);
        self
    }

    /// Set the ramp rate for position-mode moves in steps/s².
    pub fn acceleration(mut self, acceleration: f32) -> Self {
        self.acceleration = Some(acceleration);
        self
    }

    /// Set direction inversion.
    pub fn invert_direction(mut self, invert: bool) -> Self {
        self.invert_direction = invert;
        self
    }

    /// Configure speed ceiling, ramp rate, inversion, and name from a
    /// rail configuration.
    pub fn from_config(mut self, config: &RailConfig) -> Self {
        self.name = Some(config.name.clone());
        self.max_speed = Some(config.speed_ceiling());
        self.acceleration = Some(config.acceleration);
        self.invert_direction = config.invert_direction;
        self
    }

    /// Build the RailDriver.
    ///
    /// # Errors
    ///
    /// Returns an error if required fields are missing.
    pub fn build(self) -> Result<RailDriver<STEP, DIR, DELAY>> {
        let step_pin = self.step_pin.ok_or_else(|| {
            Error::Config(ConfigError::ParseError(
                heapless::String::try_from("step_pin is required").unwrap(),
            ))
        })?;

        let dir_pin = self.dir_pin.ok_or_else(|| {
            Error::Config(ConfigError::ParseError(
                heapless::String::try_from("dir_pin is required").unwrap(),
            ))
        })?;

        let delay = self.delay.ok_or_else(|| {
            Error::Config(ConfigError::ParseError(
                heapless::String::try_from("delay is required").unwrap(),
            ))
        })?;

        let name = self
            .name
            .unwrap_or_else(|| heapless::String::try_from("rail").unwrap());

        let max_speed = self.max_speed.ok_or_else(|| {
            Error::Config(ConfigError::ParseError(
                heapless::String::try_from("max_speed is required").unwrap(),
            ))
        })?;

        let acceleration = self.acceleration.ok_or_else(|| {
            Error::Config(ConfigError::ParseError(
                heapless::String::try_from("acceleration is required").unwrap(),
            ))
        })?;

        Ok(RailDriver::new(
            step_pin,
            dir_pin,
            delay,
            max_speed,
            acceleration,
            self.invert_direction,
            name,
        ))
    }
}
