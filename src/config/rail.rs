//! Rail configuration from TOML.

use heapless::String;
use serde::Deserialize;

use super::units::StepsPerSec;

/// Root configuration structure from TOML.
#[derive(Debug, Clone, Deserialize)]
pub struct SystemConfig {
    /// The single rail axis this controller drives.
    pub rail: RailConfig,
}

/// Complete rail configuration from TOML.
///
/// Defaults mirror the reference hardware: 5000 steps/s manual and scan
/// speeds, 1000-step retraction, 5000 steps/s² ramp.
#[derive(Debug, Clone, Deserialize)]
pub struct RailConfig {
    /// Human-readable name (max 32 chars).
    #[serde(default = "default_name")]
    pub name: String<32>,

    /// Held-button travel speed in steps per second.
    #[serde(default = "default_speed", rename = "manual_speed_steps_per_sec")]
    pub manual_speed: StepsPerSec,

    /// Fixed back-off distance from a just-triggered limit switch, in steps.
    #[serde(default = "default_retract_steps")]
    pub retract_steps: u32,

    /// Ramp rate for position-mode (retraction) moves, in steps/s².
    #[serde(default = "default_acceleration", rename = "acceleration_steps_per_sec2")]
    pub acceleration: f32,

    /// Driver speed ceiling in steps per second.
    ///
    /// Defaults to the fastest commanded speed when omitted.
    #[serde(default, rename = "max_speed_steps_per_sec")]
    pub max_speed: Option<StepsPerSec>,

    /// Invert direction pin logic.
    #[serde(default)]
    pub invert_direction: bool,

    /// Autofocus scan sequence configuration.
    ///
    /// Presence of this table selects the dual-mode controller (manual +
    /// one-shot scan). When omitted the controller is manual-only and backs
    /// off the negative stop on contact instead.
    #[serde(default)]
    pub autofocus: Option<AutofocusConfig>,
}

/// Autofocus scan configuration from TOML.
#[derive(Debug, Clone, Deserialize)]
pub struct AutofocusConfig {
    /// Scan travel speed toward the positive stop, in steps per second.
    #[serde(default = "default_speed", rename = "speed_steps_per_sec")]
    pub speed: StepsPerSec,
}

fn default_name() -> String<32> {
    String::try_from("rail").unwrap_or_default()
}

fn default_speed() -> StepsPerSec {
    StepsPerSec(5000.0)
}

fn default_retract_steps() -> u32 {
    1000
}

fn default_acceleration() -> f32 {
    5000.0
}

impl RailConfig {
    /// Whether this configuration includes the autofocus scan sequence.
    #[inline]
    pub fn has_autofocus(&self) -> bool {
        self.autofocus.is_some()
    }

    /// Scan speed, if the autofocus sequence is configured.
    #[inline]
    pub fn autofocus_speed(&self) -> Option<StepsPerSec> {
        self.autofocus.as_ref().map(|af| af.speed)
    }

    /// Resolved driver speed ceiling.
    ///
    /// The explicit `max_speed_steps_per_sec` when set, otherwise the fastest
    /// commanded speed.
    pub fn speed_ceiling(&self) -> StepsPerSec {
        if let Some(max) = self.max_speed {
            return max;
        }
        let mut ceiling = self.manual_speed.value();
        if let Some(af) = self.autofocus_speed() {
            if af.value() > ceiling {
                ceiling = af.value();
            }
        }
        StepsPerSec(ceiling)
    }
}

impl Default for RailConfig {
    fn default() -> Self {
        Self {
            name: default_name(),
            manual_speed: default_speed(),
            retract_steps: default_retract_steps(),
            acceleration: default_acceleration(),
            max_speed: None,
            invert_direction: false,
            autofocus: None,
        }
    }
}

impl Default for AutofocusConfig {
    fn default() -> Self {
        Self {
            speed: default_speed(),
        }
    }
}
