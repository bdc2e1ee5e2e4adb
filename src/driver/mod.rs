//! Motion driver module for focus-rail.
//!
//! Defines the motion driver capability consumed by the control core and
//! provides the STEP/DIR implementation over embedded-hal 1.0.

mod builder;
mod ramp;
mod step_dir;

pub use builder::RailDriverBuilder;
pub use ramp::RampProfile;
pub use step_dir::RailDriver;

use crate::config::units::{Steps, StepsPerSec};
use crate::error::Result;

/// Direction of travel along the rail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Direction {
    /// Toward the positive limit switch.
    Positive,
    /// Toward the negative limit switch.
    Negative,
}

impl Direction {
    /// Get direction from a signed step delta.
    #[inline]
    pub fn from_steps(steps: i64) -> Self {
        if steps >= 0 {
            Direction::Positive
        } else {
            Direction::Negative
        }
    }

    /// Get the sign multiplier.
    #[inline]
    pub fn sign(self) -> i64 {
        match self {
            Direction::Positive => 1,
            Direction::Negative => -1,
        }
    }
}

/// Motion driver capability.
///
/// Two kinds of motion exist, and the caller pairs the setter with the
/// matching per-cycle step call:
///
/// - **Velocity mode**: [`set_velocity`](MotionDriver::set_velocity) selects a
///   continuous run rate (sign encodes direction), and each
///   [`step_velocity`](MotionDriver::step_velocity) call advances at most one
///   step at that rate. There is no target; motion stops only on
///   [`halt`](MotionDriver::halt) or a zero rate.
/// - **Position mode**: [`move_by`](MotionDriver::move_by) sets a relative
///   target, and each [`step_position`](MotionDriver::step_position) call
///   advances at most one step toward it. The move completes naturally when
///   [`distance_to_go`](MotionDriver::distance_to_go) reaches zero.
///
/// Position is an open-loop count of emitted pulses; there is no feedback.
pub trait MotionDriver {
    /// Set the continuous run rate. Sign encodes direction.
    fn set_velocity(&mut self, velocity: StepsPerSec);

    /// Advance at most one step of velocity-mode motion.
    fn step_velocity(&mut self) -> Result<()>;

    /// Set a relative target for position-mode motion.
    fn move_by(&mut self, delta: Steps);

    /// Advance at most one step toward the pending target.
    fn step_position(&mut self) -> Result<()>;

    /// Steps remaining to the pending target.
    ///
    /// Zero when no target is pending; in velocity mode this is only
    /// meaningful as a snapshot for freezing position.
    fn distance_to_go(&self) -> Steps;

    /// Stop now. Clears the run rate and any pending target.
    fn halt(&mut self);

    /// Re-anchor the position counter without moving.
    fn set_current_position(&mut self, position: Steps);

    /// Current position, as counted from emitted pulses.
    fn current_position(&self) -> Steps;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direction_from_delta() {
        assert_eq!(Direction::from_steps(1000), Direction::Positive);
        assert_eq!(Direction::from_steps(-1), Direction::Negative);
        // Zero-length deltas never reach a pin write; the positive default
        // just keeps from_steps total.
        assert_eq!(Direction::from_steps(0), Direction::Positive);
    }

    #[test]
    fn test_direction_sign() {
        assert_eq!(Direction::Positive.sign(), 1);
        assert_eq!(Direction::Negative.sign(), -1);
    }
}
