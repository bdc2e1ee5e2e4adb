//! Ramp profile calculation for position-mode moves.
//!
//! Retraction moves run a symmetric trapezoidal speed ramp: accelerate from
//! rest, cruise, decelerate back to rest. Short moves that cannot reach the
//! cruise rate degenerate to a triangle.

use libm::sqrtf;

use crate::config::units::StepsPerSec;

/// Computed interval schedule for a position-mode move.
///
/// The profile is indexed by step number; the driver asks for
/// [`interval_at`](RampProfile::interval_at) after each emitted pulse.
#[derive(Debug, Clone)]
pub struct RampProfile {
    /// Total steps in the move (absolute value).
    total_steps: u32,

    /// Steps spent accelerating.
    accel_steps: u32,

    /// Steps spent at the cruise rate.
    cruise_steps: u32,

    /// Interval at the start of the ramp (nanoseconds).
    initial_interval_ns: u32,

    /// Interval at the cruise rate (nanoseconds).
    cruise_interval_ns: u32,
}

impl RampProfile {
    /// Compute a trapezoidal profile.
    ///
    /// # Arguments
    ///
    /// * `total_steps` - Unsigned length of the move
    /// * `cruise` - Cruise rate in steps/sec (sign ignored)
    /// * `acceleration` - Ramp rate in steps/sec²
    pub fn trapezoidal(total_steps: u32, cruise: StepsPerSec, acceleration: f32) -> Self {
        let cruise_rate = {
            let v = cruise.value();
            if v < 0.0 {
                -v
            } else {
                v
            }
        };

        if total_steps == 0 || cruise_rate <= 0.0 || acceleration <= 0.0 {
            return Self::zero();
        }

        // Distance needed to reach the cruise rate: d = v² / 2a
        let ramp_distance = cruise_rate * cruise_rate / (2.0 * acceleration);

        let (accel_steps, cruise_steps, peak_rate) = if 2.0 * ramp_distance >= total_steps as f32 {
            // Triangle: ramp up for half the move, down for the rest
            let accel_steps = total_steps / 2;
            let peak = sqrtf(2.0 * acceleration * accel_steps.max(1) as f32);
            (accel_steps, 0u32, peak)
        } else {
            let accel_steps = ramp_distance as u32;
            let cruise_steps = total_steps.saturating_sub(2 * accel_steps);
            (accel_steps, cruise_steps, cruise_rate)
        };

        // Rate after the first step seeds the ramp; a literal from-rest
        // interval would be unbounded.
        let initial_rate = sqrtf(2.0 * acceleration);
        let initial_interval_ns = (1_000_000_000.0 / initial_rate) as u32;
        let cruise_interval_ns = (1_000_000_000.0 / peak_rate) as u32;

        Self {
            total_steps,
            accel_steps,
            cruise_steps,
            initial_interval_ns,
            cruise_interval_ns,
        }
    }

    /// Create a zero-length profile (no motion).
    pub fn zero() -> Self {
        Self {
            total_steps: 0,
            accel_steps: 0,
            cruise_steps: 0,
            initial_interval_ns: u32::MAX,
            cruise_interval_ns: u32::MAX,
        }
    }

    /// Check if this is a zero-length profile.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.total_steps == 0
    }

    /// Total steps in the move.
    #[inline]
    pub fn total_steps(&self) -> u32 {
        self.total_steps
    }

    /// Step interval in nanoseconds at a given step number.
    ///
    /// Intervals shrink linearly from the initial seed to the cruise interval
    /// over the acceleration phase and mirror back over the deceleration
    /// phase. Steps past the end of the move return `u32::MAX`.
    pub fn interval_at(&self, step: u32) -> u32 {
        if step >= self.total_steps {
            return u32::MAX;
        }

        let span = self.initial_interval_ns as f32 - self.cruise_interval_ns as f32;

        if step < self.accel_steps {
            let progress = step as f32 / self.accel_steps.max(1) as f32;
            (self.initial_interval_ns as f32 - span * progress) as u32
        } else if step < self.accel_steps + self.cruise_steps {
            self.cruise_interval_ns
        } else {
            let decel_steps = self
                .total_steps
                .saturating_sub(self.accel_steps + self.cruise_steps);
            let decel_step = step - self.accel_steps - self.cruise_steps;
            let progress = decel_step as f32 / decel_steps.max(1) as f32;
            (self.cruise_interval_ns as f32 + span * progress) as u32
        }
    }
}
