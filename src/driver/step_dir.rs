//! STEP/DIR rail driver.
//!
//! Generic over embedded-hal 1.0 pin types. Velocity-mode motion steps at the
//! commanded rate; position-mode motion runs a trapezoidal ramp toward a
//! relative target.

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin;

use crate::config::units::{Steps, StepsPerSec};
use crate::error::{MotorError, Result};

use super::ramp::RampProfile;
use super::{Direction, MotionDriver};

/// STEP pulse width in nanoseconds. 1-10 µs satisfies common stepper drivers.
const PULSE_WIDTH_NS: u32 = 2_000;

/// A pending position-mode move.
#[derive(Debug, Clone)]
struct PendingMove {
    /// Absolute target position.
    target: Steps,
    /// Interval schedule for the move.
    profile: RampProfile,
    /// Steps emitted so far.
    step_index: u32,
}

/// STEP/DIR stepper driver for the rail.
///
/// Generic over:
/// - `STEP`: STEP pin type (must implement `OutputPin`)
/// - `DIR`: DIR pin type (must implement `OutputPin`)
/// - `DELAY`: Delay provider (must implement `DelayNs`)
pub struct RailDriver<STEP, DIR, DELAY>
where
    STEP: OutputPin,
    DIR: OutputPin,
    DELAY: DelayNs,
{
    /// STEP pin (pulse to move one step).
    step_pin: STEP,

    /// DIR pin (high = positive travel, or inverted).
    dir_pin: DIR,

    /// Delay provider for step timing.
    delay: DELAY,

    /// Current position, counted from emitted pulses.
    position: Steps,

    /// Commanded velocity-mode rate. Sign encodes direction.
    velocity: StepsPerSec,

    /// Speed ceiling in steps per second.
    max_speed: StepsPerSec,

    /// Ramp rate for position-mode moves, steps/s².
    acceleration: f32,

    /// Current direction (cached to avoid unnecessary pin writes).
    current_direction: Option<Direction>,

    /// Whether direction pin logic is inverted.
    invert_direction: bool,

    /// Pending position-mode move (if any).
    pending: Option<PendingMove>,

    /// Rail name for logging/debugging.
    name: heapless::String<32>,
}

impl<STEP, DIR, DELAY> RailDriver<STEP, DIR, DELAY>
where
    STEP: OutputPin,
    DIR: OutputPin,
    DELAY: DelayNs,
{
    pub(crate) fn new(
        step_pin: STEP,
        dir_pin: DIR,
        delay: DELAY,
        max_speed: StepsPerSec,
        acceleration: f32,
        invert_direction: bool,
        name: heapless::String<32>,
    ) -> Self {
        Self {
            step_pin,
            dir_pin,
            delay,
            position: Steps::default(),
            velocity: StepsPerSec::default(),
            max_speed,
            acceleration,
            current_direction: None,
            invert_direction,
            pending: None,
            name,
        }
    }

    /// Start building a driver.
    pub fn builder() -> super::RailDriverBuilder<STEP, DIR, DELAY> {
        super::RailDriverBuilder::new()
    }

    /// Get the rail name.
    #[inline]
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Get the commanded velocity-mode rate.
    #[inline]
    pub fn velocity(&self) -> StepsPerSec {
        self.velocity
    }

    /// Get the speed ceiling.
    #[inline]
    pub fn max_speed(&self) -> StepsPerSec {
        self.max_speed
    }

    fn write_direction(&mut self, direction: Direction) -> Result<()> {
        if self.current_direction == Some(direction) {
            return Ok(());
        }

        let pin_high = match direction {
            Direction::Positive => !self.invert_direction,
            Direction::Negative => self.invert_direction,
        };

        if pin_high {
            self.dir_pin.set_high().map_err(|_| MotorError::PinError)?;
        } else {
            self.dir_pin.set_low().map_err(|_| MotorError::PinError)?;
        }

        self.current_direction = Some(direction);
        Ok(())
    }

    fn pulse(&mut self) -> Result<()> {
        self.step_pin.set_high().map_err(|_| MotorError::PinError)?;
        self.delay.delay_ns(PULSE_WIDTH_NS);
        self.step_pin.set_low().map_err(|_| MotorError::PinError)?;
        Ok(())
    }
}

impl<STEP, DIR, DELAY> MotionDriver for RailDriver<STEP, DIR, DELAY>
where
    STEP: OutputPin,
    DIR: OutputPin,
    DELAY: DelayNs,
{
    fn set_velocity(&mut self, velocity: StepsPerSec) {
        // Clamp to the ceiling, preserving direction
        let max = self.max_speed.value();
        let v = velocity.value();
        self.velocity = if v > max {
            StepsPerSec(max)
        } else if v < -max {
            StepsPerSec(-max)
        } else {
            velocity
        };
    }

    fn step_velocity(&mut self) -> Result<()> {
        if self.velocity.is_stopped() {
            return Ok(());
        }

        let direction = Direction::from_steps(if self.velocity.value() > 0.0 { 1 } else { -1 });
        self.write_direction(direction)?;
        self.pulse()?;
        self.position = Steps(self.position.value() + direction.sign());

        // Hold the step interval so the commanded rate is met
        let interval_ns = self.velocity.interval_ns();
        self.delay.delay_ns(interval_ns.saturating_sub(PULSE_WIDTH_NS));

        Ok(())
    }

    fn move_by(&mut self, delta: Steps) {
        self.velocity = StepsPerSec::default();

        if delta.is_zero() {
            self.pending = None;
            return;
        }

        let profile = RampProfile::trapezoidal(delta.abs() as u32, self.max_speed, self.acceleration);
        self.pending = Some(PendingMove {
            target: self.position + delta,
            profile,
            step_index: 0,
        });
    }

    fn step_position(&mut self) -> Result<()> {
        let (target, interval_ns) = match &self.pending {
            None => return Ok(()),
            Some(p) => (p.target, p.profile.interval_at(p.step_index)),
        };

        let remaining = target.value() - self.position.value();
        if remaining == 0 {
            self.pending = None;
            return Ok(());
        }

        let direction = Direction::from_steps(remaining);
        self.write_direction(direction)?;
        self.pulse()?;
        self.position = Steps(self.position.value() + direction.sign());

        if self.position == target {
            self.pending = None;
            return Ok(());
        }

        if let Some(p) = self.pending.as_mut() {
            p.step_index += 1;
        }
        self.delay.delay_ns(interval_ns.saturating_sub(PULSE_WIDTH_NS));

        Ok(())
    }

    fn distance_to_go(&self) -> Steps {
        match &self.pending {
            Some(p) => p.target - self.position,
            None => Steps::default(),
        }
    }

    fn halt(&mut self) {
        self.velocity = StepsPerSec::default();
        self.pending = None;
    }

    fn set_current_position(&mut self, position: Steps) {
        self.position = position;
        self.velocity = StepsPerSec::default();
        self.pending = None;
    }

    fn current_position(&self) -> Steps {
        self.position
    }
}

#[cfg(test)]
mod tests {
    use embedded_hal_mock::eh1::delay::NoopDelay;
    use embedded_hal_mock::eh1::digital::{Mock as PinMock, State as PinState, Transaction as PinTransaction};

    use super::*;

    fn driver(
        step: PinMock,
        dir: PinMock,
        invert: bool,
    ) -> RailDriver<PinMock, PinMock, NoopDelay> {
        RailDriver::new(
            step,
            dir,
            NoopDelay::new(),
            StepsPerSec(5000.0),
            5000.0,
            invert,
            heapless::String::try_from("test").unwrap(),
        )
    }

    #[test]
    fn test_velocity_step_pulses_and_counts() {
        let mut step = PinMock::new(&[
            PinTransaction::set(PinState::High),
            PinTransaction::set(PinState::Low),
        ]);
        let mut dir = PinMock::new(&[PinTransaction::set(PinState::High)]);

        let mut d = driver(step.clone(), dir.clone(), false);
        d.set_velocity(StepsPerSec(1000.0));
        d.step_velocity().unwrap();

        assert_eq!(d.current_position(), Steps(1));
        step.done();
        dir.done();
    }

    #[test]
    fn test_direction_pin_cached_across_steps() {
        let mut step = PinMock::new(&[
            PinTransaction::set(PinState::High),
            PinTransaction::set(PinState::Low),
            PinTransaction::set(PinState::High),
            PinTransaction::set(PinState::Low),
        ]);
        // One DIR write despite two steps
        let mut dir = PinMock::new(&[PinTransaction::set(PinState::Low)]);

        let mut d = driver(step.clone(), dir.clone(), false);
        d.set_velocity(StepsPerSec(-1000.0));
        d.step_velocity().unwrap();
        d.step_velocity().unwrap();

        assert_eq!(d.current_position(), Steps(-2));
        step.done();
        dir.done();
    }

    #[test]
    fn test_inverted_direction_pin() {
        let mut step = PinMock::new(&[
            PinTransaction::set(PinState::High),
            PinTransaction::set(PinState::Low),
        ]);
        // Positive travel with inverted logic drives DIR low
        let mut dir = PinMock::new(&[PinTransaction::set(PinState::Low)]);

        let mut d = driver(step.clone(), dir.clone(), true);
        d.set_velocity(StepsPerSec(1000.0));
        d.step_velocity().unwrap();

        step.done();
        dir.done();
    }

    #[test]
    fn test_velocity_clamped_to_ceiling() {
        let mut step = PinMock::new(&[]);
        let mut dir = PinMock::new(&[]);

        let mut d = driver(step.clone(), dir.clone(), false);
        d.set_velocity(StepsPerSec(20_000.0));
        assert_eq!(d.velocity(), StepsPerSec(5000.0));
        d.set_velocity(StepsPerSec(-20_000.0));
        assert_eq!(d.velocity(), StepsPerSec(-5000.0));

        step.done();
        dir.done();
    }

    #[test]
    fn test_position_move_runs_to_target() {
        let mut step = PinMock::new(&[
            PinTransaction::set(PinState::High),
            PinTransaction::set(PinState::Low),
            PinTransaction::set(PinState::High),
            PinTransaction::set(PinState::Low),
            PinTransaction::set(PinState::High),
            PinTransaction::set(PinState::Low),
        ]);
        let mut dir = PinMock::new(&[PinTransaction::set(PinState::High)]);

        let mut d = driver(step.clone(), dir.clone(), false);
        d.move_by(Steps(3));
        assert_eq!(d.distance_to_go(), Steps(3));

        for _ in 0..3 {
            d.step_position().unwrap();
        }

        assert_eq!(d.current_position(), Steps(3));
        assert_eq!(d.distance_to_go(), Steps(0));

        // Extra calls with no pending move do nothing
        d.step_position().unwrap();
        assert_eq!(d.current_position(), Steps(3));

        step.done();
        dir.done();
    }

    #[test]
    fn test_halt_clears_motion() {
        let mut step = PinMock::new(&[]);
        let mut dir = PinMock::new(&[]);

        let mut d = driver(step.clone(), dir.clone(), false);
        d.set_velocity(StepsPerSec(1000.0));
        d.move_by(Steps(100));
        d.halt();

        assert!(d.velocity().is_stopped());
        assert_eq!(d.distance_to_go(), Steps(0));

        // Halted driver emits no pulses
        d.step_velocity().unwrap();
        d.step_position().unwrap();
        assert_eq!(d.current_position(), Steps(0));

        step.done();
        dir.done();
    }

    #[test]
    fn test_reanchor_position() {
        let mut step = PinMock::new(&[]);
        let mut dir = PinMock::new(&[]);

        let mut d = driver(step.clone(), dir.clone(), false);
        d.move_by(Steps(50));
        d.set_current_position(Steps(-700));

        assert_eq!(d.current_position(), Steps(-700));
        assert_eq!(d.distance_to_go(), Steps(0));

        step.done();
        dir.done();
    }
}
